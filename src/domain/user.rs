use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

record_shape! {
    /// Represents a registered user in the system.
    ///
    /// # Store
    /// The email is the user's only identity: it is the key the
    /// [`StoreActor`](crate::framework::StoreActor) files the record under, so no two stored users
    /// share one. See [`impl KeyedEntity for User`](#impl-KeyedEntity-for-User) for how writes are
    /// validated and how a [`UserPatch`] is applied.
    ///
    /// Serialized as a flat camelCase object with `birthDate` as `YYYY-MM-DD`.
    pub struct User patched by UserPatch {
        /// Primary key. Must have an email address shape.
        pub email: String,
        pub first_name: String,
        pub last_name: String,
        /// Must be in the past and old enough for the configured minimum age.
        pub birth_date: NaiveDate,
        pub address: Option<String>,
        pub phone: Option<String>,
    }
}

/// Open birth-date interval used by range queries.
///
/// Both bounds are exclusive; a range whose `from` is not before `to` selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDateRange {
    #[serde(rename = "dateFrom")]
    pub from: NaiveDate,
    #[serde(rename = "dateTo")]
    pub to: NaiveDate,
}

impl BirthDateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from < date && date < self.to
    }
}

impl User {
    /// Creates a user with the required fields and no address or phone.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            address: None,
            phone: None,
        }
    }
}
