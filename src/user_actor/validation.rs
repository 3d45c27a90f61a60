//! Birth-date rules applied to every stored user.

use super::UserError;
use chrono::{Local, NaiveDate};
use std::fmt;

/// The validation context the User actor runs with.
///
/// Holds the minimum age and the source of "today". Both are consulted on every check, so a
/// policy built with [`BirthDatePolicy::with_clock`] gives tests a fixed calendar.
pub struct BirthDatePolicy {
    min_age: u32,
    today: Box<dyn Fn() -> NaiveDate + Send + Sync>,
}

impl BirthDatePolicy {
    /// Policy using the local calendar date.
    pub fn new(min_age: u32) -> Self {
        Self::with_clock(min_age, || Local::now().date_naive())
    }

    pub fn with_clock(
        min_age: u32,
        today: impl Fn() -> NaiveDate + Send + Sync + 'static,
    ) -> Self {
        Self {
            min_age,
            today: Box::new(today),
        }
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    /// Rejects birth dates that are not in the past or that are too recent.
    ///
    /// Age is counted in whole calendar years; in common years someone born on 29 February
    /// gains a year on 1 March.
    pub fn check(&self, birth_date: NaiveDate) -> Result<(), UserError> {
        let today = (self.today)();
        if birth_date >= today {
            return Err(UserError::ValidationFailed("invalid birth date".to_string()));
        }
        let age = today.years_since(birth_date).unwrap_or(0);
        if age < self.min_age {
            return Err(UserError::ValidationFailed(format!(
                "must be at least {} years old",
                self.min_age
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for BirthDatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BirthDatePolicy")
            .field("min_age", &self.min_age)
            .finish_non_exhaustive()
    }
}
