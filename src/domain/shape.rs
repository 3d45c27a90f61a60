//! Record shapes declared once, with their partial form and merge derived from the field list.
//!
//! [`record_shape!`] takes a struct definition and emits:
//!
//! - the record itself, serialized as a flat camelCase object;
//! - a patch struct with one `Option` per field, plus `with_<field>` builders;
//! - `merge_patch`, overlaying every present patch field onto the record.
//!
//! How a single field merges is decided by its type through [`PatchField`], so adding a field
//! to a shape only means adding a line to the macro invocation.

use chrono::NaiveDate;

/// Per-type rule for overlaying an incoming partial value onto a stored one.
pub trait PatchField: Sized {
    /// What a patch carries for a field of this type.
    type Value;

    /// Whether an incoming value counts as set. Empty strings do not.
    fn is_present(_value: &Self::Value) -> bool {
        true
    }

    /// Returns the incoming value if it is present, otherwise `self`.
    fn overlay(self, incoming: Option<Self::Value>) -> Self;
}

impl PatchField for String {
    type Value = String;

    fn is_present(value: &String) -> bool {
        !value.is_empty()
    }

    fn overlay(self, incoming: Option<String>) -> Self {
        incoming
            .filter(<Self as PatchField>::is_present)
            .unwrap_or(self)
    }
}

impl PatchField for NaiveDate {
    type Value = NaiveDate;

    fn overlay(self, incoming: Option<NaiveDate>) -> Self {
        incoming.unwrap_or(self)
    }
}

impl<T> PatchField for Option<T>
where
    T: PatchField<Value = T>,
{
    type Value = T;

    fn is_present(value: &T) -> bool {
        T::is_present(value)
    }

    fn overlay(self, incoming: Option<T>) -> Self {
        incoming.filter(T::is_present).or(self)
    }
}

/// Declares a record struct together with its patch struct and merge function.
///
/// ```rust,ignore
/// record_shape! {
///     /// A contact card.
///     pub struct Contact patched by ContactPatch {
///         pub email: String,
///         pub nickname: Option<String>,
///     }
/// }
/// ```
macro_rules! record_shape {
    (
        $(#[$meta:meta])*
        pub struct $record:ident patched by $patch:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $record {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )+
        }

        #[doc = concat!(
            "Partial [`", stringify!($record), "`]. Unset or empty fields keep the stored value."
        )]
        #[derive(Debug, Clone, Default, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $patch {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<<$ty as $crate::domain::shape::PatchField>::Value>,
            )+
        }

        impl $patch {
            ::paste::paste! {
                $(
                    pub fn [<with_ $field>](
                        mut self,
                        value: impl Into<<$ty as $crate::domain::shape::PatchField>::Value>,
                    ) -> Self {
                        self.$field = Some(value.into());
                        self
                    }
                )+
            }

            /// Names of the fields this patch would override.
            pub fn present_fields(&self) -> Vec<&'static str> {
                let mut present = Vec::new();
                $(
                    if self
                        .$field
                        .as_ref()
                        .is_some_and(<$ty as $crate::domain::shape::PatchField>::is_present)
                    {
                        present.push(stringify!($field));
                    }
                )+
                present
            }
        }

        impl $record {
            /// Overlays every present field of `patch` onto this record.
            pub fn merge_patch(self, patch: $patch) -> Self {
                Self {
                    $(
                        $field: $crate::domain::shape::PatchField::overlay(self.$field, patch.$field),
                    )+
                }
            }
        }
    };
}
