//! KeyedEntity trait implementation for the User domain type.
//!
//! This module contains the [`KeyedEntity`] implementation that lets
//! [`User`] be held by the generic [`crate::framework::StoreActor`].

use super::{BirthDatePolicy, UserError};
use crate::domain::{BirthDateRange, User, UserPatch};
use crate::framework::KeyedEntity;

impl KeyedEntity for User {
    type Key = String;
    type Patch = UserPatch;
    type Filter = BirthDateRange;
    type Context = BirthDatePolicy;
    type Error = UserError;

    fn key(&self) -> String {
        self.email.clone()
    }

    fn validate(&self, policy: &BirthDatePolicy) -> Result<(), UserError> {
        policy.check(self.birth_date)
    }

    fn merge(self, patch: UserPatch) -> Self {
        self.merge_patch(patch)
    }

    fn matches(&self, range: &BirthDateRange) -> bool {
        range.contains(self.birth_date)
    }
}
