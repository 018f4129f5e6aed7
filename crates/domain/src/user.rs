//! User — a person who can own houses.

use serde::{Deserialize, Serialize};

use crate::error::{SmartHomeError, ValidationError};
use crate::id::UserId;
use crate::patch::NamePatch;

/// Shortest accepted user name, in characters.
pub const NAME_MIN_LEN: usize = 3;
/// Longest accepted user name, in characters.
pub const NAME_MAX_LEN: usize = 50;

/// A registered user.
///
/// Also used as the owner snapshot embedded in a
/// [`House`](crate::house::House).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
}

impl User {
    /// Build a validated user.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] when the name length is outside
    /// `3..=50` characters.
    pub fn new(user_id: UserId, name: impl Into<String>) -> Result<Self, SmartHomeError> {
        let user = Self {
            user_id,
            name: name.into(),
        };
        user.validate()?;
        Ok(user)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] when the name length is outside
    /// `3..=50` characters.
    pub fn validate(&self) -> Result<(), SmartHomeError> {
        let actual = self.name.chars().count();
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&actual) {
            return Err(ValidationError::NameLength {
                min: NAME_MIN_LEN,
                max: NAME_MAX_LEN,
                actual,
            }
            .into());
        }
        Ok(())
    }

    /// Return a copy with `patch` applied, validated before anything is
    /// written back.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] when the patched name is invalid.
    pub fn patched(&self, patch: &NamePatch) -> Result<Self, SmartHomeError> {
        let mut next = self.clone();
        patch.apply_to(&mut next.name);
        next.validate()?;
        Ok(next)
    }
}
