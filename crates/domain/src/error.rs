//! Common error types used across the workspace.
//!
//! Every layer converts into [`SmartHomeError`] via `#[from]`; adapters map
//! its variants onto their own transport (HTTP status codes, log levels, …).

use crate::id::UserId;

/// Top-level error returned by every registry operation.
#[derive(Debug, thiserror::Error)]
pub enum SmartHomeError {
    /// A payload failed field-level validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The entity, or one of the ancestors in its containment chain, is absent.
    #[error("entity not found")]
    NotFound(#[from] NotFoundError),

    /// The id is already taken by a live entity of the same kind.
    #[error("entity already exists")]
    Conflict(#[from] ConflictError),

    /// The payload disagrees with data already held by the registry.
    #[error("inconsistent data")]
    Inconsistent(#[from] InconsistencyError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Field-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A name falls outside its allowed length range.
    #[error("name must be between {min} and {max} characters, got {actual}")]
    NameLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    /// The device type is not one of the supported kinds.
    #[error("unknown device type {0:?}, expected one of: humidity, temperature")]
    UnknownDeviceType(String),

    /// A required field was not supplied.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// Children were embedded in a create payload instead of created through
    /// their own endpoint.
    #[error("`{field}` must be empty, children are created through their own endpoints")]
    NestedChildren { field: &'static str },
}

/// The referenced entity does not exist, or does not live under the given
/// ancestors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The id is already used by a live entity of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} already exists: {id}")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}

/// Cross-entity consistency failures detected at creation time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InconsistencyError {
    /// The house owner does not reference a registered user.
    #[error("owner {user_id} does not exist")]
    OwnerMissing { user_id: UserId },

    /// The embedded owner name differs from the registered user's name.
    #[error("owner name mismatch for user {user_id}: expected {expected:?}, got {actual:?}")]
    OwnerNameMismatch {
        user_id: UserId,
        expected: String,
        actual: String,
    },
}

impl NotFoundError {
    #[must_use]
    pub fn new(entity: &'static str, id: impl ToString) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}

impl ConflictError {
    #[must_use]
    pub fn new(entity: &'static str, id: impl ToString) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_found_with_entity_and_id() {
        let err = NotFoundError::new("Floor", 101);
        assert_eq!(err.to_string(), "Floor not found: 101");
    }

    #[test]
    fn should_display_conflict_with_entity_and_id() {
        let err = ConflictError::new("User", 1);
        assert_eq!(err.to_string(), "User already exists: 1");
    }

    #[test]
    fn should_convert_validation_error_into_top_level() {
        let err: SmartHomeError = ValidationError::MissingField("name").into();
        assert!(matches!(
            err,
            SmartHomeError::Validation(ValidationError::MissingField("name"))
        ));
    }

    #[test]
    fn should_display_owner_missing() {
        let err = InconsistencyError::OwnerMissing {
            user_id: UserId::new(99),
        };
        assert_eq!(err.to_string(), "owner 99 does not exist");
    }
}
