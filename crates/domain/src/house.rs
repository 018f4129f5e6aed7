//! House — the root of the containment tree, owned by a [`User`].

use serde::{Deserialize, Serialize};

use crate::error::{SmartHomeError, ValidationError};
use crate::id::HouseId;
use crate::patch::NamePatch;
use crate::user::User;

/// A house and a snapshot of its owner.
///
/// `owner` is copied from the registered user when the house is created and
/// is only rewritten when that user's name is patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub house_id: HouseId,
    pub name: String,
    pub owner: User,
}

impl House {
    /// Create a builder for constructing a [`House`].
    #[must_use]
    pub fn builder() -> HouseBuilder {
        HouseBuilder::default()
    }

    /// Apply a partial update. The owner is not patchable.
    pub fn apply(&mut self, patch: &NamePatch) {
        patch.apply_to(&mut self.name);
    }
}

/// Step-by-step builder for [`House`].
#[derive(Debug, Default)]
pub struct HouseBuilder {
    house_id: Option<HouseId>,
    name: Option<String>,
    owner: Option<User>,
}

impl HouseBuilder {
    #[must_use]
    pub fn house_id(mut self, house_id: HouseId) -> Self {
        self.house_id = Some(house_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn owner(mut self, owner: User) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Consume the builder and return a [`House`].
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] if the id, name, or owner is
    /// missing.
    pub fn build(self) -> Result<House, SmartHomeError> {
        Ok(House {
            house_id: self
                .house_id
                .ok_or(ValidationError::MissingField("house_id"))?,
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            owner: self.owner.ok_or(ValidationError::MissingField("owner"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::UserId;

    fn owner() -> User {
        User::new(UserId::new(1), "John Doe").unwrap()
    }

    #[test]
    fn should_build_house_when_all_fields_provided() {
        let house = House::builder()
            .house_id(HouseId::new(1))
            .name("Dream House")
            .owner(owner())
            .build()
            .unwrap();
        assert_eq!(house.name, "Dream House");
        assert_eq!(house.owner.user_id, UserId::new(1));
    }

    #[test]
    fn should_return_validation_error_when_owner_missing() {
        let result = House::builder()
            .house_id(HouseId::new(1))
            .name("Dream House")
            .build();
        assert!(matches!(
            result,
            Err(SmartHomeError::Validation(ValidationError::MissingField(
                "owner"
            )))
        ));
    }

    #[test]
    fn should_keep_owner_when_patched() {
        let mut house = House::builder()
            .house_id(HouseId::new(1))
            .name("Test House")
            .owner(owner())
            .build()
            .unwrap();
        house.apply(&NamePatch::name("Luxury House"));
        assert_eq!(house.name, "Luxury House");
        assert_eq!(house.owner, owner());
    }
}
