//! User service — use-cases for managing users.

use smarthome_domain::error::SmartHomeError;
use smarthome_domain::id::UserId;
use smarthome_domain::patch::NamePatch;
use smarthome_domain::user::User;

use crate::ports::RegistryStore;

/// Application service for user CRUD operations.
pub struct UserService<S> {
    store: S,
}

impl<S: RegistryStore> UserService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new user after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] if the name is invalid, or
    /// [`SmartHomeError::Conflict`] if the id is taken.
    #[tracing::instrument(skip(self, user), fields(user_id = %user.user_id))]
    pub async fn create_user(&self, user: User) -> Result<User, SmartHomeError> {
        user.validate()?;
        self.store.write(move |registry| registry.create_user(user)).await
    }

    /// Look up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no user with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, SmartHomeError> {
        self.store
            .read(move |registry| registry.get_user(id).cloned())
            .await
    }

    /// Rename a user. Houses owned by the user get their owner snapshot
    /// rewritten in the same write.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no user with `id` exists, or
    /// [`SmartHomeError::Validation`] if the new name is invalid.
    #[tracing::instrument(skip(self, patch))]
    pub async fn patch_user(&self, id: UserId, patch: NamePatch) -> Result<User, SmartHomeError> {
        self.store
            .write(move |registry| registry.patch_user(id, &patch))
            .await
    }

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no user with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), SmartHomeError> {
        let removed = self
            .store
            .write(move |registry| registry.delete_user(id))
            .await?;
        tracing::info!(user_id = %removed.user_id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MutexStore, john};
    use smarthome_domain::error::ValidationError;

    fn make_service() -> UserService<MutexStore> {
        UserService::new(MutexStore::default())
    }

    #[tokio::test]
    async fn should_create_user_when_valid() {
        let svc = make_service();
        let created = svc.create_user(john()).await.unwrap();
        assert_eq!(created, john());

        let fetched = svc.get_user(UserId::new(1)).await.unwrap();
        assert_eq!(fetched.name, "John Doe");
    }

    #[tokio::test]
    async fn should_reject_create_when_name_too_short() {
        let svc = make_service();
        let user = User {
            user_id: UserId::new(1),
            name: "Jo".to_string(),
        };
        let result = svc.create_user(user).await;
        assert!(matches!(
            result,
            Err(SmartHomeError::Validation(ValidationError::NameLength { .. }))
        ));
        assert!(svc.get_user(UserId::new(1)).await.is_err());
    }

    #[tokio::test]
    async fn should_reject_duplicate_user() {
        let svc = make_service();
        svc.create_user(john()).await.unwrap();
        let result = svc.create_user(john()).await;
        assert!(matches!(result, Err(SmartHomeError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_missing() {
        let svc = make_service();
        let result = svc.get_user(UserId::new(42)).await;
        assert!(matches!(result, Err(SmartHomeError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_patch_user_name() {
        let svc = make_service();
        svc.create_user(User::new(UserId::new(2), "Alice").unwrap())
            .await
            .unwrap();
        let patched = svc
            .patch_user(UserId::new(2), NamePatch::name("Updated Alice"))
            .await
            .unwrap();
        assert_eq!(patched.name, "Updated Alice");
        assert_eq!(svc.get_user(UserId::new(2)).await.unwrap(), patched);
    }

    #[tokio::test]
    async fn should_delete_user() {
        let svc = make_service();
        svc.create_user(User::new(UserId::new(3), "Bob").unwrap())
            .await
            .unwrap();
        svc.delete_user(UserId::new(3)).await.unwrap();
        let result = svc.get_user(UserId::new(3)).await;
        assert!(matches!(result, Err(SmartHomeError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_user() {
        let svc = make_service();
        let result = svc.delete_user(UserId::new(3)).await;
        assert!(matches!(result, Err(SmartHomeError::NotFound(_))));
    }
}
