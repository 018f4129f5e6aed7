//! Shared fixtures for service tests.

use std::future::Future;
use std::sync::Mutex;

use smarthome_domain::error::SmartHomeError;
use smarthome_domain::user::User;
use smarthome_domain::id::UserId;

use crate::ports::RegistryStore;
use crate::registry::Registry;

/// Minimal store guarding the registry with a std mutex.
#[derive(Default)]
pub(crate) struct MutexStore {
    registry: Mutex<Registry>,
}

impl RegistryStore for MutexStore {
    fn read<T, F>(&self, op: F) -> impl Future<Output = Result<T, SmartHomeError>> + Send
    where
        T: Send,
        F: FnOnce(&Registry) -> Result<T, SmartHomeError> + Send,
    {
        let registry = self.registry.lock().unwrap();
        let result = op(&registry);
        async move { result }
    }

    fn write<T, F>(&self, op: F) -> impl Future<Output = Result<T, SmartHomeError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Registry) -> Result<T, SmartHomeError> + Send,
    {
        let mut registry = self.registry.lock().unwrap();
        let result = op(&mut registry);
        async move { result }
    }
}

pub(crate) fn john() -> User {
    User::new(UserId::new(1), "John Doe").unwrap()
}
