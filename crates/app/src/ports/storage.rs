//! Storage port — how the [`Registry`] is shared between requests.
//!
//! Services never hold the registry directly. They hand a closure to the
//! store, which runs it under the appropriate lock:
//! - [`read`](RegistryStore::read) may run alongside other reads;
//! - [`write`](RegistryStore::write) runs alone. Every multi-collection
//!   mutation (cascades, owner reconciliation) happens inside a single
//!   `write` call, so no other operation can observe it half-done.

use std::future::Future;

use smarthome_domain::error::SmartHomeError;

use crate::registry::Registry;

/// Shared access to the entity registry.
pub trait RegistryStore {
    /// Run `op` with shared access to the registry.
    fn read<T, F>(&self, op: F) -> impl Future<Output = Result<T, SmartHomeError>> + Send
    where
        T: Send,
        F: FnOnce(&Registry) -> Result<T, SmartHomeError> + Send;

    /// Run `op` with exclusive access to the registry.
    ///
    /// `op` must check every precondition before its first mutation, so an
    /// `Err` leaves the registry untouched.
    fn write<T, F>(&self, op: F) -> impl Future<Output = Result<T, SmartHomeError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Registry) -> Result<T, SmartHomeError> + Send;
}

impl<S: RegistryStore + Send + Sync> RegistryStore for std::sync::Arc<S> {
    fn read<T, F>(&self, op: F) -> impl Future<Output = Result<T, SmartHomeError>> + Send
    where
        T: Send,
        F: FnOnce(&Registry) -> Result<T, SmartHomeError> + Send,
    {
        (**self).read(op)
    }

    fn write<T, F>(&self, op: F) -> impl Future<Output = Result<T, SmartHomeError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Registry) -> Result<T, SmartHomeError> + Send,
    {
        (**self).write(op)
    }
}
