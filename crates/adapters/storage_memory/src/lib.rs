//! # smarthome-adapter-storage-memory
//!
//! In-memory implementation of the [`RegistryStore`] port.
//!
//! ## Responsibilities
//! - Own the single [`Registry`] for the lifetime of the process
//! - Serialise writers and let readers run concurrently, using a
//!   [`tokio::sync::RwLock`]
//!
//! Nothing is persisted: the registry starts empty on every launch.
//!
//! ## Dependency rule
//! Depends on `smarthome-app` (for the port trait and registry) and
//! `smarthome-domain` (for the error type). The `app` and `domain` crates
//! must never reference this adapter.

use tokio::sync::RwLock;

use smarthome_app::ports::RegistryStore;
use smarthome_app::registry::Registry;
use smarthome_domain::error::SmartHomeError;

/// Registry guarded by an async reader-writer lock.
#[derive(Debug, Default)]
pub struct InMemoryRegistryStore {
    registry: RwLock<Registry>,
}

impl InMemoryRegistryStore {
    /// Create a store holding an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store around an already populated registry.
    #[must_use]
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }
}

impl RegistryStore for InMemoryRegistryStore {
    async fn read<T, F>(&self, op: F) -> Result<T, SmartHomeError>
    where
        T: Send,
        F: FnOnce(&Registry) -> Result<T, SmartHomeError> + Send,
    {
        let registry = self.registry.read().await;
        op(&registry)
    }

    async fn write<T, F>(&self, op: F) -> Result<T, SmartHomeError>
    where
        T: Send,
        F: FnOnce(&mut Registry) -> Result<T, SmartHomeError> + Send,
    {
        let mut registry = self.registry.write().await;
        let result = op(&mut registry);
        if let Err(err) = &result {
            tracing::debug!(error = %err, "registry write rejected");
        }
        result
    }
}
