//! House service — use-cases for managing houses.

use smarthome_domain::error::SmartHomeError;
use smarthome_domain::house::House;
use smarthome_domain::id::HouseId;
use smarthome_domain::patch::NamePatch;
use smarthome_domain::view::HouseView;

use crate::ports::RegistryStore;
use crate::registry::CascadeReport;

/// Application service for house CRUD operations.
///
/// Reads return a [`HouseView`]: the house with its whole derived subtree.
pub struct HouseService<S> {
    store: S,
}

impl<S: RegistryStore> HouseService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a house for an existing owner.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Conflict`] if the id is taken, or
    /// [`SmartHomeError::Inconsistent`] if the owner is unknown or its name
    /// does not match the registered user.
    #[tracing::instrument(skip(self, house), fields(house_id = %house.house_id, owner_id = %house.owner.user_id))]
    pub async fn create_house(&self, house: House) -> Result<HouseView, SmartHomeError> {
        self.store
            .write(move |registry| {
                let id = registry.create_house(house)?.house_id;
                registry.house_view(id)
            })
            .await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no house with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_house(&self, id: HouseId) -> Result<HouseView, SmartHomeError> {
        self.store.read(move |registry| registry.house_view(id)).await
    }

    /// Rename a house.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no house with `id` exists.
    #[tracing::instrument(skip(self, patch))]
    pub async fn patch_house(
        &self,
        id: HouseId,
        patch: NamePatch,
    ) -> Result<HouseView, SmartHomeError> {
        self.store
            .write(move |registry| {
                registry.patch_house(id, &patch)?;
                registry.house_view(id)
            })
            .await
    }

    /// Delete a house together with every floor, room, hallway and device
    /// it contains.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no house with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn delete_house(&self, id: HouseId) -> Result<CascadeReport, SmartHomeError> {
        let report = self
            .store
            .write(move |registry| registry.delete_house(id))
            .await?;
        tracing::info!(
            floors = report.floors,
            rooms = report.rooms,
            hallways = report.hallways,
            devices = report.devices,
            "house deleted"
        );
        Ok(report)
    }
}
