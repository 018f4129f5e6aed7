//! Floor service — use-cases for managing the floors of a house.

use smarthome_domain::error::SmartHomeError;
use smarthome_domain::floor::Floor;
use smarthome_domain::id::HouseId;
use smarthome_domain::patch::NamePatch;
use smarthome_domain::path::FloorPath;
use smarthome_domain::view::FloorView;

use crate::ports::RegistryStore;
use crate::registry::CascadeReport;

/// Application service for floor CRUD operations.
pub struct FloorService<S> {
    store: S,
}

impl<S: RegistryStore> FloorService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a floor to a house.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] if the house does not exist, or
    /// [`SmartHomeError::Conflict`] if the floor id is taken.
    #[tracing::instrument(skip(self, floor), fields(floor_id = %floor.floor_id))]
    pub async fn create_floor(
        &self,
        house_id: HouseId,
        floor: Floor,
    ) -> Result<FloorView, SmartHomeError> {
        self.store
            .write(move |registry| {
                let floor_id = registry.create_floor(house_id, floor)?.floor_id;
                registry.floor_view(FloorPath::new(house_id, floor_id))
            })
            .await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the house is missing or the
    /// floor does not belong to it.
    #[tracing::instrument(skip(self), fields(path = %path))]
    pub async fn get_floor(&self, path: FloorPath) -> Result<FloorView, SmartHomeError> {
        self.store.read(move |registry| registry.floor_view(path)).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the house is missing or the
    /// floor does not belong to it.
    #[tracing::instrument(skip(self, patch), fields(path = %path))]
    pub async fn patch_floor(
        &self,
        path: FloorPath,
        patch: NamePatch,
    ) -> Result<FloorView, SmartHomeError> {
        self.store
            .write(move |registry| {
                registry.patch_floor(path, &patch)?;
                registry.floor_view(path)
            })
            .await
    }

    /// Delete a floor with its rooms, hallways and their devices.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the house is missing or the
    /// floor does not belong to it.
    #[tracing::instrument(skip(self), fields(path = %path))]
    pub async fn delete_floor(&self, path: FloorPath) -> Result<CascadeReport, SmartHomeError> {
        let report = self
            .store
            .write(move |registry| registry.delete_floor(path))
            .await?;
        tracing::info!(
            rooms = report.rooms,
            hallways = report.hallways,
            devices = report.devices,
            "floor deleted"
        );
        Ok(report)
    }
}
