//! Room service — use-cases for managing the rooms of a floor.

use smarthome_domain::error::SmartHomeError;
use smarthome_domain::patch::NamePatch;
use smarthome_domain::path::{FloorPath, RoomPath};
use smarthome_domain::room::Room;
use smarthome_domain::view::RoomView;

use crate::ports::RegistryStore;
use crate::registry::CascadeReport;

/// Application service for room CRUD operations.
pub struct RoomService<S> {
    store: S,
}

impl<S: RegistryStore> RoomService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a room to a floor.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] if the house or floor does not
    /// resolve, or [`SmartHomeError::Conflict`] if the room id is taken.
    #[tracing::instrument(skip(self, room), fields(floor = %floor, room_id = %room.room_id))]
    pub async fn create_room(&self, floor: FloorPath, room: Room) -> Result<RoomView, SmartHomeError> {
        self.store
            .write(move |registry| {
                let room_id = registry.create_room(floor, room)?.room_id;
                registry.room_view(floor.room(room_id))
            })
            .await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    #[tracing::instrument(skip(self), fields(path = %path))]
    pub async fn get_room(&self, path: RoomPath) -> Result<RoomView, SmartHomeError> {
        self.store.read(move |registry| registry.room_view(path)).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    #[tracing::instrument(skip(self, patch), fields(path = %path))]
    pub async fn patch_room(&self, path: RoomPath, patch: NamePatch) -> Result<RoomView, SmartHomeError> {
        self.store
            .write(move |registry| {
                registry.patch_room(path, &patch)?;
                registry.room_view(path)
            })
            .await
    }

    /// Delete a room and its devices.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    #[tracing::instrument(skip(self), fields(path = %path))]
    pub async fn delete_room(&self, path: RoomPath) -> Result<CascadeReport, SmartHomeError> {
        let report = self
            .store
            .write(move |registry| registry.delete_room(path))
            .await?;
        tracing::info!(devices = report.devices, "room deleted");
        Ok(report)
    }
}
