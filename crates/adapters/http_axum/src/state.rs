//! Shared application state for axum handlers.

use std::sync::Arc;

use smarthome_app::ports::RegistryStore;
use smarthome_app::services::device_service::DeviceService;
use smarthome_app::services::floor_service::FloorService;
use smarthome_app::services::hallway_service::HallwayService;
use smarthome_app::services::house_service::HouseService;
use smarthome_app::services::room_service::RoomService;
use smarthome_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the registry store to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone`,
/// only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    pub user_service: Arc<UserService<S>>,
    pub house_service: Arc<HouseService<S>>,
    pub floor_service: Arc<FloorService<S>>,
    pub room_service: Arc<RoomService<S>>,
    pub hallway_service: Arc<HallwayService<S>>,
    pub device_service: Arc<DeviceService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            house_service: Arc::clone(&self.house_service),
            floor_service: Arc::clone(&self.floor_service),
            room_service: Arc::clone(&self.room_service),
            hallway_service: Arc::clone(&self.hallway_service),
            device_service: Arc::clone(&self.device_service),
        }
    }
}

impl<S> AppState<S>
where
    S: RegistryStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<S>,
        house_service: HouseService<S>,
        floor_service: FloorService<S>,
        room_service: RoomService<S>,
        hallway_service: HallwayService<S>,
        device_service: DeviceService<S>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            house_service: Arc::new(house_service),
            floor_service: Arc::new(floor_service),
            room_service: Arc::new(room_service),
            hallway_service: Arc::new(hallway_service),
            device_service: Arc::new(device_service),
        }
    }

    /// Build every service on top of one shared store handle.
    ///
    /// `store` is typically an `Arc` so that all services see the same
    /// registry.
    pub fn from_store(store: S) -> Self
    where
        S: Clone,
    {
        Self::new(
            UserService::new(store.clone()),
            HouseService::new(store.clone()),
            FloorService::new(store.clone()),
            RoomService::new(store.clone()),
            HallwayService::new(store.clone()),
            DeviceService::new(store),
        )
    }
}
