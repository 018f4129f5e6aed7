//! Device service — use-cases for managing devices in rooms and hallways.

use smarthome_domain::device::Device;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::patch::DevicePatch;
use smarthome_domain::path::{DevicePath, HolderPath};

use crate::ports::RegistryStore;

/// Application service for device CRUD operations.
pub struct DeviceService<S> {
    store: S,
}

impl<S: RegistryStore> DeviceService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Attach a device to a room or hallway.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] if any segment of `holder` does
    /// not resolve, or [`SmartHomeError::Conflict`] if the device id is taken.
    #[tracing::instrument(skip(self, device), fields(holder = %holder, device_id = %device.device_id))]
    pub async fn create_device(
        &self,
        holder: HolderPath,
        device: Device,
    ) -> Result<Device, SmartHomeError> {
        self.store
            .write(move |registry| registry.create_device(holder, device))
            .await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    #[tracing::instrument(skip(self), fields(path = %path))]
    pub async fn get_device(&self, path: DevicePath) -> Result<Device, SmartHomeError> {
        self.store
            .read(move |registry| registry.get_device(path).cloned())
            .await
    }

    /// Record a new reading.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    #[tracing::instrument(skip(self), fields(path = %path))]
    pub async fn patch_device(
        &self,
        path: DevicePath,
        patch: DevicePatch,
    ) -> Result<Device, SmartHomeError> {
        self.store
            .write(move |registry| registry.patch_device(path, patch))
            .await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    #[tracing::instrument(skip(self), fields(path = %path))]
    pub async fn delete_device(&self, path: DevicePath) -> Result<(), SmartHomeError> {
        self.store
            .write(move |registry| registry.delete_device(path))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::test_support::{MutexStore, john};
    use smarthome_domain::device::DeviceType;
    use smarthome_domain::error::ValidationError;
    use smarthome_domain::floor::Floor;
    use smarthome_domain::hallway::Hallway;
    use smarthome_domain::house::House;
    use smarthome_domain::id::{DeviceId, FloorId, HallwayId, HouseId, RoomId};
    use smarthome_domain::path::FloorPath;
    use smarthome_domain::room::Room;

    fn floor() -> FloorPath {
        FloorPath::new(HouseId::new(1), FloorId::new(1))
    }

    fn room() -> HolderPath {
        floor().room(RoomId::new(1)).holder()
    }

    fn hallway() -> HolderPath {
        floor().hallway(HallwayId::new(1)).holder()
    }

    fn thermometer(id: i64) -> Device {
        Device::builder()
            .device_id(DeviceId::new(id))
            .device_type(DeviceType::Temperature)
            .device_info(22)
            .build()
            .unwrap()
    }

    async fn setup() -> DeviceService<MutexStore> {
        let store = MutexStore::default();
        store
            .write(|registry: &mut Registry| {
                registry.create_user(john())?;
                registry.create_house(
                    House::builder()
                        .house_id(HouseId::new(1))
                        .name("Test House")
                        .owner(john())
                        .build()?,
                )?;
                registry.create_floor(HouseId::new(1), Floor::new(FloorId::new(1), "First Floor"))?;
                registry.create_room(floor(), Room::new(RoomId::new(1), "Living Room"))?;
                registry.create_hallway(floor(), Hallway::new(HallwayId::new(1), "Hall"))?;
                Ok(())
            })
            .await
            .unwrap();
        DeviceService::new(store)
    }

    #[tokio::test]
    async fn should_create_device_in_room() {
        let svc = setup().await;
        let created = svc.create_device(room(), thermometer(101)).await.unwrap();
        assert_eq!(created.device_type, DeviceType::Temperature);
        let fetched = svc.get_device(room().device(DeviceId::new(101))).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_create_device_in_hallway() {
        let svc = setup().await;
        svc.create_device(hallway(), thermometer(5)).await.unwrap();
        assert!(svc.get_device(hallway().device(DeviceId::new(5))).await.is_ok());
        assert!(svc.get_device(room().device(DeviceId::new(5))).await.is_err());
    }

    #[tokio::test]
    async fn should_reject_smoke_detector_before_touching_registry() {
        let result = Device::builder()
            .device_id(DeviceId::new(1))
            .device_type("smoke")
            .device_info(0)
            .build();
        assert!(matches!(
            result,
            Err(SmartHomeError::Validation(ValidationError::UnknownDeviceType(_)))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_holder_missing() {
        let svc = setup().await;
        let missing = floor().room(RoomId::new(9)).holder();
        let result = svc.create_device(missing, thermometer(1)).await;
        assert!(matches!(result, Err(SmartHomeError::NotFound(err)) if err.entity == "Room"));
    }

    #[tokio::test]
    async fn should_patch_reading_including_zero() {
        let svc = setup().await;
        svc.create_device(room(), thermometer(101)).await.unwrap();
        let path = room().device(DeviceId::new(101));
        let patched = svc
            .patch_device(path, DevicePatch::device_info(0))
            .await
            .unwrap();
        assert_eq!(patched.device_info, 0);
    }

    #[tokio::test]
    async fn should_delete_device() {
        let svc = setup().await;
        svc.create_device(room(), thermometer(101)).await.unwrap();
        let path = room().device(DeviceId::new(101));
        svc.delete_device(path).await.unwrap();
        assert!(matches!(
            svc.get_device(path).await,
            Err(SmartHomeError::NotFound(_))
        ));
    }
}
