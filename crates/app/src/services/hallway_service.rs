//! Hallway service — use-cases for managing the hallways of a floor.

use smarthome_domain::error::SmartHomeError;
use smarthome_domain::hallway::Hallway;
use smarthome_domain::patch::NamePatch;
use smarthome_domain::path::{FloorPath, HallwayPath};
use smarthome_domain::view::HallwayView;

use crate::ports::RegistryStore;
use crate::registry::CascadeReport;

/// Application service for hallway CRUD operations.
pub struct HallwayService<S> {
    store: S,
}

impl<S: RegistryStore> HallwayService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a hallway to a floor.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] if the house or floor does not
    /// resolve, or [`SmartHomeError::Conflict`] if the hallway id is taken.
    #[tracing::instrument(skip(self, hallway), fields(floor = %floor, hallway_id = %hallway.hallway_id))]
    pub async fn create_hallway(
        &self,
        floor: FloorPath,
        hallway: Hallway,
    ) -> Result<HallwayView, SmartHomeError> {
        self.store
            .write(move |registry| {
                let hallway_id = registry.create_hallway(floor, hallway)?.hallway_id;
                registry.hallway_view(floor.hallway(hallway_id))
            })
            .await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    #[tracing::instrument(skip(self), fields(path = %path))]
    pub async fn get_hallway(&self, path: HallwayPath) -> Result<HallwayView, SmartHomeError> {
        self.store
            .read(move |registry| registry.hallway_view(path))
            .await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    #[tracing::instrument(skip(self, patch), fields(path = %path))]
    pub async fn patch_hallway(
        &self,
        path: HallwayPath,
        patch: NamePatch,
    ) -> Result<HallwayView, SmartHomeError> {
        self.store
            .write(move |registry| {
                registry.patch_hallway(path, &patch)?;
                registry.hallway_view(path)
            })
            .await
    }

    /// Delete a hallway and its devices.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    #[tracing::instrument(skip(self), fields(path = %path))]
    pub async fn delete_hallway(&self, path: HallwayPath) -> Result<CascadeReport, SmartHomeError> {
        let report = self
            .store
            .write(move |registry| registry.delete_hallway(path))
            .await?;
        tracing::info!(devices = report.devices, "hallway deleted");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::test_support::{MutexStore, john};
    use smarthome_domain::floor::Floor;
    use smarthome_domain::house::House;
    use smarthome_domain::id::{FloorId, HallwayId, HouseId};

    async fn setup() -> HallwayService<MutexStore> {
        let store = MutexStore::default();
        store
            .write(|registry: &mut Registry| {
                registry.create_user(john())?;
                registry.create_house(
                    House::builder()
                        .house_id(HouseId::new(1))
                        .name("Dream House")
                        .owner(john())
                        .build()?,
                )?;
                registry.create_floor(HouseId::new(1), Floor::new(FloorId::new(1), "Ground"))?;
                Ok(())
            })
            .await
            .unwrap();
        HallwayService::new(store)
    }

    fn floor() -> FloorPath {
        FloorPath::new(HouseId::new(1), FloorId::new(1))
    }

    #[tokio::test]
    async fn should_create_hallway_with_no_devices() {
        let svc = setup().await;
        let view = svc
            .create_hallway(floor(), Hallway::new(HallwayId::new(1), "Main Hall"))
            .await
            .unwrap();
        assert_eq!(view.hallway.name, "Main Hall");
        assert!(view.devices.is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_floor_missing() {
        let svc = setup().await;
        let missing = FloorPath::new(HouseId::new(1), FloorId::new(9));
        let result = svc
            .create_hallway(missing, Hallway::new(HallwayId::new(1), "Main Hall"))
            .await;
        assert!(matches!(result, Err(SmartHomeError::NotFound(err)) if err.entity == "Floor"));
    }

    #[tokio::test]
    async fn should_patch_and_delete_hallway() {
        let svc = setup().await;
        let path = floor().hallway(HallwayId::new(1));
        svc.create_hallway(floor(), Hallway::new(HallwayId::new(1), "Main Hall"))
            .await
            .unwrap();

        let view = svc
            .patch_hallway(path, NamePatch::name("Back Hall"))
            .await
            .unwrap();
        assert_eq!(view.hallway.name, "Back Hall");

        svc.delete_hallway(path).await.unwrap();
        assert!(matches!(
            svc.get_hallway(path).await,
            Err(SmartHomeError::NotFound(_))
        ));
    }
}
