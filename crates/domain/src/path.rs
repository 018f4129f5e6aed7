//! Containment paths — an entity named through every one of its ancestors.
//!
//! A lookup through a path only succeeds when each segment resolves *and*
//! each entity is recorded under the previous segment. Paths print in the
//! same shape as the HTTP routes (`house/1/floor/2/room/3`).

use std::fmt;

use crate::id::{DeviceId, FloorId, HallwayId, HouseId, RoomId};

/// A floor inside a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorPath {
    pub house_id: HouseId,
    pub floor_id: FloorId,
}

/// A room on a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomPath {
    pub floor: FloorPath,
    pub room_id: RoomId,
}

/// A hallway on a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallwayPath {
    pub floor: FloorPath,
    pub hallway_id: HallwayId,
}

/// The room or hallway a device is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceHolder {
    Room(RoomId),
    Hallway(HallwayId),
}

/// A device holder (room or hallway) on a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolderPath {
    pub floor: FloorPath,
    pub holder: DeviceHolder,
}

/// A device inside a room or hallway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevicePath {
    pub holder: HolderPath,
    pub device_id: DeviceId,
}

impl FloorPath {
    #[must_use]
    pub fn new(house_id: HouseId, floor_id: FloorId) -> Self {
        Self { house_id, floor_id }
    }

    #[must_use]
    pub fn room(self, room_id: RoomId) -> RoomPath {
        RoomPath {
            floor: self,
            room_id,
        }
    }

    #[must_use]
    pub fn hallway(self, hallway_id: HallwayId) -> HallwayPath {
        HallwayPath {
            floor: self,
            hallway_id,
        }
    }
}

impl RoomPath {
    /// The room seen as a device holder.
    #[must_use]
    pub fn holder(self) -> HolderPath {
        HolderPath {
            floor: self.floor,
            holder: DeviceHolder::Room(self.room_id),
        }
    }
}

impl HallwayPath {
    /// The hallway seen as a device holder.
    #[must_use]
    pub fn holder(self) -> HolderPath {
        HolderPath {
            floor: self.floor,
            holder: DeviceHolder::Hallway(self.hallway_id),
        }
    }
}

impl HolderPath {
    #[must_use]
    pub fn device(self, device_id: DeviceId) -> DevicePath {
        DevicePath {
            holder: self,
            device_id,
        }
    }
}

impl fmt::Display for FloorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "house/{}/floor/{}", self.house_id, self.floor_id)
    }
}

impl fmt::Display for RoomPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/room/{}", self.floor, self.room_id)
    }
}

impl fmt::Display for HallwayPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/hallway/{}", self.floor, self.hallway_id)
    }
}

impl fmt::Display for DeviceHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room(id) => write!(f, "room/{id}"),
            Self::Hallway(id) => write!(f, "hallway/{id}"),
        }
    }
}

impl fmt::Display for HolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.floor, self.holder)
    }
}

impl fmt::Display for DevicePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/device/{}", self.holder, self.device_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_in_route_shape() {
        let path = FloorPath::new(HouseId::new(1), FloorId::new(101))
            .room(RoomId::new(201))
            .holder()
            .device(DeviceId::new(5));
        assert_eq!(path.to_string(), "house/1/floor/101/room/201/device/5");
    }

    #[test]
    fn should_tag_hallway_holder() {
        let holder = FloorPath::new(HouseId::new(1), FloorId::new(2))
            .hallway(HallwayId::new(3))
            .holder();
        assert_eq!(holder.holder, DeviceHolder::Hallway(HallwayId::new(3)));
        assert_eq!(holder.to_string(), "house/1/floor/2/hallway/3");
    }
}
