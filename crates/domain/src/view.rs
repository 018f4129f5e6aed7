//! Serialized views — an entity together with its derived children.
//!
//! Views are rebuilt from the registry on every read; nothing here is ever
//! stored. The JSON shape nests children under `floors`, `rooms`,
//! `hallways` and `devices`.

use serde::Serialize;

use crate::device::Device;
use crate::floor::Floor;
use crate::hallway::Hallway;
use crate::house::House;
use crate::room::Room;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HouseView {
    #[serde(flatten)]
    pub house: House,
    pub floors: Vec<FloorView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloorView {
    #[serde(flatten)]
    pub floor: Floor,
    pub rooms: Vec<RoomView>,
    pub hallways: Vec<HallwayView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    #[serde(flatten)]
    pub room: Room,
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HallwayView {
    #[serde(flatten)]
    pub hallway: Hallway,
    pub devices: Vec<Device>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{DeviceId, FloorId, HallwayId, HouseId, RoomId, UserId};
    use crate::user::User;

    #[test]
    fn should_nest_children_under_original_field_names() {
        let device = Device::builder()
            .device_id(DeviceId::new(1))
            .device_type("humidity")
            .device_info(55)
            .build()
            .unwrap();
        let view = HouseView {
            house: House::builder()
                .house_id(HouseId::new(1))
                .name("Dream House")
                .owner(User::new(UserId::new(1), "John Doe").unwrap())
                .build()
                .unwrap(),
            floors: vec![FloorView {
                floor: Floor::new(FloorId::new(101), "Ground"),
                rooms: vec![RoomView {
                    room: Room::new(RoomId::new(201), "Kitchen"),
                    devices: vec![device],
                }],
                hallways: vec![HallwayView {
                    hallway: Hallway::new(HallwayId::new(301), "Entry"),
                    devices: vec![],
                }],
            }],
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "house_id": 1,
                "name": "Dream House",
                "owner": {"user_id": 1, "name": "John Doe"},
                "floors": [{
                    "floor_id": 101,
                    "name": "Ground",
                    "rooms": [{
                        "room_id": 201,
                        "name": "Kitchen",
                        "devices": [{"device_id": 1, "device_type": "humidity", "device_info": 55}]
                    }],
                    "hallways": [{"hallway_id": 301, "name": "Entry", "devices": []}]
                }]
            })
        );
    }
}
