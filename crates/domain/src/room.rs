//! Room — a closed space on a floor that can hold devices.

use serde::{Deserialize, Serialize};

use crate::id::RoomId;
use crate::patch::NamePatch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: RoomId,
    pub name: String,
}

impl Room {
    #[must_use]
    pub fn new(room_id: RoomId, name: impl Into<String>) -> Self {
        Self {
            room_id,
            name: name.into(),
        }
    }

    pub fn apply(&mut self, patch: &NamePatch) {
        patch.apply_to(&mut self.name);
    }
}
