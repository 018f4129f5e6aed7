//! Hallway — a passage on a floor. Holds devices exactly like a room.

use serde::{Deserialize, Serialize};

use crate::id::HallwayId;
use crate::patch::NamePatch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hallway {
    pub hallway_id: HallwayId,
    pub name: String,
}

impl Hallway {
    #[must_use]
    pub fn new(hallway_id: HallwayId, name: impl Into<String>) -> Self {
        Self {
            hallway_id,
            name: name.into(),
        }
    }

    pub fn apply(&mut self, patch: &NamePatch) {
        patch.apply_to(&mut self.name);
    }
}
