//! Floor — a level of a house, holding rooms and hallways.

use serde::{Deserialize, Serialize};

use crate::id::FloorId;
use crate::patch::NamePatch;

/// A floor. The owning house is recorded by the registry, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub floor_id: FloorId,
    pub name: String,
}

impl Floor {
    #[must_use]
    pub fn new(floor_id: FloorId, name: impl Into<String>) -> Self {
        Self {
            floor_id,
            name: name.into(),
        }
    }

    pub fn apply(&mut self, patch: &NamePatch) {
        patch.apply_to(&mut self.name);
    }
}
