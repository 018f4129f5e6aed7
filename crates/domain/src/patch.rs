//! Partial updates.
//!
//! A `None` field means "leave unchanged", never "reset to default".

/// Partial update for entities whose only mutable field is `name`
/// (users, houses, floors, rooms, hallways).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePatch {
    pub name: Option<String>,
}

/// Partial update for a device. Type and id are immutable after creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DevicePatch {
    pub device_info: Option<i64>,
}

impl NamePatch {
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Apply the patch to `target`, leaving it untouched when no name is set.
    pub fn apply_to(&self, target: &mut String) {
        if let Some(name) = &self.name {
            target.clone_from(name);
        }
    }
}

impl DevicePatch {
    #[must_use]
    pub fn device_info(value: i64) -> Self {
        Self {
            device_info: Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_replace_name_when_present() {
        let mut name = "Old".to_string();
        NamePatch::name("New").apply_to(&mut name);
        assert_eq!(name, "New");
    }

    #[test]
    fn should_keep_name_when_absent() {
        let mut name = "Old".to_string();
        NamePatch::default().apply_to(&mut name);
        assert_eq!(name, "Old");
    }
}
