//! Device — a sensor attached to a room or a hallway.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SmartHomeError, ValidationError};
use crate::id::DeviceId;
use crate::patch::DevicePatch;

/// The kind of reading a device reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Humidity,
    Temperature,
}

impl DeviceType {
    /// Wire name of the device type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Humidity => "humidity",
            Self::Temperature => "temperature",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "humidity" => Ok(Self::Humidity),
            "temperature" => Ok(Self::Temperature),
            other => Err(ValidationError::UnknownDeviceType(other.to_string())),
        }
    }
}

/// A device and its latest reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub device_id: DeviceId,
    pub device_type: DeviceType,
    pub device_info: i64,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Apply a partial update. Only the reading is mutable.
    pub fn apply(&mut self, patch: DevicePatch) {
        if let Some(info) = patch.device_info {
            self.device_info = info;
        }
    }
}

/// Step-by-step builder for [`Device`].
///
/// The device type is kept as text until [`build`](Self::build) so that an
/// unsupported type surfaces as a validation error rather than a decoding
/// failure.
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    device_id: Option<DeviceId>,
    device_type: Option<String>,
    device_info: Option<i64>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn device_id(mut self, device_id: DeviceId) -> Self {
        self.device_id = Some(device_id);
        self
    }

    #[must_use]
    pub fn device_type(mut self, device_type: impl ToString) -> Self {
        self.device_type = Some(device_type.to_string());
        self
    }

    #[must_use]
    pub fn device_info(mut self, device_info: i64) -> Self {
        self.device_info = Some(device_info);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] if a field is missing or the
    /// type is not `humidity` or `temperature`.
    pub fn build(self) -> Result<Device, SmartHomeError> {
        let device_id = self
            .device_id
            .ok_or(ValidationError::MissingField("device_id"))?;
        let device_type = self
            .device_type
            .ok_or(ValidationError::MissingField("device_type"))?
            .parse::<DeviceType>()?;
        let device_info = self
            .device_info
            .ok_or(ValidationError::MissingField("device_info"))?;

        Ok(Device {
            device_id,
            device_type,
            device_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_temperature_device() {
        let device = Device::builder()
            .device_id(DeviceId::new(1))
            .device_type("temperature")
            .device_info(22)
            .build()
            .unwrap();
        assert_eq!(device.device_type, DeviceType::Temperature);
        assert_eq!(device.device_info, 22);
    }

    #[test]
    fn should_accept_typed_device_type() {
        let device = Device::builder()
            .device_id(DeviceId::new(1))
            .device_type(DeviceType::Humidity)
            .device_info(40)
            .build()
            .unwrap();
        assert_eq!(device.device_type, DeviceType::Humidity);
    }

    #[test]
    fn should_reject_smoke_device_type() {
        let result = Device::builder()
            .device_id(DeviceId::new(1))
            .device_type("smoke")
            .device_info(0)
            .build();
        assert!(matches!(
            result,
            Err(SmartHomeError::Validation(ValidationError::UnknownDeviceType(kind))) if kind == "smoke"
        ));
    }

    #[test]
    fn should_reject_missing_reading() {
        let result = Device::builder()
            .device_id(DeviceId::new(1))
            .device_type("humidity")
            .build();
        assert!(matches!(
            result,
            Err(SmartHomeError::Validation(ValidationError::MissingField(
                "device_info"
            )))
        ));
    }

    #[test]
    fn should_only_change_reading_when_patched() {
        let mut device = Device::builder()
            .device_id(DeviceId::new(1))
            .device_type("temperature")
            .device_info(22)
            .build()
            .unwrap();
        device.apply(DevicePatch::device_info(0));
        assert_eq!(device.device_info, 0);
        assert_eq!(device.device_type, DeviceType::Temperature);

        device.apply(DevicePatch::default());
        assert_eq!(device.device_info, 0);
    }

    #[test]
    fn should_serialize_type_in_lowercase() {
        let device = Device::builder()
            .device_id(DeviceId::new(101))
            .device_type("temperature")
            .device_info(22)
            .build()
            .unwrap();
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"device_id": 101, "device_type": "temperature", "device_info": 22})
        );
    }
}
