//! JSON handlers for devices.
//!
//! The same handlers serve devices held by rooms and by hallways; the path
//! parameter type decides which holder the device is resolved through.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use smarthome_app::ports::RegistryStore;
use smarthome_app::registry::EntityKind;
use smarthome_domain::device::Device;
use smarthome_domain::id::{DeviceId, FloorId, HallwayId, HouseId, RoomId};
use smarthome_domain::patch::DevicePatch;
use smarthome_domain::path::{DevicePath, FloorPath, HolderPath};

use super::{CreateResponse, DeleteResponse, GetResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Path parameters naming a device inside a room.
#[derive(Debug, Deserialize)]
pub struct RoomDeviceParams {
    pub house_id: HouseId,
    pub floor_id: FloorId,
    pub room_id: RoomId,
    pub device_id: DeviceId,
}

impl From<RoomDeviceParams> for DevicePath {
    fn from(params: RoomDeviceParams) -> Self {
        FloorPath::new(params.house_id, params.floor_id)
            .room(params.room_id)
            .holder()
            .device(params.device_id)
    }
}

/// Path parameters naming a device inside a hallway.
#[derive(Debug, Deserialize)]
pub struct HallwayDeviceParams {
    pub house_id: HouseId,
    pub floor_id: FloorId,
    pub hallway_id: HallwayId,
    pub device_id: DeviceId,
}

impl From<HallwayDeviceParams> for DevicePath {
    fn from(params: HallwayDeviceParams) -> Self {
        FloorPath::new(params.house_id, params.floor_id)
            .hallway(params.hallway_id)
            .holder()
            .device(params.device_id)
    }
}

/// Request body for attaching a device.
///
/// `device_type` stays textual here so that an unsupported kind is reported
/// as a validation error.
#[derive(Debug, Deserialize)]
pub struct CreateDeviceRequest {
    pub device_id: DeviceId,
    pub device_type: String,
    pub device_info: i64,
}

/// Request body for recording a new reading.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchDeviceRequest {
    pub device_info: Option<i64>,
}

impl From<PatchDeviceRequest> for DevicePatch {
    fn from(req: PatchDeviceRequest) -> Self {
        Self {
            device_info: req.device_info,
        }
    }
}

/// `POST …/room/{room_id}/device` and `POST …/hallway/{hallway_id}/device`
pub async fn create<S, P>(
    State(state): State<AppState<S>>,
    Path(params): Path<P>,
    Json(req): Json<CreateDeviceRequest>,
) -> Result<CreateResponse<Device>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
    P: DeserializeOwned + Into<HolderPath> + Send,
{
    let device = Device::builder()
        .device_id(req.device_id)
        .device_type(req.device_type)
        .device_info(req.device_info)
        .build()?;
    let created = state
        .device_service
        .create_device(params.into(), device)
        .await?;
    Ok(CreateResponse::Ok(Json(created)))
}

/// `GET …/device/{device_id}`
pub async fn get<S, P>(
    State(state): State<AppState<S>>,
    Path(params): Path<P>,
) -> Result<GetResponse<Device>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
    P: DeserializeOwned + Into<DevicePath> + Send,
{
    let device = state.device_service.get_device(params.into()).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `PATCH …/device/{device_id}`
pub async fn patch<S, P>(
    State(state): State<AppState<S>>,
    Path(params): Path<P>,
    Json(req): Json<PatchDeviceRequest>,
) -> Result<GetResponse<Device>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
    P: DeserializeOwned + Into<DevicePath> + Send,
{
    let device = state
        .device_service
        .patch_device(params.into(), req.into())
        .await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `DELETE …/device/{device_id}`
pub async fn delete<S, P>(
    State(state): State<AppState<S>>,
    Path(params): Path<P>,
) -> Result<DeleteResponse, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
    P: DeserializeOwned + Into<DevicePath> + Send,
{
    state.device_service.delete_device(params.into()).await?;
    Ok(DeleteResponse::Deleted(EntityKind::Device))
}
