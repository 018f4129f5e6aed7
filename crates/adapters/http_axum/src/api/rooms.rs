//! JSON handlers for rooms.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use serde::de::IgnoredAny;

use smarthome_app::ports::RegistryStore;
use smarthome_app::registry::EntityKind;
use smarthome_domain::id::{FloorId, HouseId, RoomId};
use smarthome_domain::path::{FloorPath, HolderPath, RoomPath};
use smarthome_domain::room::Room;
use smarthome_domain::view::RoomView;

use super::floors::FloorParams;
use super::{CreateResponse, DeleteResponse, GetResponse, PatchNameRequest, reject_nested};
use crate::error::ApiError;
use crate::state::AppState;

/// Path parameters naming a room.
#[derive(Debug, Deserialize)]
pub struct RoomParams {
    pub house_id: HouseId,
    pub floor_id: FloorId,
    pub room_id: RoomId,
}

impl From<RoomParams> for RoomPath {
    fn from(params: RoomParams) -> Self {
        FloorPath::new(params.house_id, params.floor_id).room(params.room_id)
    }
}

impl From<RoomParams> for HolderPath {
    fn from(params: RoomParams) -> Self {
        RoomPath::from(params).holder()
    }
}

/// Request body for adding a room to a floor.
#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub room_id: RoomId,
    pub name: String,
    #[serde(default)]
    pub devices: Vec<IgnoredAny>,
}

/// `POST /house/{house_id}/floor/{floor_id}/room`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Path(params): Path<FloorParams>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<CreateResponse<RoomView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    reject_nested("devices", &req.devices)?;
    let room = Room::new(req.room_id, req.name);
    let view = state.room_service.create_room(params.into(), room).await?;
    Ok(CreateResponse::Ok(Json(view)))
}

/// `GET /house/{house_id}/floor/{floor_id}/room/{room_id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(params): Path<RoomParams>,
) -> Result<GetResponse<RoomView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let view = state.room_service.get_room(params.into()).await?;
    Ok(GetResponse::Ok(Json(view)))
}

/// `PATCH /house/{house_id}/floor/{floor_id}/room/{room_id}`
pub async fn patch<S>(
    State(state): State<AppState<S>>,
    Path(params): Path<RoomParams>,
    Json(req): Json<PatchNameRequest>,
) -> Result<GetResponse<RoomView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let view = state
        .room_service
        .patch_room(params.into(), req.into())
        .await?;
    Ok(GetResponse::Ok(Json(view)))
}

/// `DELETE /house/{house_id}/floor/{floor_id}/room/{room_id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(params): Path<RoomParams>,
) -> Result<DeleteResponse, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    state.room_service.delete_room(params.into()).await?;
    Ok(DeleteResponse::Deleted(EntityKind::Room))
}
