//! JSON handlers for floors.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use serde::de::IgnoredAny;

use smarthome_app::ports::RegistryStore;
use smarthome_app::registry::EntityKind;
use smarthome_domain::floor::Floor;
use smarthome_domain::id::{FloorId, HouseId};
use smarthome_domain::path::FloorPath;
use smarthome_domain::view::FloorView;

use super::{CreateResponse, DeleteResponse, GetResponse, PatchNameRequest, reject_nested};
use crate::error::ApiError;
use crate::state::AppState;

/// Path parameters naming a floor.
#[derive(Debug, Deserialize)]
pub struct FloorParams {
    pub house_id: HouseId,
    pub floor_id: FloorId,
}

impl From<FloorParams> for FloorPath {
    fn from(params: FloorParams) -> Self {
        FloorPath::new(params.house_id, params.floor_id)
    }
}

/// Request body for adding a floor to a house.
#[derive(Debug, Deserialize)]
pub struct CreateFloorRequest {
    pub floor_id: FloorId,
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<IgnoredAny>,
    #[serde(default)]
    pub hallways: Vec<IgnoredAny>,
}

/// `POST /house/{house_id}/floor`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Path(house_id): Path<HouseId>,
    Json(req): Json<CreateFloorRequest>,
) -> Result<CreateResponse<FloorView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    reject_nested("rooms", &req.rooms)?;
    reject_nested("hallways", &req.hallways)?;
    let floor = Floor::new(req.floor_id, req.name);
    let view = state.floor_service.create_floor(house_id, floor).await?;
    Ok(CreateResponse::Ok(Json(view)))
}

/// `GET /house/{house_id}/floor/{floor_id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(params): Path<FloorParams>,
) -> Result<GetResponse<FloorView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let view = state.floor_service.get_floor(params.into()).await?;
    Ok(GetResponse::Ok(Json(view)))
}

/// `PATCH /house/{house_id}/floor/{floor_id}`
pub async fn patch<S>(
    State(state): State<AppState<S>>,
    Path(params): Path<FloorParams>,
    Json(req): Json<PatchNameRequest>,
) -> Result<GetResponse<FloorView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let view = state
        .floor_service
        .patch_floor(params.into(), req.into())
        .await?;
    Ok(GetResponse::Ok(Json(view)))
}

/// `DELETE /house/{house_id}/floor/{floor_id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(params): Path<FloorParams>,
) -> Result<DeleteResponse, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    state.floor_service.delete_floor(params.into()).await?;
    Ok(DeleteResponse::Deleted(EntityKind::Floor))
}
