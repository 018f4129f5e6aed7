//! JSON handlers for hallways.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use serde::de::IgnoredAny;

use smarthome_app::ports::RegistryStore;
use smarthome_app::registry::EntityKind;
use smarthome_domain::hallway::Hallway;
use smarthome_domain::id::{FloorId, HallwayId, HouseId};
use smarthome_domain::path::{FloorPath, HallwayPath, HolderPath};
use smarthome_domain::view::HallwayView;

use super::floors::FloorParams;
use super::{CreateResponse, DeleteResponse, GetResponse, PatchNameRequest, reject_nested};
use crate::error::ApiError;
use crate::state::AppState;

/// Path parameters naming a hallway.
#[derive(Debug, Deserialize)]
pub struct HallwayParams {
    pub house_id: HouseId,
    pub floor_id: FloorId,
    pub hallway_id: HallwayId,
}

impl From<HallwayParams> for HallwayPath {
    fn from(params: HallwayParams) -> Self {
        FloorPath::new(params.house_id, params.floor_id).hallway(params.hallway_id)
    }
}

impl From<HallwayParams> for HolderPath {
    fn from(params: HallwayParams) -> Self {
        HallwayPath::from(params).holder()
    }
}

/// Request body for adding a hallway to a floor.
#[derive(Debug, Deserialize)]
pub struct CreateHallwayRequest {
    pub hallway_id: HallwayId,
    pub name: String,
    #[serde(default)]
    pub devices: Vec<IgnoredAny>,
}

/// `POST /house/{house_id}/floor/{floor_id}/hallway`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Path(params): Path<FloorParams>,
    Json(req): Json<CreateHallwayRequest>,
) -> Result<CreateResponse<HallwayView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    reject_nested("devices", &req.devices)?;
    let hallway = Hallway::new(req.hallway_id, req.name);
    let view = state.hallway_service.create_hallway(params.into(), hallway).await?;
    Ok(CreateResponse::Ok(Json(view)))
}

/// `GET /house/{house_id}/floor/{floor_id}/hallway/{hallway_id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(params): Path<HallwayParams>,
) -> Result<GetResponse<HallwayView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let view = state.hallway_service.get_hallway(params.into()).await?;
    Ok(GetResponse::Ok(Json(view)))
}

/// `PATCH /house/{house_id}/floor/{floor_id}/hallway/{hallway_id}`
pub async fn patch<S>(
    State(state): State<AppState<S>>,
    Path(params): Path<HallwayParams>,
    Json(req): Json<PatchNameRequest>,
) -> Result<GetResponse<HallwayView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let view = state
        .hallway_service
        .patch_hallway(params.into(), req.into())
        .await?;
    Ok(GetResponse::Ok(Json(view)))
}

/// `DELETE /house/{house_id}/floor/{floor_id}/hallway/{hallway_id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(params): Path<HallwayParams>,
) -> Result<DeleteResponse, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    state.hallway_service.delete_hallway(params.into()).await?;
    Ok(DeleteResponse::Deleted(EntityKind::Hallway))
}
