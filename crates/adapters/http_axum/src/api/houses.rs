//! JSON handlers for houses.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use serde::de::IgnoredAny;

use smarthome_app::ports::RegistryStore;
use smarthome_app::registry::EntityKind;
use smarthome_domain::house::House;
use smarthome_domain::id::HouseId;
use smarthome_domain::user::User;
use smarthome_domain::view::HouseView;

use super::{CreateResponse, DeleteResponse, GetResponse, PatchNameRequest, reject_nested};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a house.
///
/// `owner` must repeat the current `{user_id, name}` of a registered user.
#[derive(Debug, Deserialize)]
pub struct CreateHouseRequest {
    pub house_id: HouseId,
    pub name: String,
    pub owner: User,
    #[serde(default)]
    pub floors: Vec<IgnoredAny>,
}

/// `POST /house`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateHouseRequest>,
) -> Result<CreateResponse<HouseView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    reject_nested("floors", &req.floors)?;
    let house = House::builder()
        .house_id(req.house_id)
        .name(req.name)
        .owner(req.owner)
        .build()?;
    let view = state.house_service.create_house(house).await?;
    Ok(CreateResponse::Ok(Json(view)))
}

/// `GET /house/{house_id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(house_id): Path<HouseId>,
) -> Result<GetResponse<HouseView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let view = state.house_service.get_house(house_id).await?;
    Ok(GetResponse::Ok(Json(view)))
}

/// `PATCH /house/{house_id}`
pub async fn patch<S>(
    State(state): State<AppState<S>>,
    Path(house_id): Path<HouseId>,
    Json(req): Json<PatchNameRequest>,
) -> Result<GetResponse<HouseView>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let view = state.house_service.patch_house(house_id, req.into()).await?;
    Ok(GetResponse::Ok(Json(view)))
}

/// `DELETE /house/{house_id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(house_id): Path<HouseId>,
) -> Result<DeleteResponse, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    state.house_service.delete_house(house_id).await?;
    Ok(DeleteResponse::Deleted(EntityKind::House))
}
