//! JSON handlers for users.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use smarthome_app::ports::RegistryStore;
use smarthome_app::registry::EntityKind;
use smarthome_domain::id::UserId;
use smarthome_domain::user::User;

use super::{CreateResponse, DeleteResponse, GetResponse, PatchNameRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub user_id: UserId,
    pub name: String,
}

/// `POST /users`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<CreateResponse<User>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let user = User::new(req.user_id, req.name)?;
    let created = state.user_service.create_user(user).await?;
    Ok(CreateResponse::Ok(Json(created)))
}

/// `GET /users/{user_id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(user_id): Path<UserId>,
) -> Result<GetResponse<User>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let user = state.user_service.get_user(user_id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `PATCH /users/{user_id}`
pub async fn patch<S>(
    State(state): State<AppState<S>>,
    Path(user_id): Path<UserId>,
    Json(req): Json<PatchNameRequest>,
) -> Result<GetResponse<User>, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let user = state.user_service.patch_user(user_id, req.into()).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `DELETE /users/{user_id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(user_id): Path<UserId>,
) -> Result<DeleteResponse, ApiError>
where
    S: RegistryStore + Send + Sync + 'static,
{
    state.user_service.delete_user(user_id).await?;
    Ok(DeleteResponse::Deleted(EntityKind::User))
}
