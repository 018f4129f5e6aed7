//! JSON API handler modules.
//!
//! Every handler resolves its entity through the ids carried by the path;
//! ids repeated in a body are only used when creating.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod floors;
#[allow(clippy::missing_errors_doc)]
pub mod hallways;
#[allow(clippy::missing_errors_doc)]
pub mod houses;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Json;
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use smarthome_app::ports::RegistryStore;
use smarthome_app::registry::EntityKind;
use smarthome_domain::error::{SmartHomeError, ValidationError};
use smarthome_domain::patch::NamePatch;

use crate::state::AppState;

/// Floor-scoped routes are reachable under both spellings.
const FLOOR_SEGMENTS: [&str; 2] = ["floor", "floors"];

/// Request body for renaming a user, house, floor, room or hallway.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchNameRequest {
    pub name: Option<String>,
}

impl From<PatchNameRequest> for NamePatch {
    fn from(req: PatchNameRequest) -> Self {
        Self { name: req.name }
    }
}

/// Possible responses from a get or patch endpoint.
pub enum GetResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for GetResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a create endpoint.
///
/// Creation answers `200 OK` with the stored entity.
pub enum CreateResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for CreateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

/// Possible responses from a delete endpoint.
pub enum DeleteResponse {
    Deleted(EntityKind),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(kind) => Json(MessageBody {
                message: format!("{kind} deleted successfully"),
            })
            .into_response(),
        }
    }
}

/// Create payloads may list children, but only as empty arrays.
fn reject_nested(field: &'static str, children: &[IgnoredAny]) -> Result<(), SmartHomeError> {
    if children.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::NestedChildren { field }.into())
    }
}

/// Build the API router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let router = Router::new()
        // Users
        .route("/users", post(users::create::<S>))
        .route(
            "/users/{user_id}",
            get(users::get::<S>)
                .patch(users::patch::<S>)
                .delete(users::delete::<S>),
        )
        // Houses
        .route("/house", post(houses::create::<S>))
        .route(
            "/house/{house_id}",
            get(houses::get::<S>)
                .patch(houses::patch::<S>)
                .delete(houses::delete::<S>),
        )
        .route("/house/{house_id}/floor", post(floors::create::<S>));

    FLOOR_SEGMENTS
        .iter()
        .fold(router, |router, segment| floor_routes(router, segment))
}

fn floor_routes<S>(router: Router<AppState<S>>, segment: &str) -> Router<AppState<S>>
where
    S: RegistryStore + Send + Sync + 'static,
{
    let floor = format!("/house/{{house_id}}/{segment}/{{floor_id}}");
    let room = format!("{floor}/room/{{room_id}}");
    let hallway = format!("{floor}/hallway/{{hallway_id}}");

    router
        // Floors
        .route(
            &floor,
            get(floors::get::<S>)
                .patch(floors::patch::<S>)
                .delete(floors::delete::<S>),
        )
        // Rooms
        .route(&format!("{floor}/room"), post(rooms::create::<S>))
        .route(
            &room,
            get(rooms::get::<S>)
                .patch(rooms::patch::<S>)
                .delete(rooms::delete::<S>),
        )
        // Hallways
        .route(&format!("{floor}/hallway"), post(hallways::create::<S>))
        .route(
            &hallway,
            get(hallways::get::<S>)
                .patch(hallways::patch::<S>)
                .delete(hallways::delete::<S>),
        )
        // Devices
        .route(
            &format!("{room}/device"),
            post(devices::create::<S, rooms::RoomParams>),
        )
        .route(
            &format!("{room}/device/{{device_id}}"),
            get(devices::get::<S, devices::RoomDeviceParams>)
                .patch(devices::patch::<S, devices::RoomDeviceParams>)
                .delete(devices::delete::<S, devices::RoomDeviceParams>),
        )
        .route(
            &format!("{hallway}/device"),
            post(devices::create::<S, hallways::HallwayParams>),
        )
        .route(
            &format!("{hallway}/device/{{device_id}}"),
            get(devices::get::<S, devices::HallwayDeviceParams>)
                .patch(devices::patch::<S, devices::HallwayDeviceParams>)
                .delete(devices::delete::<S, devices::HallwayDeviceParams>),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_empty_children() {
        assert!(reject_nested("floors", &[]).is_ok());
    }

    #[test]
    fn should_reject_non_empty_children() {
        let result = reject_nested("rooms", &[IgnoredAny]);
        assert!(matches!(
            result,
            Err(SmartHomeError::Validation(ValidationError::NestedChildren { field: "rooms" }))
        ));
    }

    #[test]
    fn should_reject_unknown_patch_fields() {
        let result = serde_json::from_str::<PatchNameRequest>(r#"{"owner": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_allow_empty_patch() {
        let req: PatchNameRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(NamePatch::from(req), NamePatch::default());
    }
}
