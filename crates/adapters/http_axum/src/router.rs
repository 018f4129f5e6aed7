//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use smarthome_app::ports::RegistryStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: RegistryStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use smarthome_adapter_storage_memory::InMemoryRegistryStore;
    use tower::ServiceExt;

    fn app() -> Router {
        build(AppState::from_store(Arc::new(InMemoryRegistryStore::new())))
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn seed_house(app: &Router) {
        let (status, _) = send(
            app,
            request(
                Method::POST,
                "/users",
                Some(json!({"user_id": 1, "name": "John Doe"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(
            app,
            request(
                Method::POST,
                "/house",
                Some(json!({
                    "house_id": 1,
                    "name": "Dream House",
                    "owner": {"user_id": 1, "name": "John Doe"},
                    "floors": []
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_create_and_get_user() {
        let app = app();
        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/users",
                Some(json!({"user_id": 1, "name": "John Doe"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"user_id": 1, "name": "John Doe"}));

        let (status, body) = send(&app, request(Method::GET, "/users/1", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "John Doe");
    }

    #[tokio::test]
    async fn should_return_422_for_short_user_name() {
        let app = app();
        let (status, body) = send(
            &app,
            request(Method::POST, "/users", Some(json!({"user_id": 1, "name": "Jo"}))),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn should_return_400_for_duplicate_user() {
        let app = app();
        let payload = json!({"user_id": 1, "name": "John Doe"});
        send(&app, request(Method::POST, "/users", Some(payload.clone()))).await;
        let (status, _) = send(&app, request(Method::POST, "/users", Some(payload))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_404_for_missing_user() {
        let app = app();
        let (status, body) = send(&app, request(Method::GET, "/users/42", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found: 42");
    }

    #[tokio::test]
    async fn should_return_delete_message() {
        let app = app();
        seed_house(&app).await;
        let (status, body) = send(&app, request(Method::DELETE, "/users/1", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "User deleted successfully"}));
    }

    #[tokio::test]
    async fn should_reject_house_with_unknown_owner() {
        let app = app();
        let (status, _) = send(
            &app,
            request(
                Method::POST,
                "/house",
                Some(json!({
                    "house_id": 1,
                    "name": "Dream House",
                    "owner": {"user_id": 99, "name": "Nobody"}
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, request(Method::GET, "/house/1", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_house_with_nested_floors() {
        let app = app();
        seed_house(&app).await;
        let (status, _) = send(
            &app,
            request(
                Method::POST,
                "/house",
                Some(json!({
                    "house_id": 2,
                    "name": "Second House",
                    "owner": {"user_id": 1, "name": "John Doe"},
                    "floors": [{"floor_id": 1, "name": "Ground", "rooms": [], "hallways": []}]
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn should_reach_floor_through_both_spellings() {
        let app = app();
        seed_house(&app).await;
        let (status, _) = send(
            &app,
            request(
                Method::POST,
                "/house/1/floor",
                Some(json!({"floor_id": 101, "name": "First Floor"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            request(
                Method::PATCH,
                "/house/1/floors/101",
                Some(json!({"name": "Ground Floor"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ground Floor");

        let (status, body) = send(&app, request(Method::GET, "/house/1/floor/101", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ground Floor");
    }

    #[tokio::test]
    async fn should_reject_unknown_patch_field() {
        let app = app();
        seed_house(&app).await;
        let (status, _) = send(
            &app,
            request(
                Method::PATCH,
                "/house/1",
                Some(json!({"owner": {"user_id": 2, "name": "Jane Doe"}})),
            ),
        )
        .await;
        assert!(status.is_client_error());

        let (_, body) = send(&app, request(Method::GET, "/house/1", None)).await;
        assert_eq!(body["owner"]["user_id"], 1);
    }

    #[tokio::test]
    async fn should_serve_devices_in_hallways() {
        let app = app();
        seed_house(&app).await;
        send(
            &app,
            request(
                Method::POST,
                "/house/1/floor",
                Some(json!({"floor_id": 1, "name": "Ground"})),
            ),
        )
        .await;
        send(
            &app,
            request(
                Method::POST,
                "/house/1/floor/1/hallway",
                Some(json!({"hallway_id": 3, "name": "Main Hall", "devices": []})),
            ),
        )
        .await;

        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/house/1/floor/1/hallway/3/device",
                Some(json!({"device_id": 5, "device_type": "humidity", "device_info": 40})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["device_type"], "humidity");

        let (status, body) = send(
            &app,
            request(
                Method::PATCH,
                "/house/1/floor/1/hallway/3/device/5",
                Some(json!({"device_info": 0})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["device_info"], 0);

        let (status, _) = send(
            &app,
            request(Method::GET, "/house/1/floor/1/room/3/device/5", None),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, request(Method::GET, "/house/1/floor/1", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hallways"][0]["devices"][0]["device_id"], 5);
    }
}
