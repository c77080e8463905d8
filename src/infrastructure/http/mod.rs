//! HTTP REST API routes

mod asset_routes;
mod error;

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::domain::entities::{Item, Link, Player, Room, User};
use crate::infrastructure::config::BuildInfo;
use crate::infrastructure::state::AppState;

pub use asset_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .merge(collection_routes::<Player>())
        .merge(collection_routes::<Room>())
        .merge(collection_routes::<Item>())
        .merge(collection_routes::<Link>())
        .merge(collection_routes::<User>())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn version(State(state): State<Arc<AppState>>) -> Json<BuildInfo> {
    Json(state.build)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::config::AppConfig;

    const OWNER: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
    const ROOM: &str = "6ba7b811-9dad-11d1-80b4-00c04fd430c8";

    fn app() -> Router {
        let config = AppConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
        };
        create_routes().with_state(Arc::new(AppState::new(config, BuildInfo::current())))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }

    fn detail(body: &Value) -> &str {
        body["error"]["detail"].as_str().unwrap_or_default()
    }

    fn item_body(name: &str, kind: &str) -> Value {
        json!({
            "name": name,
            "description": "D",
            "ownerID": OWNER,
            "locationID": { "id": ROOM, "type": kind },
        })
    }

    #[tokio::test]
    async fn test_health_and_version() {
        let app = app();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".into()));

        let (status, body) = send(&app, "GET", "/version", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "wrldbldr-assets");
    }

    #[tokio::test]
    async fn test_create_item_reports_first_violation() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/items",
            Some(json!({ "name": "", "description": "", "ownerID": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": { "status": 400, "detail": "bad request: empty item name" } })
        );
    }

    #[tokio::test]
    async fn test_null_name_is_reported_as_empty() {
        let app = app();
        let (status, body) = send(&app, "POST", "/items", Some(json!({ "name": null }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail(&body), "bad request: empty item name");
    }

    #[tokio::test]
    async fn test_create_and_fetch_item() {
        let app = app();
        let (status, created) = send(&app, "POST", "/items", Some(item_body("N", "room"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["locationID"]["type"], "room");
        assert_eq!(created["locationID"]["id"], ROOM);
        assert_eq!(created["ownerID"], OWNER);

        let id = created["id"].as_str().unwrap();
        let (status, fetched) = send(&app, "GET", &format!("/items/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, listed) = send(&app, "GET", "/items?ownerID=", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_list_items_by_location() {
        let app = app();
        send(&app, "POST", "/items", Some(item_body("in room", "room"))).await;
        send(&app, "POST", "/items", Some(item_body("in bag", "item"))).await;

        let uri = format!("/items?locationID={ROOM}&locationType=ITEM");
        let (status, listed) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["name"], "in bag");
    }

    #[tokio::test]
    async fn test_item_filter_conflicts() {
        let app = app();
        let uri = format!("/items?ownerID={OWNER}&locationID={ROOM}&locationType=room");
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            detail(&body),
            "bad request: ownerID and locationID/locationType are mutually exclusive"
        );

        let uri = format!("/items?locationID={ROOM}");
        let (_, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(
            detail(&body),
            "bad request: locationType required when locationID is set"
        );
    }

    #[tokio::test]
    async fn test_player_filter_rejects_bad_location() {
        let app = app();
        let (status, body) = send(&app, "GET", "/players?locationID=not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": {
                "status": 400,
                "detail": "bad request: invalid locationID query parameter: 'not-a-uuid'"
            } })
        );
    }

    #[tokio::test]
    async fn test_repeated_query_parameter_uses_first_value() {
        let app = app();
        let uri = format!("/rooms?ownerID=bad&ownerID={OWNER}");
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail(&body), "bad request: invalid ownerID query parameter: 'bad'");

        let uri = format!("/rooms?ownerID={OWNER}&ownerID=bad");
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_pagination_bounds() {
        let app = app();
        let (status, body) = send(&app, "GET", "/links?offset=0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail(&body), "bad request: invalid offset query parameter: '0'");

        let (status, body) = send(&app, "GET", "/links?limit=101", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail(&body), "bad request: invalid limit query parameter: '101'");

        let (status, body) = send(&app, "GET", "/links?limit=100&offset=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_room_with_short_parent_id() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/rooms",
            Some(json!({
                "name": "Inn",
                "description": "Cosy",
                "ownerID": OWNER,
                "parentID": "1234567890123",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            detail(&body),
            "bad request: invalid parentID: '1234567890123', invalid UUID length: 13"
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app();
        let (status, body) = send(&app, "POST", "/links", Some(json!([1, 2, 3]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(detail(&body).starts_with("bad request: invalid request body: "));
    }

    #[tokio::test]
    async fn test_unknown_asset_is_not_found() {
        let app = app();
        let (status, body) = send(&app, "GET", &format!("/rooms/{ROOM}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["status"], 404);
        assert_eq!(detail(&body), format!("not found: room not found: {ROOM}"));

        let (status, body) = send(&app, "DELETE", "/rooms/nope", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail(&body), "bad request: invalid id: 'nope', invalid UUID length: 4");
    }

    #[tokio::test]
    async fn test_update_and_remove_link() {
        let app = app();
        let link = json!({
            "name": "north",
            "description": "A door",
            "ownerID": OWNER,
            "locationID": ROOM,
            "destinationID": OWNER,
        });
        let (status, created) = send(&app, "POST", "/links", Some(link)).await;
        assert_eq!(status, StatusCode::CREATED);
        let uri = format!("/links/{}", created["id"].as_str().unwrap());

        let renamed = json!({
            "name": "south",
            "description": "A door",
            "ownerID": OWNER,
            "locationID": OWNER,
            "destinationID": ROOM,
        });
        let (status, updated) = send(&app, "PUT", &uri, Some(renamed)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "south");
        assert_eq!(updated["destinationID"], ROOM);
        assert_eq!(updated["created"], created["created"]);

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_user_login_is_conflict() {
        let app = app();
        let user = json!({ "login": "wizard", "publicKey": "ssh-ed25519 AAAA", "playerID": OWNER });
        let (status, _) = send(&app, "POST", "/users", Some(user.clone())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, "POST", "/users", Some(user)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body,
            json!({ "error": {
                "status": 409,
                "detail": "conflict: user login 'wizard' already exists"
            } })
        );
    }
}
