use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    router::router,
    service::{ban::cache::BanCache, id::IdGenerator},
    shard::ShardRouter,
    state::AppState,
};


const ADMIN_TOKEN: &str = "test-admin-token";

/// RFC 1123 form of 1_700_000_000.
const REQUEST_DATE: &str = "Tue, 14 Nov 2023 22:13:20 GMT";
const NOW: i64 = 1_700_000_000;

/// Builds an app over `partitions` in-memory partitions with every table.
async fn build_app(partitions: usize) -> (TestContext, AppState) {
    let test = TestBuilder::new()
        .with_partitions(partitions)
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let state = AppState::new(
        ShardRouter::new(test.partitions.clone()).unwrap(),
        IdGenerator::local(),
        BanCache::new(),
        ADMIN_TOKEN.to_string(),
    );
    (test, state)
}

fn app(state: &AppState) -> Router {
    router().with_state(state.clone())
}

/// Seeds user `user_id` with `balance` coins and a session token `"token-{user_id}"`.
async fn seed_user(state: &AppState, user_id: i64, balance: i64) -> String {
    let db = &state.shards.route_for(user_id).db;
    factory::user::UserFactory::new(db)
        .id(user_id)
        .isu_coin(balance)
        .build()
        .await
        .unwrap();
    let token = format!("token-{}", user_id);
    factory::user_session::UserSessionFactory::new(db, user_id)
        .session_id(token.clone())
        .expired_at(NOW + 3_600)
        .build()
        .await
        .unwrap();
    token
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-isu-date", REQUEST_DATE);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_reports_partitions() {
    let (_test, state) = build_app(3).await;

    let response = send(app(&state), Method::GET, "/health", &[], None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["partitions"], 3);
}
