//! Access-guard rejection paths. These never reach the database, so they
//! run against the lazy harness.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::lazy();

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert_eq!(response.body["message"], "Not authorized, no token");
}

#[tokio::test]
async fn test_me_with_malformed_header() {
    let app = TestApp::lazy();

    // Missing the Bearer prefix entirely.
    let request = http::Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("authorization", "Token abc123")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router(), request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Invalid authorization header");
}

#[tokio::test]
async fn test_me_with_empty_bearer() {
    let app = TestApp::lazy();

    let response = app.request("GET", "/api/auth/me", None, Some("")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid authorization header");
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = TestApp::lazy();

    let response = app
        .request("GET", "/api/auth/me", None, Some("not.a.token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid token");
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let app = TestApp::lazy();

    // Hand-crafted token signed with the default secret but already expired.
    let now = chrono::Utc::now().timestamp();
    let claims = kidnest_auth::jwt::Claims {
        sub: uuid::Uuid::new_v4(),
        role: kidnest_entity::user::UserRole::Parent,
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(app.state.config.auth.jwt_secret.as_bytes()),
    )
    .unwrap();

    let response = app
        .request("GET", "/api/auth/me", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token has expired");
}

#[tokio::test]
async fn test_kids_route_requires_token() {
    let app = TestApp::lazy();

    let response = app.request("GET", "/api/kids", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not authorized, no token");
}
