//! Signup and login validation at the HTTP boundary. These requests are
//! rejected before the first query, so they run against the lazy harness.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_signup_missing_credentials() {
    let app = TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({ "email": "p@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["message"], "Email and password are required");
}

#[tokio::test]
async fn test_signup_short_password() {
    let app = TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({ "email": "p@example.com", "password": "abc" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Password must be at least 6 characters"
    );
}

#[tokio::test]
async fn test_signup_unknown_role() {
    let app = TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "p@example.com",
                "password": "secret1",
                "role": "admin",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Role must be either 'parent' or 'kid'"
    );
}

#[tokio::test]
async fn test_kid_signup_missing_family_fields() {
    let app = TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "k@example.com",
                "password": "secret1",
                "role": "kid",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Family code is required, Name is required, Age is required"
    );
}

#[tokio::test]
async fn test_kid_signup_age_out_of_range() {
    let app = TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "k@example.com",
                "password": "secret1",
                "role": "kid",
                "familyCode": "A1B2C3",
                "name": "Al",
                "age": 42,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Age must be between 1 and 18");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Email and password are required");
}

#[tokio::test]
async fn test_logout_is_public_acknowledgement() {
    let app = TestApp::lazy();

    let response = app.request("POST", "/api/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Logged out successfully");
}
