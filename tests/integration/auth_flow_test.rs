//! End-to-end auth flows against a real database.
//!
//! Run with `cargo test -- --ignored` and a PostgreSQL instance reachable
//! via `KIDNEST_TEST_DATABASE_URL`.

use http::StatusCode;

use crate::helpers::{TestApp, unique_email};

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_parent_signup_issues_token_and_code() {
    let app = TestApp::with_database().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": unique_email("parent"),
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    assert!(response.body["token"].is_string());

    let data = &response.body["data"];
    assert_eq!(data["role"], "parent");
    let code = data["familyCode"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    // Signup response carries no kid listing.
    assert!(data.get("kids").is_none());
    assert!(data.get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_parent_code_collision_is_retryable_conflict() {
    let app = TestApp::with_database().await;

    // Two parents racing to the same code: the partial unique index turns
    // the loser's insert into the conflict signal the signup flow retries on.
    let code = uuid::Uuid::new_v4().simple().to_string()[..6].to_uppercase();
    let create = |email: String| kidnest_entity::user::CreateUser {
        email,
        password_hash: "digest".to_string(),
        role: kidnest_entity::user::UserRole::Parent,
        family_code: code.clone(),
        parent_id: None,
        name: None,
    };

    app.state
        .user_repo
        .create(&create(unique_email("winner")))
        .await
        .unwrap();
    let err = app
        .state
        .user_repo
        .create(&create(unique_email("loser")))
        .await
        .unwrap_err();

    assert_eq!(err.kind, kidnest_core::error::ErrorKind::Conflict);
    assert_eq!(err.message, "Family code already in use");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_concurrent_parent_signups_get_distinct_codes() {
    let app = std::sync::Arc::new(TestApp::with_database().await);

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..8 {
        let app = std::sync::Arc::clone(&app);
        tasks.spawn(async move {
            let response = app
                .request(
                    "POST",
                    "/api/auth/signup",
                    Some(serde_json::json!({
                        "email": unique_email(&format!("race{i}")),
                        "password": "secret1",
                    })),
                    None,
                )
                .await;
            assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
            response.body["data"]["familyCode"]
                .as_str()
                .unwrap()
                .to_string()
        });
    }

    let mut codes = std::collections::HashSet::new();
    while let Some(code) = tasks.join_next().await {
        let code = code.unwrap();
        assert!(codes.insert(code), "two parents received the same code");
    }
    assert_eq!(codes.len(), 8);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_duplicate_email_is_conflict_case_insensitive() {
    let app = TestApp::with_database().await;
    let email = unique_email("dup");
    app.signup_parent(&email).await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": email.to_uppercase(),
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(response.body["message"], "Email already registered");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_kid_signup_links_to_parent() {
    let app = TestApp::with_database().await;
    let (parent_token, code) = app.signup_parent(&unique_email("parent")).await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": unique_email("kid"),
                "password": "secret1",
                "role": "kid",
                // Codes are matched case-insensitively.
                "familyCode": code.to_lowercase(),
                "name": "Alex",
                "age": 10,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["role"], "kid");
    assert_eq!(data["name"], "Alex");
    assert_eq!(data["age"], 10);
    assert!(data["parentId"].is_string());
    assert!(data["kidId"].is_string());

    // The parent's /me now lists the new kid profile id.
    let me = app
        .request("GET", "/api/auth/me", None, Some(&parent_token))
        .await;
    assert_eq!(me.status, StatusCode::OK);
    let kids = me.body["data"]["kids"].as_array().unwrap();
    assert_eq!(kids.len(), 1);
    assert_eq!(kids[0], data["kidId"]);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_kid_signup_unknown_code_leaves_no_account() {
    let app = TestApp::with_database().await;
    let email = unique_email("orphan");

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": email,
                "password": "secret1",
                "role": "kid",
                "familyCode": "ZZZZZ0",
                "name": "Alex",
                "age": 10,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid family code");

    // The failed signup must not have created the account.
    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_uniform_rejection() {
    let app = TestApp::with_database().await;
    let email = unique_email("login");
    app.signup_parent(&email).await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": "wrong-1" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": unique_email("nobody"),
                "password": "secret1",
            })),
            None,
        )
        .await;

    // Same status and message whether the email exists or not.
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], "Invalid email or password");
    assert_eq!(unknown_email.body["message"], "Invalid email or password");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_returns_minimal_profile() {
    let app = TestApp::with_database().await;
    let email = unique_email("minimal");
    app.signup_parent(&email).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].is_string());
    let data = &response.body["data"];
    assert_eq!(data["email"], email);
    assert_eq!(data["role"], "parent");
    // Login deliberately omits the family code and kid listing.
    assert!(data.get("familyCode").is_none());
    assert!(data.get("kids").is_none());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_me_kid_shape() {
    let app = TestApp::with_database().await;
    let (_, code) = app.signup_parent(&unique_email("parent")).await;

    let signup = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": unique_email("kid"),
                "password": "secret1",
                "role": "kid",
                "familyCode": code,
                "name": "Alex",
                "age": 10,
            })),
            None,
        )
        .await;
    let kid_token = signup.body["token"].as_str().unwrap();

    let me = app
        .request("GET", "/api/auth/me", None, Some(kid_token))
        .await;

    assert_eq!(me.status, StatusCode::OK);
    let data = &me.body["data"];
    assert_eq!(data["role"], "kid");
    assert_eq!(data["name"], "Alex");
    assert!(data["parentId"].is_string());
    // Signup-only fields are absent from /me.
    assert!(data.get("kidId").is_none());
    assert!(data.get("age").is_none());
}
