mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{
    body_json, get_request, json_request, login, login_request, seed_user, setup_test_app,
    test_state,
};
use keygate_auth::create_access_token;
use keygate_config::JwtConfig;
use keygate_core::Role;

#[tokio::test]
async fn test_login_success_returns_bearer_pair() {
    let state = test_state();
    seed_user(&state, "alice", "wonderland1", Role::User, false);
    let app = setup_test_app(&state);

    let response = app
        .oneshot(login_request("alice", "wonderland1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["access_token"].is_string());
    assert!(body["refresh_token"].is_string());
    assert_eq!(body["token_type"], "bearer");
}

#[tokio::test]
async fn test_login_failures_do_not_enumerate_usernames() {
    let state = test_state();
    seed_user(&state, "alice", "wonderland1", Role::User, false);
    let app = setup_test_app(&state);

    let wrong_password = app
        .clone()
        .oneshot(login_request("alice", "nope"))
        .await
        .unwrap();
    let unknown_user = app
        .clone()
        .oneshot(login_request("ghost", "nope"))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_user.status(), StatusCode::BAD_REQUEST);

    // Identical bodies: the response must not confirm that "alice" exists.
    assert_eq!(
        body_json(wrong_password).await,
        body_json(unknown_user).await
    );

    // Failed logins leave the directory untouched.
    assert_eq!(state.users.list_usernames(), vec!["alice"]);
}

#[tokio::test]
async fn test_login_disabled_account_forbidden() {
    let state = test_state();
    seed_user(&state, "alice", "wonderland1", Role::User, true);
    let app = setup_test_app(&state);

    let response = app
        .oneshot(login_request("alice", "wonderland1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_users_me_roundtrip() {
    let state = test_state();
    seed_user(&state, "alice", "wonderland1", Role::User, false);
    let app = setup_test_app(&state);

    let pair = login(&app, "alice", "wonderland1").await;
    let token = pair["access_token"].as_str().unwrap();

    let response = app
        .oneshot(get_request("/users/me", Some(token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["role"], "user");
    assert_eq!(body["disabled"], false);
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_users_me_without_token_unauthorized() {
    let state = test_state();
    let app = setup_test_app(&state);

    let missing = app
        .clone()
        .oneshot(get_request("/users/me", None))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let garbage = app
        .oneshot(get_request("/users/me", Some("not-a-token")))
        .await
        .unwrap();
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    let state = test_state();
    seed_user(&state, "alice", "wonderland1", Role::User, false);
    let app = setup_test_app(&state);

    let first = login(&app, "alice", "wonderland1").await;
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/refresh",
            None,
            json!({ "refresh_token": first["refresh_token"] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let second = body_json(response).await;
    // Rotation: a fresh refresh token on every exchange.
    assert_ne!(second["refresh_token"], first["refresh_token"]);
    assert_ne!(second["access_token"], first["access_token"]);

    // The rotated access token authenticates.
    let me = app
        .oneshot(get_request(
            "/users/me",
            Some(second["access_token"].as_str().unwrap()),
        ))
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_rejects_access_tokens() {
    let state = test_state();
    seed_user(&state, "alice", "wonderland1", Role::User, false);
    let app = setup_test_app(&state);

    let pair = login(&app, "alice", "wonderland1").await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/refresh",
            None,
            json!({ "refresh_token": pair["access_token"] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_after_disable_forbidden() {
    let state = test_state();
    seed_user(&state, "alice", "wonderland1", Role::User, false);
    let app = setup_test_app(&state);

    let pair = login(&app, "alice", "wonderland1").await;
    state.users.set_disabled("alice", true).unwrap();

    let response = app
        .oneshot(json_request(
            "POST",
            "/refresh",
            None,
            json!({ "refresh_token": pair["refresh_token"] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_disable_between_issuance_and_use() {
    let state = test_state();
    seed_user(&state, "alice", "wonderland1", Role::User, false);
    let app = setup_test_app(&state);

    let pair = login(&app, "alice", "wonderland1").await;
    let token = pair["access_token"].as_str().unwrap();

    // Token is valid and unexpired, but the live record wins.
    state.users.set_disabled("alice", true).unwrap();
    let response = app
        .oneshot(get_request("/users/me", Some(token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_access_token_then_refresh() {
    let state = test_state();
    seed_user(&state, "alice", "wonderland1", Role::User, false);
    let app = setup_test_app(&state);

    let pair = login(&app, "alice", "wonderland1").await;

    // Simulate the clock passing the access expiry: sign a token with the
    // same secret whose exp is already in the past.
    let expired_config = JwtConfig {
        access_token_expiry: -7200,
        ..state.jwt_config.clone()
    };
    let stale = create_access_token("alice", Role::User, &expired_config).unwrap();

    let response = app
        .clone()
        .oneshot(get_request("/users/me", Some(&stale)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The still-valid refresh token recovers the session.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/refresh",
            None,
            json!({ "refresh_token": pair["refresh_token"] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fresh = body_json(response).await;
    let me = app
        .oneshot(get_request(
            "/users/me",
            Some(fresh["access_token"].as_str().unwrap()),
        ))
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_empty_token_unprocessable() {
    let state = test_state();
    let app = setup_test_app(&state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/refresh",
            None,
            json!({ "refresh_token": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
