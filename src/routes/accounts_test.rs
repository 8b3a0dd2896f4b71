use super::*;
use crate::state::test_helpers::{seed_account, test_app_state};

fn body(username: &str, password: &str) -> Json<Account> {
    Json(Account { account_id: 0, username: username.into(), password: password.into() })
}

#[tokio::test]
async fn register_creates_account() {
    let state = test_app_state();

    let Json(created) = register(State(state), body("alice", "pass1234"))
        .await
        .expect("register should succeed");

    assert_eq!(created.account_id, 1);
    assert_eq!(created.username, "alice");
}

#[tokio::test]
async fn register_duplicate_username_is_bad_request() {
    let state = test_app_state();
    seed_account(&state, "alice", "pass1234").await;

    let result = register(State(state), body("alice", "other-pass")).await;
    assert_eq!(result.unwrap_err(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_short_password_is_bad_request() {
    let state = test_app_state();

    let result = register(State(state), body("alice", "abc")).await;
    assert_eq!(result.unwrap_err(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_matching_credentials_succeeds() {
    let state = test_app_state();
    let seeded = seed_account(&state, "alice", "pass1234").await;

    let Json(logged_in) = login(State(state), body("alice", "pass1234"))
        .await
        .expect("login should succeed");

    assert_eq!(logged_in, seeded);
}

#[tokio::test]
async fn login_wrong_password_is_unauthorized() {
    let state = test_app_state();
    seed_account(&state, "alice", "pass1234").await;

    let result = login(State(state), body("alice", "wrong")).await;
    assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_unknown_username_is_unauthorized() {
    let state = test_app_state();

    let result = login(State(state), body("nobody", "pass1234")).await;
    assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
}
