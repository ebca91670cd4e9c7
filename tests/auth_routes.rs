// tests/auth_routes.rs
mod support;

use axum::http::StatusCode;
use support::{
    TestApp, assert_error_response, assert_redirect, body_json, field_messages, token_for,
};

#[tokio::test]
async fn signup_creates_user() {
    let app = TestApp::new().await;

    let resp = app
        .post_form("/auth/signup/", None, &[("username", "Лев"), ("password", "secret-pass")])
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["username"], "Лев");
    assert!(json.get("password_hash").is_none());
    assert_eq!(app.count("users").await, 1);
}

#[tokio::test]
async fn duplicate_username_is_a_field_error() {
    let app = TestApp::new().await;
    app.seed_user("Лев").await;

    let resp = app
        .post_form("/auth/signup/", None, &[("username", "Лев"), ("password", "secret-pass")])
        .await;
    let json = assert_error_response(resp, StatusCode::BAD_REQUEST).await;
    assert_eq!(
        field_messages(&json, "username"),
        ["a user with that username already exists"]
    );
    assert_eq!(app.count("users").await, 1);
}

#[tokio::test]
async fn weak_passwords_are_rejected() {
    let app = TestApp::new().await;

    for password in ["short", "1234567890"] {
        let resp = app
            .post_form("/auth/signup/", None, &[("username", "Лев"), ("password", password)])
            .await;
        let json = assert_error_response(resp, StatusCode::BAD_REQUEST).await;
        assert!(!field_messages(&json, "password").is_empty(), "{password}");
    }
    assert_eq!(app.count("users").await, 0);
}

#[tokio::test]
async fn login_returns_token_and_next() {
    let app = TestApp::new().await;
    let id = app.seed_user("Лев").await;

    let resp = app
        .post_form(
            "/auth/login/?next=/notes/add",
            None,
            &[("username", "Лев"), ("password", "password123")],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["token"]["token"], token_for(id));
    assert_eq!(json["user"]["id"], id);
    assert_eq!(json["next"], "/notes/add");
}

#[tokio::test]
async fn login_ignores_foreign_next() {
    let app = TestApp::new().await;
    app.seed_user("Лев").await;

    let resp = app
        .post_form(
            "/auth/login/?next=//evil.example/",
            None,
            &[("username", "Лев"), ("password", "password123")],
        )
        .await;
    assert_eq!(body_json(resp).await["next"], "/");
}

#[tokio::test]
async fn wrong_credentials_are_unauthorized() {
    let app = TestApp::new().await;
    app.seed_user("Лев").await;

    for (username, password) in [("Лев", "wrong-password"), ("Никто", "password123")] {
        let resp = app
            .post_form("/auth/login/", None, &[("username", username), ("password", password)])
            .await;
        assert_error_response(resp, StatusCode::UNAUTHORIZED).await;
    }
}

#[tokio::test]
async fn login_form_echoes_next() {
    let app = TestApp::new().await;

    let json = body_json(app.get("/auth/login/?next=/news/1/", None).await).await;
    assert_eq!(json["next"], "/news/1/");
    assert_eq!(json["form"]["fields"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn profile_requires_login() {
    let app = TestApp::new().await;
    let id = app.seed_user("Лев").await;

    let resp = app.get("/auth/me/", None).await;
    assert_eq!(assert_redirect(&resp), "/auth/login/?next=/auth/me/");

    let json = body_json(app.get("/auth/me/", Some(&token_for(id))).await).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["username"], "Лев");
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let app = TestApp::new().await;

    let resp = app.get("/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");

    let resp = app.get("/openapi.json", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert!(json["paths"].get("/notes/{slug}/").is_some());
}
