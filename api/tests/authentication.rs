mod common;

use axum::http::StatusCode;
use common::{LarderContext, empty_db, token_for};
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(LarderContext)]
#[tokio::test]
async fn me_returns_the_token_identity(ctx: &mut LarderContext) {
    let server = ctx.server(empty_db());

    let response = server
        .get("/me")
        .authorization_bearer(token_for("user-42", Some("cook@example.com")))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["data"],
        json!({ "user_id": "user-42", "email": "cook@example.com" })
    );
}

#[test_context(LarderContext)]
#[tokio::test]
async fn me_without_token_is_unauthorized(ctx: &mut LarderContext) {
    let server = ctx.server(empty_db());

    let response = server.get("/me").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_UNAUTHORIZED");
    assert_eq!(body["message"], "Token not found");
    assert_eq!(body["status"], 401);
}

#[test_context(LarderContext)]
#[tokio::test]
async fn token_signed_with_another_secret_is_rejected(ctx: &mut LarderContext) {
    let claims = json!({ "sub": "user-42", "exp": chrono::Utc::now().timestamp() + 3600 });
    let forged = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(b"someone-else"),
    )
    .unwrap();
    let server = ctx.server(empty_db());

    let response = server.get("/me").authorization_bearer(forged).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "Invalid token");
}

#[test_context(LarderContext)]
#[tokio::test]
async fn root_path_prefixes_every_route(ctx: &mut LarderContext) {
    let args = ctx.args(&["--root-path", "/api"]);
    let server = ctx.server_with_args(
        empty_db(),
        args,
    );

    server
        .get("/api/me")
        .authorization_bearer(token_for("user-42", None))
        .await
        .assert_status_ok();
    server
        .get("/me")
        .authorization_bearer(token_for("user-42", None))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
