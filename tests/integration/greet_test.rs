//! Integration tests for the greeting interaction state over real HTTP.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;

use greeter_client::{AppContext, GreetError};

fn context(base_url: &str) -> AppContext {
    AppContext::new(helpers::config_for(base_url)).expect("Failed to build context")
}

#[tokio::test]
async fn test_success_sets_reply_message() {
    let server = helpers::respond_with(StatusCode::OK, r#"{"message":"hi"}"#).await;
    let ctx = context(&server.base_url);
    ctx.greet.set_name("kratos");

    ctx.greet.say_hello().await.expect("should not be rejected");

    assert_eq!(ctx.greet.message(), "hi");
    assert!(!ctx.greet.processing());

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/helloworld/kratos");
}

#[tokio::test]
async fn test_kratos_error_is_rendered_into_message() {
    let server = helpers::respond_with(
        StatusCode::NOT_FOUND,
        r#"{"code":5,"reason":"NOT_FOUND","message":"missing","metadata":{}}"#,
    )
    .await;
    let ctx = context(&server.base_url);

    ctx.greet.say_hello().await.expect("should not be rejected");

    assert_eq!(ctx.greet.message(), "kratos error: NOT_FOUND missing");
    assert!(!ctx.greet.processing());
}

#[tokio::test]
async fn test_network_failure_is_unknown_error() {
    let base_url = helpers::refused_base_url().await;
    let ctx = context(&base_url);

    ctx.greet.say_hello().await.expect("should not be rejected");

    assert!(
        ctx.greet.message().starts_with("unknown error: "),
        "got {:?}",
        ctx.greet.message()
    );
    assert!(!ctx.greet.processing());
}

#[tokio::test]
async fn test_malformed_error_body_is_unknown_error() {
    let server = helpers::respond_with(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").await;
    let ctx = context(&server.base_url);

    ctx.greet.say_hello().await.expect("should not be rejected");

    assert!(ctx.greet.message().starts_with("unknown error: "));
    assert!(!ctx.greet.processing());
}

#[tokio::test]
async fn test_name_is_not_mutated() {
    let server = helpers::respond_with(StatusCode::OK, r#"{"message":"Hello a b"}"#).await;
    let ctx = context(&server.base_url);
    ctx.greet.set_name("a b");

    ctx.greet.say_hello().await.expect("should not be rejected");

    assert_eq!(ctx.greet.name(), "a b");
    assert_eq!(server.requests()[0].path, "/helloworld/a%20b");
}

#[tokio::test]
async fn test_empty_name_is_sent() {
    let server = helpers::respond_with(StatusCode::OK, r#"{"message":"Hello "}"#).await;
    let ctx = context(&server.base_url);

    ctx.greet.say_hello().await.expect("should not be rejected");

    assert_eq!(ctx.greet.message(), "Hello ");
    assert_eq!(server.requests()[0].path, "/helloworld/");
}

#[tokio::test]
async fn test_second_call_while_pending_is_rejected() {
    let server =
        helpers::respond_when_released(StatusCode::OK, r#"{"message":"first done"}"#).await;
    let ctx = context(&server.base_url);
    let greet = Arc::clone(&ctx.greet);

    let first = tokio::spawn(async move { greet.say_hello().await });

    server.arrived.notified().await;
    assert!(ctx.greet.processing());

    let second = ctx.greet.say_hello().await;
    assert_eq!(second, Err(GreetError::DuplicateCall));
    assert_eq!(ctx.greet.message(), "");
    assert_eq!(server.requests().len(), 1);

    server.release();
    first
        .await
        .expect("task panicked")
        .expect("first call should not be rejected");

    assert_eq!(ctx.greet.message(), "first done");
    assert!(!ctx.greet.processing());
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_state_is_reusable_after_error() {
    let server = helpers::respond_with(
        StatusCode::UNAUTHORIZED,
        r#"{"code":401,"reason":"UNAUTHORIZED","message":"who are you","metadata":{}}"#,
    )
    .await;
    let ctx = context(&server.base_url);

    ctx.greet.say_hello().await.expect("first call");
    ctx.greet.say_hello().await.expect("second call");

    assert_eq!(ctx.greet.message(), "kratos error: UNAUTHORIZED who are you");
    assert_eq!(server.requests().len(), 2);
}
