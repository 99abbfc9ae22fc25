use crate::llm::{
    LLM, LLMError, Messages,
    proxy::{Proxy, ProxyConfigBuilder},
};

use anyhow::Result;
use httpmock::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// RUST_LOG=debug cargo test llm::proxy::tests::test_invoke_sends_plain_text_json -- --nocapture --exact
#[tokio::test]
async fn test_invoke_sends_plain_text_json() -> Result<()> {
    init_logger();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/exec")
                .header("content-type", "text/plain;charset=utf-8")
                .body(r#"{"model":"gpt-4o-mini","messages":[{"role":"user","content":"Hello"}]}"#);
            then.status(200)
                .body(r#"{"choices":[{"message":{"role":"assistant","content":"Hi there"}}]}"#);
        })
        .await;

    let proxy = Proxy::new(ProxyConfigBuilder::new().with_url(&server.url("/exec")).build()?);
    let result = proxy.invoke("Hello").await?;

    mock.assert_async().await;
    assert_eq!(
        result.generation(),
        r#"{"choices":[{"message":{"role":"assistant","content":"Hi there"}}]}"#
    );
    assert!(result.tokens().is_none());
    Ok(())
}

#[tokio::test]
async fn test_generate_maps_roles() -> Result<()> {
    init_logger();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/exec").body(
                r#"{"model":"gpt-4o","messages":[{"role":"system","content":"Be terse."},{"role":"user","content":"Hello"},{"role":"assistant","content":"Hi"}]}"#,
            );
            then.status(200).body("ok");
        })
        .await;

    let proxy = Proxy::new(
        ProxyConfigBuilder::new()
            .with_url(&server.url("/exec"))
            .with_model("gpt-4o")
            .build()?,
    );
    let messages = Messages::builder()
        .add_system_message("Be terse.")
        .add_human_message("Hello")
        .add_ai_message("Hi")
        .build();
    let result = proxy.generate(&messages).await?;

    mock.assert_async().await;
    assert_eq!(result.generation(), "ok");
    Ok(())
}

// Apps Script answers doPost with a redirect to the rendered output.
#[tokio::test]
async fn test_invoke_follows_redirect() -> Result<()> {
    init_logger();
    let server = MockServer::start_async().await;
    let echo_url = server.url("/echo");
    let redirect = server
        .mock_async(|when, then| {
            when.method(POST).path("/exec");
            then.status(302)
                .header("location", echo_url.as_str());
        })
        .await;
    let echo = server
        .mock_async(|when, then| {
            when.method(GET).path("/echo");
            then.status(200).body("relayed");
        })
        .await;

    let proxy = Proxy::new(ProxyConfigBuilder::new().with_url(&server.url("/exec")).build()?);
    let result = proxy.invoke("Hello").await?;

    redirect.assert_async().await;
    echo.assert_async().await;
    assert_eq!(result.generation(), "relayed");
    Ok(())
}

#[tokio::test]
async fn test_invoke_error_exposes_body() -> Result<()> {
    init_logger();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/exec");
            then.status(500).body("Script function not found: doPost");
        })
        .await;

    let proxy = Proxy::new(ProxyConfigBuilder::new().with_url(&server.url("/exec")).build()?);
    let err = proxy.invoke("Hello").await.unwrap_err();

    assert!(matches!(err, LLMError::HttpStatus { status: 500, .. }));
    assert_eq!(err.to_string(), "HTTP Error 500: Internal Server Error");
    assert_eq!(err.response_body(), Some("Script function not found: doPost"));
    Ok(())
}
