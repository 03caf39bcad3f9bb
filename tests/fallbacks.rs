//! Degraded outcomes: every operation with a local substitute returns it
//! together with a classified error when the endpoint fails.

mod integration;

use aitools_client::fallback::EnglishTemplates;
use aitools_client::{ApiErrorKind, AiToolsClientBuilder, ClientConfig, Error};
use integration::mock_server::{directory, tool, MockServerFixture};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

const UNAVAILABLE: &str = r#"{"error":{"message":"upstream unavailable"}}"#;

#[tokio::test]
async fn test_recommendations_fall_back_to_catalogue_tools() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(503, UNAVAILABLE).await;
    let client = fixture.client();
    let tools = directory();

    let degraded = client
        .generate_tool_recommendations("经常浏览设计类工具", &tools)
        .await
        .unwrap_err();

    assert_eq!(degraded.kind(), ApiErrorKind::ServerError { status: 503 });
    assert!(degraded.fallback.starts_with("# AI工具推荐"));
    let named = tools
        .iter()
        .filter(|t| degraded.fallback.contains(&format!(". {}\n", t.name)))
        .count();
    assert_eq!(named, 3);
    assert_eq!(client.stats().fallbacks, 1);
}

#[tokio::test]
async fn test_search_falls_back_to_local_matching() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(503, UNAVAILABLE).await;
    let client = fixture.client();

    let degraded = client
        .enhance_search("image generation", &directory())
        .await
        .unwrap_err();

    assert_eq!(degraded.fallback, vec![2, 6]);
    assert!(degraded.kind().retryable());
}

#[tokio::test]
async fn test_search_fallback_is_limited() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(503, UNAVAILABLE).await;
    let client = fixture.builder().fallback_limits(3, 2).build().unwrap();

    let degraded = client.enhance_search("AI", &directory()).await.unwrap_err();
    assert_eq!(degraded.fallback, vec![1, 2]);
}

#[tokio::test]
async fn test_comparison_fallback_covers_every_selected_tool() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(503, UNAVAILABLE).await;
    let client = fixture.client();
    let tools = directory();
    let selected = vec![tool(&tools, 3), tool(&tools, 8), tool(&tools, 1)];

    let degraded = client.compare_tools(&selected).await.unwrap_err();
    for t in &selected {
        assert!(degraded.fallback.contains(&format!("## {}", t.name)));
    }
    assert!(degraded.fallback.contains("## 总结"));
}

#[tokio::test]
async fn test_analysis_fallback_uses_tool_fields() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(503, UNAVAILABLE).await;
    let client = fixture.client();
    let research = tool(&directory(), 9);

    let degraded = client.generate_tool_analysis(&research).await.unwrap_err();
    assert!(degraded.fallback.contains("ResearchRabbit"));
    assert!(degraded.fallback.contains(&research.description));
}

#[tokio::test]
async fn test_english_templates_replace_document_wording() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(503, UNAVAILABLE).await;
    let client = fixture
        .builder()
        .templates(Arc::new(EnglishTemplates))
        .build()
        .unwrap();

    let degraded = client
        .generate_tool_analysis(&tool(&directory(), 2))
        .await
        .unwrap_err();
    assert!(degraded.fallback.contains("MidJourney"));
    assert!(!degraded.fallback.contains("功能特点"));
}

#[tokio::test]
async fn test_summary_and_intent_have_no_substitute() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(503, UNAVAILABLE).await;
    let client = fixture.client();

    let err = client.generate_ai_summary("profile").await.unwrap_err();
    assert!(matches!(err, Error::Remote { status: 503, .. }));
    let err = client
        .process_natural_language_query("找写作工具")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::ServerError { status: 503 });
    assert_eq!(client.stats().fallbacks, 0);
}

#[tokio::test]
async fn test_rate_limit_message_differs_from_server_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(429, r#"{"error":"slow down"}"#).await;
    let client = fixture.client();
    let limited = client
        .enhance_search("写作", &directory())
        .await
        .unwrap_err();

    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(500, UNAVAILABLE).await;
    let client = fixture.client();
    let failed = client
        .enhance_search("写作", &directory())
        .await
        .unwrap_err();

    assert_eq!(limited.kind(), ApiErrorKind::RateLimited);
    assert_eq!(failed.kind(), ApiErrorKind::ServerError { status: 500 });
    assert_ne!(limited.user_message(), failed.user_message());
    // Both still carry the local result.
    assert_eq!(limited.fallback, failed.fallback);
}

#[tokio::test]
async fn test_unauthorized_is_classified() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(401, r#"{"error":"bad key"}"#).await;
    let client = fixture.client();

    let degraded = client
        .compare_tools(&directory()[..2])
        .await
        .unwrap_err();
    assert_eq!(degraded.kind(), ApiErrorKind::Unauthorized);
    assert!(!degraded.kind().retryable());
}

#[tokio::test]
async fn test_malformed_success_body_degrades() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", integration::mock_server::COMPLETIONS_PATH)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let client = fixture.client();

    let degraded = client
        .generate_tool_analysis(&tool(&directory(), 4))
        .await
        .unwrap_err();
    assert!(matches!(degraded.error, Error::MalformedResponse { .. }));
    assert_eq!(degraded.kind(), ApiErrorKind::RequestError);
    assert!(degraded.fallback.contains("Notion AI"));

    // The banner names the cause instead of a bare "request error".
    let message = degraded.user_message();
    assert!(message.starts_with("请求错误："));
    assert!(message.contains(&degraded.error.to_string()));
    assert_ne!(message, ApiErrorKind::RequestError.user_message());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let client = AiToolsClientBuilder::with_config(ClientConfig::default())
        .base_url("http://127.0.0.1:9")
        .api_key("test-key")
        .timeout(Duration::from_secs(2))
        .min_request_interval(Duration::ZERO)
        .build()
        .unwrap();

    let degraded = client
        .enhance_search("image generation", &directory())
        .await
        .unwrap_err();
    assert_eq!(degraded.kind(), ApiErrorKind::NetworkError);
    assert_eq!(degraded.fallback, vec![2, 6]);
}

#[tokio::test]
async fn test_slow_endpoint_times_out_as_network_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", integration::mock_server::COMPLETIONS_PATH)
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_millis(1500));
            w.write_all(integration::mock_server::completion_body("late").as_bytes())
        })
        .create_async()
        .await;
    let client = fixture
        .builder()
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();

    let degraded = client
        .generate_tool_analysis(&tool(&directory(), 1))
        .await
        .unwrap_err();
    assert_eq!(degraded.kind(), ApiErrorKind::NetworkError);
}
