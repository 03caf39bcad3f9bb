//! Mock chat-completion endpoint for integration tests

use aitools_client::{AiToolsClient, AiToolsClientBuilder, ClientConfig, ToolDescriptor};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::time::Duration;

pub const COMPLETIONS_PATH: &str = "/chat/completions";

/// Test fixture that owns a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Builder aimed at the mock server, ignoring the process environment.
    /// Throttling is off unless a test turns it on.
    pub fn builder(&self) -> AiToolsClientBuilder {
        AiToolsClientBuilder::with_config(ClientConfig::default())
            .base_url(&self.base_url)
            .api_key("test-key")
            .site("https://tools.example.com", "Tools Test")
            .timeout(Duration::from_secs(5))
            .min_request_interval(Duration::ZERO)
    }

    pub fn client(&self) -> AiToolsClient {
        self.builder().build().expect("client should build")
    }

    /// Successful completion whose first choice carries `content`.
    pub async fn mock_completion(&mut self, content: &str) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(content))
            .create_async()
            .await
    }

    /// [`mock_completion`](Self::mock_completion) that must be hit exactly `hits` times.
    pub async fn expect_completion(&mut self, content: &str, hits: usize) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(content))
            .expect(hits)
            .create_async()
            .await
    }

    /// Same as [`mock_completion`](Self::mock_completion) but only for requests
    /// whose body contains `needle`.
    pub async fn mock_completion_for(&mut self, needle: &str, content: &str) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .match_body(Matcher::Regex(regex_escape(needle)))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(content))
            .create_async()
            .await
    }

    pub async fn mock_error_response(&mut self, status: usize, error_body: &str) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_body)
            .create_async()
            .await
    }

    pub async fn expect_error_response(
        &mut self,
        status: usize,
        error_body: &str,
        hits: usize,
    ) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_body)
            .expect(hits)
            .create_async()
            .await
    }
}

pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "gen-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

fn regex_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// The directory catalogue used across tests.
pub fn directory() -> Vec<ToolDescriptor> {
    serde_json::from_str(include_str!("../../demos/tools.json")).expect("demo catalogue parses")
}

pub fn tool(tools: &[ToolDescriptor], id: u64) -> ToolDescriptor {
    tools
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .expect("tool id present in catalogue")
}
