//! 客户端配置：从环境变量读取端点、凭据与调优参数。
//!
//! Client configuration.
//!
//! All knobs are environment-sourced (see [`ClientConfig::from_env`]) and can
//! be overridden per field on [`AiToolsClientBuilder`](crate::AiToolsClientBuilder).

use crate::cache::{CacheTtl, KeyStrategy};
use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_SITE_URL: &str = "https://your-website.com";
pub const DEFAULT_SITE_NAME: &str = "Personal AI Tools";

/// The logical operations exposed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Summary,
    Recommendation,
    Search,
    Intent,
    Comparison,
    Analysis,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Summary,
        Operation::Recommendation,
        Operation::Search,
        Operation::Intent,
        Operation::Comparison,
        Operation::Analysis,
    ];

    /// Cache-key prefix and log label.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Summary => "summary",
            Operation::Recommendation => "recommendation",
            Operation::Search => "search",
            Operation::Intent => "intent",
            Operation::Comparison => "compare",
            Operation::Analysis => "analysis",
        }
    }
}

/// Per-operation request shape and cache lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationProfile {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub ttl: Duration,
}

impl OperationProfile {
    pub fn for_operation(op: Operation) -> Self {
        let (model, max_tokens, temperature, ttl) = match op {
            Operation::Summary => ("deepseek-ai/deepseek-v3.2", 500, 0.7, CacheTtl::LONG),
            Operation::Recommendation => ("openai/gpt-3.5-turbo", 500, 0.7, CacheTtl::MEDIUM),
            Operation::Search => ("openai/gpt-3.5-turbo", 300, 0.3, CacheTtl::SHORT),
            Operation::Intent => ("deepseek-ai/deepseek-v3.2", 200, 0.3, CacheTtl::MEDIUM),
            Operation::Comparison => ("openai/gpt-3.5-turbo", 500, 0.7, CacheTtl::MEDIUM),
            Operation::Analysis => ("openai/gpt-3.5-turbo", 500, 0.7, CacheTtl::LONG),
        };
        Self {
            model: model.to_string(),
            max_tokens,
            temperature,
            ttl,
        }
    }
}

/// Profiles for every [`Operation`].
#[derive(Debug, Clone, PartialEq)]
pub struct OperationProfiles {
    pub summary: OperationProfile,
    pub recommendation: OperationProfile,
    pub search: OperationProfile,
    pub intent: OperationProfile,
    pub comparison: OperationProfile,
    pub analysis: OperationProfile,
}

impl Default for OperationProfiles {
    fn default() -> Self {
        Self {
            summary: OperationProfile::for_operation(Operation::Summary),
            recommendation: OperationProfile::for_operation(Operation::Recommendation),
            search: OperationProfile::for_operation(Operation::Search),
            intent: OperationProfile::for_operation(Operation::Intent),
            comparison: OperationProfile::for_operation(Operation::Comparison),
            analysis: OperationProfile::for_operation(Operation::Analysis),
        }
    }
}

impl OperationProfiles {
    pub fn get(&self, op: Operation) -> &OperationProfile {
        match op {
            Operation::Summary => &self.summary,
            Operation::Recommendation => &self.recommendation,
            Operation::Search => &self.search,
            Operation::Intent => &self.intent,
            Operation::Comparison => &self.comparison,
            Operation::Analysis => &self.analysis,
        }
    }

    pub fn get_mut(&mut self, op: Operation) -> &mut OperationProfile {
        match op {
            Operation::Summary => &mut self.summary,
            Operation::Recommendation => &mut self.recommendation,
            Operation::Search => &mut self.search,
            Operation::Intent => &mut self.intent,
            Operation::Comparison => &mut self.comparison,
            Operation::Analysis => &mut self.analysis,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Sent as `HTTP-Referer`.
    pub site_url: String,
    /// Sent as `X-Title`.
    pub site_name: String,
    pub timeout: Duration,
    pub min_request_interval: Duration,
    /// Upper bound on tool summaries serialised into one prompt.
    pub max_prompt_tools: usize,
    /// Upper bound on ids accepted from a search completion.
    pub max_search_ids: usize,
    /// Number of tools the recommendation fallback picks.
    pub fallback_recommendations: usize,
    /// Cap on ids the search fallback returns.
    pub fallback_search_limit: usize,
    pub key_strategy: KeyStrategy,
    pub profiles: OperationProfiles,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            site_url: DEFAULT_SITE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            timeout: Duration::from_secs(30),
            min_request_interval: Duration::from_millis(1000),
            max_prompt_tools: 50,
            max_search_ids: 20,
            fallback_recommendations: 3,
            fallback_search_limit: 5,
            key_strategy: KeyStrategy::default(),
            profiles: OperationProfiles::default(),
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env_string(name).and_then(|s| s.parse::<T>().ok())
}

impl ClientConfig {
    /// Defaults overlaid with whatever the environment provides:
    ///
    /// - `OPENROUTER_BASE_URL`, `OPENROUTER_API_KEY`
    /// - `SITE_URL`, `SITE_NAME`
    /// - `AITOOLS_HTTP_TIMEOUT_SECS` (default 30)
    /// - `AITOOLS_MIN_REQUEST_INTERVAL_MS` (default 1000)
    /// - `AITOOLS_MAX_PROMPT_TOOLS` (default 50)
    ///
    /// Unparsable numeric values fall back to the default.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(v) = env_string("OPENROUTER_BASE_URL") {
            cfg.base_url = v;
        }
        cfg.api_key = env_string("OPENROUTER_API_KEY");
        if let Some(v) = env_string("SITE_URL") {
            cfg.site_url = v;
        }
        if let Some(v) = env_string("SITE_NAME") {
            cfg.site_name = v;
        }
        if let Some(secs) = env_parse::<u64>("AITOOLS_HTTP_TIMEOUT_SECS") {
            cfg.timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = env_parse::<u64>("AITOOLS_MIN_REQUEST_INTERVAL_MS") {
            cfg.min_request_interval = Duration::from_millis(ms);
        }
        if let Some(n) = env_parse::<usize>("AITOOLS_MAX_PROMPT_TOOLS") {
            cfg.max_prompt_tools = n.max(1);
        }
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                "invalid base url",
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(e.to_string())
                    .with_source("client_config"),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "base url must use http or https",
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(format!("scheme: {}", parsed.scheme()))
                    .with_source("client_config"),
            ));
        }
        if self.timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "timeout must be greater than zero",
                ErrorContext::new()
                    .with_field_path("config.timeout")
                    .with_source("client_config"),
            ));
        }
        Ok(())
    }

    /// `{base_url}/chat/completions`, tolerating a trailing slash on the base.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
