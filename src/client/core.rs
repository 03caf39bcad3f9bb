use crate::cache::{CacheKey, CacheKeyGenerator, CacheManager, CacheStats};
use crate::client::outcome::{Degraded, Outcome};
use crate::client::{parse, prompts};
use crate::config::{ClientConfig, Operation};
use crate::fallback::{self, Glossary, Templates};
use crate::resilience::{RequestThrottle, ThrottleSnapshot};
use crate::transport::HttpTransport;
use crate::types::{ChatCompletionRequest, Message, ToolDescriptor};
use crate::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Caching, throttled client for the directory's AI-assisted features.
///
/// Each instance owns its cache and throttle clock; share one instance (for
/// example behind an `Arc`) to share them.
pub struct AiToolsClient {
    pub(crate) config: ClientConfig,
    pub(crate) transport: HttpTransport,
    pub(crate) cache: CacheManager,
    pub(crate) keys: CacheKeyGenerator,
    pub(crate) throttle: RequestThrottle,
    pub(crate) templates: Arc<dyn Templates>,
    pub(crate) glossary: Glossary,
    pub(crate) dispatches: AtomicU64,
    pub(crate) fallbacks: AtomicU64,
}

/// Counters for observing client behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientStats {
    /// Requests that passed the throttle and were sent.
    pub dispatches: u64,
    /// Operations that returned a fallback.
    pub fallbacks: u64,
    pub cache: CacheStats,
}

impl AiToolsClient {
    /// Build a client from environment configuration.
    pub fn from_env() -> Result<Self> {
        crate::client::builder::AiToolsClientBuilder::new().build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn stats(&self) -> ClientStats {
        ClientStats {
            dispatches: self.dispatches.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
            cache: self.cache.stats(),
        }
    }

    pub async fn throttle_snapshot(&self) -> ThrottleSnapshot {
        self.throttle.snapshot().await
    }

    /// Drop every cached result. Not used on the normal call path.
    pub async fn clear_cache(&self) -> Result<()> {
        self.cache.clear().await
    }

    /// Professional summary of a personal profile.
    ///
    /// There is no local substitute for a summary, so failures are returned
    /// as-is.
    pub async fn generate_ai_summary(&self, profile: &str) -> Result<String> {
        let op = Operation::Summary;
        let key = self.keys.generate(op.name(), &[profile]);
        self.cached_completion(op, &key, || Ok(prompts::summary(profile)), Ok)
            .await
    }

    /// Markdown recommendations for the given browsing behaviour.
    pub async fn generate_tool_recommendations(
        &self,
        behavior: &str,
        tools: &[ToolDescriptor],
    ) -> Outcome<String> {
        let op = Operation::Recommendation;
        let ids = id_list(tools);
        let key = self.keys.generate(op.name(), &[behavior, &ids]);
        let bounded = self.bounded(tools);

        self.cached_completion(op, &key, || Ok(prompts::recommendation(behavior, bounded)), Ok)
            .await
            .map_err(|e| {
                let doc = fallback::recommendations(
                    tools,
                    self.config.fallback_recommendations,
                    &mut rand::thread_rng(),
                    self.templates.as_ref(),
                );
                self.degrade(op, e, doc)
            })
    }

    /// Ids of the tools most relevant to `query`, best first.
    ///
    /// Ids are scanned out of the completion text and kept only if they name
    /// a tool in `tools`.
    pub async fn enhance_search(&self, query: &str, tools: &[ToolDescriptor]) -> Outcome<Vec<u64>> {
        let op = Operation::Search;
        let ids = id_list(tools);
        let key = self.keys.generate(op.name(), &[query, &ids]);
        let bounded = self.bounded(tools);
        let max_ids = self.config.max_search_ids;

        self.cached_completion(
            op,
            &key,
            || prompts::search(query, bounded),
            |text| {
                let mut found = parse::extract_tool_ids(&text, max_ids);
                found.retain(|id| tools.iter().any(|t| t.id == *id));
                Ok(found)
            },
        )
        .await
        .map_err(|e| {
            let ids = fallback::search(
                query,
                tools,
                self.config.fallback_search_limit,
                &self.glossary,
            );
            self.degrade(op, e, ids)
        })
    }

    /// Free-text description of what the user is looking for. Supplementary
    /// to [`enhance_search`](Self::enhance_search), so failures surface
    /// without a substitute.
    pub async fn process_natural_language_query(&self, query: &str) -> Result<String> {
        let op = Operation::Intent;
        let key = self.keys.generate(op.name(), &[query]);
        self.cached_completion(op, &key, || Ok(prompts::intent(query)), Ok)
            .await
    }

    /// Markdown comparison of the selected tools.
    pub async fn compare_tools(&self, tools: &[ToolDescriptor]) -> Outcome<String> {
        let op = Operation::Comparison;
        let ids = format!("[{}]", id_list(tools));
        let key = self.keys.generate(op.name(), &[&ids]);
        let bounded = self.bounded(tools);

        self.cached_completion(op, &key, || Ok(prompts::comparison(bounded)), Ok)
            .await
            .map_err(|e| {
                let doc = fallback::comparison(tools, self.templates.as_ref());
                self.degrade(op, e, doc)
            })
    }

    /// Markdown analysis report for one tool.
    pub async fn generate_tool_analysis(&self, tool: &ToolDescriptor) -> Outcome<String> {
        let op = Operation::Analysis;
        let id = tool.id.to_string();
        let key = self.keys.generate(op.name(), &[&id]);

        self.cached_completion(op, &key, || Ok(prompts::analysis(tool)), Ok)
            .await
            .map_err(|e| {
                let doc = fallback::analysis(tool, self.templates.as_ref());
                self.degrade(op, e, doc)
            })
    }

    fn bounded<'a>(&self, tools: &'a [ToolDescriptor]) -> &'a [ToolDescriptor] {
        &tools[..tools.len().min(self.config.max_prompt_tools)]
    }

    fn degrade<T>(&self, op: Operation, error: Error, fallback: T) -> Degraded<T> {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
        warn!(
            operation = op.name(),
            error_kind = %error.kind(),
            error = %error,
            "remote completion failed, serving fallback"
        );
        Degraded { fallback, error }
    }

    /// Cache lookup → throttle → dispatch → parse → cache store.
    ///
    /// Nothing is cached on any error path.
    async fn cached_completion<T, B, P>(
        &self,
        op: Operation,
        key: &CacheKey,
        build_prompt: B,
        parse: P,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        B: FnOnce() -> Result<Vec<Message>>,
        P: FnOnce(String) -> Result<T>,
    {
        match self.cache.get::<T>(key).await {
            Ok(Some(hit)) => {
                debug!(operation = op.name(), cache_key = key.as_str(), "cache hit");
                return Ok(hit);
            }
            Ok(None) => debug!(operation = op.name(), cache_key = key.as_str(), "cache miss"),
            Err(e) => warn!(operation = op.name(), error = %e, "cache lookup failed, treating as miss"),
        }

        let profile = self.config.profiles.get(op);
        let request = ChatCompletionRequest {
            model: profile.model.clone(),
            messages: build_prompt()?,
            max_tokens: profile.max_tokens,
            temperature: profile.temperature,
        };

        self.throttle.acquire().await;
        self.dispatches.fetch_add(1, Ordering::Relaxed);

        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();
        let text = self.transport.complete(&request, &request_id).await?;
        let value = parse(text)?;

        info!(
            operation = op.name(),
            model = request.model.as_str(),
            request_id = request_id.as_str(),
            duration_ms = start.elapsed().as_millis() as u64,
            "completion succeeded"
        );

        if let Err(e) = self.cache.set_with_ttl(key, &value, profile.ttl).await {
            warn!(operation = op.name(), error = %e, "failed to cache completion");
        }
        Ok(value)
    }
}

fn id_list(tools: &[ToolDescriptor]) -> String {
    tools
        .iter()
        .map(|t| t.id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
