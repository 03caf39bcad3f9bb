use crate::cache::{CacheBackend, CacheConfig, CacheKeyGenerator, CacheManager, KeyStrategy, MemoryCache};
use crate::client::core::AiToolsClient;
use crate::config::{ClientConfig, Operation, OperationProfile};
use crate::fallback::{ChineseTemplates, Glossary, Templates};
use crate::resilience::{RequestThrottle, ThrottleConfig};
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`AiToolsClient`].
///
/// Starts from [`ClientConfig::from_env`]; every setter overrides one field.
pub struct AiToolsClientBuilder {
    config: ClientConfig,
    cache_config: CacheConfig,
    cache_backend: Option<Box<dyn CacheBackend>>,
    templates: Arc<dyn Templates>,
    glossary: Glossary,
}

impl AiToolsClientBuilder {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::from_env())
    }

    /// Start from an explicit config, ignoring the environment.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            cache_config: CacheConfig::default(),
            cache_backend: None,
            templates: Arc::new(ChineseTemplates),
            glossary: Glossary::default(),
        }
    }

    /// Override the endpoint base URL (mock servers, self-hosted gateways).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn site(mut self, url: impl Into<String>, name: impl Into<String>) -> Self {
        self.config.site_url = url.into();
        self.config.site_name = name.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Minimum spacing between dispatches. `Duration::ZERO` disables throttling.
    pub fn min_request_interval(mut self, interval: Duration) -> Self {
        self.config.min_request_interval = interval;
        self
    }

    pub fn max_prompt_tools(mut self, n: usize) -> Self {
        self.config.max_prompt_tools = n.max(1);
        self
    }

    pub fn max_search_ids(mut self, n: usize) -> Self {
        self.config.max_search_ids = n;
        self
    }

    pub fn fallback_limits(mut self, recommendations: usize, search: usize) -> Self {
        self.config.fallback_recommendations = recommendations;
        self.config.fallback_search_limit = search;
        self
    }

    pub fn key_strategy(mut self, strategy: KeyStrategy) -> Self {
        self.config.key_strategy = strategy;
        self
    }

    pub fn profile(mut self, op: Operation, profile: OperationProfile) -> Self {
        *self.config.profiles.get_mut(op) = profile;
        self
    }

    /// Use `model` for every operation.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        for op in Operation::ALL {
            self.config.profiles.get_mut(op).model = model.clone();
        }
        self
    }

    pub fn templates(mut self, templates: Arc<dyn Templates>) -> Self {
        self.templates = templates;
        self
    }

    pub fn glossary(mut self, glossary: Glossary) -> Self {
        self.glossary = glossary;
        self
    }

    pub fn cache_config(mut self, config: CacheConfig) -> Self {
        self.cache_config = config;
        self
    }

    pub fn cache_backend(mut self, backend: Box<dyn CacheBackend>) -> Self {
        self.cache_backend = Some(backend);
        self
    }

    pub fn build(self) -> Result<AiToolsClient> {
        self.config.validate()?;

        let transport = HttpTransport::new(&self.config)?;
        let backend = self
            .cache_backend
            .unwrap_or_else(|| Box::new(MemoryCache::new()));
        let cache = CacheManager::new(self.cache_config, backend);
        let keys = CacheKeyGenerator::new().with_strategy(self.config.key_strategy);
        let throttle = RequestThrottle::new(
            ThrottleConfig::new().with_min_interval(self.config.min_request_interval),
        );

        Ok(AiToolsClient {
            config: self.config,
            transport,
            cache,
            keys,
            throttle,
            templates: self.templates,
            glossary: self.glossary,
            dispatches: AtomicU64::new(0),
            fallbacks: AtomicU64::new(0),
        })
    }
}

impl Default for AiToolsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
