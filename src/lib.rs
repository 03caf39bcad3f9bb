//! # aitools-client
//!
//! AI 工具目录的接口访问层：带缓存、节流与降级兜底的聊天补全客户端。
//!
//! API access layer for an AI tool directory: a chat-completion client that
//! caches results, spaces out requests, and substitutes locally generated
//! content when the remote endpoint fails.
//!
//! ## Overview
//!
//! ```text
//! caller ─▶ AiToolsClient ─▶ cache hit? ──yes──▶ return
//!                               │ no
//!                               ▼
//!                        RequestThrottle::acquire
//!                               ▼
//!                        HttpTransport::complete
//!                       ok │            │ err
//!                          ▼            ▼
//!                  parse + cache   fallback + classified error
//! ```
//!
//! ## Key Features
//!
//! - **Operations**: profile summary, tool recommendations, search enhancement,
//!   intent analysis, tool comparison, single-tool analysis
//! - **Caching**: per-operation ttl, lazy expiry via [`cache`]
//! - **Throttling**: minimum spacing between dispatches via [`resilience`]
//! - **Fallbacks**: deterministic substitutes via [`fallback`]
//! - **Error classification**: [`error_code::classify`] with user-facing messages
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aitools_client::{AiToolsClientBuilder, ToolDescriptor};
//!
//! #[tokio::main]
//! async fn main() -> aitools_client::Result<()> {
//!     let client = AiToolsClientBuilder::new()
//!         .api_key("sk-or-...")
//!         .build()?;
//!
//!     let tools = vec![
//!         ToolDescriptor::new(2, "MidJourney").with_tags(["AI", "图像生成"]),
//!     ];
//!
//!     match client.enhance_search("image generation", &tools).await {
//!         Ok(ids) => println!("ranked: {:?}", ids),
//!         Err(degraded) => {
//!             eprintln!("{}", degraded.user_message());
//!             println!("fallback: {:?}", degraded.fallback);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, outcome type, id parser |
//! | [`cache`] | Response cache and key generation |
//! | [`resilience`] | Request throttle |
//! | [`fallback`] | Local substitutes and document templates |
//! | [`transport`] | HTTP transport |
//! | [`config`] | Environment-sourced configuration |
//! | [`types`] | Wire and input types |
//! | [`error_code`] | Error classification |

pub mod cache;
pub mod client;
pub mod config;
pub mod error_code;
pub mod fallback;
pub mod resilience;
pub mod transport;
pub mod types;

pub use client::{AiToolsClient, AiToolsClientBuilder, ClientStats, Degraded, Outcome};
pub use config::{ClientConfig, Operation, OperationProfile};
pub use error_code::{classify, user_message_for, ApiErrorKind};
pub use types::{Message, MessageRole, ToolDescriptor};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
