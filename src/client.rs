//! Completion client for the AI tool directory.
//!
//! Keep the public surface small: one client, one builder, one outcome type.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod outcome;
pub mod parse;
mod prompts;

pub use builder::AiToolsClientBuilder;
pub use core::{AiToolsClient, ClientStats};
pub use outcome::{value_or_fallback, Degraded, Outcome};
