use crate::error_code::ApiErrorKind;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for configuration and validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "client_config", "cli")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the completion client.
///
/// Every failure on the remote path ends up here; [`Error::kind`] collapses it
/// into the caller-facing [`ApiErrorKind`] taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Remote error: HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Malformed completion response: {message}")]
    MalformedResponse { message: String },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedResponse {
            message: msg.into(),
        }
    }

    /// Classify this error for presentation.
    pub fn kind(&self) -> ApiErrorKind {
        crate::error_code::classify(self)
    }

    /// Message for the UI banner; see [`user_message_for`](crate::error_code::user_message_for).
    pub fn user_message(&self) -> String {
        crate::error_code::user_message_for(self)
    }

    /// HTTP status of the remote response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
