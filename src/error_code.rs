//! 错误分类：将底层失败归类为面向用户的错误类别。
//!
//! Caller-facing error classification.
//!
//! Every failure surfaced by [`AiToolsClient`](crate::AiToolsClient) is mapped
//! by [`classify`] into one of six [`ApiErrorKind`]s. The kind carries a stable
//! code for logs and a user-facing message for the UI banner.
//!
//! | Kind           | Trigger                                   |
//! |----------------|-------------------------------------------|
//! | `RateLimited`  | HTTP 429                                  |
//! | `Unauthorized` | HTTP 401                                  |
//! | `Forbidden`    | HTTP 403                                  |
//! | `ServerError`  | any other non-2xx status                  |
//! | `NetworkError` | request sent, no response (incl. timeout) |
//! | `RequestError` | request could not be built or sent        |
//!
//! ## Example
//!
//! ```rust
//! use aitools_client::error_code::{classify, ApiErrorKind};
//! use aitools_client::Error;
//!
//! let err = Error::Remote { status: 429, message: String::new() };
//! assert_eq!(classify(&err), ApiErrorKind::RateLimited);
//! assert!(classify(&err).retryable());
//! ```

use crate::transport::TransportError;
use crate::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Remote responded 429
    RateLimited,
    /// Remote responded 401
    Unauthorized,
    /// Remote responded 403
    Forbidden,
    /// Any other non-2xx status
    ServerError { status: u16 },
    /// Request sent but no response received
    NetworkError,
    /// Request could not be constructed or the response was unusable
    RequestError,
}

impl ApiErrorKind {
    /// Maps an HTTP status code to its kind.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            429 => Self::RateLimited,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            _ => Self::ServerError { status },
        }
    }

    /// Stable snake_case name, suitable for log fields.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::RateLimited => "rate_limited",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::ServerError { .. } => "server_error",
            Self::NetworkError => "network_error",
            Self::RequestError => "request_error",
        }
    }

    /// Whether the same request might succeed if issued again later.
    #[inline]
    pub fn retryable(&self) -> bool {
        match self {
            Self::RateLimited | Self::NetworkError => true,
            Self::ServerError { status } => *status >= 500,
            _ => false,
        }
    }

    /// User-facing message (zh-CN, the directory's default locale).
    pub fn user_message(&self) -> String {
        match self {
            Self::RateLimited => "请求过于频繁，请稍后再试".to_string(),
            Self::Unauthorized => "API密钥无效，请检查配置".to_string(),
            Self::Forbidden => "无权访问此资源".to_string(),
            Self::ServerError { status } => format!("服务器错误：{}", status),
            Self::NetworkError => "网络错误，请检查网络连接".to_string(),
            Self::RequestError => "请求错误，请稍后再试".to_string(),
        }
    }

    /// User-facing message in English.
    pub fn user_message_en(&self) -> String {
        match self {
            Self::RateLimited => "Too many requests, please retry later".to_string(),
            Self::Unauthorized => "Invalid API key, please check your configuration".to_string(),
            Self::Forbidden => "Access to this resource is forbidden".to_string(),
            Self::ServerError { status } => format!("Server error: {}", status),
            Self::NetworkError => "Network error, please check your connection".to_string(),
            Self::RequestError => "Request error, please retry later".to_string(),
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServerError { status } => write!(f, "{}({})", self.code(), status),
            _ => write!(f, "{}", self.code()),
        }
    }
}

/// Classify any client error into an [`ApiErrorKind`].
pub fn classify(error: &Error) -> ApiErrorKind {
    match error {
        Error::Remote { status, .. } => ApiErrorKind::from_http_status(*status),
        Error::Transport(TransportError::Http(e)) => {
            if e.is_builder() {
                ApiErrorKind::RequestError
            } else if let Some(status) = e.status() {
                ApiErrorKind::from_http_status(status.as_u16())
            } else {
                // Timeouts, refused connections and dropped bodies all mean the
                // request left but nothing usable came back.
                ApiErrorKind::NetworkError
            }
        }
        Error::Transport(TransportError::Timeout(_)) => ApiErrorKind::NetworkError,
        Error::Transport(TransportError::Other(_))
        | Error::MalformedResponse { .. }
        | Error::Configuration { .. }
        | Error::Serialization(_) => ApiErrorKind::RequestError,
    }
}

/// User-facing message for a concrete error (zh-CN).
///
/// Same as [`ApiErrorKind::user_message`], except that a `RequestError` also
/// names what went wrong, since its causes are too varied for a fixed text.
pub fn user_message_for(error: &Error) -> String {
    match classify(error) {
        ApiErrorKind::RequestError => format!("请求错误：{}", error),
        kind => kind.user_message(),
    }
}

/// English counterpart of [`user_message_for`].
pub fn user_message_en_for(error: &Error) -> String {
    match classify(error) {
        ApiErrorKind::RequestError => format!("Request error: {}", error),
        kind => kind.user_message_en(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(status: u16) -> Error {
        Error::Remote {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(classify(&remote(429)), ApiErrorKind::RateLimited);
        assert_eq!(classify(&remote(401)), ApiErrorKind::Unauthorized);
        assert_eq!(classify(&remote(403)), ApiErrorKind::Forbidden);
        assert_eq!(
            classify(&remote(500)),
            ApiErrorKind::ServerError { status: 500 }
        );
        assert_eq!(
            classify(&remote(404)),
            ApiErrorKind::ServerError { status: 404 }
        );
    }

    #[test]
    fn test_rate_limited_message_differs_from_server_error() {
        let limited = classify(&remote(429));
        let server = classify(&remote(500));
        assert_ne!(limited.user_message(), server.user_message());
        assert_ne!(limited.user_message_en(), server.user_message_en());
        assert!(server.user_message().contains("500"));
    }

    #[test]
    fn test_non_remote_errors() {
        assert_eq!(
            classify(&Error::Transport(TransportError::Timeout(30_000))),
            ApiErrorKind::NetworkError
        );
        assert_eq!(
            classify(&Error::Transport(TransportError::Other("bad url".into()))),
            ApiErrorKind::RequestError
        );
        assert_eq!(
            classify(&Error::malformed("empty choices")),
            ApiErrorKind::RequestError
        );
    }

    #[test]
    fn test_request_error_message_names_cause() {
        let malformed = Error::malformed("no choices in response");
        let other = Error::Transport(TransportError::Other("tls setup failed".into()));

        let a = user_message_for(&malformed);
        let b = user_message_for(&other);
        assert!(a.starts_with("请求错误："));
        assert!(a.contains("no choices in response"));
        assert!(b.contains("tls setup failed"));
        assert_ne!(a, b);
        assert!(user_message_en_for(&malformed).contains("no choices in response"));
    }

    #[test]
    fn test_message_for_other_kinds_is_fixed_text() {
        assert_eq!(
            user_message_for(&remote(429)),
            ApiErrorKind::RateLimited.user_message()
        );
        assert_eq!(
            user_message_en_for(&Error::Transport(TransportError::Timeout(5))),
            ApiErrorKind::NetworkError.user_message_en()
        );
    }

    #[test]
    fn test_retryable() {
        assert!(ApiErrorKind::RateLimited.retryable());
        assert!(ApiErrorKind::NetworkError.retryable());
        assert!(ApiErrorKind::ServerError { status: 503 }.retryable());
        assert!(!ApiErrorKind::ServerError { status: 404 }.retryable());
        assert!(!ApiErrorKind::Unauthorized.retryable());
    }

    #[test]
    fn test_display_includes_status() {
        assert_eq!(
            ApiErrorKind::ServerError { status: 502 }.to_string(),
            "server_error(502)"
        );
        assert_eq!(ApiErrorKind::Forbidden.to_string(), "forbidden");
    }
}
