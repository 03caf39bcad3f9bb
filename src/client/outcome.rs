//! Result shape for operations that degrade instead of failing.

use crate::error_code::ApiErrorKind;
use crate::Error;

/// A failed remote call together with the locally generated substitute.
///
/// The caller gets both: `fallback` to render, `error` to explain why the
/// content is degraded.
#[derive(Debug)]
pub struct Degraded<T> {
    pub fallback: T,
    pub error: Error,
}

impl<T> Degraded<T> {
    pub fn kind(&self) -> ApiErrorKind {
        self.error.kind()
    }

    pub fn user_message(&self) -> String {
        self.error.user_message()
    }

    /// Keep the substitute, drop the error.
    pub fn into_fallback(self) -> T {
        self.fallback
    }

    pub fn into_parts(self) -> (T, Error) {
        (self.fallback, self.error)
    }
}

impl<T> std::fmt::Display for Degraded<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "served fallback after {}: {}", self.kind(), self.error)
    }
}

impl<T: std::fmt::Debug> std::error::Error for Degraded<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<Degraded<T>> for Error {
    fn from(d: Degraded<T>) -> Self {
        d.error
    }
}

/// `Ok` with the remote (or cached) result, or `Err` carrying a fallback.
pub type Outcome<T> = std::result::Result<T, Degraded<T>>;

/// Collapse an [`Outcome`] into whatever value is available.
pub fn value_or_fallback<T>(outcome: Outcome<T>) -> T {
    match outcome {
        Ok(v) => v,
        Err(d) => d.fallback,
    }
}
