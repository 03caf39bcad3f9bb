//! HTTP transport for the chat-completion endpoint.

mod http;

pub use http::{HttpTransport, TransportError};
