//! 类型模块：聊天补全请求/响应与工具描述的强类型表示。
//!
//! # Types Module
//!
//! Strongly-typed shapes for everything that crosses the wire or the caller
//! boundary.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Chat message with role and text content |
//! | [`MessageRole`] | Message role (system, user, assistant) |
//! | [`ChatCompletionRequest`] | Outbound chat-completion body |
//! | [`ChatCompletionResponse`] | Inbound chat-completion body |
//! | [`ToolDescriptor`] | Directory entry supplied by the caller |

pub mod message;
pub mod tool;

pub use message::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, Message, MessageRole,
};
pub use tool::{ToolDescriptor, ToolSummary};
