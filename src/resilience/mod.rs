//! 请求节流模块：保证任意两次外发请求之间的最小时间间隔。
//!
//! # Request Throttle
//!
//! Every remote dispatch made by [`AiToolsClient`](crate::AiToolsClient)
//! passes through one [`RequestThrottle`]. The throttle spaces dispatch times,
//! not completion times: once a call has been let through, a slow response
//! does not hold back the next caller beyond `min_interval`.
//!
//! ```rust
//! use aitools_client::resilience::{RequestThrottle, ThrottleConfig};
//! use std::time::Duration;
//!
//! let throttle = RequestThrottle::new(
//!     ThrottleConfig::new().with_min_interval(Duration::from_millis(250)),
//! );
//! assert_eq!(throttle.min_interval(), Duration::from_millis(250));
//! ```

pub mod throttle;

pub use throttle::{RequestThrottle, ThrottleConfig, ThrottleSnapshot};
