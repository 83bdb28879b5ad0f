//! NebulaAI Core - shared building blocks for the brand name generator
//!
//! This crate holds the data-transfer types exchanged by NebulaAI packages,
//! a set of stateless string, validation, and formatting helpers, and a
//! sliding-window rate limiter for pacing calls to upstream APIs.

pub mod config;
pub mod error;
pub mod ratelimit;
pub mod types;
pub mod utils;

pub use config::{
    CoreConfig, RateLimitConfig, DEFAULT_MAX_RETRIES, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_WINDOW_MS, DEFAULT_TIMEOUT_MS,
};
pub use error::{CoreError, Result};
pub use ratelimit::{Clock, ManualClock, RateLimiter, SystemClock};
pub use types::*;
pub use utils::*;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Published package name.
pub const PACKAGE_NAME: &str = "@nebulaai/core";
