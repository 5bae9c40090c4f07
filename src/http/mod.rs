//! HTTP client layer — `ApiHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::ApiHttp;
pub use retry::{RetryConfig, RetryPolicy};
