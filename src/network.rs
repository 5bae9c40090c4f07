//! Network URL constants for the Algotrade SDK.

/// Default REST API base URL (local paper-trading backend).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
