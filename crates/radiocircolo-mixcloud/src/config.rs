use std::env;

/// Default Mixcloud API base URL.
pub const DEFAULT_API_URL: &str = "https://api.mixcloud.com";

/// Number of cloudcasts requested per listing.
pub const DEFAULT_LIMIT: u32 = 100;

/// Upper bound on a single catalog request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct MixcloudConfig {
    pub api_url: String,
    pub username: String,
    pub client_id: String,
    pub limit: u32,
    pub timeout_secs: u64,
}

impl MixcloudConfig {
    pub fn from_env() -> Self {
        let username = env::var("MIXCLOUD_USERNAME").unwrap_or_default();
        if username.is_empty() {
            tracing::warn!("MIXCLOUD_USERNAME not set — catalog requests will fail");
        }

        let client_id = env::var("MIXCLOUD_CLIENT_ID").unwrap_or_default();
        if client_id.is_empty() {
            tracing::warn!("MIXCLOUD_CLIENT_ID not set");
        }

        Self {
            api_url: env::var("MIXCLOUD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            username,
            client_id,
            limit: env::var("MIXCLOUD_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LIMIT),
            timeout_secs: env::var("MIXCLOUD_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}
