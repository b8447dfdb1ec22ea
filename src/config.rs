//! Runtime configuration, sourced from the environment.
//! There is no config file: everything is either a compile-time default or
//! an environment variable, and the resulting `Config` value is handed to
//! the fetcher and the pagination loop explicitly.

use std::env;
use std::time::Duration;

/// Socrata endpoint for the SF Mobile Food Schedule dataset.
pub const DATASET_URL: &str = "https://data.sfgov.org/resource/bbb8-hzi6.json";

/// Records per page (`$limit`).
pub const PAGE_LIMIT: usize = 10;

/// Consecutive failed requests tolerated before giving up.
pub const MAX_RETRIES: u32 = 3;

/// Fixed pause before re-fetching a failed page.
pub const RETRY_DELAY: Duration = Duration::from_secs(2);

const TIMEOUT_SECS_DEFAULT: u64 = 10;
const TIMEOUT_SECS_MIN: u64 = 5;
const TIMEOUT_SECS_MAX: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Dataset endpoint; `TRUCKNOW_DATASET_URL` overrides the default.
    pub base_url: String,
    /// Optional Socrata app token, sent as `X-Auth-Token` when present.
    pub app_token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Page size used for `$limit`/`$offset` paging.
    pub page_limit: usize,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let timeout_secs = timeout_secs_from(env::var("TRUCKNOW_TIMEOUT_SECS").ok().as_deref());
        Self {
            base_url: env::var("TRUCKNOW_DATASET_URL").unwrap_or_else(|_| DATASET_URL.to_string()),
            app_token: app_token_from_env(),
            timeout: Duration::from_secs(timeout_secs),
            page_limit: PAGE_LIMIT,
            max_retries: MAX_RETRIES,
            retry_delay: RETRY_DELAY,
        }
    }
}

/// Early releases read the lowercase spelling; accept both, uppercase
/// first. Empty values count as unset.
fn app_token_from_env() -> Option<String> {
    ["APP_TOKEN", "app_token"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
}

/// Parse the timeout override, clamped to the supported 5–10 s band.
/// Unparsable or missing values fall back to the default.
fn timeout_secs_from(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .map(|v| v.clamp(TIMEOUT_SECS_MIN, TIMEOUT_SECS_MAX))
        .unwrap_or(TIMEOUT_SECS_DEFAULT)
}
