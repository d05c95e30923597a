//! Build-time console configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console is compiled into a static WASM bundle, so the admin API
//! location and the behaviour toggles are baked in at build time through
//! `option_env!` rather than read from a runtime environment.
//!
//! - `ADMIN_API_BASE_URL`: API origin (empty = same origin)
//! - `ADMIN_API_BASE_PATH`: per-tenant path segment for product endpoints
//! - `ADMIN_LOGOUT_CLEARS_TOKEN`: drop the `apiToken` cookie on logout (default off)
//! - `ADMIN_TOAST_DURATION_MS`: toast auto-dismiss delay (default 3000)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Location of the remote admin API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub base_path: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, base_path: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        let base_path = base_path.into().trim().trim_matches('/').to_owned();
        Self { base_url, base_path }
    }

    /// Read the API location baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("ADMIN_API_BASE_URL").unwrap_or_default(),
            option_env!("ADMIN_API_BASE_PATH").unwrap_or_default(),
        )
    }

    /// `POST {base}/api/user/check`
    pub fn check_url(&self) -> String {
        format!("{}/api/user/check", self.base_url)
    }

    /// `GET {base}/api/{path}/admin/products`
    pub fn products_url(&self) -> String {
        format!("{}/api/{}/admin/products", self.base_url, self.base_path)
    }

    /// `POST {base}/admin/signin`
    pub fn signin_url(&self) -> String {
        format!("{}/admin/signin", self.base_url)
    }
}

/// Full console configuration: API location plus behaviour toggles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub logout_clears_token: bool,
    pub toast_duration: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::new("", ""),
            logout_clears_token: false,
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

impl ConsoleConfig {
    pub fn from_build_env() -> Self {
        Self {
            api: ApiConfig::from_build_env(),
            logout_clears_token: parse_flag(option_env!("ADMIN_LOGOUT_CLEARS_TOKEN")).unwrap_or(false),
            toast_duration: Duration::from_millis(parse_millis(
                option_env!("ADMIN_TOAST_DURATION_MS"),
                DEFAULT_TOAST_DURATION_MS,
            )),
        }
    }
}

/// Parse a boolean toggle. Unknown spellings yield `None`.
pub(crate) fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub(crate) fn parse_millis(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}
