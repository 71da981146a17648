//! Typed configuration for the simulated backend and auth form rules.
//!
//! Nothing here is read at runtime from the browser; latency overrides are
//! baked in at compile time through `option_env!` so a demo build can be
//! made snappier without touching code.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_MOCK_LATENCY_MS: u64 = 1000;
pub const DEFAULT_OAUTH_LATENCY_MS: u64 = 1500;

pub const OTP_LENGTH: usize = 6;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u64 = 4000;

pub const COUNTRY_CODES: [&str; 3] = ["+84", "+1", "+86"];
pub const DEFAULT_COUNTRY_CODE: &str = "+84";

/// Artificial delays applied by the simulated API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
    /// OTP send/verify and password login/register.
    pub request_ms: u64,
    /// OAuth round trips.
    pub oauth_ms: u64,
    /// Resolution of the OTP resend countdown.
    pub tick_ms: u64,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            request_ms: DEFAULT_MOCK_LATENCY_MS,
            oauth_ms: DEFAULT_OAUTH_LATENCY_MS,
            tick_ms: 1000,
        }
    }
}

impl MockLatency {
    /// Build latency config from compile-time environment.
    ///
    /// Optional:
    /// - `MARKETPLACE_MOCK_LATENCY_MS`: default 1000
    /// - `MARKETPLACE_OAUTH_LATENCY_MS`: default 1500
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            request_ms: parse_millis(
                option_env!("MARKETPLACE_MOCK_LATENCY_MS"),
                DEFAULT_MOCK_LATENCY_MS,
            ),
            oauth_ms: parse_millis(
                option_env!("MARKETPLACE_OAUTH_LATENCY_MS"),
                DEFAULT_OAUTH_LATENCY_MS,
            ),
            ..Self::default()
        }
    }

    /// Zero delays everywhere. Used by tests and native builds.
    #[must_use]
    pub fn instant() -> Self {
        Self { request_ms: 0, oauth_ms: 0, tick_ms: 0 }
    }

    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_millis(self.request_ms)
    }

    #[must_use]
    pub fn oauth(&self) -> Duration {
        Duration::from_millis(self.oauth_ms)
    }

    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Parse a millisecond value, falling back to `default` when absent or invalid.
#[must_use]
pub fn parse_millis(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

/// Local validation rules shared by the login, register, and guest prompt forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRules {
    pub otp_length: usize,
    pub min_password_len: usize,
    pub resend_cooldown_secs: u32,
}

impl Default for AuthRules {
    fn default() -> Self {
        Self {
            otp_length: OTP_LENGTH,
            min_password_len: MIN_PASSWORD_LEN,
            resend_cooldown_secs: RESEND_COOLDOWN_SECS,
        }
    }
}
