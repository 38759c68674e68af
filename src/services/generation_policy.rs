use std::time::Duration;

use crate::config::Config;

const DEFAULT_TIMEOUT_SECONDS: u64 = 120;
const DEFAULT_RETRIES: u32 = 2;
const DEFAULT_BACKOFF_MS: u64 = 500;
const MAX_BACKOFF_MS: u64 = 10_000;

/// Retry and timeout rules for calls to the question generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub max_retries: u32,
    pub timeout_seconds: u64,
    pub backoff_ms: u64,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_RETRIES,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            backoff_ms: DEFAULT_BACKOFF_MS,
        }
    }
}

impl GenerationPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self::default()
            .with_max_retries(config.generation_max_retries)
            .with_timeout(config.generation_timeout_seconds)
            .with_backoff_ms(config.generation_backoff_ms)
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_backoff_ms(mut self, backoff_ms: u64) -> Self {
        self.backoff_ms = backoff_ms;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay before retry number `retry` (1-based): doubles each time, capped.
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u64 << retry.saturating_sub(1).min(16);
        Duration::from_millis(self.backoff_ms.saturating_mul(factor).min(MAX_BACKOFF_MS))
    }
}
