use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Description of the service under test. Built once from the CLI and shared
/// read-only for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct TargetConfig {
    pub base_url: String,
    /// Timeout for endpoints that answer from local state (health, validation).
    pub quick_timeout: Duration,
    /// Timeout for endpoints that may hit upstream data providers.
    pub fetch_timeout: Duration,
}

impl TargetConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            quick_timeout: Duration::from_secs(5),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_trailing_slash() {
        let config = TargetConfig::new("http://localhost:3001/");
        assert_eq!(config.base_url, "http://localhost:3001");
    }

    #[test]
    fn test_default_targets_local_backend() {
        let config = TargetConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.quick_timeout < config.fetch_timeout);
    }
}
