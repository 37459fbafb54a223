use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;
pub const DEFAULT_TYPE_INTERVAL_MS: u64 = 100;
pub const DEFAULT_HERO_NAME: &str = "KAVIN KISHORE P";

/// Tunables for the page interactions. Every field may be omitted from the
/// content file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub scroll_threshold: f64,
    pub type_interval_ms: u64,
    pub hero_name: String,
    pub reveal_duration_ms: u64,
    pub reveal_stagger_ms: u64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            type_interval_ms: DEFAULT_TYPE_INTERVAL_MS,
            hero_name: DEFAULT_HERO_NAME.to_string(),
            reveal_duration_ms: 600,
            reveal_stagger_ms: 200,
        }
    }
}

impl InteractionConfig {
    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_interval_ms)
    }
}

/// Year the site was built, for the footer.
pub fn build_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or(2025)
}

fn year_of(rfc3339: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(rfc3339)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: InteractionConfig =
            serde_json::from_str(r#"{ "scroll_threshold": 80.0 }"#).unwrap();
        assert_eq!(config.scroll_threshold, 80.0);
        assert_eq!(config.type_interval(), Duration::from_millis(100));
        assert_eq!(config.hero_name, DEFAULT_HERO_NAME);
    }

    #[test]
    fn test_build_year() {
        assert_eq!(year_of("2026-10-18T09:30:00+00:00"), Some(2026));
        assert_eq!(year_of("yesterday"), None);
        assert!(build_year() >= 2025);
    }
}
