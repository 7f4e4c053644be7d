//! Site configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! wants to change.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Page text and effect timings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name revealed by the typing effect in the hero
    pub owner_name: String,
    pub tagline: String,
    pub about: String,
    pub skills: Vec<String>,
    /// Delay before the first typed character
    pub typing_start_delay_ms: u64,
    /// Delay between typed characters
    pub typing_char_delay_ms: u64,
    /// How long a notification stays on screen
    pub notification_ms: u64,
    /// Delay of the simulated contact submitter
    pub submit_delay_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Riwa Desai".to_string(),
            tagline: "Machine learning, NLP and reinforcement learning projects".to_string(),
            about: "I build systems that learn: retrieval pipelines over multilingual \
                    documents, agents trained with deep Q-learning, and models for fraud \
                    and market analysis."
                .to_string(),
            skills: [
                "Python",
                "TensorFlow",
                "NLP",
                "Reinforcement Learning",
                "PySpark",
                "Data Analysis",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            typing_start_delay_ms: 1000,
            typing_char_delay_ms: 150,
            notification_ms: 3000,
            submit_delay_ms: 2000,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| PortfolioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!("Loaded site config from {:?}", path);
        Ok(config)
    }

    fn validate(&self) -> PortfolioResult<()> {
        if self.typing_char_delay_ms == 0 {
            return Err(PortfolioError::Config(
                "typing_char_delay_ms must be greater than zero".to_string(),
            ));
        }
        if self.notification_ms == 0 {
            return Err(PortfolioError::Config(
                "notification_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn typing_start_delay(&self) -> Duration {
        Duration::from_millis(self.typing_start_delay_ms)
    }

    pub fn typing_char_delay(&self) -> Duration {
        Duration::from_millis(self.typing_char_delay_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.typing_start_delay(), Duration::from_millis(1000));
        assert_eq!(config.typing_char_delay(), Duration::from_millis(150));
        assert_eq!(config.notification_duration(), Duration::from_secs(3));
        assert_eq!(config.submit_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"owner_name":"Ada"}"#).unwrap();
        assert_eq!(config.owner_name, "Ada");
        assert_eq!(config.typing_char_delay_ms, 150);
    }

    #[test]
    fn test_zero_char_delay_rejected() {
        let err = SiteConfig::from_json(r#"{"typing_char_delay_ms":0}"#).unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = SiteConfig::from_json("{").unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }
}
