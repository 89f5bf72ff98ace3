//! Runtime configuration: three values, sourced from the environment with
//! hardcoded placeholders as a local-testing fallback.

use std::env;

pub const ENV_API_KEY: &str = "BEDROCK_API_KEY";
pub const ENV_REGION: &str = "AWS_REGION";
pub const ENV_MODEL_ID: &str = "BEDROCK_MODEL_ID";

const FALLBACK_API_KEY: &str = "YOUR_API_KEY";
const FALLBACK_REGION: &str = "us-east-1";
const FALLBACK_MODEL_ID: &str = "anthropic.claude-3-5-sonnet-20240620-v1:0";

#[derive(Debug, Clone)]
pub struct NavigatorConfig {
    pub api_key: String,
    pub region: String,
    pub model_id: String,
}

impl NavigatorConfig {
    pub fn new(
        api_key: impl Into<String>,
        region: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            region: region.into(),
            model_id: model_id.into(),
        }
    }

    /// Read configuration from the environment, falling back to local
    /// placeholders for any value that is unset.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(ENV_API_KEY).unwrap_or_else(|_| FALLBACK_API_KEY.to_string()),
            region: env::var(ENV_REGION).unwrap_or_else(|_| FALLBACK_REGION.to_string()),
            model_id: env::var(ENV_MODEL_ID).unwrap_or_else(|_| FALLBACK_MODEL_ID.to_string()),
        }
    }

    /// True when the api key is still the placeholder, i.e. no real
    /// credentials were provided.
    pub fn is_placeholder(&self) -> bool {
        self.api_key == FALLBACK_API_KEY
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self::new(FALLBACK_API_KEY, FALLBACK_REGION, FALLBACK_MODEL_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_flagged_as_placeholder() {
        let config = NavigatorConfig::default();
        assert!(config.is_placeholder());
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn explicit_credentials_are_not_placeholder() {
        let config = NavigatorConfig::new("real-key", "eu-west-1", "some-model");
        assert!(!config.is_placeholder());
    }
}
