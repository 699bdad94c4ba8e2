//! Backend configuration from TOML (`[backend]` section)

use super::ConfigValidationError;
use qa_application::CompletionParams;
use qa_application::config::completion_params::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use qa_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Groq chat-completions endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq backend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Environment variable holding the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Maximum generated tokens per answer.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GROQ_API_KEY".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: Model::default().to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout_seconds: 60,
        }
    }
}

impl FileBackendConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiKeyEnv);
        }
        if self.max_tokens == 0 {
            return Err(ConfigValidationError::InvalidMaxTokens);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigValidationError::InvalidTemperature(self.temperature));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }

    pub fn parse_model(&self) -> Model {
        let Ok(model) = self.model.trim().parse::<Model>();
        model
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn to_completion_params(&self) -> CompletionParams {
        CompletionParams::default()
            .with_model(self.parse_model())
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileBackendConfig::default();
        assert_eq!(config.model, "mixtral-8x7b-32768");
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_to_completion_params() {
        let config = FileBackendConfig {
            model: "llama3-8b-8192".to_string(),
            max_tokens: 50,
            temperature: 1.0,
            ..Default::default()
        };
        let params = config.to_completion_params();
        assert_eq!(params.model, Model::Llama3_8b);
        assert_eq!(params.max_tokens, 50);
        assert_eq!(params.temperature, 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = FileBackendConfig::default();

        let config = FileBackendConfig {
            model: "  ".to_string(),
            ..base.clone()
        };
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));

        let config = FileBackendConfig {
            max_tokens: 0,
            ..base.clone()
        };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidMaxTokens));

        let config = FileBackendConfig {
            temperature: 3.5,
            ..base.clone()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTemperature(3.5))
        );

        let config = FileBackendConfig {
            timeout_seconds: 0,
            ..base
        };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }
}
