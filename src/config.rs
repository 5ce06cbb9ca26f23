use secrecy::{ExposeSecret, SecretString};
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub model_api_key: SecretString,
    pub model_base_url: String,
    pub default_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub request_timeout_secs: u64,
    pub max_completion_tokens: u32,
    pub model_temperature: f32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            model_api_key: SecretString::from(
                env::var("MODEL_API_KEY").unwrap_or_else(|_| String::new()),
            ),
            model_base_url: env::var("MODEL_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            default_model: env::var("DEFAULT_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            request_timeout_secs: env::var("MODEL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(60),
            max_completion_tokens: env::var("MODEL_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(1000),
            model_temperature: env::var("MODEL_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.3),
        }
    }

    /// Whether a model credential has been configured. Generation and model
    /// listing are rejected up front when this is false.
    pub fn has_api_key(&self) -> bool {
        !self.model_api_key.expose_secret().trim().is_empty()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            model_api_key: SecretString::from("test_api_key".to_string()),
            model_base_url: "https://api.openai.com/v1".to_string(),
            default_model: "gpt-4o".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            request_timeout_secs: 5,
            max_completion_tokens: 1000,
            model_temperature: 0.3,
        }
    }
}
