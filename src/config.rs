use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

const PLACEHOLDER_API_KEY: &str = "YOUR_IBM_API_KEY";
const PLACEHOLDER_PROJECT_ID: &str = "YOUR_PROJECT_ID";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub ibm_api_key: SecretString,
    pub project_id: SecretString,
    pub iam_token_url: String,
    pub generation_url: String,
    pub model_id: String,
    pub max_new_tokens: u32,
    pub cors_allowed_origin: String,
    /// Pacing hint for the client when it animates progress labels.
    pub progress_step_millis: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            ibm_api_key: SecretString::from(
                env::var("IBM_API_KEY").unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()),
            ),
            project_id: SecretString::from(
                env::var("PROJECT_ID").unwrap_or_else(|_| PLACEHOLDER_PROJECT_ID.to_string()),
            ),
            iam_token_url: env::var("IBM_IAM_TOKEN_URL")
                .unwrap_or_else(|_| "https://iam.cloud.ibm.com/identity/token".to_string()),
            generation_url: env::var("WATSONX_GENERATION_URL").unwrap_or_else(|_| {
                "https://us-south.ml.cloud.ibm.com/ml/v1/text/generation?version=2024-01-15"
                    .to_string()
            }),
            model_id: env::var("WATSONX_MODEL_ID")
                .unwrap_or_else(|_| "mistralai/mistral-large".to_string()),
            max_new_tokens: env::var("WATSONX_MAX_NEW_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            progress_step_millis: env::var("PROGRESS_STEP_MILLIS")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(1500),
        }
    }

    /// Rejects placeholder credentials.
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        let api_key = self.ibm_api_key.expose_secret();
        let project_id = self.project_id.expose_secret();

        if api_key.is_empty() || api_key == PLACEHOLDER_API_KEY {
            return Err(AppError::ConfigError(
                "IBM_API_KEY is not set. Provide the API key used for the IAM token exchange."
                    .to_string(),
            ));
        }

        if project_id.is_empty() || project_id == PLACEHOLDER_PROJECT_ID {
            return Err(AppError::ConfigError(
                "PROJECT_ID is not set. Provide the project that owns the generation model."
                    .to_string(),
            ));
        }

        if self.max_new_tokens == 0 {
            return Err(AppError::ConfigError(
                "WATSONX_MAX_NEW_TOKENS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn server_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            ibm_api_key: SecretString::from("test_api_key".to_string()),
            project_id: SecretString::from("test_project".to_string()),
            iam_token_url: "http://localhost/identity/token".to_string(),
            generation_url: "http://localhost/ml/v1/text/generation".to_string(),
            model_id: "test/model".to_string(),
            max_new_tokens: 64,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            progress_step_millis: 0,
        }
    }
}
