use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{config::Config, errors::AppResult};

const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
// Tokens are refreshed this many seconds before the reported expiry.
const TOKEN_EXPIRY_MARGIN_SECONDS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub decoding_method: String,
    pub max_new_tokens: u32,
    pub min_new_tokens: u32,
    pub stop_sequences: Vec<String>,
    pub repetition_penalty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub input: String,
    pub parameters: GenerationParameters,
    pub model_id: String,
    pub project_id: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    results: Vec<GenerationResult>,
}

#[derive(Debug, Deserialize)]
struct GenerationResult {
    generated_text: String,
}

/// Result of one insight call. Failures carry whatever the endpoint sent back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InsightOutcome {
    Generated { text: String },
    Failed { message: String, raw_response: String },
}

impl InsightOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, InsightOutcome::Failed { .. })
    }

    /// Text the dashboard shows inline, errors included.
    pub fn display_text(&self) -> String {
        match self {
            InsightOutcome::Generated { text } => text.clone(),
            InsightOutcome::Failed {
                message,
                raw_response,
            } => format!("⚠️ Watsonx error: {}\n\nResponse: {}", message, raw_response),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InsightFailure {
    message: String,
    raw_response: String,
}

impl From<InsightFailure> for InsightOutcome {
    fn from(failure: InsightFailure) -> Self {
        InsightOutcome::Failed {
            message: failure.message,
            raw_response: failure.raw_response,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InsightTransport: Send + Sync {
    /// Exchanges the API key for a bearer token.
    async fn request_token(&self, api_key: &str) -> AppResult<RawResponse>;

    async fn generate(
        &self,
        access_token: &str,
        request: &GenerationRequest,
    ) -> AppResult<RawResponse>;
}

pub struct WatsonxTransport {
    client: reqwest::Client,
    iam_token_url: String,
    generation_url: String,
}

impl WatsonxTransport {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            iam_token_url: config.iam_token_url.clone(),
            generation_url: config.generation_url.clone(),
        }
    }
}

#[async_trait]
impl InsightTransport for WatsonxTransport {
    async fn request_token(&self, api_key: &str) -> AppResult<RawResponse> {
        let response = self
            .client
            .post(&self.iam_token_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .form(&[("grant_type", APIKEY_GRANT_TYPE), ("apikey", api_key)])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }

    async fn generate(
        &self,
        access_token: &str,
        request: &GenerationRequest,
    ) -> AppResult<RawResponse> {
        let response = self
            .client
            .post(&self.generation_url)
            .header("Accept", "application/json")
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |expires_at| now < expires_at)
    }
}

pub struct InsightService {
    transport: Arc<dyn InsightTransport>,
    api_key: SecretString,
    project_id: SecretString,
    model_id: String,
    max_new_tokens: u32,
    token_cache: RwLock<Option<CachedToken>>,
}

impl InsightService {
    pub fn new(transport: Arc<dyn InsightTransport>, config: &Config) -> Self {
        Self {
            transport,
            api_key: config.ibm_api_key.clone(),
            project_id: config.project_id.clone(),
            model_id: config.model_id.clone(),
            max_new_tokens: config.max_new_tokens,
            token_cache: RwLock::new(None),
        }
    }

    /// Sends `prompt_prefix + payload` to the generation endpoint once.
    /// Never fails: transport and parse problems come back as
    /// [`InsightOutcome::Failed`].
    pub async fn fetch_insight(&self, prompt_prefix: &str, payload: &str) -> InsightOutcome {
        let token = match self.access_token().await {
            Ok(token) => token,
            Err(failure) => {
                log::warn!("Insight token request failed: {}", failure.message);
                return failure.into();
            }
        };

        let request = self.build_request(prompt_prefix, payload);
        let outcome = match self.transport.generate(&token, &request).await {
            Ok(raw) => parse_generation_response(&raw),
            Err(e) => InsightFailure {
                message: e.to_string(),
                raw_response: String::new(),
            }
            .into(),
        };

        if let InsightOutcome::Failed { message, .. } = &outcome {
            log::warn!("Insight generation failed: {}", message);
        }
        outcome
    }

    pub fn build_request(&self, prompt_prefix: &str, payload: &str) -> GenerationRequest {
        GenerationRequest {
            input: format!("{}{}", prompt_prefix, payload),
            parameters: GenerationParameters {
                decoding_method: "greedy".to_string(),
                max_new_tokens: self.max_new_tokens,
                min_new_tokens: 0,
                stop_sequences: Vec::new(),
                repetition_penalty: 1,
            },
            model_id: self.model_id.clone(),
            project_id: self.project_id.expose_secret().to_string(),
        }
    }

    async fn access_token(&self) -> Result<String, InsightFailure> {
        let now = Utc::now();
        if let Some(cached) = self.token_cache.read().await.as_ref() {
            if cached.is_fresh(now) {
                return Ok(cached.value.clone());
            }
        }

        let raw = self
            .transport
            .request_token(self.api_key.expose_secret())
            .await
            .map_err(|e| InsightFailure {
                message: format!("Token request failed: {}", e),
                raw_response: String::new(),
            })?;
        let token = parse_token_response(&raw, now)?;

        log::info!("Obtained new access token for insight generation");
        let value = token.value.clone();
        *self.token_cache.write().await = Some(token);
        Ok(value)
    }
}

fn parse_token_response(raw: &RawResponse, now: DateTime<Utc>) -> Result<CachedToken, InsightFailure> {
    if !raw.is_success() {
        return Err(InsightFailure {
            message: format!("Token endpoint returned HTTP {}", raw.status),
            raw_response: raw.body.clone(),
        });
    }

    let parsed: TokenResponse = serde_json::from_str(&raw.body).map_err(|e| InsightFailure {
        message: format!("Malformed token response: {}", e),
        raw_response: raw.body.clone(),
    })?;

    let expires_at = match parsed.expires_in {
        Some(secs) => Some(token_deadline(now, secs).ok_or_else(|| InsightFailure {
            message: format!("Token expiry out of range: {} seconds", secs),
            raw_response: raw.body.clone(),
        })?),
        None => None,
    };

    Ok(CachedToken {
        value: parsed.access_token,
        expires_at,
    })
}

/// `None` when `expires_in` cannot be represented as a point in time.
fn token_deadline(now: DateTime<Utc>, expires_in: i64) -> Option<DateTime<Utc>> {
    expires_in
        .checked_sub(TOKEN_EXPIRY_MARGIN_SECONDS)
        .and_then(Duration::try_seconds)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
}

fn parse_generation_response(raw: &RawResponse) -> InsightOutcome {
    if !raw.is_success() {
        return InsightFailure {
            message: format!("Generation endpoint returned HTTP {}", raw.status),
            raw_response: raw.body.clone(),
        }
        .into();
    }

    match serde_json::from_str::<GenerationResponse>(&raw.body) {
        Ok(parsed) => match parsed.results.into_iter().next() {
            Some(result) => InsightOutcome::Generated {
                text: result.generated_text,
            },
            None => InsightFailure {
                message: "Generation response contained no results".to_string(),
                raw_response: raw.body.clone(),
            }
            .into(),
        },
        Err(e) => InsightFailure {
            message: format!("Malformed generation response: {}", e),
            raw_response: raw.body.clone(),
        }
        .into(),
    }
}
