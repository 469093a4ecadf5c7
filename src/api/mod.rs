//! HTTP client for the Fireflies.ai GraphQL API.
//!
//! Provides the three queries the CLI needs:
//! - the latest transcript's id and title
//! - metadata and summary for one transcript
//! - the sentence list for one transcript

pub mod error;
pub mod queries;
pub mod types;

use crate::config::Settings;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

pub use error::{ApiResult, ErrorCategory, FirefliesError};
pub use types::{
    GraphQlResponse, Sentence, Summary, TranscriptInfo, TranscriptInfoResponse, TranscriptListData,
    TranscriptRef, TranscriptText, TranscriptTextResponse, User,
};

/// Client for the Fireflies GraphQL endpoint.
pub struct FirefliesClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl FirefliesClient {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), api_key, endpoint)
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS, timeouts).
    pub fn with_http_client(
        client: reqwest::Client,
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.api_key.clone(), settings.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the most recent transcript. Ordering is whatever the API returns.
    pub async fn get_latest_transcript_id(&self) -> ApiResult<Option<TranscriptRef>> {
        let response: GraphQlResponse<TranscriptListData> =
            self.query(queries::LATEST_TRANSCRIPT, None).await?;

        let Some(first) = response
            .data
            .and_then(|data| data.transcripts)
            .and_then(|transcripts| transcripts.into_iter().next())
        else {
            return Ok(None);
        };

        let id = first.id.ok_or(FirefliesError::MissingField("id"))?;
        if id.is_empty() {
            return Ok(None);
        }
        let title = first.title.ok_or(FirefliesError::MissingField("title"))?;

        debug!("Latest transcript: {} ({})", title, id);
        Ok(Some(TranscriptRef { id, title }))
    }

    /// Fetch metadata and summary for a transcript.
    pub async fn get_transcript_info(&self, transcript_id: &str) -> ApiResult<TranscriptInfoResponse> {
        self.query(queries::TRANSCRIPT_INFO, Some(transcript_variables(transcript_id)))
            .await
    }

    /// Fetch the ordered sentence list for a transcript.
    pub async fn get_transcript_text(&self, transcript_id: &str) -> ApiResult<TranscriptTextResponse> {
        self.query(queries::TRANSCRIPT_TEXT, Some(transcript_variables(transcript_id)))
            .await
    }

    async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> ApiResult<GraphQlResponse<T>> {
        let mut payload = json!({ "query": query });
        if let Some(variables) = variables {
            payload["variables"] = variables;
        }

        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Fireflies request failed with status {}: {}", status, body);
            return Err(FirefliesError::Status { status, url, body });
        }

        let parsed: GraphQlResponse<T> = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(source) => return Err(FirefliesError::Decode { source, body }),
        };

        let messages = parsed.error_messages();
        if !messages.is_empty() {
            if parsed.data.is_none() {
                return Err(FirefliesError::GraphQl { messages });
            }
            warn!("Fireflies returned partial data with errors: {}", messages.join("; "));
        }

        Ok(parsed)
    }
}

fn transcript_variables(transcript_id: &str) -> Value {
    let mut variables = serde_json::Map::new();
    variables.insert(
        queries::TRANSCRIPT_ID_VAR.to_string(),
        Value::String(transcript_id.to_string()),
    );
    Value::Object(variables)
}
