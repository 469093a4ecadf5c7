//! Error type for Fireflies API calls.

use reqwest::StatusCode;
use thiserror::Error;

/// How a failure is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport, HTTP status, or undecodable response.
    Api,
    /// A field the program relies on was absent from the response.
    MissingField,
    Unexpected,
}

#[derive(Debug, Error)]
pub enum FirefliesError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{status} for url ({url})")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("invalid JSON in response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("GraphQL errors: {}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FirefliesError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Request(_) | Self::Status { .. } | Self::Decode { .. } | Self::GraphQl { .. } => {
                ErrorCategory::Api
            }
            Self::MissingField(_) => ErrorCategory::MissingField,
            Self::Io(_) | Self::Other(_) => ErrorCategory::Unexpected,
        }
    }

    /// Response body received alongside the failure, if any.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::Decode { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, FirefliesError>;
