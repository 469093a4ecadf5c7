//! Response shapes for the Fireflies GraphQL API.
//!
//! Every field the API may omit is an `Option`, so a missing key and an
//! explicit `null` decode the same way. Fields the program cannot do without
//! are checked where they are used.

use serde::Deserialize;

/// Standard GraphQL envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .map(|e| e.message.clone())
            .collect()
    }
}

impl<T> GraphQlResponse<TranscriptEnvelope<T>> {
    /// The `data.transcript` object, if the API returned one.
    pub fn transcript(&self) -> Option<&T> {
        self.data.as_ref().and_then(|d| d.transcript.as_ref())
    }
}

#[derive(Debug, Deserialize)]
pub struct TranscriptListData {
    pub transcripts: Option<Vec<TranscriptListEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptListEntry {
    pub id: Option<String>,
    pub title: Option<String>,
}

/// The latest transcript as returned by the list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRef {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptEnvelope<T> {
    pub transcript: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TranscriptInfo {
    #[serde(rename = "dateString")]
    pub date_string: Option<String>,
    pub meeting_link: Option<String>,
    pub user: Option<User>,
    pub summary: Option<Summary>,
}

#[derive(Debug, Default, Deserialize)]
pub struct User {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Summary {
    pub keywords: Option<Vec<String>>,
    pub action_items: Option<String>,
    pub outline: Option<String>,
    pub shorthand_bullet: Option<String>,
    pub overview: Option<String>,
    pub bullet_gist: Option<String>,
    pub gist: Option<String>,
    pub short_summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TranscriptText {
    pub sentences: Option<Vec<Sentence>>,
}

#[derive(Debug, Deserialize)]
pub struct Sentence {
    pub text: Option<String>,
}

pub type TranscriptInfoResponse = GraphQlResponse<TranscriptEnvelope<TranscriptInfo>>;
pub type TranscriptTextResponse = GraphQlResponse<TranscriptEnvelope<TranscriptText>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_info_with_nulls() {
        let body = r#"{
            "data": {
                "transcript": {
                    "dateString": "2024-05-01T10:00:00.000Z",
                    "meeting_link": null,
                    "user": { "name": "Dana" },
                    "summary": { "keywords": ["budget", "hiring"], "overview": null }
                }
            }
        }"#;
        let response: TranscriptInfoResponse = serde_json::from_str(body).unwrap();
        let info = response.transcript().unwrap();
        assert_eq!(info.date_string.as_deref(), Some("2024-05-01T10:00:00.000Z"));
        assert!(info.meeting_link.is_none());
        assert_eq!(info.user.as_ref().unwrap().name.as_deref(), Some("Dana"));
        let summary = info.summary.as_ref().unwrap();
        assert_eq!(summary.keywords.as_ref().unwrap().len(), 2);
        assert!(summary.overview.is_none());
        assert!(summary.action_items.is_none());
    }

    #[test]
    fn test_decode_errors_without_data() {
        let body = r#"{ "data": null, "errors": [{ "message": "Invalid API key", "code": "auth" }] }"#;
        let response: TranscriptTextResponse = serde_json::from_str(body).unwrap();
        assert!(response.transcript().is_none());
        assert_eq!(response.error_messages(), vec!["Invalid API key".to_string()]);
    }
}
