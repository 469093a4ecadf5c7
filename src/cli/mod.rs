//! Command orchestration and top-level error reporting.
//!
//! Output goes to a caller-supplied writer so the whole flow can run against
//! a buffer.

pub mod args;

use crate::api::{ErrorCategory, FirefliesClient, FirefliesError};
use crate::format;
use crate::text_io::{self, ClipboardSink};
use std::io::{self, Write};
use tracing::debug;

pub use args::{Cli, Mode};

/// Run `mode` and report any failure on `out`. Handled failures are not errors.
pub async fn run<W: Write>(
    mode: Mode,
    client: &FirefliesClient,
    clipboard: &mut dyn ClipboardSink,
    out: &mut W,
) -> io::Result<()> {
    match execute(mode, client, clipboard, out).await {
        Ok(()) => Ok(()),
        Err(err) => report_error(&err, out),
    }
}

pub async fn execute<W: Write>(
    mode: Mode,
    client: &FirefliesClient,
    clipboard: &mut dyn ClipboardSink,
    out: &mut W,
) -> Result<(), FirefliesError> {
    let Some(latest) = client.get_latest_transcript_id().await? else {
        writeln!(out, "No transcripts found.")?;
        return Ok(());
    };

    match mode {
        Mode::Info => {
            let response = client.get_transcript_info(&latest.id).await?;
            writeln!(out, "{}", format::render_info(&latest.title, response.transcript()))?;
        }
        Mode::Clipboard => {
            let response = client.get_transcript_text(&latest.id).await?;
            if text_io::copy_transcript(&response, clipboard)? {
                writeln!(
                    out,
                    "Successfully copied transcript '{}' to clipboard!",
                    latest.title
                )?;
            } else {
                writeln!(out, "No transcript text available.")?;
                writeln!(out, "Failed to copy transcript to clipboard.")?;
            }
        }
    }

    Ok(())
}

pub fn report_error<W: Write>(err: &FirefliesError, out: &mut W) -> io::Result<()> {
    debug!("Command failed: {:?}", err);

    match err.category() {
        ErrorCategory::Api => {
            writeln!(out, "Error accessing Fireflies.ai API: {}", err)?;
            if let Some(body) = err.response_body() {
                writeln!(out, "Error details: {}", body)?;
            }
        }
        ErrorCategory::MissingField => {
            writeln!(out, "Error parsing API response: {}", err)?;
        }
        ErrorCategory::Unexpected => {
            writeln!(out, "An unexpected error occurred: {}", err)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn report(err: FirefliesError) -> String {
        let mut out = Vec::new();
        report_error(&err, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_status_with_body() {
        let text = report(FirefliesError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://127.0.0.1/graphql".to_string(),
            body: "{\"error\":\"down\"}".to_string(),
        });
        assert_eq!(
            text,
            "Error accessing Fireflies.ai API: 500 Internal Server Error for url (http://127.0.0.1/graphql)\n\
             Error details: {\"error\":\"down\"}\n"
        );
    }

    #[test]
    fn test_report_graphql_errors_without_details() {
        let text = report(FirefliesError::GraphQl {
            messages: vec!["Invalid API key".to_string()],
        });
        assert_eq!(
            text,
            "Error accessing Fireflies.ai API: GraphQL errors: Invalid API key\n"
        );
    }

    #[test]
    fn test_report_missing_field() {
        assert_eq!(
            report(FirefliesError::MissingField("id")),
            "Error parsing API response: missing field `id`\n"
        );
    }

    #[test]
    fn test_report_unexpected() {
        assert_eq!(
            report(FirefliesError::Other(anyhow::anyhow!("Failed to access clipboard"))),
            "An unexpected error occurred: Failed to access clipboard\n"
        );
    }
}
