//! Plain-text rendering of transcript details for `info` mode.

use crate::api::{Summary, TranscriptInfo};

pub const NOT_AVAILABLE: &str = "Not available";

const RULE: &str = "==================================================";

/// Render the header and summary sections for a transcript.
///
/// `info` is `None` when the API returned no transcript object; every field is
/// then shown with the placeholder.
pub fn render_info(title: &str, info: Option<&TranscriptInfo>) -> String {
    let mut lines: Vec<String> = vec![
        String::new(),
        "Transcript Details:".to_string(),
        RULE.to_string(),
        format!("Title: {}", title),
        format!("Date: {}", or_placeholder(info.and_then(|t| t.date_string.as_deref()))),
        format!(
            "Meeting Link: {}",
            or_placeholder(info.and_then(|t| t.meeting_link.as_deref()))
        ),
        format!(
            "User: {}",
            or_placeholder(
                info.and_then(|t| t.user.as_ref())
                    .and_then(|u| u.name.as_deref())
            )
        ),
    ];

    if let Some(summary) = info.and_then(|t| t.summary.as_ref()) {
        render_summary(summary, &mut lines);
    }

    lines.push(RULE.to_string());
    lines.join("\n")
}

fn render_summary(summary: &Summary, lines: &mut Vec<String>) {
    lines.push(String::new());
    lines.push("Summary:".to_string());
    lines.push(RULE.to_string());

    section(lines, "Overview", or_placeholder(summary.overview.as_deref()));
    if let Some(short) = non_empty(summary.short_summary.as_deref()) {
        section(lines, "Short Summary", short);
    }
    if let Some(items) = non_empty(summary.action_items.as_deref()) {
        section(lines, "Action Items", items);
    }
    section(lines, "Key Points", or_placeholder(summary.bullet_gist.as_deref()));
    if let Some(outline) = non_empty(summary.outline.as_deref()) {
        section(lines, "Outline", outline);
    }
    if let Some(keywords) = summary.keywords.as_ref().filter(|k| !k.is_empty()) {
        section(lines, "Keywords", &keywords.join(", "));
    }
}

fn section(lines: &mut Vec<String>, heading: &str, body: &str) {
    lines.push(String::new());
    lines.push(format!("{}:", heading));
    lines.push(body.to_string());
}

fn or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
