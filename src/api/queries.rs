//! GraphQL documents sent to Fireflies.

pub const LATEST_TRANSCRIPT: &str = r#"
query {
    transcripts(limit: 1) {
        title
        id
    }
}
"#;

pub const TRANSCRIPT_INFO: &str = r#"
query Transcript($transcriptId: String!) {
    transcript(id: $transcriptId) {
        dateString
        meeting_link
        user {
            name
        }
        summary {
            keywords
            action_items
            outline
            shorthand_bullet
            overview
            bullet_gist
            gist
            short_summary
        }
    }
}
"#;

pub const TRANSCRIPT_TEXT: &str = r#"
query Transcript($transcriptId: String!) {
    transcript(id: $transcriptId) {
        sentences {
            text
        }
    }
}
"#;

/// Variable name shared by the two parameterized queries.
pub const TRANSCRIPT_ID_VAR: &str = "transcriptId";
