//! Plain-text transcript export.

use chrono::{DateTime, Local};

use super::types::Exchange;

/// Render exchanges as `User:` / `Assistant:` / `---` line triples.
///
/// An empty transcript exports as an empty string.
pub fn export_text(transcript: &[Exchange]) -> String {
    transcript
        .iter()
        .map(|e| {
            format!(
                "User: {}\nAssistant: {}\n---",
                e.user_text(),
                e.assistant_text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// File name for an export taken at `at`: `chat_history_YYYYMMDD_HHMMSS.txt`.
pub fn export_file_name(at: DateTime<Local>) -> String {
    format!("chat_history_{}.txt", at.format("%Y%m%d_%H%M%S"))
}
