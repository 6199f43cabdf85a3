//! Writing exported transcripts to disk.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use parley_ai::export_file_name;
use tracing::info;

/// Write `text` to `dir/chat_history_<timestamp>.txt`, creating `dir` if needed.
pub fn write_export(dir: &Path, text: &str, at: DateTime<Local>) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(at));
    std::fs::write(&path, text)?;
    info!("exported transcript to {}", path.display());
    Ok(path)
}
