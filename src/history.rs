use chrono::Local;
use csv::WriterBuilder;
use directories::ProjectDirs;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::score::ScoreResult;

/// Default history location under the platform data directory, or
/// `None` when no project directory resolves (logging is then skipped).
pub fn history_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "typedash").map(|dirs| dirs.data_local_dir().join("history.csv"))
}

/// Append one scored session to the history log, emitting the header
/// when the file is first created.
pub fn append<P: AsRef<Path>>(path: P, user: &str, score: &ScoreResult) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let needs_header = !path.exists();

    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    if needs_header {
        writer.write_record(["date", "user", "wpm", "accuracy", "errors", "elapsed_secs"])?;
    }

    writer.write_record([
        Local::now().format("%c").to_string(),
        user.to_string(),
        format!("{:.2}", score.wpm),
        format!("{:.2}", score.accuracy),
        score.errors.to_string(),
        format!("{:.2}", score.elapsed_secs),
    ])?;
    writer.flush()?;

    Ok(())
}
