use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Ranked history is bounded; anything past this is discarded on write.
pub const MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user: String,
    pub wpm: f64,
    pub accuracy: f64,
    pub time: f64,
}

impl LeaderboardEntry {
    /// Metrics are stored rounded to two decimals.
    pub fn new(user: impl Into<String>, wpm: f64, accuracy: f64, time: f64) -> Self {
        Self {
            user: user.into(),
            wpm: round2(wpm),
            accuracy: round2(accuracy),
            time: round2(time),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Persistent, bounded, rank-sorted history of past results.
///
/// `record` is a read-modify-write with no cross-process protection;
/// a single local user and process at a time is assumed.
pub trait LeaderboardStore {
    /// Current ranked entries; empty when nothing has been persisted.
    fn load(&self) -> Vec<LeaderboardEntry>;

    /// Append an entry, re-rank, truncate to [`MAX_ENTRIES`], persist,
    /// and return the resulting sequence.
    fn record(&self, entry: LeaderboardEntry) -> io::Result<Vec<LeaderboardEntry>>;
}

fn rank(mut entries: Vec<LeaderboardEntry>, entry: LeaderboardEntry) -> Vec<LeaderboardEntry> {
    entries.push(entry);
    // stable sort: equal wpm keeps prior relative order
    entries.sort_by(|a, b| b.wpm.partial_cmp(&a.wpm).unwrap_or(Ordering::Equal));
    entries.truncate(MAX_ENTRIES);
    entries
}

/// JSON-file backed store, pretty-printed on every write.
#[derive(Debug, Clone)]
pub struct FileLeaderboardStore {
    path: PathBuf,
}

impl FileLeaderboardStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStore for FileLeaderboardStore {
    fn load(&self) -> Vec<LeaderboardEntry> {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    // malformed data is discarded, but not silently
                    eprintln!(
                        "warning: ignoring malformed leaderboard at {}: {}",
                        self.path.display(),
                        err
                    );
                    Vec::new()
                }
            },
            // absent file is just an empty leaderboard
            Err(_) => Vec::new(),
        }
    }

    fn record(&self, entry: LeaderboardEntry) -> io::Result<Vec<LeaderboardEntry>> {
        let entries = rank(self.load(), entry);
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_vec_pretty(&entries).unwrap_or_default();
        fs::write(&self.path, data)?;
        Ok(entries)
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryLeaderboardStore {
    entries: RefCell<Vec<LeaderboardEntry>>,
}

impl MemoryLeaderboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
        }
    }
}

impl LeaderboardStore for MemoryLeaderboardStore {
    fn load(&self) -> Vec<LeaderboardEntry> {
        self.entries.borrow().clone()
    }

    fn record(&self, entry: LeaderboardEntry) -> io::Result<Vec<LeaderboardEntry>> {
        let ranked = rank(self.entries.borrow().clone(), entry);
        *self.entries.borrow_mut() = ranked.clone();
        Ok(ranked)
    }
}
