use std::env;
use std::path::PathBuf;

pub const DEFAULT_USERNAME: &str = "Anonymous";
pub const SNIPPETS_FILE: &str = "snippets.json";
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

/// Who gets credited on the leaderboard, resolved once at session
/// construction instead of read ambiently from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct UserConfig {
    /// Explicit name; overrides the fallback when set.
    pub username: Option<String>,
    /// Fallback literal used when no name is known.
    pub default_username: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            username: None,
            default_username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl UserConfig {
    /// `TYPEDASH_USER` wins over the login name in `USER`.
    pub fn from_env() -> Self {
        let username = env::var("TYPEDASH_USER")
            .ok()
            .or_else(|| env::var("USER").ok())
            .filter(|name| !name.trim().is_empty());
        Self {
            username,
            ..Default::default()
        }
    }

    pub fn with_username(name: impl Into<String>) -> Self {
        Self {
            username: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn resolve(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.default_username)
    }
}

/// Snippet source location: `TYPEDASH_SNIPPETS` or `snippets.json` in
/// the working directory.
pub fn snippets_path() -> PathBuf {
    env::var("TYPEDASH_SNIPPETS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(SNIPPETS_FILE))
}

/// Leaderboard location: `TYPEDASH_LEADERBOARD` or `leaderboard.json`
/// in the working directory.
pub fn leaderboard_path() -> PathBuf {
    env::var("TYPEDASH_LEADERBOARD")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(LEADERBOARD_FILE))
}
