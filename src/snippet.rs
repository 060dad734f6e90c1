use rand::seq::SliceRandom;
use std::fs;
use std::path::Path;

use crate::error::{Result, TypedashError};

/// The candidate exercise texts, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetSet {
    snippets: Vec<String>,
}

impl SnippetSet {
    /// Build a set from an in-memory collection, rejecting empty ones
    /// up front so selection can never index out of bounds.
    pub fn new(snippets: Vec<String>) -> Result<Self> {
        if snippets.is_empty() {
            return Err(TypedashError::NoSnippets);
        }
        Ok(Self { snippets })
    }

    /// Load a JSON array of strings. Missing or malformed files are
    /// fatal startup errors with the offending path in the message.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| TypedashError::SnippetRead {
            path: path.to_path_buf(),
            source,
        })?;
        let snippets = serde_json::from_str(&raw).map_err(|source| TypedashError::SnippetParse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(snippets)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Uniformly random selection over the set.
    pub fn pick_random(&self) -> &str {
        let mut rng = rand::thread_rng();
        // the constructor guarantees at least one snippet
        self.snippets.choose(&mut rng).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn empty_collection_fails_fast() {
        assert_matches!(SnippetSet::new(vec![]), Err(TypedashError::NoSnippets));
    }

    #[test]
    fn pick_random_returns_a_member() {
        let set = SnippetSet::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();

        for _ in 0..50 {
            let picked = set.pick_random();
            assert!(["a", "b", "c"].contains(&picked));
        }
    }

    #[test]
    fn single_snippet_is_always_picked() {
        let set = SnippetSet::new(vec!["only".into()]).unwrap();
        assert_eq!(set.pick_random(), "only");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn load_reads_a_json_array_of_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"["print(1)", "let x = 2;"]"#).unwrap();

        let set = SnippetSet::load(&path).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = SnippetSet::load(&path).unwrap_err();
        assert_matches!(err, TypedashError::SnippetRead { .. });
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn load_malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = SnippetSet::load(&path).unwrap_err();
        assert_matches!(err, TypedashError::SnippetParse { .. });
    }

    #[test]
    fn load_empty_array_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();

        assert_matches!(SnippetSet::load(&path), Err(TypedashError::NoSnippets));
    }
}
