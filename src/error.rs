use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypedashError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot read snippets from {path}: {source}")]
    SnippetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed snippet file {path}: {source}")]
    SnippetParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no snippets available")]
    NoSnippets,
}

pub type Result<T> = std::result::Result<T, TypedashError>;
