use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Component;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("document not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a document body: a JSON array of components.
pub fn parse_components(json: &str) -> Result<Vec<Component>, IoError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a document body from a file.
pub fn load_components(path: &Path) -> Result<Vec<Component>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let json = fs::read_to_string(path)?;
    parse_components(&json)
}
