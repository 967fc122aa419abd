//! Parser module — dispatch by file extension.

pub mod docstring;
pub mod signature;
pub mod source;

use crate::model::Document;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Parse a source file into a Document based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<Document> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("py" | "pyi") => Ok(source::parse(content)),
        _ => Err(anyhow!("unsupported file type: {}", path.display())),
    }
}
