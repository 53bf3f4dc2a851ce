//! SHA-256 digests of document files
//!
//! Document formats are hashed over their extracted text (UTF-8 encoded)
//! so the digest tracks content rather than container bytes; everything
//! else is hashed over the raw file bytes.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::Result;

mod extract;

pub use extract::{docx_text, pdf_text};

const CHUNK_SIZE: usize = 4096;

/// A computed digest, ready for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct FileDigest {
    pub path: PathBuf,
    pub sha256: String,
}

/// Hex-encoded SHA-256 of UTF-8 text.
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Hex-encoded SHA-256 of a file, dispatched on its extension: `.docx`
/// and `.pdf` hash their extracted text, anything else hashes raw bytes.
pub fn hash_file(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("docx") => {
            debug!(path = %path.display(), "hashing extracted docx text");
            Ok(hash_text(&docx_text(path)?))
        }
        Some("pdf") => {
            debug!(path = %path.display(), "hashing extracted pdf text");
            Ok(hash_text(&pdf_text(path)?))
        }
        _ => hash_raw(path),
    }
}

/// Hashes raw file bytes in fixed-size chunks.
fn hash_raw(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}
