//! Program image loading.
//!
//! Turns program files into the word vectors the simulator loads at a base
//! address. Two formats are supported:
//! 1. **Raw images:** Big-endian 32-bit words, the same byte order as the
//!    memory they land in.
//! 2. **Hex listings:** One word per line as hexadecimal text, with blank
//!    lines and `#` comments ignored — the format assemblers for teaching
//!    pipelines commonly emit.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors from reading or parsing a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read at all.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path as given by the caller.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A raw image whose length is not a whole number of words.
    #[error("{path}: image size {size} is not a multiple of 4")]
    RaggedImage {
        /// Path as given by the caller.
        path: String,
        /// Actual file size in bytes.
        size: usize,
    },

    /// A hex listing line that does not parse as a 32-bit word.
    #[error("{path}:{line}: invalid instruction word {text:?}")]
    BadWord {
        /// Path as given by the caller.
        path: String,
        /// One-based line number.
        line: usize,
        /// The offending text.
        text: String,
    },
}

/// Loads a program image, choosing the format by file extension.
///
/// `.hex` and `.txt` files are parsed as hex listings; anything else is
/// treated as a raw big-endian image.
///
/// # Errors
///
/// See [`LoadError`].
pub fn load_image(path: &Path) -> Result<Vec<u32>, LoadError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("hex" | "txt") => load_hex(path),
        _ => load_raw(path),
    }
}

/// Loads a raw image of big-endian words.
///
/// # Errors
///
/// [`LoadError::Io`] on read failure, [`LoadError::RaggedImage`] when the
/// byte count is not a multiple of 4.
pub fn load_raw(path: &Path) -> Result<Vec<u32>, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    if bytes.len() % 4 != 0 {
        return Err(LoadError::RaggedImage {
            path: path.display().to_string(),
            size: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Loads a hex listing: one word per line, `#` starts a comment, blank
/// lines are skipped. Words may carry an `0x` prefix.
///
/// # Errors
///
/// [`LoadError::Io`] on read failure, [`LoadError::BadWord`] for a line
/// that is not a 32-bit hexadecimal word.
pub fn load_hex(path: &Path) -> Result<Vec<u32>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut words = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let word = line.split('#').next().unwrap_or("").trim();
        if word.is_empty() {
            continue;
        }
        let digits = word.strip_prefix("0x").unwrap_or(word);
        let parsed = u32::from_str_radix(digits, 16).map_err(|_| LoadError::BadWord {
            path: path.display().to_string(),
            line: i + 1,
            text: word.to_owned(),
        })?;
        words.push(parsed);
    }
    Ok(words)
}
