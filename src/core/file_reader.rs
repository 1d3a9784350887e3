//! Input reading
//!
//! Loads the input file once and exposes it line by line. Handles:
//! - Non-UTF-8 files (strict or lossy)
//! - Binary-looking files (warned about, still read)

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

/// Bytes inspected when sniffing for binary content
const BINARY_SNIFF_LEN: usize = 8192;

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingStrategy {
    /// Fail on invalid UTF-8
    Strict,
    /// Replace invalid sequences with U+FFFD
    #[default]
    Lossy,
}

impl std::str::FromStr for EncodingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(EncodingStrategy::Strict),
            "lossy" => Ok(EncodingStrategy::Lossy),
            _ => Err(format!("Unknown encoding strategy: {}", s)),
        }
    }
}

/// Configuration for file reading
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadConfig {
    pub encoding: EncodingStrategy,
}

/// Decoded input file
#[derive(Debug, Clone)]
pub struct SourceText {
    pub content: String,

    /// Size on disk in bytes
    pub size: u64,

    /// XXH3 of the raw bytes, lowercase hex
    pub hash: String,

    /// Whether lossy conversion was used
    pub lossy: bool,
}

impl SourceText {
    /// Lines without their terminators (`\n`, `\r\n` or a lone `\r`)
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            rest: &self.content,
        }
    }
}

/// Line iterator that also ends lines at a bare carriage return
///
/// A trailing terminator does not produce an empty last line.
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let line = &self.rest[..end];
                let skip = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[end + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Compute XXH3 of bytes as 16 hex digits
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Read and decode a file with the given configuration
pub fn read_source(path: &Path, config: &ReadConfig) -> Result<SourceText> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    let size = bytes.len() as u64;
    let hash = hash_bytes(&bytes);

    let check_len = std::cmp::min(BINARY_SNIFF_LEN, bytes.len());
    if bytes[..check_len].contains(&0) {
        log::warn!(
            "{} appears to be binary (contains null bytes)",
            path.display()
        );
    }

    let (content, lossy) = match String::from_utf8(bytes) {
        Ok(content) => (content, false),
        Err(err) => match config.encoding {
            EncodingStrategy::Strict => {
                bail!(
                    "{} contains invalid UTF-8 at byte {}",
                    path.display(),
                    err.utf8_error().valid_up_to()
                );
            }
            EncodingStrategy::Lossy => {
                log::warn!(
                    "Lossy UTF-8 conversion applied to {} (some characters replaced)",
                    path.display()
                );
                (String::from_utf8_lossy(err.as_bytes()).into_owned(), true)
            }
        },
    };

    log::debug!("read {} bytes from {}", size, path.display());

    Ok(SourceText {
        content,
        size,
        hash,
        lossy,
    })
}
