use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::errors::AnalysisError;

// @module: Input acquisition for the analyzer

/// Extensions accepted as plain text input
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "csv", "md"];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Whether the file carries one of the nominal text extensions
    pub fn has_text_extension<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.as_str()))
    }

    /// Read a file as raw bytes
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
        fs::read(&path).with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Read an uploaded text file.
    ///
    /// Every extension is read as plain text; unexpected ones only log a
    /// warning. Invalid UTF-8 is an error.
    pub fn read_text_input<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        if !Self::has_text_extension(path) {
            warn!(
                "File {:?} does not have a {} extension, reading it as plain text",
                path,
                TEXT_EXTENSIONS.join("/")
            );
        }
        let bytes = Self::read_bytes(path)?;
        let text = decode_text(&bytes).with_context(|| format!("Failed to decode file: {:?}", path))?;
        Ok(text)
    }

    /// Read all of standard input
    pub fn read_stdin() -> Result<String> {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read standard input")?;
        Ok(decode_text(&bytes)?)
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))
    }
}

/// Decode a UTF-8 payload, dropping a leading byte order mark
pub fn decode_text(bytes: &[u8]) -> Result<String, AnalysisError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| AnalysisError::InputDecodeFailure {
            valid_up_to: e.valid_up_to(),
        })
}
