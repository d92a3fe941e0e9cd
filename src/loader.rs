use std::fs;
use std::path::Path;

use crate::TranslationMap;
use crate::error::{I18nError, I18nResult};

/// The set of supported translation resource formats.
///
/// Resolved once from the path's extension; everything else is rejected
/// up front rather than guessed from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFormat {
    /// A JSON object of phrase-key to template pairs (`.json`)
    Json,
    /// Line-oriented `key = value` pairs (`.properties`, `.ini`)
    Properties,
}

impl ResourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(ResourceFormat::Json),
            Some("properties") | Some("ini") => Some(ResourceFormat::Properties),
            _ => None,
        }
    }
}

/// Load a translation mapping from a single resource file
///
/// The extension selects the parser:
/// ```text
/// en-au.json        -> JSON object parser
/// en-au.properties  -> tolerant key=value parser
/// en-au.ini         -> tolerant key=value parser
/// ```
///
/// # Arguments
/// * `path` - Path to the translation resource
///
/// # Returns
/// A `TranslationMap` with one entry per phrase key
///
/// # Errors
/// - `ResourceNotFound` when the path does not exist
/// - `UnsupportedFormat` when the extension is none of `json`, `properties`, `ini`
/// - `ParseError` when the content cannot be parsed under the selected format
pub fn load_translations(path: &Path) -> I18nResult<TranslationMap> {
    if !path.exists() {
        return Err(I18nError::ResourceNotFound(path.display().to_string()));
    }

    let format = ResourceFormat::from_path(path).ok_or_else(|| {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_owned();
        I18nError::UnsupportedFormat(extension)
    })?;

    let bytes = fs::read(path).map_err(|e| {
        I18nError::ParseError(format!("failed to read '{}': {}", path.display(), e))
    })?;

    match format {
        ResourceFormat::Json => parse_json(&bytes, path),
        ResourceFormat::Properties => Ok(parse_properties(&bytes)),
    }
}

/// Parse a JSON object of string pairs, tolerating editor artifacts.
///
/// ASCII control bytes (0-31 and 127) and a leading UTF-8 byte-order-mark
/// are stripped before parsing; translation files are hand-edited and both
/// show up regularly. Anything but an object of strings is a `ParseError`.
fn parse_json(bytes: &[u8], path: &Path) -> I18nResult<TranslationMap> {
    let mut cleaned: Vec<u8> = bytes
        .iter()
        .copied()
        .filter(|byte| *byte >= 0x20 && *byte != 0x7f)
        .collect();
    if cleaned.starts_with(&[0xef, 0xbb, 0xbf]) {
        cleaned.drain(..3);
    }

    serde_json::from_slice(&cleaned)
        .map_err(|e| I18nError::ParseError(format!("invalid JSON in '{}': {}", path.display(), e)))
}

/// Parse line-oriented `key = value` pairs.
///
/// Deliberately tolerant: only lines with exactly one `=` count, everything
/// else is skipped, and whitespace is trimmed from both sides. Later
/// duplicates overwrite earlier ones.
fn parse_properties(bytes: &[u8]) -> TranslationMap {
    let content = String::from_utf8_lossy(bytes);
    let mut translations = TranslationMap::new();
    for line in content.lines() {
        let mut parts = line.split('=');
        if let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) {
            translations.with_message(key.trim(), value.trim());
        }
    }
    translations
}
