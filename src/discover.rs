//! Input discovery and mode classification.
//!
//! A candidate file contributes in exactly one of two modes:
//!
//! - per-language: the file name matches the locale pattern
//!   (`de-DE.json`, `de-DE.extra.json`) and the file holds a flat
//!   `key -> text` object for that one language;
//! - combined: a single `localization.json` holds the whole
//!   `key -> language -> text` structure.
//!
//! Combined mode takes precedence when both are present. Files matching
//! neither shape are silently ignored.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

/// File name of the combined input, compared ASCII case-insensitively.
pub const COMBINED_FILE_NAME: &str = "localization.json";

static LANGUAGE_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]{2}-[A-Z]{2})(?:\.[A-Za-z0-9_-]+)*\.json$")
        .expect("locale file pattern is a valid regex")
});

/// A per-language candidate: the file plus the language its name declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFile {
    pub path: PathBuf,
    pub language: String,
}

/// The classified input set for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSet {
    /// One combined file supplies the whole table.
    Combined(PathBuf),
    /// Each file supplies one language, in the given fold order.
    PerLanguage(Vec<LanguageFile>),
    /// Nothing usable was found.
    Empty,
}

/// Extract the language code a file name declares, if any.
///
/// Examples:
/// - "de-DE.json" -> Some("de-DE")
/// - "de-DE.extra.json" -> Some("de-DE")
/// - "messages.json" -> None
pub fn language_from_file_name(name: &str) -> Option<String> {
    LANGUAGE_FILE
        .captures(name)
        .map(|captures| captures[1].to_string())
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

/// Classify a set of candidate paths into an input mode.
///
/// The paths are folded in the order given, so callers wanting reproducible
/// output should pass them sorted. If several combined files appear, the
/// first wins.
pub fn classify(paths: &[PathBuf]) -> InputSet {
    if let Some(combined) = paths.iter().find(|path| {
        file_name(path).is_some_and(|name| name.eq_ignore_ascii_case(COMBINED_FILE_NAME))
    }) {
        return InputSet::Combined(combined.clone());
    }

    let language_files: Vec<LanguageFile> = paths
        .iter()
        .filter_map(|path| {
            let language = language_from_file_name(file_name(path)?)?;
            Some(LanguageFile {
                path: path.clone(),
                language,
            })
        })
        .collect();

    if language_files.is_empty() {
        InputSet::Empty
    } else {
        InputSet::PerLanguage(language_files)
    }
}
