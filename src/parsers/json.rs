//! JSON resource file parsing.
//!
//! Two shapes are recognized: a flat `key -> text` object (one file per
//! language) and a nested `key -> language -> text` object (one combined
//! file). Entries are returned as ordered pairs so the document order of the
//! file survives all the way to emission.

use std::{fs, path::Path};

use serde_json::Value;

use crate::issues::Issue;

/// `key -> text` pairs from a per-language file, in document order.
pub type FlatEntries = Vec<(String, String)>;

/// `key -> (language -> text)` pairs from a combined file, in document order.
pub type NestedEntries = Vec<(String, Vec<(String, String)>)>;

/// A parse failure before it is attached to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub line: usize,
    pub col: usize,
    pub message: String,
}

impl ParseFailure {
    fn syntax(error: &serde_json::Error) -> Self {
        Self {
            line: error.line().max(1),
            col: error.column().max(1),
            message: error.to_string(),
        }
    }

    fn structural(message: String) -> Self {
        Self {
            line: 1,
            col: 1,
            message,
        }
    }

    /// Attach file identity and the offending source line.
    pub fn into_issue(self, path: &Path, content: Option<&str>) -> Issue {
        let source_line = content
            .and_then(|text| text.lines().nth(self.line.saturating_sub(1)))
            .map(str::to_string);
        Issue::parse_error(
            &path.display().to_string(),
            self.line,
            self.col,
            &self.message,
            source_line,
        )
    }
}

/// Parse a per-language file: a JSON object whose values are all strings.
pub fn parse_language_file(path: &Path) -> Result<FlatEntries, Issue> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            return Err(
                ParseFailure::structural(format!("failed to read: {}", error))
                    .into_issue(path, None),
            );
        }
    };
    parse_flat(&content).map_err(|failure| failure.into_issue(path, Some(&content)))
}

/// Parse a combined file: a JSON object of objects of strings.
pub fn parse_combined_file(path: &Path) -> Result<NestedEntries, Issue> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            return Err(
                ParseFailure::structural(format!("failed to read: {}", error))
                    .into_issue(path, None),
            );
        }
    };
    parse_nested(&content).map_err(|failure| failure.into_issue(path, Some(&content)))
}

pub fn parse_flat(content: &str) -> Result<FlatEntries, ParseFailure> {
    let json: Value = serde_json::from_str(content).map_err(|e| ParseFailure::syntax(&e))?;

    let Value::Object(map) = json else {
        return Err(ParseFailure::structural(
            "expected a JSON object of translations".to_string(),
        ));
    };

    let mut entries = FlatEntries::with_capacity(map.len());
    for (key, value) in map {
        let Value::String(text) = value else {
            return Err(ParseFailure::structural(format!(
                "expected a string value for \"{}\"",
                key
            )));
        };
        entries.push((key, text));
    }
    Ok(entries)
}

pub fn parse_nested(content: &str) -> Result<NestedEntries, ParseFailure> {
    let json: Value = serde_json::from_str(content).map_err(|e| ParseFailure::syntax(&e))?;

    let Value::Object(map) = json else {
        return Err(ParseFailure::structural(
            "expected a JSON object of translations".to_string(),
        ));
    };

    let mut entries = NestedEntries::with_capacity(map.len());
    for (key, value) in map {
        let Value::Object(languages) = value else {
            return Err(ParseFailure::structural(format!(
                "expected a language object for \"{}\"",
                key
            )));
        };

        let mut translations = Vec::with_capacity(languages.len());
        for (language, text) in languages {
            let Value::String(text) = text else {
                return Err(ParseFailure::structural(format!(
                    "expected a string value for \"{}\" in \"{}\"",
                    language, key
                )));
            };
            translations.push((language, text));
        }
        entries.push((key, translations));
    }
    Ok(entries)
}
