//! Diagnostic types shared by the parser, aggregator and pipeline.
//!
//! Issues are plain data: the core never prints them and never aborts on
//! them. The CLI layer decides how to render each issue and which exit
//! status the whole run maps to.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    ParseError,
    DuplicateDefinition,
    MissingTranslation,
    InvalidIdentifier,
    NoInput,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ParseError => write!(f, "parse-error"),
            Rule::DuplicateDefinition => write!(f, "duplicate-definition"),
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::InvalidIdentifier => write!(f, "invalid-identifier"),
            Rule::NoInput => write!(f, "no-input"),
        }
    }
}

/// One diagnostic surfaced during parsing, aggregation or emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file_path: Option<String>,
    pub line: Option<usize>,
    pub col: Option<usize>,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    /// The offending source line, shown with a caret in the report.
    pub source_line: Option<String>,
}

impl Issue {
    pub fn parse_error(
        file_path: &str,
        line: usize,
        col: usize,
        error: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: Some(file_path.to_string()),
            line: Some(line),
            col: Some(col),
            message: format!("failed to parse: {}", error),
            severity: Severity::Error,
            rule: Rule::ParseError,
            source_line,
        }
    }

    pub fn duplicate_definition(key: &str, language: &str, file_path: &str) -> Self {
        Self {
            file_path: Some(file_path.to_string()),
            line: None,
            col: None,
            message: format!("{} already has a translation for {}", key, language),
            severity: Severity::Warning,
            rule: Rule::DuplicateDefinition,
            source_line: None,
        }
    }

    pub fn missing_translation(key: &str, missing: &[String]) -> Self {
        Self {
            file_path: None,
            line: None,
            col: None,
            message: format!("{} is missing translations for {}", key, missing.join(", ")),
            severity: Severity::Warning,
            rule: Rule::MissingTranslation,
            source_line: None,
        }
    }

    pub fn invalid_key(key: &str, file_path: &str) -> Self {
        Self {
            file_path: Some(file_path.to_string()),
            line: None,
            col: None,
            message: format!("{} is not usable as a resource identifier", key),
            severity: Severity::Warning,
            rule: Rule::InvalidIdentifier,
            source_line: None,
        }
    }

    pub fn invalid_language(language: &str, file_path: &str) -> Self {
        Self {
            file_path: Some(file_path.to_string()),
            line: None,
            col: None,
            message: format!("{} is not usable as a language identifier", language),
            severity: Severity::Warning,
            rule: Rule::InvalidIdentifier,
            source_line: None,
        }
    }

    pub fn no_input(detail: &str) -> Self {
        Self {
            file_path: None,
            line: None,
            col: None,
            message: format!("no usable translation input: {}", detail),
            severity: Severity::Error,
            rule: Rule::NoInput,
            source_line: None,
        }
    }
}

pub fn error_count(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .count()
}

pub fn warning_count(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter(|issue| issue.severity == Severity::Warning)
        .count()
}
