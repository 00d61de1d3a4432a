//! Translation table aggregation.
//!
//! `TableBuilder` folds per-file contributions into one canonical
//! `resource -> language -> text` table. Folding is strictly sequential;
//! parallel parsing hands each worker's result to a single reduction loop,
//! so no aggregation state is ever shared across threads. `finish()`
//! freezes the table, runs gap detection, and returns an immutable
//! `TranslationTable` — the emitter never sees a builder.

use std::collections::{HashMap, HashSet};

use crate::{
    issues::Issue,
    parsers::json::{FlatEntries, NestedEntries},
    utils::{is_valid_enumerator, sanitize_language_token},
};

#[derive(Debug)]
struct TableEntry {
    key: String,
    /// `(language code, text)` in encounter order.
    translations: Vec<(String, String)>,
}

/// Accumulates translations in source encounter order.
#[derive(Debug, Default)]
pub struct TableBuilder {
    entries: Vec<TableEntry>,
    key_index: HashMap<String, usize>,
    /// Discovered language codes, in discovery order.
    languages: Vec<String>,
    rejected_keys: HashSet<String>,
    rejected_languages: HashSet<String>,
    issues: Vec<Issue>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one per-language file into the table.
    ///
    /// The language is discovered even when the file carries no entries, so
    /// an empty `fr-FR.json` still widens the coverage requirement for every
    /// key.
    pub fn fold_language_file(&mut self, source: &str, language: &str, entries: FlatEntries) {
        if !self.admit_language(language, source) {
            return;
        }
        for (key, text) in entries {
            self.insert(source, &key, language, text);
        }
    }

    /// Fold a combined `key -> language -> text` structure into the table.
    pub fn fold_combined(&mut self, source: &str, entries: NestedEntries) {
        for (key, translations) in entries {
            for (language, text) in translations {
                if !self.admit_language(&language, source) {
                    continue;
                }
                self.insert(source, &key, &language, text);
            }
        }
    }

    /// Freeze the table and run gap detection.
    ///
    /// For every key, the set of discovered languages minus the languages
    /// covering that key yields one warning, with the missing codes listed
    /// in discovery order.
    pub fn finish(mut self) -> (TranslationTable, Vec<Issue>) {
        for entry in &self.entries {
            let missing: Vec<String> = self
                .languages
                .iter()
                .filter(|language| {
                    !entry
                        .translations
                        .iter()
                        .any(|(covered, _)| covered == *language)
                })
                .cloned()
                .collect();

            if !missing.is_empty() {
                self.issues.push(Issue::missing_translation(&entry.key, &missing));
            }
        }

        let table = TranslationTable {
            entries: self
                .entries
                .into_iter()
                .map(|entry| (entry.key, entry.translations))
                .collect(),
            languages: self.languages,
        };
        (table, self.issues)
    }

    /// Record one `(key, language) -> text` pair; the first write wins.
    fn insert(&mut self, source: &str, key: &str, language: &str, text: String) {
        if self.rejected_keys.contains(key) {
            return;
        }
        if !is_valid_enumerator(key) {
            self.issues.push(Issue::invalid_key(key, source));
            self.rejected_keys.insert(key.to_string());
            return;
        }

        let index = match self.key_index.get(key) {
            Some(index) => *index,
            None => {
                self.entries.push(TableEntry {
                    key: key.to_string(),
                    translations: Vec::new(),
                });
                let index = self.entries.len() - 1;
                self.key_index.insert(key.to_string(), index);
                index
            }
        };

        let entry = &mut self.entries[index];
        if entry.translations.iter().any(|(code, _)| code == language) {
            self.issues
                .push(Issue::duplicate_definition(key, language, source));
            return;
        }
        entry.translations.push((language.to_string(), text));
    }

    /// Register a language code, validating its enumerator token.
    ///
    /// A code whose sanitized token is unusable, or collides with the token
    /// of an already-discovered language, is rejected with one warning.
    fn admit_language(&mut self, code: &str, source: &str) -> bool {
        if self.languages.iter().any(|known| known == code) {
            return true;
        }
        if self.rejected_languages.contains(code) {
            return false;
        }

        let token = sanitize_language_token(code);
        let collides = self
            .languages
            .iter()
            .any(|known| sanitize_language_token(known) == token);
        if !is_valid_enumerator(&token) || collides {
            self.issues.push(Issue::invalid_language(code, source));
            self.rejected_languages.insert(code.to_string());
            return false;
        }

        self.languages.push(code.to_string());
        true
    }
}

/// The frozen aggregation result consumed by the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    entries: Vec<(String, Vec<(String, String)>)>,
    languages: Vec<String>,
}

impl TranslationTable {
    /// `(key, translations)` pairs in table order.
    pub fn entries(&self) -> &[(String, Vec<(String, String)>)] {
        &self.entries
    }

    /// Discovered language codes in discovery order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn get(&self, key: &str, language: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)?
            .1
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, text)| text.as_str())
    }

    pub fn resource_count(&self) -> usize {
        self.entries.len()
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
