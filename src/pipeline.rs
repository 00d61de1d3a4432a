//! The aggregation and emission pipeline.
//!
//! `run` is the whole core: classify the candidate files, parse them
//! (per-language files in parallel), fold the results into the table in
//! input order, detect coverage gaps, and render the artifact. The caller
//! supplies the candidate paths and receives text plus diagnostics back;
//! nothing here prints, reads configuration, or terminates the process.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::{
    discover::{self, InputSet},
    emit,
    issues::Issue,
    parsers::json,
    table::TableBuilder,
};

/// Options the host passes into one pipeline run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Module name wrapping the generated items.
    pub module_name: String,
    /// Explicitly declared combined file; when set it must exist.
    pub combined_file: Option<PathBuf>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            module_name: "localizer".to_string(),
            combined_file: None,
        }
    }
}

/// The rendered artifact plus a little shape information for reporting.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub source: String,
    pub resource_count: usize,
    pub language_count: usize,
}

/// Everything one run produced. `artifact` is `None` exactly when a fatal
/// `no-input` diagnostic is present.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub artifact: Option<Artifact>,
    pub issues: Vec<Issue>,
}

/// Run the pipeline over `paths`, folding files in the order given.
///
/// Callers wanting reproducible output must pass the candidate paths in a
/// stable order; the CLI sorts them by path.
pub fn run(paths: &[PathBuf], options: &GenerateOptions) -> PipelineResult {
    let mut issues = Vec::new();
    let mut builder = TableBuilder::new();

    let inputs = if let Some(combined) = &options.combined_file {
        if combined.is_file() {
            InputSet::Combined(combined.clone())
        } else {
            issues.push(Issue::no_input(&format!(
                "the declared combined file {} could not be located",
                combined.display()
            )));
            return PipelineResult {
                artifact: None,
                issues,
            };
        }
    } else {
        discover::classify(paths)
    };

    match inputs {
        InputSet::Empty => {
            issues.push(Issue::no_input("no translation files were found"));
            return PipelineResult {
                artifact: None,
                issues,
            };
        }
        InputSet::Combined(path) => match json::parse_combined_file(&path) {
            Ok(entries) => builder.fold_combined(&path.display().to_string(), entries),
            Err(issue) => issues.push(issue),
        },
        InputSet::PerLanguage(files) => {
            // Parse on worker threads; the positional collect is the barrier
            // between parsing and the sequential fold below.
            let parsed: Vec<Result<json::FlatEntries, Issue>> = files
                .par_iter()
                .map(|file| json::parse_language_file(&file.path))
                .collect();

            for (file, result) in files.iter().zip(parsed) {
                match result {
                    Ok(entries) => builder.fold_language_file(
                        &file.path.display().to_string(),
                        &file.language,
                        entries,
                    ),
                    Err(issue) => issues.push(issue),
                }
            }
        }
    }

    let (table, fold_issues) = builder.finish();
    issues.extend(fold_issues);

    if table.is_empty() {
        issues.push(Issue::no_input("no usable translation data remained"));
        return PipelineResult {
            artifact: None,
            issues,
        };
    }

    let source = emit::render(&table, &options.module_name);
    PipelineResult {
        artifact: Some(Artifact {
            source,
            resource_count: table.resource_count(),
            language_count: table.language_count(),
        }),
        issues,
    }
}
