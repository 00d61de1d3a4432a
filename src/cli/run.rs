//! Command dispatch and the host-side half of each command.
//!
//! This layer is the "host" of the core pipeline: it resolves
//! configuration, enumerates candidate files, invokes `pipeline::run`, and
//! persists the artifact. Everything user-facing (printing, exit codes)
//! stays in the sibling modules.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::args::{Arguments, CheckCommand, Command, CommonArgs, GenerateCommand};
use crate::{
    config::{CONFIG_FILE_NAME, Config, default_config_json},
    issues::Issue,
    pipeline::{self, GenerateOptions},
};

/// What one command run produced, ready for reporting.
#[derive(Debug)]
pub struct RunResult {
    pub issues: Vec<Issue>,
    /// Candidate files handed to the pipeline, in fold order.
    pub candidates: Vec<PathBuf>,
    pub summary: Summary,
}

#[derive(Debug)]
pub enum Summary {
    Generated {
        output: PathBuf,
        resources: usize,
        languages: usize,
    },
    Checked {
        resources: usize,
        languages: usize,
    },
    /// A fatal diagnostic left nothing to write.
    NothingGenerated,
    InitCreated,
}

pub fn run(Arguments { command }: Arguments) -> Result<RunResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(RunResult {
                issues: Vec::new(),
                candidates: Vec::new(),
                summary: Summary::InitCreated,
            })
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn generate(cmd: GenerateCommand) -> Result<RunResult> {
    let config = Config::load(Path::new("."))?;
    let output = cmd
        .args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_file));

    let (candidates, options) = prepare(&cmd.args.common, &config)?;
    let result = pipeline::run(&candidates, &options);

    let summary = match result.artifact {
        Some(artifact) => {
            write_artifact(&output, &artifact.source)?;
            Summary::Generated {
                output,
                resources: artifact.resource_count,
                languages: artifact.language_count,
            }
        }
        None => Summary::NothingGenerated,
    };

    Ok(RunResult {
        issues: result.issues,
        candidates,
        summary,
    })
}

fn check(cmd: CheckCommand) -> Result<RunResult> {
    let config = Config::load(Path::new("."))?;
    let (candidates, options) = prepare(&cmd.args.common, &config)?;
    let result = pipeline::run(&candidates, &options);

    let summary = match result.artifact {
        Some(artifact) => Summary::Checked {
            resources: artifact.resource_count,
            languages: artifact.language_count,
        },
        None => Summary::NothingGenerated,
    };

    Ok(RunResult {
        issues: result.issues,
        candidates,
        summary,
    })
}

/// Merge CLI overrides into the config and enumerate candidate files.
fn prepare(common: &CommonArgs, config: &Config) -> Result<(Vec<PathBuf>, GenerateOptions)> {
    let messages_root = common
        .messages_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.messages_root));
    let module_name = common
        .module_name
        .clone()
        .unwrap_or_else(|| config.module_name.clone());

    let candidates = collect_candidates(&messages_root)?;
    let options = GenerateOptions {
        module_name,
        combined_file: config.combined_file.as_ref().map(PathBuf::from),
    };
    Ok((candidates, options))
}

/// Enumerate the files in the messages root, sorted by path so the fold
/// order is reproducible.
fn collect_candidates(messages_root: &Path) -> Result<Vec<PathBuf>> {
    if !messages_root.exists() {
        anyhow::bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your {} 'messagesRoot' setting.",
            messages_root.display(),
            CONFIG_FILE_NAME
        );
    }

    if !messages_root.is_dir() {
        anyhow::bail!("'{}' is not a directory.", messages_root.display());
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(messages_root)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            candidates.push(entry.path());
        }
    }
    candidates.sort();
    Ok(candidates)
}

fn write_artifact(output: &Path, source: &str) -> Result<()> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, source)
        .with_context(|| format!("Failed to write artifact: {}", output.display()))
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
