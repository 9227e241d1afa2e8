//! Command executors that handle the actual logic for each command

pub mod build;
pub mod layout;
pub mod render;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use crate::config::PayloadSource;
use crate::payload::RelationshipPayload;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

fn load_payload(source: &PayloadSource) -> Result<RelationshipPayload> {
    let payload = source
        .load()
        .wrap_err_with(|| format!("Failed to load payload from {}", source.name()))?;

    info!(
        source = %source.name(),
        relationships = payload.relationship_count(),
        "Loaded relationship payload"
    );

    if payload.subject.is_none() {
        eprintln!(
            "{} Payload has no subject service, the graph will be empty",
            style("ℹ").blue()
        );
    }

    Ok(payload)
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => Ok(Box::new(BufWriter::new(
            File::create(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to create output file '{}'", path.display()))?,
        ))),
        None => Ok(Box::new(io::stdout())),
    }
}

fn finish_output(mut writer: Box<dyn Write>, output: Option<&Path>, what: &str) -> Result<()> {
    writer
        .flush()
        .into_diagnostic()
        .wrap_err("Failed to flush output")?;

    if let Some(path) = output {
        eprintln!(
            "{} {} written to {}",
            style("✓").green(),
            what,
            style(path.display()).bold()
        );
    }

    Ok(())
}
