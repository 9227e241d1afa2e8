//! Build command executor

use std::io::Write;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{finish_output, load_payload, open_output};
use crate::config::BuildConfig;
use crate::executors::CommandExecutor;
use crate::graph;

pub struct BuildExecutor;

impl CommandExecutor for BuildExecutor {
    type Config = BuildConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Building service graph from {}...",
            style("🔍").cyan(),
            config.source.name()
        );

        let payload = load_payload(&config.source)?;
        let graph = graph::build(&payload);

        if config.validate {
            graph.validate().wrap_err("Built graph failed validation")?;
        }

        let mut writer = open_output(config.output.as_deref())?;
        serde_json::to_writer_pretty(&mut writer, &graph)
            .into_diagnostic()
            .wrap_err("Failed to write graph JSON")?;
        writeln!(writer).into_diagnostic()?;

        finish_output(writer, config.output.as_deref(), "Graph")
    }
}
