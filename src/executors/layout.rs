//! Layout command executor

use std::io::Write;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{finish_output, load_payload, open_output};
use crate::config::LayoutCommandConfig;
use crate::executors::CommandExecutor;
use crate::layout::{PositionedGraph, RadialLayout};

pub struct LayoutExecutor;

impl CommandExecutor for LayoutExecutor {
    type Config = LayoutCommandConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Laying out service graph from {}...",
            style("🪐").cyan(),
            config.source.name()
        );

        let payload = load_payload(&config.source)?;
        let positioned = PositionedGraph::from_payload(&payload, &RadialLayout::new(config.params));

        let json = positioned
            .to_json_pretty()
            .wrap_err("Failed to serialize positioned graph")?;

        let mut writer = open_output(config.output.as_deref())?;
        writeln!(writer, "{json}").into_diagnostic()?;

        finish_output(writer, config.output.as_deref(), "Layout")
    }
}
