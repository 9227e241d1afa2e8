//! Render command executor

use console::style;
use miette::{Result, WrapErr};

use super::{finish_output, load_payload, open_output};
use crate::cli::RenderFormat;
use crate::config::RenderConfig;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::layout::{PositionedGraph, RadialLayout};

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} service graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let payload = load_payload(&config.source)?;
        let positioned = PositionedGraph::from_payload(&payload, &RadialLayout::new(config.params));
        positioned
            .graph()
            .validate()
            .wrap_err("Refusing to render an inconsistent graph")?;

        let renderer = GraphRenderer::new(config.show_positions, config.show_kinds);
        let mut writer = open_output(config.output.as_deref())?;

        match config.format {
            RenderFormat::Ascii => {
                renderer
                    .render_ascii(&positioned, writer.as_mut())
                    .wrap_err("Failed to render ASCII graph")?;
            }
            RenderFormat::Mermaid => {
                renderer
                    .render_mermaid(&positioned, writer.as_mut())
                    .wrap_err("Failed to render Mermaid graph")?;
            }
            RenderFormat::Dot => {
                renderer
                    .render_dot(&positioned, writer.as_mut())
                    .wrap_err("Failed to render DOT graph")?;
            }
        }

        finish_output(writer, config.output.as_deref(), "Graph")
    }
}
