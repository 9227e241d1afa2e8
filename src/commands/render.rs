//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{RenderConfig, resolve_layout_params};
use crate::error::OrbitError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, OrbitError> {
        match command {
            Commands::Render {
                input,
                layout,
                format,
                show_positions,
                show_kinds,
            } => {
                let params =
                    resolve_layout_params(layout.layout_config.as_deref(), &layout.overrides())?;

                RenderConfig::builder()
                    .with_source(input.source())
                    .with_output(input.output)
                    .with_params(params)
                    .with_format(format)
                    .with_show_positions(show_positions)
                    .with_show_kinds(show_kinds)
                    .build()
            }
            _ => Err(OrbitError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command for text visualizations
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
