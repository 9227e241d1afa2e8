//! Layout command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{LayoutCommandConfig, resolve_layout_params};
use crate::error::OrbitError;

impl FromCommand for LayoutCommandConfig {
    fn from_command(command: Commands) -> Result<Self, OrbitError> {
        match command {
            Commands::Layout { input, layout } => {
                let params =
                    resolve_layout_params(layout.layout_config.as_deref(), &layout.overrides())?;

                LayoutCommandConfig::builder()
                    .with_source(input.source())
                    .with_output(input.output)
                    .with_params(params)
                    .build()
            }
            _ => Err(OrbitError::ConfigurationError {
                message: "Invalid command type for LayoutCommandConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LayoutCommandConfig);

/// Execute the layout command, emitting the positioned graph as JSON
pub fn execute_layout_command(command: Commands) -> Result<()> {
    let config = LayoutCommandConfig::from_command(command)
        .wrap_err("Failed to parse layout command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::layout::LayoutExecutor;
    LayoutExecutor::execute(config)
}
