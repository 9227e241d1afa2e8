//! Build command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::BuildConfig;
use crate::error::OrbitError;

impl FromCommand for BuildConfig {
    fn from_command(command: Commands) -> Result<Self, OrbitError> {
        match command {
            Commands::Build { input, validate } => BuildConfig::builder()
                .with_source(input.source())
                .with_output(input.output)
                .with_validate(validate)
                .build(),
            _ => Err(OrbitError::ConfigurationError {
                message: "Invalid command type for BuildConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(BuildConfig);

/// Execute the build command, emitting the graph model as JSON
pub fn execute_build_command(command: Commands) -> Result<()> {
    let config = BuildConfig::from_command(command)
        .wrap_err("Failed to parse build command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::build::BuildExecutor;
    BuildExecutor::execute(config)
}
