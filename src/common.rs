//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::config::{LayoutOverrides, PayloadSource};

/// Payload input and output destination shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Relationship payload JSON file (`-` reads stdin)
    #[arg(
        value_name = "PAYLOAD",
        default_value = crate::constants::input::STDIN_MARKER,
        env = "SERVICE_ORBIT_INPUT"
    )]
    pub input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "SERVICE_ORBIT_OUTPUT")]
    pub output: Option<PathBuf>,
}

impl InputArgs {
    pub fn source(&self) -> PayloadSource {
        PayloadSource::from_arg(&self.input)
    }
}

/// Layout parameter arguments
///
/// Every flag overrides the matching key from `--layout-config`.
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// TOML file with a `[layout]` table
    #[arg(long, value_name = "FILE", env = "SERVICE_ORBIT_LAYOUT_CONFIG")]
    pub layout_config: Option<PathBuf>,

    /// Horizontal canvas center
    #[arg(long, env = "SERVICE_ORBIT_CENTER_X")]
    pub center_x: Option<f64>,

    /// Vertical canvas center
    #[arg(long, env = "SERVICE_ORBIT_CENTER_Y")]
    pub center_y: Option<f64>,

    /// Orbit radius
    #[arg(long, env = "SERVICE_ORBIT_RADIUS")]
    pub radius: Option<f64>,

    /// Extra distance pushing providers left and consumers right
    #[arg(long, env = "SERVICE_ORBIT_HORIZONTAL_OFFSET")]
    pub horizontal_offset: Option<f64>,

    /// Vertical squash factor, between 0 and 1
    #[arg(long, env = "SERVICE_ORBIT_VERTICAL_COMPRESSION")]
    pub vertical_compression: Option<f64>,

    /// Distance of edge labels from their edge
    #[arg(long, env = "SERVICE_ORBIT_LABEL_OFFSET")]
    pub label_offset: Option<f64>,

    /// Height of self-loop labels above their node
    #[arg(long, env = "SERVICE_ORBIT_SELF_LOOP_OFFSET")]
    pub self_loop_offset: Option<f64>,
}

impl LayoutArgs {
    pub fn overrides(&self) -> LayoutOverrides {
        LayoutOverrides {
            center_x: self.center_x,
            center_y: self.center_y,
            radius: self.radius,
            horizontal_offset: self.horizontal_offset,
            vertical_compression: self.vertical_compression,
            label_offset: self.label_offset,
            self_loop_offset: self.self_loop_offset,
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::OrbitError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::OrbitError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::OrbitError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
