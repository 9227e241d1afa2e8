//! Command implementations for the service-orbit CLI
//!
//! - build: Build the graph model from a relationship payload
//! - layout: Build the graph and compute positions
//! - render: Render the laid-out graph as ASCII, Mermaid or DOT

pub mod build;
pub mod layout;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Build { .. } => build::execute_build_command(command),
        Commands::Layout { .. } => layout::execute_layout_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
