use clap::{Parser, Subcommand};

use crate::common::{InputArgs, LayoutArgs};

#[derive(Parser)]
#[command(
    name = "service-orbit",
    about = "🪐 Lay out a service's providers and consumers around it",
    long_about = "service-orbit turns the relationship payload of one service into a small \
                  dependency graph: the service in the middle, the services it consumes from \
                  on the left, the services consuming it on the right. Graphs can be emitted \
                  as JSON, with or without computed positions, or rendered as ASCII, Mermaid \
                  or Graphviz DOT.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the graph model from a relationship payload
    ///
    /// Emits the deduplicated nodes and edges as JSON, without positions.
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Fail if the built graph breaks node uniqueness or edge integrity
        #[arg(long, env = "SERVICE_ORBIT_VALIDATE")]
        validate: bool,
    },

    /// Build the graph and compute node positions and label anchors
    ///
    /// Emits the graph together with a position per node and an anchor per
    /// edge label as JSON.
    Layout {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render the laid-out graph as text
    #[command(
        long_about = "Render the laid-out graph as an ASCII tree, a Mermaid flowchart or a \
                      Graphviz DOT digraph. With --show-positions, computed coordinates are \
                      printed in the ASCII tree and pinned in DOT output (use `neato -n`)."
    )]
    Render {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Render format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_RENDER_FORMAT,
            env = "SERVICE_ORBIT_RENDER_FORMAT"
        )]
        format: RenderFormat,

        /// Include computed positions in the output
        #[arg(long, env = "SERVICE_ORBIT_SHOW_POSITIONS")]
        show_positions: bool,

        /// Include each service's kind next to its name
        #[arg(long, env = "SERVICE_ORBIT_SHOW_KINDS")]
        show_kinds: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderFormat {
    Ascii,
    Mermaid,
    Dot,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "service-orbit",
            "render",
            "payload.json",
            "--format",
            "mermaid",
            "--radius",
            "180",
            "--show-kinds",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                input,
                layout,
                format,
                show_positions,
                show_kinds,
            } => {
                assert_eq!(input.input, PathBuf::from("payload.json"));
                assert_eq!(layout.radius, Some(180.0));
                assert_eq!(format, RenderFormat::Mermaid);
                assert!(!show_positions);
                assert!(show_kinds);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_input_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["service-orbit", "build"]).unwrap();

        match cli.command {
            Commands::Build { input, validate } => {
                assert_eq!(input.input, PathBuf::from("-"));
                assert!(!validate);
            }
            _ => panic!("expected build command"),
        }
    }
}
