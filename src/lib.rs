//! # Service Orbit - Dependency Neighbourhoods of a Single Service
//!
//! Service Orbit takes the relationship payload of one *subject* service
//! (which contracts it provides and to whom, which contracts it consumes and
//! from whom) and turns it into a small graph laid out around the subject:
//! providers on a left arc, consumers on a right arc.
//!
//! ## Main Components
//!
//! - **Payload**: The raw relationship data and its JSON loader
//! - **Graph**: Builds the deduplicated node/edge model and renders it
//! - **Layout**: Deterministic closed-form radial placement and label anchors
//! - **Snapshot**: Recompute-on-new-payload discipline for long-lived callers
//!
//! ## Usage
//!
//! ### Building and laying out a payload
//!
//! ```
//! use service_orbit::graph::{self, NodeRole};
//! use service_orbit::layout::{LayoutParams, PositionedGraph, RadialLayout};
//! use service_orbit::payload::RelationshipPayload;
//!
//! # fn main() -> miette::Result<()> {
//! let payload = RelationshipPayload::from_json_str(
//!     r#"{
//!         "subject": { "id": "svc-search", "displayName": "Search" },
//!         "provides": [
//!             {
//!                 "contract": { "id": "c-query", "operationName": "query" },
//!                 "consumers": [{ "id": "svc-web", "displayName": "Web" }]
//!             }
//!         ],
//!         "consumes": [
//!             {
//!                 "contract": { "id": "c-index" },
//!                 "providers": [{ "id": "svc-indexer", "slug": "indexer" }]
//!             }
//!         ]
//!     }"#,
//!     "payload.json",
//! )?;
//!
//! let graph = graph::build(&payload);
//! assert_eq!(graph.nodes().len(), 3);
//! assert_eq!(graph.subject().map(|n| n.label()), Some("Search"));
//! assert_eq!(graph.node("svc-indexer").map(|n| n.role()), Some(NodeRole::Provider));
//!
//! let positioned = PositionedGraph::compute(graph, &RadialLayout::new(LayoutParams::default()));
//! let web = positioned.position("svc-web").unwrap();
//! let indexer = positioned.position("svc-indexer").unwrap();
//! assert!(indexer.x < web.x);
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering
//!
//! ```
//! use service_orbit::graph::GraphRenderer;
//! use service_orbit::layout::{PositionedGraph, RadialLayout};
//! use service_orbit::payload::{ContractRef, ProvisionEntry, RelationshipPayload, ServiceRef};
//!
//! # fn main() -> miette::Result<()> {
//! let payload = RelationshipPayload::new(Some(ServiceRef::new("svc-search")))
//!     .with_provision(ProvisionEntry::new(ContractRef::new("c-query"), vec![ServiceRef::new("svc-web")]));
//! let positioned = PositionedGraph::from_payload(&payload, &RadialLayout::default());
//!
//! let renderer = GraphRenderer::new(true, false);
//! let mut dot = Vec::new();
//! renderer.render_dot(&positioned, &mut dot)?;
//!
//! assert!(String::from_utf8_lossy(&dot).starts_with("digraph"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod payload;
pub mod snapshot;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
