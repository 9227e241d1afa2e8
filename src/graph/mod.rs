//! # Graph Construction and Rendering Module
//!
//! Turns a [`RelationshipPayload`](crate::payload::RelationshipPayload) into
//! a small directed graph centred on one subject service, and renders
//! positioned graphs as text.
//!
//! ## Components
//!
//! ### Graph Building
//! - **ServiceGraphBuilder**: Folds payload entries into unique nodes and one
//!   edge per (contract, participant) pair, skipping malformed entries
//! - **GraphNode**: A service with its role (subject, provider or consumer)
//! - **GraphEdge**: One contract between a provider and a consumer
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders positioned graphs as ASCII, Mermaid or DOT
//!
//! ## Example
//!
//! ```
//! use service_orbit::graph::{self, EdgeDirection, NodeRole};
//! use service_orbit::payload::{ConsumptionEntry, ContractRef, RelationshipPayload, ServiceRef};
//!
//! let payload = RelationshipPayload::new(Some(ServiceRef::new("svc-search")))
//!     .with_consumption(ConsumptionEntry::new(
//!         ContractRef::new("c-index").with_operation_name("index"),
//!         vec![ServiceRef::new("svc-indexer").with_display_name("Indexer")],
//!     ));
//!
//! let graph = graph::build(&payload);
//!
//! assert_eq!(graph.nodes().len(), 2);
//! assert_eq!(graph.node("svc-indexer").unwrap().role(), NodeRole::Provider);
//!
//! let edge = &graph.edges()[0];
//! assert_eq!(edge.source(), "svc-indexer");
//! assert_eq!(edge.target(), "svc-search");
//! assert_eq!(edge.label(), "index");
//! assert_eq!(edge.direction(), EdgeDirection::Consumes);
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::{DEFAULT_EDGE_LABEL, ServiceGraphBuilder, build};
pub use renderer::GraphRenderer;
pub use types::{EdgeDirection, GraphEdge, GraphNode, NodeRole, ServiceGraph, edge_id};
