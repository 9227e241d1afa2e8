//! # Radial Layout Module
//!
//! Places a service graph on a 2-D canvas without any iterative simulation.
//! The graph has exactly three structural roles with a small, bounded
//! fan-out, so positions are computed in closed form:
//!
//! - the **subject** sits at the canvas center `(cx, cy)`;
//! - provider `i` of `n` sits at angle `π/2 + π·(i+1)/(n+1)` on the left
//!   half-arc, shifted further left by the horizontal offset;
//! - consumer `j` of `m` sits at angle `-π/2 + π·(j+1)/(m+1)` on the right
//!   half-arc, shifted further right by the horizontal offset;
//! - both arcs are squashed vertically by the compression factor `k < 1`.
//!
//! Angles within a role strictly increase with the index, so no two
//! providers (or consumers) ever share a position. Placement depends only on
//! the role counts, which makes it trivially memoizable ([`LayoutCache`]).
//!
//! Edge labels are anchored at the midpoint of the edge pushed along the
//! edge's unit normal, so labels on near-parallel edges do not sit on the
//! lines. Self-loops get their label a fixed distance above the node.
//!
//! ## Example
//!
//! ```
//! use service_orbit::graph;
//! use service_orbit::layout::{LayoutParams, RadialLayout};
//! use service_orbit::payload::{ContractRef, ProvisionEntry, RelationshipPayload, ServiceRef};
//!
//! let payload = RelationshipPayload::new(Some(ServiceRef::new("svc-search"))).with_provision(
//!     ProvisionEntry::new(ContractRef::new("c-query"), vec![ServiceRef::new("svc-web")]),
//! );
//!
//! let graph = graph::build(&payload);
//! let layout = RadialLayout::new(LayoutParams::default());
//! let positions = layout.layout(&graph);
//!
//! assert_eq!(positions["svc-search"], layout.center());
//! assert!(positions["svc-web"].x > layout.center().x);
//!
//! let anchor = layout.label_anchor(&graph.edges[0], &positions);
//! assert!(anchor.is_some());
//! ```

mod cache;
mod geometry;
mod params;
mod positioned;
mod radial;

pub use cache::{DEFAULT_CACHE_CAPACITY, LayoutCache};
pub use geometry::{LabelAnchor, Position, edge_label_point, unit_normal};
pub use params::{LayoutParams, LayoutParamsBuilder, defaults};
pub use positioned::PositionedGraph;
pub use radial::{
    LabelAnchors, NodePositions, RadialLayout, RoleSlots, SlotKey, consumer_angle, provider_angle,
};
