use std::collections::{BTreeMap, HashMap};
use std::f64::consts::{FRAC_PI_2, PI};

use tracing::{debug, trace, warn};

use super::geometry::{LabelAnchor, Position, edge_label_point};
use super::params::LayoutParams;
use crate::graph::{GraphEdge, NodeRole, ServiceGraph};

/// Node id → position
pub type NodePositions = BTreeMap<String, Position>;

/// Edge id → label anchor
pub type LabelAnchors = BTreeMap<String, LabelAnchor>;

/// Everything the radial placement depends on
///
/// Positions are a function of this key alone, never of ids or labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub has_subject: bool,
    pub providers: usize,
    pub consumers: usize,
}

impl SlotKey {
    pub fn for_graph(graph: &ServiceGraph) -> Self {
        let mut key = SlotKey {
            has_subject: false,
            providers: 0,
            consumers: 0,
        };

        for node in graph.nodes() {
            match node.role() {
                NodeRole::Subject => key.has_subject = true,
                NodeRole::Provider => key.providers += 1,
                NodeRole::Consumer => key.consumers += 1,
            }
        }

        key
    }
}

/// Positions available to each role, in placement order
#[derive(Debug, Clone, PartialEq)]
pub struct RoleSlots {
    pub subject: Option<Position>,
    pub providers: Vec<Position>,
    pub consumers: Vec<Position>,
}

/// Angle of provider `index` out of `count`, strictly inside (π/2, 3π/2)
pub fn provider_angle(index: usize, count: usize) -> f64 {
    FRAC_PI_2 + PI * (index + 1) as f64 / (count + 1) as f64
}

/// Angle of consumer `index` out of `count`, strictly inside (-π/2, π/2)
pub fn consumer_angle(index: usize, count: usize) -> f64 {
    -FRAC_PI_2 + PI * (index + 1) as f64 / (count + 1) as f64
}

/// Closed-form radial layout
///
/// The subject sits at the canvas center, providers fan out along the left
/// half-arc and consumers along the right half-arc. Both arcs are pushed
/// apart horizontally and squashed vertically by the layout parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RadialLayout {
    params: LayoutParams,
}

impl RadialLayout {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn center(&self) -> Position {
        Position::new(self.params.center_x, self.params.center_y)
    }

    fn on_arc(&self, angle: f64, horizontal_bias: f64) -> Position {
        let p = &self.params;
        Position::new(
            p.center_x + p.radius * angle.cos() + horizontal_bias,
            p.center_y + p.radius * angle.sin() * p.vertical_compression,
        )
    }

    /// Slot positions for a graph shape
    pub fn slots(&self, key: SlotKey) -> RoleSlots {
        let offset = self.params.horizontal_offset;

        RoleSlots {
            subject: key.has_subject.then(|| self.center()),
            providers: (0..key.providers)
                .map(|i| self.on_arc(provider_angle(i, key.providers), -offset))
                .collect(),
            consumers: (0..key.consumers)
                .map(|j| self.on_arc(consumer_angle(j, key.consumers), offset))
                .collect(),
        }
    }

    /// Position every node of `graph`
    pub fn layout(&self, graph: &ServiceGraph) -> NodePositions {
        let slots = self.slots(SlotKey::for_graph(graph));
        assign_slots(graph, &slots)
    }

    /// Label point for `edge`, or `None` if an endpoint has no position
    ///
    /// A missing position is a normal transient state (e.g. a partial graph)
    /// and is left for the renderer to omit.
    pub fn label_anchor(&self, edge: &GraphEdge, positions: &NodePositions) -> Option<LabelAnchor> {
        self.label_anchor_nth(edge, positions, 0)
    }

    /// Label point for the `index`-th edge sharing `edge`'s endpoints
    ///
    /// Each step pushes the label two `label_offset`s further from the
    /// midpoint (or further above the node for a self-loop), so parallel
    /// edges keep separate anchors. Index 0 is [`Self::label_anchor`].
    pub fn label_anchor_nth(
        &self,
        edge: &GraphEdge,
        positions: &NodePositions,
        index: usize,
    ) -> Option<LabelAnchor> {
        let from = positions.get(edge.source())?;
        let to = positions.get(edge.target())?;
        let spread = 2.0 * index as f64 * self.params.label_offset;

        Some(edge_label_point(
            from,
            to,
            self.params.label_offset + spread,
            self.params.self_loop_offset + spread,
        ))
    }

    /// Label points for every positioned edge of `graph`
    ///
    /// Edges between the same ordered pair are numbered in graph order and
    /// spread apart with [`Self::label_anchor_nth`].
    pub fn label_anchors(&self, graph: &ServiceGraph, positions: &NodePositions) -> LabelAnchors {
        let mut anchors = LabelAnchors::new();
        let mut parallel: HashMap<(&str, &str), usize> = HashMap::new();

        for edge in graph.edges() {
            let index = parallel.entry((edge.source(), edge.target())).or_default();
            match self.label_anchor_nth(edge, positions, *index) {
                Some(anchor) => {
                    anchors.insert(edge.id().to_string(), anchor);
                }
                None => trace!(edge = edge.id(), "Edge endpoint has no position"),
            }
            *index += 1;
        }

        anchors
    }
}

/// Hand out slots to nodes by role, keeping input order within each role
pub(super) fn assign_slots(graph: &ServiceGraph, slots: &RoleSlots) -> NodePositions {
    let mut positions = NodePositions::new();
    let mut providers = slots.providers.iter();
    let mut consumers = slots.consumers.iter();
    let mut subject_seen = false;

    for node in graph.nodes() {
        let slot = match node.role() {
            NodeRole::Subject => {
                if subject_seen {
                    warn!(node = node.id(), "Graph has more than one subject node");
                }
                subject_seen = true;
                slots.subject
            }
            NodeRole::Provider => providers.next().copied(),
            NodeRole::Consumer => consumers.next().copied(),
        };

        if let Some(position) = slot {
            positions.insert(node.id().to_string(), position);
        }
    }

    debug!(
        nodes = graph.nodes().len(),
        positioned = positions.len(),
        "Computed radial layout"
    );

    positions
}
