use std::collections::HashSet;

use tracing::debug;

use super::types::{EdgeDirection, GraphEdge, GraphNode, NodeRole, ServiceGraph, edge_id};
use crate::payload::{ContractRef, RelationshipPayload, ServiceRef};

/// Edge label used when a contract has no operation name
pub const DEFAULT_EDGE_LABEL: &str = "API";

/// Builder for constructing a service's dependency graph
///
/// Participants are deduplicated by id into a single node each; every
/// contract relationship still yields its own edge, so parallel edges
/// between the same pair of services stay distinct.
#[derive(Debug, Default)]
pub struct ServiceGraphBuilder {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    seen: HashSet<String>,
    skipped: usize,
}

impl ServiceGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every relationship in `payload` to the graph
    ///
    /// Never fails. Malformed contracts skip their whole entry, malformed
    /// participants skip only their own edge. Without a subject there is
    /// nothing to anchor edges to, so the relationships are skipped too.
    pub fn add_payload(&mut self, payload: &RelationshipPayload) {
        let Some(subject) = payload.subject.as_ref() else {
            if payload.relationship_count() > 0 {
                debug!(
                    skipped = payload.relationship_count(),
                    "Payload has no subject, skipping its relationships"
                );
            }
            self.skipped += payload.relationship_count();
            return;
        };

        if !subject.is_well_formed() {
            debug!("Payload subject has no id, treating it as absent");
            self.skipped += payload.relationship_count();
            return;
        }

        self.add_node(subject, NodeRole::Subject);

        for entry in &payload.provides {
            if !self.accept_contract(&entry.contract, entry.consumers.len()) {
                continue;
            }

            for consumer in &entry.consumers {
                if !self.accept_participant(consumer, &entry.contract) {
                    continue;
                }
                self.add_node(consumer, NodeRole::Consumer);
                self.add_edge(
                    &subject.id,
                    &consumer.id,
                    EdgeDirection::Provides,
                    &entry.contract,
                );
            }
        }

        for entry in &payload.consumes {
            if !self.accept_contract(&entry.contract, entry.providers.len()) {
                continue;
            }

            for provider in &entry.providers {
                if !self.accept_participant(provider, &entry.contract) {
                    continue;
                }
                self.add_node(provider, NodeRole::Provider);
                self.add_edge(
                    &provider.id,
                    &subject.id,
                    EdgeDirection::Consumes,
                    &entry.contract,
                );
            }
        }
    }

    fn accept_contract(&mut self, contract: &ContractRef, participants: usize) -> bool {
        if contract.is_well_formed() {
            return true;
        }
        debug!(
            participants,
            "Skipping relationship entry whose contract has no id"
        );
        self.skipped += participants;
        false
    }

    fn accept_participant(&mut self, service: &ServiceRef, contract: &ContractRef) -> bool {
        if service.is_well_formed() {
            return true;
        }
        debug!(
            contract = %contract.id,
            "Skipping participant without an id"
        );
        self.skipped += 1;
        false
    }

    /// First sighting of an id fixes the node's role and label
    fn add_node(&mut self, service: &ServiceRef, role: NodeRole) {
        if !self.seen.insert(service.id.clone()) {
            return;
        }

        self.nodes.push(GraphNode {
            id: service.id.clone(),
            label: service.label().to_string(),
            role,
            slug: service.slug.clone(),
            service_kind: service.service_kind.clone(),
        });
    }

    fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        direction: EdgeDirection,
        contract: &ContractRef,
    ) {
        let label = contract
            .operation_name
            .as_deref()
            .filter(|op| !op.is_empty())
            .unwrap_or(DEFAULT_EDGE_LABEL);

        self.edges.push(GraphEdge {
            id: edge_id(source, target, &contract.id),
            source: source.to_string(),
            target: target.to_string(),
            label: label.to_string(),
            direction,
            contract_id: contract.id.clone(),
            operation_name: contract.operation_name.clone(),
        });
    }

    /// Number of relationships dropped as malformed or unanchored
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn into_graph(self) -> ServiceGraph {
        ServiceGraph::new(self.nodes, self.edges)
    }
}

/// Build the deduplicated graph for one payload
pub fn build(payload: &RelationshipPayload) -> ServiceGraph {
    let mut builder = ServiceGraphBuilder::new();
    builder.add_payload(payload);

    debug!(
        nodes = builder.node_count(),
        edges = builder.edge_count(),
        skipped = builder.skipped(),
        "Built service graph"
    );

    builder.into_graph()
}
