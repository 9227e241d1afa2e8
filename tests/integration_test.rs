//! Integration tests for service-orbit using the library interface

use std::collections::HashSet;
use std::fs;

use pretty_assertions::assert_eq;
use service_orbit::graph::{self, EdgeDirection, NodeRole, ServiceGraph};
use service_orbit::layout::{
    LayoutCache, LayoutParams, PositionedGraph, RadialLayout, consumer_angle, provider_angle,
};
use service_orbit::payload::{
    ConsumptionEntry, ContractRef, ProvisionEntry, RelationshipPayload, ServiceRef,
};
use tempfile::TempDir;

/// Subject with overlapping providers and consumers, a repeated participant
/// and a couple of malformed entries
fn busy_payload() -> RelationshipPayload {
    RelationshipPayload::new(Some(
        ServiceRef::new("svc-orders").with_display_name("Orders"),
    ))
    .with_provision(ProvisionEntry::new(
        ContractRef::new("c-create").with_operation_name("createOrder"),
        vec![
            ServiceRef::new("svc-web").with_display_name("Web"),
            ServiceRef::new("svc-mobile").with_slug("mobile"),
        ],
    ))
    .with_provision(ProvisionEntry::new(
        ContractRef::new("c-status").with_operation_name("orderStatus"),
        vec![ServiceRef::new("svc-web"), ServiceRef::new("")],
    ))
    .with_consumption(ConsumptionEntry::new(
        ContractRef::new("c-pay").with_operation_name("charge"),
        vec![ServiceRef::new("svc-payments")],
    ))
    .with_consumption(ConsumptionEntry::new(
        ContractRef::new("c-stock"),
        vec![ServiceRef::new("svc-inventory"), ServiceRef::new("svc-web")],
    ))
    .with_consumption(ConsumptionEntry::new(
        ContractRef::new(""),
        vec![ServiceRef::new("svc-ghost")],
    ))
}

fn node_ids(graph: &ServiceGraph) -> HashSet<&str> {
    graph.nodes().iter().map(|n| n.id()).collect()
}

fn edge_ids(graph: &ServiceGraph) -> HashSet<&str> {
    graph.edges().iter().map(|e| e.id()).collect()
}

#[test]
fn test_node_ids_are_unique() {
    let graph = graph::build(&busy_payload());

    let ids: Vec<&str> = graph.nodes().iter().map(|n| n.id()).collect();
    assert_eq!(ids.len(), node_ids(&graph).len());
    assert!(graph.validate().is_ok());
}

#[test]
fn test_subject_cardinality() {
    let with_subject = graph::build(&busy_payload());
    assert_eq!(with_subject.nodes_with_role(NodeRole::Subject).count(), 1);

    let mut without = busy_payload();
    without.subject = None;
    let graph = graph::build(&without);
    assert_eq!(graph.nodes_with_role(NodeRole::Subject).count(), 0);
}

#[test]
fn test_missing_subject_skips_every_relationship() {
    let mut payload = busy_payload();
    payload.subject = None;

    let graph = graph::build(&payload);
    assert!(graph.is_empty());
}

#[test]
fn test_edges_reference_existing_nodes() {
    let graph = graph::build(&busy_payload());
    let ids = node_ids(&graph);

    for edge in graph.edges() {
        assert!(ids.contains(edge.source()), "dangling source in {}", edge.id());
        assert!(ids.contains(edge.target()), "dangling target in {}", edge.id());
    }
}

#[test]
fn test_edge_count_matches_well_formed_participants() {
    let payload = RelationshipPayload::new(Some(ServiceRef::new("s")))
        .with_provision(ProvisionEntry::new(
            ContractRef::new("c1"),
            vec![ServiceRef::new("a"), ServiceRef::new("b")],
        ))
        .with_provision(ProvisionEntry::new(
            ContractRef::new("c2"),
            vec![ServiceRef::new("a")],
        ))
        .with_consumption(ConsumptionEntry::new(
            ContractRef::new("c3"),
            vec![ServiceRef::new("p"), ServiceRef::new("a")],
        ));

    let graph = graph::build(&payload);
    assert_eq!(graph.edges().len(), payload.relationship_count());
    assert_eq!(graph.edges().len(), 5);
}

#[test]
fn test_malformed_entries_do_not_blank_the_graph() {
    let graph = graph::build(&busy_payload());

    // 5 well-formed participants, one empty id and one contract without id
    assert_eq!(graph.edges().len(), 6);
    assert!(graph.node("svc-ghost").is_none());
    assert!(graph.node("").is_none());
}

#[test]
fn test_build_is_deterministic() {
    let first = graph::build(&busy_payload());
    let second = graph::build(&busy_payload());

    assert_eq!(node_ids(&first), node_ids(&second));
    assert_eq!(edge_ids(&first), edge_ids(&second));
    assert_eq!(first, second);
}

#[test]
fn test_participant_keeps_first_role() {
    let graph = graph::build(&busy_payload());

    // svc-web is first met as a consumer, later also as a provider
    let web = graph.node("svc-web").unwrap();
    assert_eq!(web.role(), NodeRole::Consumer);
    assert_eq!(web.label(), "Web");
    assert_eq!(graph.edges_between("svc-web", "svc-orders").count(), 1);
    assert_eq!(graph.edges_between("svc-orders", "svc-web").count(), 2);
}

#[test]
fn test_layout_angles_are_distinct() {
    for count in 1..=12 {
        let providers: HashSet<u64> = (0..count)
            .map(|i| provider_angle(i, count).to_bits())
            .collect();
        let consumers: HashSet<u64> = (0..count)
            .map(|i| consumer_angle(i, count).to_bits())
            .collect();

        assert_eq!(providers.len(), count);
        assert_eq!(consumers.len(), count);
    }
}

#[test]
fn test_layout_depends_only_on_role_counts() {
    let rename = |prefix: &str| {
        RelationshipPayload::new(Some(ServiceRef::new(format!("{prefix}-s"))))
            .with_provision(ProvisionEntry::new(
                ContractRef::new("c"),
                vec![
                    ServiceRef::new(format!("{prefix}-k1")).with_display_name(prefix),
                    ServiceRef::new(format!("{prefix}-k2")),
                ],
            ))
            .with_consumption(ConsumptionEntry::new(
                ContractRef::new("d"),
                vec![ServiceRef::new(format!("{prefix}-p1"))],
            ))
    };

    let layout = RadialLayout::default();
    let first = layout.layout(&graph::build(&rename("alpha")));
    let second = layout.layout(&graph::build(&rename("omega")));

    let strip = |positions: &service_orbit::layout::NodePositions, prefix: &str| {
        positions
            .iter()
            .map(|(id, p)| (id.trim_start_matches(prefix).to_string(), (p.x, p.y)))
            .collect::<Vec<_>>()
    };
    assert_eq!(strip(&first, "alpha"), strip(&second, "omega"));
}

#[test]
fn test_scenario_subject_provider_consumer() {
    let payload = RelationshipPayload::new(Some(ServiceRef::new("S")))
        .with_provision(ProvisionEntry::new(
            ContractRef::new("C1"),
            vec![ServiceRef::new("K")],
        ))
        .with_consumption(ConsumptionEntry::new(
            ContractRef::new("C2"),
            vec![ServiceRef::new("P")],
        ));

    let layout = RadialLayout::default();
    let positioned = PositionedGraph::from_payload(&payload, &layout);
    let graph = positioned.graph();

    assert_eq!(graph.nodes().len(), 3);
    assert_eq!(graph.node("S").unwrap().role(), NodeRole::Subject);
    assert_eq!(graph.node("K").unwrap().role(), NodeRole::Consumer);
    assert_eq!(graph.node("P").unwrap().role(), NodeRole::Provider);

    assert_eq!(graph.edges().len(), 2);
    let provides = graph.edges_between("S", "K").next().unwrap();
    assert_eq!(provides.direction(), EdgeDirection::Provides);
    let consumes = graph.edges_between("P", "S").next().unwrap();
    assert_eq!(consumes.direction(), EdgeDirection::Consumes);

    let center = layout.center();
    assert_eq!(positioned.position("S"), Some(&center));
    assert!(positioned.position("P").unwrap().x < center.x);
    assert!(positioned.position("K").unwrap().x > center.x);
}

#[test]
fn test_scenario_empty_payload() {
    let payload: RelationshipPayload =
        serde_json::from_str(r#"{"subject": null, "provides": [], "consumes": []}"#).unwrap();

    let positioned = PositionedGraph::from_payload(&payload, &RadialLayout::default());
    assert!(positioned.graph().nodes().is_empty());
    assert!(positioned.graph().edges().is_empty());
    assert!(positioned.positions.is_empty());
}

#[test]
fn test_scenario_fan_in() {
    let consumers = (1..=5).map(|i| ServiceRef::new(format!("k{i}"))).collect();
    let payload = RelationshipPayload::new(Some(ServiceRef::new("s")))
        .with_provision(ProvisionEntry::new(ContractRef::new("c"), consumers));

    let positioned = PositionedGraph::from_payload(&payload, &RadialLayout::default());
    let graph = positioned.graph();

    assert_eq!(graph.nodes_with_role(NodeRole::Subject).count(), 1);
    assert_eq!(graph.nodes_with_role(NodeRole::Consumer).count(), 5);
    assert_eq!(graph.edges().len(), 5);

    let distinct: HashSet<(u64, u64)> = graph
        .nodes_with_role(NodeRole::Consumer)
        .map(|n| {
            let p = positioned.position(n.id()).unwrap();
            (p.x.to_bits(), p.y.to_bits())
        })
        .collect();
    assert_eq!(distinct.len(), 5);
}

#[test]
fn test_scenario_two_contracts_same_pair() {
    let payload = RelationshipPayload::new(Some(ServiceRef::new("s")))
        .with_provision(ProvisionEntry::new(
            ContractRef::new("c-read").with_operation_name("read"),
            vec![ServiceRef::new("k")],
        ))
        .with_provision(ProvisionEntry::new(
            ContractRef::new("c-write").with_operation_name("write"),
            vec![ServiceRef::new("k")],
        ));

    let graph = graph::build(&payload);
    assert_eq!(graph.nodes().len(), 2);

    let edges: Vec<_> = graph.edges_between("s", "k").collect();
    assert_eq!(edges.len(), 2);
    assert_ne!(edges[0].id(), edges[1].id());
    assert_eq!(edges[0].operation_name(), Some("read"));
    assert_eq!(edges[1].operation_name(), Some("write"));

    // Parallel edges share endpoints but keep their labels apart
    let positioned = PositionedGraph::compute(graph, &RadialLayout::default());
    assert_eq!(positioned.label_anchors.len(), 2);
    let anchors: Vec<_> = positioned.label_anchors.values().collect();
    assert_ne!(anchors[0], anchors[1]);
}

#[test]
fn test_self_loop_is_positioned() {
    let payload = RelationshipPayload::new(Some(ServiceRef::new("s"))).with_provision(
        ProvisionEntry::new(ContractRef::new("c"), vec![ServiceRef::new("s")]),
    );

    let params = LayoutParams::default();
    let positioned = PositionedGraph::from_payload(&payload, &RadialLayout::new(params));
    let edge = &positioned.graph().edges()[0];
    assert!(edge.is_self_loop());

    let anchor = positioned.label_anchor(edge).unwrap();
    assert_eq!(anchor.x, params.center_x);
    assert_eq!(anchor.y, params.center_y - params.self_loop_offset);
}

#[test]
fn test_cached_layout_matches_uncached() {
    let graph = graph::build(&busy_payload());
    let mut cache = LayoutCache::new(LayoutParams::default());

    let cached = PositionedGraph::compute_cached(graph.clone(), &mut cache);
    let direct = PositionedGraph::compute(graph, &RadialLayout::default());
    assert_eq!(cached, direct);
}

#[test]
fn test_payload_file_round_trip_through_layout() -> miette::Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.json");
    fs::write(
        &path,
        r#"{
            "subject": {"id": "svc-orders", "displayName": "Orders", "serviceKind": "backend"},
            "provides": [
                {"contract": {"id": "c-create", "operationName": "createOrder"},
                 "consumers": [{"id": "svc-web", "slug": "web"}]}
            ],
            "consumes": null
        }"#,
    )
    .unwrap();

    let payload = RelationshipPayload::parse_file(&path)?;
    let positioned = PositionedGraph::from_payload(&payload, &RadialLayout::default());

    let json: serde_json::Value = serde_json::from_str(&positioned.to_json_pretty()?).unwrap();
    assert_eq!(json["nodes"][0]["serviceKind"], "backend");
    assert_eq!(json["nodes"][1]["slug"], "web");
    assert_eq!(json["edges"][0]["label"], "createOrder");
    assert!(json["positions"]["svc-web"]["x"].as_f64().unwrap() > 400.0);
    Ok(())
}

#[test]
fn test_repeated_participant_keeps_one_anchor() {
    let payload = RelationshipPayload::new(Some(ServiceRef::new("s"))).with_provision(
        ProvisionEntry::new(
            ContractRef::new("c"),
            vec![ServiceRef::new("k"), ServiceRef::new("k")],
        ),
    );

    let positioned = PositionedGraph::from_payload(&payload, &RadialLayout::default());
    assert_eq!(positioned.graph().edges().len(), 2);
    assert_eq!(positioned.label_anchors.len(), 1);
    assert!(positioned.label_anchor(&positioned.graph().edges()[1]).is_some());
}
