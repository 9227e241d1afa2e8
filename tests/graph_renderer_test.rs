use predicates::prelude::*;
use service_orbit::graph::GraphRenderer;
use service_orbit::layout::{LayoutParams, PositionedGraph, RadialLayout};
use service_orbit::payload::{
    ConsumptionEntry, ContractRef, ProvisionEntry, RelationshipPayload, ServiceRef,
};

fn checkout_graph() -> PositionedGraph {
    let payload = RelationshipPayload::new(Some(
        ServiceRef::new("svc.checkout")
            .with_display_name("Checkout")
            .with_service_kind("backend"),
    ))
    .with_provision(ProvisionEntry::new(
        ContractRef::new("c-pay").with_operation_name("pay"),
        vec![
            ServiceRef::new("svc.web").with_display_name("Web"),
            ServiceRef::new("svc.ios").with_slug("ios"),
        ],
    ))
    .with_provision(ProvisionEntry::new(
        ContractRef::new("c-refund"),
        vec![ServiceRef::new("svc.web")],
    ))
    .with_consumption(ConsumptionEntry::new(
        ContractRef::new("c-charge").with_operation_name("charge"),
        vec![ServiceRef::new("svc.psp").with_display_name("PSP")],
    ));

    PositionedGraph::from_payload(&payload, &RadialLayout::new(LayoutParams::default()))
}

fn render_to_string(
    render: impl FnOnce(&GraphRenderer, &PositionedGraph, &mut Vec<u8>) -> miette::Result<()>,
    renderer: &GraphRenderer,
    positioned: &PositionedGraph,
) -> String {
    let mut output = Vec::new();
    render(renderer, positioned, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_ascii_groups_contracts_per_participant() {
    let renderer = GraphRenderer::new(false, true);
    let result = render_to_string(
        |r, g, out| r.render_ascii(g, out),
        &renderer,
        &checkout_graph(),
    );

    assert!(predicate::str::contains("Checkout (backend)").eval(&result));
    assert!(predicate::str::contains("Providers (1):").eval(&result));
    assert!(predicate::str::contains("Consumers (2):").eval(&result));
    assert!(predicate::str::contains("├── Web").eval(&result));
    assert!(predicate::str::contains("└── ios").eval(&result));
    assert!(predicate::str::contains("◀ pay").eval(&result));
    // Contracts without an operation name fall back to the default label
    assert!(predicate::str::contains("◀ API").eval(&result));
    assert!(predicate::str::contains("▶ charge").eval(&result));
}

#[test]
fn test_mermaid_sanitizes_ids() {
    let renderer = GraphRenderer::new(false, false);
    let result = render_to_string(
        |r, g, out| r.render_mermaid(g, out),
        &renderer,
        &checkout_graph(),
    );

    assert!(result.contains("n_svc_2e_checkout((\"Checkout\"))"));
    assert!(result.contains("n_svc_2e_checkout -->|\"pay\"| n_svc_2e_web"));
    assert!(result.contains("n_svc_2e_checkout -->|\"API\"| n_svc_2e_web"));
    assert!(result.contains("n_svc_2e_psp -.->|\"charge\"| n_svc_2e_checkout"));
    assert!(!result.contains("svc.checkout"));
    assert_eq!(result.matches("linkStyle").count(), 4);
}

#[test]
fn test_dot_keeps_parallel_edges_distinct() {
    let renderer = GraphRenderer::new(false, false);
    let result = render_to_string(
        |r, g, out| r.render_dot(g, out),
        &renderer,
        &checkout_graph(),
    );

    assert!(result.contains(r#"id="svc.checkout->svc.web#c-pay""#));
    assert!(result.contains(r#"id="svc.checkout->svc.web#c-refund""#));
    assert!(result.contains("rankdir=LR;"));
    assert!(!result.contains("pos="));
}

#[test]
fn test_missing_position_is_not_fatal() {
    let mut positioned = checkout_graph();
    positioned.positions.remove("svc.psp");

    let renderer = GraphRenderer::new(true, false);

    let ascii = render_to_string(|r, g, out| r.render_ascii(g, out), &renderer, &positioned);
    assert!(ascii.contains("PSP @ (unplaced)"));

    let dot = render_to_string(|r, g, out| r.render_dot(g, out), &renderer, &positioned);
    assert!(dot.contains(r#""svc.psp" [label="PSP""#));
    assert_eq!(dot.matches("pos=").count(), 3);
}

#[test]
fn test_empty_graph_renders_without_error() {
    let renderer = GraphRenderer::new(true, true);
    let empty = PositionedGraph::default();

    let mermaid = render_to_string(|r, g, out| r.render_mermaid(g, out), &renderer, &empty);
    assert_eq!(mermaid, "graph LR\n");

    let dot = render_to_string(|r, g, out| r.render_dot(g, out), &renderer, &empty);
    assert!(dot.starts_with("digraph service_dependencies {"));
    assert!(!dot.contains("->"));
}
