use std::io::Write;

use miette::Result;
use petgraph::Direction;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::error::OrbitError;
use crate::graph::{EdgeDirection, GraphNode, NodeRole};
use crate::layout::PositionedGraph;

// Blue-Orange Accessible Palette, one hue per role
mod colors {
    pub const SUBJECT_FILL: &str = "#FFF3E0"; // Light orange
    pub const SUBJECT_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const PROVIDER_FILL: &str = "#E8F5E9"; // Light green
    pub const PROVIDER_STROKE: &str = "#388E3C"; // Medium green
    pub const CONSUMER_FILL: &str = "#E3F2FD"; // Light blue
    pub const CONSUMER_STROKE: &str = "#1976D2"; // Medium blue
    pub const PROVIDES_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CONSUMES_EDGE: &str = "#81C784"; // Soft green
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(OrbitError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(OrbitError::from)
    };
}

fn role_colors(role: NodeRole) -> (&'static str, &'static str) {
    match role {
        NodeRole::Subject => (colors::SUBJECT_FILL, colors::SUBJECT_STROKE),
        NodeRole::Provider => (colors::PROVIDER_FILL, colors::PROVIDER_STROKE),
        NodeRole::Consumer => (colors::CONSUMER_FILL, colors::CONSUMER_STROKE),
    }
}

pub struct GraphRenderer {
    show_positions: bool,
    show_kinds: bool,
}

impl GraphRenderer {
    pub fn new(show_positions: bool, show_kinds: bool) -> Self {
        Self {
            show_positions,
            show_kinds,
        }
    }

    fn node_label(&self, node: &GraphNode) -> String {
        match node.service_kind() {
            Some(kind) if self.show_kinds => format!("{} ({kind})", node.label()),
            _ => node.label().to_string(),
        }
    }

    fn position_suffix(&self, positioned: &PositionedGraph, node: &GraphNode) -> String {
        if !self.show_positions {
            return String::new();
        }
        match positioned.position(node.id()) {
            Some(p) => format!(" @ ({:.1}, {:.1})", p.x, p.y),
            None => " @ (unplaced)".to_string(),
        }
    }

    pub fn render_ascii(&self, positioned: &PositionedGraph, output: &mut dyn Write) -> Result<()> {
        let graph = positioned.graph();
        if graph.is_empty() {
            writeln_out!(output, "No dependencies to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n🪐 Service Dependency Graph\n")?;

        let digraph = graph.to_digraph();

        match digraph
            .node_indices()
            .find(|&idx| digraph[idx].role() == NodeRole::Subject)
        {
            Some(idx) => {
                let subject = digraph[idx];
                writeln_out!(
                    output,
                    "{}{}",
                    self.node_label(subject),
                    self.position_suffix(positioned, subject)
                )?;

                let loops: Vec<&str> = digraph
                    .edges_connecting(idx, idx)
                    .map(|e| e.weight().label())
                    .collect();
                if !loops.is_empty() {
                    writeln_out!(output, "  ↻ self: {}", loops.join(", "))?;
                }
            }
            None => writeln_out!(output, "(no subject)")?,
        }

        for (role, heading) in [
            (NodeRole::Provider, "Providers"),
            (NodeRole::Consumer, "Consumers"),
        ] {
            let members: Vec<NodeIndex> = digraph
                .node_indices()
                .filter(|&idx| digraph[idx].role() == role)
                .collect();

            if members.is_empty() {
                continue;
            }

            writeln_out!(output, "\n{} ({}):", heading, members.len())?;

            for (i, &idx) in members.iter().enumerate() {
                let node = digraph[idx];
                let prefix = if i == members.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };

                // Contracts this node exchanges with the subject, either way
                let mut contracts: Vec<String> = Vec::new();
                for dir in [Direction::Outgoing, Direction::Incoming] {
                    for edge in digraph.edges_directed(idx, dir) {
                        if edge.source() == edge.target() && dir == Direction::Incoming {
                            continue;
                        }
                        let arrow = match edge.weight().direction() {
                            EdgeDirection::Provides => "◀",
                            EdgeDirection::Consumes => "▶",
                        };
                        contracts.push(format!("{arrow} {}", edge.weight().label()));
                    }
                }

                writeln_out!(
                    output,
                    "  {} {}{}",
                    prefix,
                    self.node_label(node),
                    self.position_suffix(positioned, node)
                )?;

                let detail_prefix = if i == members.len() - 1 {
                    "      "
                } else {
                    "  │   "
                };
                for contract in contracts {
                    writeln_out!(output, "{}{}", detail_prefix, contract)?;
                }
            }
        }

        writeln_out!(output)?;
        writeln_out!(
            output,
            "▶ = subject consumes from provider, ◀ = subject provides to consumer"
        )?;

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        positioned: &PositionedGraph,
        output: &mut dyn Write,
    ) -> Result<()> {
        let graph = positioned.graph();
        writeln_out!(output, "graph LR")?;

        for node in graph.nodes() {
            let node_id = self.mermaid_id(node.id());
            let label = escape_quotes(&self.node_label(node));

            let shape = match node.role() {
                NodeRole::Subject => format!("{node_id}((\"{label}\"))"),
                NodeRole::Provider => format!("{node_id}[\"{label}\"]"),
                NodeRole::Consumer => format!("{node_id}([\"{label}\"])"),
            };
            writeln_out!(output, "    {}", shape)?;

            let (fill, stroke) = role_colors(node.role());
            writeln_out!(
                output,
                "    style {} fill:{},stroke:{},stroke-width:2px",
                node_id,
                fill,
                stroke
            )?;
        }

        if !graph.edges().is_empty() {
            writeln_out!(output)?;
        }

        for (link_index, edge) in graph.edges().iter().enumerate() {
            let arrow = match edge.direction() {
                EdgeDirection::Provides => "-->",
                EdgeDirection::Consumes => "-.->",
            };
            writeln_out!(
                output,
                "    {} {}|\"{}\"| {}",
                self.mermaid_id(edge.source()),
                arrow,
                escape_quotes(edge.label()),
                self.mermaid_id(edge.target())
            )?;

            let color = match edge.direction() {
                EdgeDirection::Provides => colors::PROVIDES_EDGE,
                EdgeDirection::Consumes => colors::CONSUMES_EDGE,
            };
            writeln_out!(output, "    linkStyle {} stroke:{}", link_index, color)?;
        }

        Ok(())
    }

    pub fn render_dot(&self, positioned: &PositionedGraph, output: &mut dyn Write) -> Result<()> {
        let graph = positioned.graph();

        writeln_out!(output, "digraph service_dependencies {{")?;
        if self.show_positions {
            // Pinned positions are honoured by `neato -n`
            writeln_out!(output, "    layout=neato;")?;
        } else {
            writeln_out!(output, "    rankdir=LR;")?;
        }
        writeln_out!(output, "    node [shape=box, style=\"rounded,filled\"];")?;
        writeln_out!(output)?;

        for node in graph.nodes() {
            let (fill, stroke) = role_colors(node.role());
            let shape = match node.role() {
                NodeRole::Subject => ", shape=ellipse",
                NodeRole::Provider | NodeRole::Consumer => "",
            };

            // DOT's y axis points up, the canvas y axis points down
            let pos = match positioned.position(node.id()) {
                Some(p) if self.show_positions => format!(", pos=\"{:.2},{:.2}!\"", p.x, -p.y),
                _ => String::new(),
            };

            writeln_out!(
                output,
                r#"    "{}" [label="{}", fillcolor="{}", color="{}", penwidth=2{}{}];"#,
                escape_quotes(node.id()),
                escape_quotes(&self.node_label(node)),
                fill,
                stroke,
                shape,
                pos
            )?;
        }

        writeln_out!(output)?;

        for edge in graph.edges() {
            let (style, color) = match edge.direction() {
                EdgeDirection::Provides => ("solid", colors::PROVIDES_EDGE),
                EdgeDirection::Consumes => ("dashed", colors::CONSUMES_EDGE),
            };

            writeln_out!(
                output,
                r#"    "{}" -> "{}" [label="{}", style={}, color="{}", id="{}"];"#,
                escape_quotes(edge.source()),
                escape_quotes(edge.target()),
                escape_quotes(edge.label()),
                style,
                color,
                escape_quotes(edge.id())
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn mermaid_id(&self, name: &str) -> String {
        // ASCII alphanumerics pass through, `_` doubles and anything else
        // becomes `_<hex>_`, so distinct ids never collide
        let mut id = String::with_capacity(name.len() + 2);
        id.push_str("n_");
        for c in name.chars() {
            match c {
                c if c.is_ascii_alphanumeric() => id.push(c),
                '_' => id.push_str("__"),
                c => id.push_str(&format!("_{:x}_", u32::from(c))),
            }
        }
        id
    }
}

fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use predicates::prelude::*;

    use super::*;
    use crate::layout::RadialLayout;
    use crate::payload::{
        ConsumptionEntry, ContractRef, ProvisionEntry, RelationshipPayload, ServiceRef,
    };

    fn sample() -> PositionedGraph {
        let payload = RelationshipPayload::new(Some(
            ServiceRef::new("svc-search")
                .with_display_name("Search")
                .with_service_kind("api"),
        ))
        .with_provision(ProvisionEntry::new(
            ContractRef::new("c-query").with_operation_name("query"),
            vec![ServiceRef::new("svc-web").with_display_name("Web")],
        ))
        .with_consumption(ConsumptionEntry::new(
            ContractRef::new("c-index").with_operation_name("index"),
            vec![ServiceRef::new("svc-indexer").with_display_name("Indexer")],
        ));

        PositionedGraph::from_payload(&payload, &RadialLayout::default())
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut output = Vec::new();
        f(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_ascii_lists_roles() {
        let renderer = GraphRenderer::new(false, true);
        let positioned = sample();
        let text = render(|out| renderer.render_ascii(&positioned, out));

        assert!(predicate::str::contains("Search (api)").eval(&text));
        assert!(predicate::str::contains("Providers (1):").eval(&text));
        assert!(predicate::str::contains("└── Indexer").eval(&text));
        assert!(predicate::str::contains("▶ index").eval(&text));
        assert!(predicate::str::contains("◀ query").eval(&text));
        assert!(predicate::str::contains("@ (").not().eval(&text));
    }

    #[test]
    fn test_ascii_shows_positions_when_requested() {
        let renderer = GraphRenderer::new(true, false);
        let positioned = sample();
        let text = render(|out| renderer.render_ascii(&positioned, out));

        assert!(predicate::str::contains("Search @ (400.0, 300.0)").eval(&text));
    }

    #[test]
    fn test_ascii_empty_graph() {
        let renderer = GraphRenderer::new(false, false);
        let positioned = PositionedGraph::default();
        let text = render(|out| renderer.render_ascii(&positioned, out));

        assert_eq!(text, "No dependencies to visualize\n");
    }

    #[test]
    fn test_mermaid_shapes_and_arrows() {
        let renderer = GraphRenderer::new(false, false);
        let positioned = sample();
        let text = render(|out| renderer.render_mermaid(&positioned, out));

        assert!(text.starts_with("graph LR"));
        assert!(text.contains("n_svc_2d_search((\"Search\"))"));
        assert!(text.contains("n_svc_2d_web([\"Web\"])"));
        assert!(text.contains("n_svc_2d_indexer[\"Indexer\"]"));
        assert!(text.contains("n_svc_2d_search -->|\"query\"| n_svc_2d_web"));
        assert!(text.contains("n_svc_2d_indexer -.->|\"index\"| n_svc_2d_search"));
        assert!(text.contains("linkStyle 1 stroke:"));
    }

    #[test]
    fn test_mermaid_ids_keep_distinct_services_apart() {
        let payload = RelationshipPayload::new(Some(ServiceRef::new("s"))).with_provision(
            ProvisionEntry::new(
                ContractRef::new("c"),
                vec![
                    ServiceRef::new("svc-web").with_display_name("Web A"),
                    ServiceRef::new("svc_web").with_display_name("Web B"),
                    ServiceRef::new("svc.web").with_display_name("Web C"),
                ],
            ),
        );
        let positioned = PositionedGraph::from_payload(&payload, &RadialLayout::default());
        let renderer = GraphRenderer::new(false, false);
        let text = render(|out| renderer.render_mermaid(&positioned, out));

        assert!(text.contains("n_svc_2d_web([\"Web A\"])"));
        assert!(text.contains("n_svc__web([\"Web B\"])"));
        assert!(text.contains("n_svc_2e_web([\"Web C\"])"));
        assert!(text.contains("n_s -->|\"API\"| n_svc_2d_web"));
        assert!(text.contains("n_s -->|\"API\"| n_svc__web"));
    }

    #[test]
    fn test_dot_pins_positions() {
        let renderer = GraphRenderer::new(true, false);
        let positioned = sample();
        let text = render(|out| renderer.render_dot(&positioned, out));

        assert!(text.contains("layout=neato;"));
        assert!(text.contains(r#""svc-search" [label="Search""#));
        assert!(text.contains(r#"pos="400.00,-300.00!""#));
        assert!(text.contains(r#""svc-indexer" -> "svc-search" [label="index", style=dashed"#));
        assert!(text.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_escapes_quotes() {
        let payload = RelationshipPayload::new(Some(
            ServiceRef::new("s").with_display_name("The \"Core\""),
        ));
        let positioned = PositionedGraph::from_payload(&payload, &RadialLayout::default());
        let renderer = GraphRenderer::new(false, false);
        let text = render(|out| renderer.render_dot(&positioned, out));

        assert!(text.contains(r#"label="The \"Core\"""#));
        assert!(!text.contains("pos="));
    }
}
