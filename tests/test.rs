use dotflow::flow::NodeKind;
use dotflow::FlowGraph;

fn node_summary(g: &FlowGraph) -> Vec<(&str, &str, NodeKind)> {
    g.nodes
        .iter()
        .map(|n| (n.id.as_str(), n.label(), n.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::node_summary;
    use dotflow::flow::NodeKind;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn get_sample_program() -> String {
        r##"// A small data pipeline.
        digraph Pipeline {
            rankdir=LR;
            node [shape=box, style=filled];
            edge [color=gray];

            RawInput [label="Raw\ninput", shape=note];
            clean [label="Clean"];
            train [label="Train model"];
            report [label="Report", shape=component];

            RawInput -> clean [label="rows"];
            clean -> train;
            train -> report [label="metrics", color=blue];
            train -> archive; // never declared
        }
        "##
        .to_string()
    }

    fn to_value(g: &dotflow::FlowGraph) -> Value {
        serde_json::from_str(&g.to_json().unwrap()).unwrap()
    }

    #[test]
    fn empty_input() {
        let g = dotflow::convert("");
        assert_eq!(to_value(&g), json!({"nodes": [], "edges": []}));

        let g = dotflow::convert("digraph G {\n  // nothing here\n}\n");
        assert_eq!(to_value(&g), json!({"nodes": [], "edges": []}));
    }

    #[test]
    fn round_trip_scenario() {
        let input = "a [label=\"A\"];\nb [label=\"B\", shape=component];\na -> b [label=\"go\"];\n";
        let g = dotflow::convert(input);
        let expected = json!({
            "nodes": [
                {"id": "a", "data": {"label": "A"}, "position": {"x": 250, "y": 0}, "type": "default"},
                {"id": "b", "data": {"label": "B"}, "position": {"x": 250, "y": 120}, "type": "output"}
            ],
            "edges": [
                {"id": "e0", "source": "a", "target": "b", "markerEnd": {"type": "arrowclosed"}, "label": "go"}
            ]
        });
        assert_eq!(to_value(&g), expected);
    }

    #[test]
    fn statements_on_one_line_only_declare_the_first_node() {
        let input = "a [label=\"A\"]; b [label=\"B\", shape=component]; a -> b [label=\"go\"];";
        let g = dotflow::convert(input);
        assert_eq!(
            node_summary(&g),
            vec![("a", "A", NodeKind::Default), ("b", "b", NodeKind::Default)]
        );
        assert_eq!(g.edges.len(), 1);
    }

    #[test]
    fn implicit_nodes() {
        let g = dotflow::convert("x -> y;");
        let expected = json!({
            "nodes": [
                {"id": "x", "data": {"label": "x"}, "position": {"x": 250, "y": 0}, "type": "default"},
                {"id": "y", "data": {"label": "y"}, "position": {"x": 250, "y": 120}, "type": "default"}
            ],
            "edges": [
                {"id": "e0", "source": "x", "target": "y", "markerEnd": {"type": "arrowclosed"}}
            ]
        });
        assert_eq!(to_value(&g), expected);
    }

    #[test]
    fn sample_program() {
        let g = dotflow::convert(&get_sample_program());
        assert_eq!(
            node_summary(&g),
            vec![
                ("RawInput", "Raw\ninput", NodeKind::Input),
                ("clean", "Clean", NodeKind::Default),
                ("train", "Train model", NodeKind::Default),
                ("report", "Report", NodeKind::Output),
                ("archive", "archive", NodeKind::Default),
            ]
        );

        let edges: Vec<(&str, &str, &str, Option<&str>)> = g
            .edges
            .iter()
            .map(|e| {
                (
                    e.id.as_str(),
                    e.source.as_str(),
                    e.target.as_str(),
                    e.label.as_deref(),
                )
            })
            .collect();
        assert_eq!(
            edges,
            vec![
                ("e0", "RawInput", "clean", Some("rows")),
                ("e1", "clean", "train", None),
                ("e2", "train", "report", Some("metrics")),
                ("e3", "train", "archive", None),
            ]
        );

        for (i, n) in g.nodes.iter().enumerate() {
            assert_eq!((n.position.x, n.position.y), (250, i as i64 * 120));
        }
    }

    #[test]
    fn directives_and_comments_have_no_effect() {
        let plain = "a [label=\"A\"]\na -> b\n";
        let noisy = "rankdir=LR;\n// a [label=\"Ignored\"]\na [label=\"A\"] // the start\na -> b\n";
        assert_eq!(dotflow::convert(noisy), dotflow::convert(plain));
    }

    #[test]
    fn last_declaration_wins() {
        let g = dotflow::convert(
            "n [label=\"first\", shape=component]\nm\nn [label=\"second\"]\n",
        );
        assert_eq!(node_summary(&g), vec![("n", "second", NodeKind::Default)]);
    }

    #[test]
    fn edge_ids_follow_the_text_not_the_nodes() {
        let g = dotflow::convert("c -> d\na [label=\"A\"]\na -> c\nedge -> x\nb -> a\n");
        let ids: Vec<&str> = g.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e0", "e1", "e3"]);
        assert!(g.node("x").is_none());
    }

    #[test]
    fn no_dangling_edges() {
        let g = dotflow::convert(&get_sample_program());
        for e in &g.edges {
            assert!(g.node(&e.source).is_some(), "missing {}", e.source);
            assert!(g.node(&e.target).is_some(), "missing {}", e.target);
        }
    }

    #[test]
    fn custom_layout() {
        let opts = dotflow::LayoutOptions::new(0, 80);
        let g = dotflow::convert_with_options("a -> b -> c\nc -> d", &opts);
        let ys: Vec<i64> = g.nodes.iter().map(|n| n.position.y).collect();
        assert_eq!(ys, vec![0, 80, 160, 240]);
        assert!(g.nodes.iter().all(|n| n.position.x == 0));
    }
}

#[test]
fn normalize_is_exported() {
    assert_eq!(dotflow::normalize("a -> b // c"), "a -> b ");
}
