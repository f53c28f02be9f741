/*!
This crate converts graphs written in a small subset of the GraphViz DOT
language into the node-link JSON structure that xyflow (React Flow, lit-flow)
renders. It does not parse DOT with a grammar. Instead it scans the text with
a handful of patterns: node declarations at the start of a line, and
`a -> b` edges anywhere. Things that don't match are ignored, so the
conversion never fails on odd input.

The project also comes with a command line utility that converts a `.dot`
file and prints the JSON.

# Example: convert a graph

```rust
    let contents = "digraph {\n  a [label=\"A\"];\n  b [label=\"B\", shape=component];\n  a -> b [label=\"go\"];\n}";
    let graph = dotflow::convert(contents);

    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges[0].id, "e0");
    assert_eq!(graph.edges[0].label.as_deref(), Some("go"));

    println!("{}", graph.to_json().unwrap());
```

# Example: step by step

The conversion is made of a few passes that can be used on their own:

```rust
    use dotflow::core::config::LayoutOptions;
    use dotflow::flow::layout::assign_positions;
    use dotflow::gv::{DotScanner, GraphBuilder};

    // Strip the comments and 'rankdir', then find the declarations.
    let doc = DotScanner::new().process("x -> y; // implicit nodes");

    // Build the node map and the edge list.
    let mut gb = GraphBuilder::new();
    gb.visit_document(&doc);
    let mut graph = gb.get();

    // Stack the nodes in one column.
    assign_positions(&mut graph, &LayoutOptions::new(0, 100));
    assert_eq!(graph.nodes[1].position.y, 100);
```
*/

pub mod core;
pub mod flow;
pub mod gv;

pub use crate::core::config::LayoutOptions;
pub use crate::core::error::{Error, Result};
pub use crate::flow::FlowGraph;
pub use crate::gv::normalize;

/// Converts the DOT text \p input with the default column layout.
pub fn convert(input: &str) -> FlowGraph {
    convert_with_options(input, &LayoutOptions::default())
}

/// Converts the DOT text \p input and lays the nodes out as described by
/// \p options.
pub fn convert_with_options(input: &str, options: &LayoutOptions) -> FlowGraph {
    let doc = gv::DotScanner::new().process(input);
    let mut gb = gv::GraphBuilder::new();
    gb.visit_document(&doc);
    let mut graph = gb.get();
    flow::layout::assign_positions(&mut graph, options);
    graph
}
