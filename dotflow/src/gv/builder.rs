//! A graph builder that converts scanned declarations to a node-link graph.

use super::parser::ast;
use crate::flow::{FlowEdge, FlowGraph, FlowNode, NodeKind};
use indexmap::IndexMap;

/// The shape of a node that does not say otherwise.
pub const DEFAULT_SHAPE: &str = "box";

/// Turns the two-character sequence `\n` into a line break.
fn unescape_label(label: &str) -> String {
    label.replace("\\n", "\n")
}

/// This class constructs a node-link graph from the scanned declarations.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    // Maps node names to nodes. The map keeps the order in which the names
    // were first seen, and overwriting a name keeps its slot.
    nodes: IndexMap<String, FlowNode>,
    edges: Vec<FlowEdge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    /// Visits all of the node declarations first, and only then the edges,
    /// so explicit declarations are never replaced by an edge endpoint.
    pub fn visit_document(&mut self, doc: &ast::Document) {
        for n in &doc.nodes {
            self.visit_node(n);
        }
        for e in &doc.edges {
            self.visit_edge(e);
        }
    }

    pub fn visit_node(&mut self, n: &ast::NodeStmt) {
        let label = match &n.list.label {
            Some(label) => unescape_label(label),
            None => n.id.clone(),
        };
        let shape = n.list.shape.as_deref().unwrap_or(DEFAULT_SHAPE);
        let kind = NodeKind::classify(&n.id, shape);

        if self.nodes.contains_key(&n.id) {
            log::debug!("Node {} was declared again, replacing it", n.id);
        }
        self.nodes
            .insert(n.id.clone(), FlowNode::new(&n.id, &label, kind));
    }

    pub fn visit_edge(&mut self, e: &ast::EdgeStmt) {
        self.init_node_with_name(&e.from);
        self.init_node_with_name(&e.to);

        let mut edge = FlowEdge::new(e.ordinal, &e.from, &e.to);
        edge.label = e.label().map(str::to_string);
        self.edges.push(edge);
    }

    // Creates a placeholder node for \p name unless one exists.
    fn init_node_with_name(&mut self, name: &str) {
        if !self.nodes.contains_key(name) {
            log::debug!("Creating implicit node {}", name);
            self.nodes.insert(name.to_string(), FlowNode::implicit(name));
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the graph in its current state. Positions are all at the
    /// origin until a layout pass runs.
    pub fn get(&self) -> FlowGraph {
        FlowGraph {
            nodes: self.nodes.values().cloned().collect(),
            edges: self.edges.clone(),
        }
    }
}
