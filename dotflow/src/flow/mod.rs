//! The node-link graph that is handed to xyflow style renderers, and its JSON
//! form.

pub mod layout;

use crate::core::error::Result;
use serde::Serialize;

/// How the renderer should draw a node. This is a tag, not a structural
/// property of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Input,
    Output,
    Default,
}

impl NodeKind {
    /// Classifies an explicitly declared node. A name that mentions "input"
    /// wins over the shape.
    pub fn classify(id: &str, shape: &str) -> Self {
        if id.to_lowercase().contains("input") {
            NodeKind::Input
        } else if shape == "component" {
            NodeKind::Output
        } else {
            NodeKind::Default
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeData {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub id: String,
    pub data: NodeData,
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl FlowNode {
    pub fn new(id: &str, label: &str, kind: NodeKind) -> Self {
        Self {
            id: id.to_string(),
            data: NodeData {
                label: label.to_string(),
            },
            position: Position::default(),
            kind,
        }
    }

    /// A node that was only mentioned as an edge endpoint.
    pub fn implicit(id: &str) -> Self {
        Self::new(id, id, NodeKind::Default)
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    ArrowClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerEnd {
    #[serde(rename = "type")]
    pub kind: MarkerKind,
}

impl MarkerEnd {
    pub fn arrow_closed() -> Self {
        Self {
            kind: MarkerKind::ArrowClosed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub marker_end: MarkerEnd,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FlowEdge {
    /// Creates the edge that was the \p ordinal-th arrow in the text.
    pub fn new(ordinal: usize, source: &str, target: &str) -> Self {
        Self {
            id: format!("e{}", ordinal),
            source: source.to_string(),
            target: target.to_string(),
            marker_end: MarkerEnd::arrow_closed(),
            label: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Pretty printed JSON, indented with two spaces.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
