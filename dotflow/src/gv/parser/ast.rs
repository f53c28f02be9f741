//! The declarations that the scanner pulls out of a DOT file.

/// Identifiers that start DOT default-attribute statements, never nodes.
pub const RESERVED_IDS: [&str; 3] = ["node", "graph", "edge"];

pub fn is_reserved(id: &str) -> bool {
    RESERVED_IDS.contains(&id)
}

// [label="...", shape=...]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    /// The raw text between the brackets.
    pub raw: String,
    /// The text of `label="..."`, exactly as written (escapes untouched).
    pub label: Option<String>,
    /// The word after `shape=`.
    pub shape: Option<String>,
}

impl AttributeList {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            label: None,
            shape: None,
        }
    }
}

// node-name [ ... ]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStmt {
    pub id: String,
    pub list: AttributeList,
}

impl NodeStmt {
    pub fn new(id: &str, list: AttributeList) -> Self {
        Self {
            id: id.to_string(),
            list,
        }
    }
}

// a -> b [ ... ]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeStmt {
    /// Zero-based index of this match among all the arrow matches in the
    /// text, including the ones that were dropped.
    pub ordinal: usize,
    pub from: String,
    pub to: String,
    pub list: Option<AttributeList>,
}

impl EdgeStmt {
    pub fn new(ordinal: usize, from: &str, to: &str) -> Self {
        Self {
            ordinal,
            from: from.to_string(),
            to: to.to_string(),
            list: None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.list.as_ref().and_then(|l| l.label.as_deref())
    }
}

/// Everything that was found in one input, each list in textual order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<NodeStmt>,
    pub edges: Vec<EdgeStmt>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
