//! A pattern based scanner for a small subset of the DOT language.
//!
//! There is no grammar here. Node declarations are recognized only at the
//! start of a line (`name [ ... ]`), while edges (`a -> b [ ... ]`) are found
//! anywhere in the text. Text that matches neither pattern is ignored.

use super::ast;
use super::normalize::Normalizer;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct DotScanner {
    normalizer: Normalizer,
    node_re: Regex,
    edge_re: Regex,
    label_re: Regex,
    shape_re: Regex,
}

impl Default for DotScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DotScanner {
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
            node_re: Regex::new(r"(?m)^\s*(\w+)\s*\[([^\]]+)\]").unwrap(),
            edge_re: Regex::new(r"(\w+)\s*->\s*(\w+)(?:\s*\[([^\]]+)\])?")
                .unwrap(),
            label_re: Regex::new(r#"label="([^"]+)""#).unwrap(),
            shape_re: Regex::new(r"shape=(\w+)").unwrap(),
        }
    }

    /// Normalizes the raw \p input and scans it.
    pub fn process(&self, input: &str) -> ast::Document {
        let text = self.normalizer.normalize(input);
        self.scan(&text)
    }

    /// Scans text that was already normalized.
    pub fn scan(&self, text: &str) -> ast::Document {
        let doc = ast::Document {
            nodes: self.scan_nodes(text),
            edges: self.scan_edges(text),
        };
        log::info!(
            "Found {} node declarations and {} edges",
            doc.nodes.len(),
            doc.edges.len()
        );
        doc
    }

    fn parse_attr_list(&self, raw: &str) -> ast::AttributeList {
        let mut list = ast::AttributeList::new(raw);
        list.label = self
            .label_re
            .captures(raw)
            .map(|caps| caps[1].to_string());
        list.shape = self
            .shape_re
            .captures(raw)
            .map(|caps| caps[1].to_string());
        list
    }

    pub fn scan_nodes(&self, text: &str) -> Vec<ast::NodeStmt> {
        let mut nodes = Vec::new();
        for caps in self.node_re.captures_iter(text) {
            let id = &caps[1];
            if ast::is_reserved(id) {
                log::debug!("Skipping the '{}' attribute statement", id);
                continue;
            }
            let list = self.parse_attr_list(&caps[2]);
            log::trace!("Node {} [{}]", id, list.raw);
            nodes.push(ast::NodeStmt::new(id, list));
        }
        nodes
    }

    pub fn scan_edges(&self, text: &str) -> Vec<ast::EdgeStmt> {
        let mut edges = Vec::new();
        for (i, caps) in self.edge_re.captures_iter(text).enumerate() {
            let from = &caps[1];
            let to = &caps[2];
            if ast::is_reserved(from) {
                log::debug!("Skipping edge #{} that starts at '{}'", i, from);
                continue;
            }
            let mut es = ast::EdgeStmt::new(i, from, to);
            if let Some(raw) = caps.get(3) {
                es.list = Some(self.parse_attr_list(raw.as_str()));
            }
            log::trace!("Edge #{} {} -> {}", i, from, to);
            edges.push(es);
        }
        edges
    }
}
