//! A module that contains everything that has to do with reading the GraphViz
//! file format (normalizing, scanning, building the node-link graph).

pub mod builder;
pub mod parser;

pub use builder::GraphBuilder;
pub use parser::normalize;
pub use parser::DotScanner;
