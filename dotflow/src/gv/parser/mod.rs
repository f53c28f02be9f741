//! Simplified DOT scanner.

pub mod ast;
pub mod normalize;
pub mod scanner;

pub use normalize::normalize;
pub use normalize::Normalizer;
pub use scanner::DotScanner;
