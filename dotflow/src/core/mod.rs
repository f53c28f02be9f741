//! A module contain the configuration, errors and utilities that are shared by
//! the other modules.

pub mod config;
pub mod error;
pub mod utils;
