//! Utility modules: configuration, logging and build identification

pub mod config;
pub mod logger;
pub mod version;
