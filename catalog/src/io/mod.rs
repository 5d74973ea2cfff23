//! I/O helpers for catalog commands.

pub mod catalog_file;
pub mod config;
