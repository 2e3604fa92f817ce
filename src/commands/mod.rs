//! Command implementations for the Sledge CLI

pub mod cache;
pub mod completions;
pub mod config;
pub mod helpers;
pub mod install;
pub mod launch;
pub mod version;
