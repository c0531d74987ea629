//! Load a description of an index space and walk through it.

pub mod configuration;
mod walk;

pub use configuration::WalkConfiguration;
pub use walk::*;
