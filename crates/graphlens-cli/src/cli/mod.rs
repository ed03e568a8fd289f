//! CLI command implementations.

mod display;

pub mod bridges;
pub mod communities;
pub mod cycles;
pub mod layout;
pub mod loader;
pub mod mst;
pub mod path;
pub mod rank;
pub mod scc;
pub mod summary;
pub mod types;
