//! Interaction data core: loading, graph construction and search.
//!
//! Everything here is plain Rust with no DOM access, so it runs the same in
//! the browser and under `cargo test`.

mod dataset;
mod error;
mod graph;
mod loader;
mod query;
mod source;
mod table;

pub use dataset::Dataset;
pub use error::{ExportError, LoadFailure};
pub use graph::{ProteinGraph, build_graph};
pub use loader::{DatasetLoader, LoadOutcome};
pub use query::{SearchQuery, search};
pub use source::{DataSource, HttpSource, StaticSource};
pub use table::{InteractionRow, InteractionTable, MISSING_VALUE, coerce};
