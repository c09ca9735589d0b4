//! A loaded table bundled with the graph derived from it.

use std::sync::Arc;

use log::info;

use super::error::LoadFailure;
use super::graph::{ProteinGraph, build_graph};
use super::loader::LoadOutcome;
use super::table::InteractionTable;

/// Everything the pages read after one load cycle.
///
/// The graph is built once here and shared by every render until the next
/// load replaces the whole value.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
	/// Full interaction table.
	pub table: Arc<InteractionTable>,
	/// Graph built from `table`.
	pub graph: Arc<ProteinGraph>,
	/// Load failure to show in the error banner.
	pub diagnostic: Option<LoadFailure>,
}

impl From<LoadOutcome> for Dataset {
	fn from(outcome: LoadOutcome) -> Self {
		let graph = build_graph(&outcome.table);
		info!(
			"ppi-dashboard: graph has {} proteins, {} interactions",
			graph.node_count(),
			graph.edge_count()
		);
		Self {
			table: outcome.table,
			graph: Arc::new(graph),
			diagnostic: outcome.diagnostic,
		}
	}
}
