//! Force-directed view of the interaction network.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::force_graph::{ForceGraphCanvas, GraphData, Theme};
use crate::config::LayoutConfig;
use crate::data::ProteinGraph;

/// Network summary line above the interactive canvas.
#[component]
pub fn VisualizationPage(
	#[prop(into)] graph: Signal<Arc<ProteinGraph>>,
	layout: LayoutConfig,
	theme: Theme,
) -> impl IntoView {
	let graph_data = Signal::derive(move || GraphData::from(graph.get().as_ref()));
	let summary = move || {
		let graph = graph.get();
		format!(
			"{} proteins, {} interactions",
			graph.node_count(),
			graph.edge_count()
		)
	};

	view! {
		<h1>"Visualization Tool"</h1>
		<h3>"Network Visualization of PPI Data"</h3>
		<p class="subtitle">{summary}" · Drag nodes to reposition. Scroll to zoom. Drag background to pan."</p>
		<div class="graph-panel">
			<ForceGraphCanvas data=graph_data layout=layout theme=theme />
		</div>
	}
}
