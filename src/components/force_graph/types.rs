//! Renderer input: proteins and their interactions as plain lists.

use crate::data::ProteinGraph;

/// A protein in the rendered network.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Protein identifier. Used to reference nodes in links.
	pub id: String,
	/// Text drawn next to the node; defaults to the identifier.
	pub label: Option<String>,
	/// Optional CSS color override (e.g., "#ff0000" or "rgb(255, 0, 0)").
	/// Falls back to the theme node color.
	pub color: Option<String>,
	/// Distinct interactions involving this protein. Drives node size.
	pub degree: usize,
	/// Whether the protein interacts with itself.
	pub self_loop: bool,
}

/// An undirected interaction between two distinct proteins.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	/// Protein id at one end.
	pub source: String,
	/// Protein id at the other end.
	pub target: String,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Proteins in first-seen order.
	pub nodes: Vec<GraphNode>,
	/// Interactions between distinct proteins.
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Largest node degree, 0 when empty.
	pub fn max_degree(&self) -> usize {
		self.nodes.iter().map(|n| n.degree).max().unwrap_or(0)
	}
}

/// Self-loops stay out of `links`: the physics simulation cannot place an
/// edge whose endpoints coincide. They are flagged on the node instead.
impl From<&ProteinGraph> for GraphData {
	fn from(graph: &ProteinGraph) -> Self {
		let nodes = graph
			.nodes()
			.map(|id| GraphNode {
				id: id.to_string(),
				label: Some(id.to_string()),
				color: None,
				degree: graph.degree(id),
				self_loop: graph.has_self_loop(id),
			})
			.collect();

		let links = graph
			.edges()
			.filter(|(a, b)| a != b)
			.map(|(a, b)| GraphLink {
				source: a.to_string(),
				target: b.to_string(),
			})
			.collect();

		Self { nodes, links }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{InteractionRow, InteractionTable, build_graph};

	#[test]
	fn self_loops_become_node_flags() {
		let table = InteractionTable::new(
			vec!["A".into(), "B".into()],
			vec![
				InteractionRow::new("SNCA", "SNCA"),
				InteractionRow::new("SNCA", "PARK7"),
			],
		);
		let data = GraphData::from(&build_graph(&table));

		assert_eq!(data.links.len(), 1);
		assert_eq!(data.links[0].source, "SNCA");
		assert_eq!(data.links[0].target, "PARK7");
		assert!(data.nodes[0].self_loop);
		assert_eq!(data.nodes[0].degree, 2);
		assert!(!data.nodes[1].self_loop);
		assert_eq!(data.max_degree(), 2);
	}
}
