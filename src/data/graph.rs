//! Undirected protein interaction graph built from an interaction table.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::table::InteractionTable;

/// Proteins as nodes, observed interactions as unweighted undirected edges.
///
/// Each unordered pair appears at most once. Self-loops are kept. Pair
/// membership and node degree are tracked during construction, so both the
/// build and the lookups stay O(1) per row regardless of hub size.
#[derive(Clone, Debug, Default)]
pub struct ProteinGraph {
	graph: UnGraph<String, ()>,
	index: HashMap<String, NodeIndex>,
	/// Inserted pairs, normalized to `(min, max)`.
	pairs: HashSet<(NodeIndex, NodeIndex)>,
	/// Distinct incident edges per node, indexed by `NodeIndex::index()`.
	degree: Vec<usize>,
}

/// Build the graph from every row of `table`, one edge insertion per row.
pub fn build_graph(table: &InteractionTable) -> ProteinGraph {
	let mut graph = ProteinGraph::default();
	for row in table.rows() {
		graph.insert_edge(row.protein_a_label(), row.protein_b_label());
	}
	graph
}

fn pair(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
	if a <= b { (a, b) } else { (b, a) }
}

impl ProteinGraph {
	fn node(&mut self, id: &str) -> NodeIndex {
		if let Some(&idx) = self.index.get(id) {
			return idx;
		}
		let idx = self.graph.add_node(id.to_string());
		self.index.insert(id.to_string(), idx);
		self.degree.push(0);
		idx
	}

	/// Returns false when the unordered pair was already present.
	fn insert_edge(&mut self, a: &str, b: &str) -> bool {
		let (ia, ib) = (self.node(a), self.node(b));
		if !self.pairs.insert(pair(ia, ib)) {
			return false;
		}
		self.graph.add_edge(ia, ib, ());
		self.degree[ia.index()] += 1;
		if ia != ib {
			self.degree[ib.index()] += 1;
		}
		true
	}

	/// Number of distinct proteins, `nan` placeholder included.
	pub fn node_count(&self) -> usize {
		self.graph.node_count()
	}

	/// Number of distinct interactions, self-loops included.
	pub fn edge_count(&self) -> usize {
		self.graph.edge_count()
	}

	/// Whether the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.graph.node_count() == 0
	}

	/// Protein identifiers in first-seen order.
	pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
		self.graph
			.node_indices()
			.map(move |idx| self.graph[idx].as_str())
	}

	/// Interactions as identifier pairs, in first-seen order.
	pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.graph.edge_references().map(move |edge| {
			(
				self.graph[edge.source()].as_str(),
				self.graph[edge.target()].as_str(),
			)
		})
	}

	/// Whether `id` is a node.
	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	/// Whether the unordered pair `{a, b}` is an edge.
	pub fn contains_edge(&self, a: &str, b: &str) -> bool {
		match (self.index.get(a), self.index.get(b)) {
			(Some(&ia), Some(&ib)) => self.pairs.contains(&pair(ia, ib)),
			_ => false,
		}
	}

	/// Count of distinct edges touching `id`; a self-loop counts once.
	/// Unknown identifiers have degree 0.
	pub fn degree(&self, id: &str) -> usize {
		self.index
			.get(id)
			.map(|idx| self.degree[idx.index()])
			.unwrap_or(0)
	}

	/// Largest degree in the graph, 0 when empty.
	pub fn max_degree(&self) -> usize {
		self.degree.iter().copied().max().unwrap_or(0)
	}

	/// Whether `id` has an edge to itself.
	pub fn has_self_loop(&self, id: &str) -> bool {
		self.contains_edge(id, id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::table::{InteractionRow, MISSING_VALUE};

	fn table(pairs: &[(&str, &str)]) -> InteractionTable {
		InteractionTable::new(
			vec!["Protein_A".into(), "Protein_B".into()],
			pairs
				.iter()
				.map(|(a, b)| InteractionRow::new(*a, *b))
				.collect(),
		)
	}

	#[test]
	fn reversed_duplicate_collapses_to_one_edge() {
		let graph = build_graph(&table(&[
			("TP53", "MDM2"),
			("TP53", "BRCA1"),
			("BRCA1", "TP53"),
		]));

		assert_eq!(graph.node_count(), 3);
		assert_eq!(graph.edge_count(), 2);
		assert_eq!(graph.nodes().collect::<Vec<_>>(), ["TP53", "MDM2", "BRCA1"]);
		assert!(graph.contains_edge("MDM2", "TP53"));
		assert!(graph.contains_edge("TP53", "BRCA1"));
		assert!(!graph.contains_edge("MDM2", "BRCA1"));
		assert_eq!(graph.degree("TP53"), 2);
		assert_eq!(graph.degree("MDM2"), 1);
		assert_eq!(graph.max_degree(), 2);
	}

	#[test]
	fn empty_table_gives_empty_graph() {
		let graph = build_graph(&InteractionTable::empty());
		assert!(graph.is_empty());
		assert_eq!(graph.edge_count(), 0);
		assert_eq!(graph.max_degree(), 0);
	}

	#[test]
	fn self_interaction_is_kept_and_counted_once() {
		let graph = build_graph(&table(&[("SNCA", "SNCA"), ("SNCA", "SNCA"), ("SNCA", "PARK7")]));

		assert_eq!(graph.node_count(), 2);
		assert_eq!(graph.edge_count(), 2);
		assert!(graph.has_self_loop("SNCA"));
		assert!(!graph.has_self_loop("PARK7"));
		assert_eq!(graph.degree("SNCA"), 2);
		assert_eq!(graph.edges().collect::<Vec<_>>(), [("SNCA", "SNCA"), ("SNCA", "PARK7")]);
	}

	#[test]
	fn missing_identifiers_become_placeholder_nodes() {
		let parsed = InteractionTable::parse_csv(b"A,B\nAPP,\n,MAPT\n");
		let graph = build_graph(&parsed);

		assert!(graph.contains(MISSING_VALUE));
		assert!(graph.contains_edge("APP", MISSING_VALUE));
		assert!(graph.contains_edge(MISSING_VALUE, "MAPT"));
		assert_eq!(graph.degree(MISSING_VALUE), 2);
	}

	#[test]
	fn hub_with_many_partners_builds_in_linear_time() {
		let partners = 100_000;
		let mut pairs: Vec<(String, String)> =
			(0..partners).map(|i| ("TP53".to_string(), format!("P{i}"))).collect();
		pairs.push(("P7".to_string(), "TP53".to_string()));
		let hub = InteractionTable::new(
			vec!["Protein_A".into(), "Protein_B".into()],
			pairs
				.iter()
				.map(|(a, b)| InteractionRow::new(a.as_str(), b.as_str()))
				.collect(),
		);

		let started = std::time::Instant::now();
		let graph = build_graph(&hub);
		let elapsed = started.elapsed();

		assert_eq!(graph.node_count(), partners + 1);
		assert_eq!(graph.edge_count(), partners);
		assert_eq!(graph.degree("TP53"), partners);
		assert_eq!(graph.max_degree(), partners);
		assert!(graph.contains_edge("P99999", "TP53"));
		assert!(!graph.contains_edge("P1", "P2"));
		assert!(
			elapsed < std::time::Duration::from_secs(10),
			"hub build took {elapsed:?}"
		);
	}

	#[test]
	fn unknown_protein_has_zero_degree() {
		let graph = build_graph(&table(&[("TP53", "MDM2")]));
		assert_eq!(graph.degree("HTT"), 0);
		assert!(!graph.contains_edge("TP53", "HTT"));
	}
}
