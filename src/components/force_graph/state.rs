//! Simulation state and interaction tracking for the network view.
//!
//! Wraps the `force_graph` physics simulation with per-protein display data,
//! the pan/zoom transform, and hover highlighting with smoothed intensities.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;
use std::hash::Hash;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};

use super::scale::{ScaleConfig, ScaledValues};
use super::theme::{Color, Theme};
use super::types::GraphData;
use crate::config::LayoutConfig;

const MIN_NODE_SIZE: f64 = 0.8;
const MAX_NODE_SIZE: f64 = 2.6;

/// Radius multiplier for a protein: grows with the square root of its
/// degree relative to the best-connected protein.
pub fn node_size(degree: usize, max_degree: usize) -> f64 {
	if max_degree == 0 {
		return MIN_NODE_SIZE;
	}
	let t = (degree.min(max_degree) as f64 / max_degree as f64).sqrt();
	MIN_NODE_SIZE + (MAX_NODE_SIZE - MIN_NODE_SIZE) * t
}

/// Per-protein display data attached to each simulation node.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	/// Text drawn beside the node.
	pub label: Option<String>,
	/// Fill color.
	pub color: Color,
	/// Size multiplier (1.0 = base radius)
	pub size: f64,
	/// Draw a self-interaction ring.
	pub self_loop: bool,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Hover highlighting: the hovered protein and its interaction partners
/// fade in, everything else fades back out.
///
/// Intensities follow exponential smoothing, so transitions ease out as
/// they approach their target.
#[derive(Clone, Debug)]
pub struct HighlightState<Idx> {
	hovered: Option<Idx>,
	neighbors: HashMap<Idx, Vec<Idx>>,
	active: HashSet<Idx>,
	intensity: HashMap<Idx, f64>,
	max: f64,
}

impl<Idx: Copy + Eq + Hash> HighlightState<Idx> {
	/// Highlight state for the given undirected edges.
	pub fn new(edges: &[(Idx, Idx)]) -> Self {
		let mut neighbors: HashMap<Idx, Vec<Idx>> = HashMap::new();
		for &(a, b) in edges {
			neighbors.entry(a).or_default().push(b);
			neighbors.entry(b).or_default().push(a);
		}
		Self {
			hovered: None,
			neighbors,
			active: HashSet::new(),
			intensity: HashMap::new(),
			max: 0.0,
		}
	}

	/// Node under the cursor, if any.
	pub fn hovered(&self) -> Option<Idx> {
		self.hovered
	}

	/// Move the hover target; neighbors are recomputed immediately.
	pub fn set_hover(&mut self, node: Option<Idx>) {
		if self.hovered == node {
			return;
		}
		self.hovered = node;
		self.active.clear();
		if let Some(idx) = node {
			self.active.insert(idx);
			if let Some(partners) = self.neighbors.get(&idx) {
				self.active.extend(partners.iter().copied());
			}
		}
	}

	/// Advance all intensities by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		const FADE_IN_SPEED: f64 = 8.0;
		const FADE_OUT_SPEED: f64 = 5.0;

		let rise = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let decay = (-FADE_OUT_SPEED * dt).exp();

		for &idx in &self.active {
			let value = self.intensity.entry(idx).or_insert(0.0);
			*value += (1.0 - *value) * rise;
		}

		let active = &self.active;
		self.intensity.retain(|idx, value| {
			if !active.contains(idx) {
				*value *= decay;
			}
			*value > 0.005
		});

		self.max = self.intensity.values().copied().fold(0.0, f64::max);
	}

	/// Current highlight of `idx` in `0.0..=1.0`.
	pub fn node_intensity(&self, idx: Idx) -> f64 {
		self.intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Geometric mean of the endpoint intensities.
	pub fn edge_intensity(&self, a: Idx, b: Idx) -> f64 {
		(self.node_intensity(a) * self.node_intensity(b)).sqrt()
	}

	/// Strongest node highlight, used to dim the rest of the graph.
	pub fn max_intensity(&self) -> f64 {
		self.max
	}
}

/// Physics simulation plus view, drag, pan and highlight state.
///
/// Rebuilt whenever the graph data changes; mutated every frame by the
/// animation loop.
pub struct ForceGraphState {
	/// Physics simulation over the visible proteins.
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	/// Hover fade state, keyed by simulation node.
	pub highlight: HighlightState<DefaultNodeIdx>,
	/// Canvas size in pixels.
	pub width: f64,
	pub height: f64,
	/// Physics steps only while set; highlights keep fading regardless.
	pub animation_running: bool,
	node_count: usize,
	edge_count: usize,
}

impl ForceGraphState {
	/// Seed the simulation from `data` on a canvas of the given size.
	pub fn new(
		data: &GraphData,
		width: f64,
		height: f64,
		layout: &LayoutConfig,
		theme: &Theme,
	) -> Self {
		let mut graph = ForceGraph::new(layout.simulation_parameters());
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		let max_degree = data.max_degree();
		// Seed positions on a circle around the origin so the layout is
		// deterministic; the transform centers the origin on the canvas.
		let ring = 100.0_f64.max(12.0 * (data.nodes.len() as f64).sqrt());

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let color = node
				.color
				.as_deref()
				.and_then(Color::parse)
				.unwrap_or(theme.node.color);

			let idx = graph.add_node(NodeData {
				x: (ring * angle.cos()) as f32,
				y: (ring * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
					color,
					size: node_size(node.degree, max_degree),
					self_loop: node.self_loop,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::new(&edges),
			width,
			height,
			animation_running: true,
			node_count: data.nodes.len(),
			edge_count: edges.len(),
		}
	}

	/// Proteins in the simulation.
	pub fn node_count(&self) -> usize {
		self.node_count
	}

	/// Links that resolved to two known proteins.
	pub fn edge_count(&self) -> usize {
		self.edge_count
	}

	/// Convert canvas pixels to graph coordinates.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node whose hit circle contains the screen point.
	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let hit_radius = scale.hit_radius * node.data.user_data.size;
			if (dx * dx + dy * dy).sqrt() < hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.highlight.set_hover(node);
	}

	/// Step physics (unless paused) and highlight fades by `dt` seconds.
	pub fn tick(&mut self, dt: f32) {
		if self.animation_running {
			self.graph.update(dt);
		}
		self.highlight.tick(dt as f64);
	}

	/// Record a new canvas size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Zoom by `factor` keeping the screen point `(x, y)` fixed.
	pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}
}
