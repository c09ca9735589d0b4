//! Canvas rendering for the interaction network.
//!
//! Draw order: background (screen space), then edges, then nodes with
//! highlighted nodes drawn last so they sit on top (world space).

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ForceGraphState, NodeInfo};
use super::theme::{Color, Theme};

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let background = &theme.background;
	let gradient = background
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				state.width.max(state.height) * 0.8,
			)
			.ok()
		})
		.flatten();

	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &background.color.to_css());
			let _ = gradient.add_color_stop(1.0, &background.color_secondary.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&background.color.to_css()),
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_edges(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let max_t = smooth_step(state.highlight.max_intensity());

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let edge_t = smooth_step(state.highlight.edge_intensity(n1.index(), n2.index()));
		let (color, width) = if edge_t > 0.01 {
			(
				lerp(theme.edge.color, theme.edge.highlight_color, edge_t),
				scale.edge_line_width * (1.0 + 0.8 * edge_t),
			)
		} else {
			(
				theme.edge.color.with_alpha(theme.edge.color.a * (1.0 - 0.6 * max_t)),
				scale.edge_line_width,
			)
		};

		let (ux, uy) = (dx / dist, dy / dist);
		let r1 = scale.node_radius * n1.data.user_data.size;
		let r2 = scale.node_radius * n2.data.user_data.size;

		ctx.set_stroke_style_str(&color.to_css());
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * r2, y2 - uy * r2);
		ctx.stroke();
	});
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let dim = 1.0 - 0.6 * max_t;

	state.graph.visit_nodes(|node| {
		if state.highlight.node_intensity(node.index()) > 0.001 {
			return;
		}
		draw_node(ctx, node, scale, theme, dim, 1.0);
	});

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let node_t = smooth_step(state.highlight.node_intensity(idx));
		if node_t <= 0.001 {
			return;
		}

		let alpha = dim + (1.0 - dim) * node_t;
		let radius_mult = 1.0 + 0.25 * node_t;
		draw_node(ctx, node, scale, theme, alpha, radius_mult);

		if state.highlight.hovered() == Some(idx) {
			let (x, y) = (node.x() as f64, node.y() as f64);
			let radius = scale.node_radius * radius_mult * node.data.user_data.size;
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + scale.ring_offset, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&theme.edge.highlight_color.with_alpha(0.8 * node_t).to_css());
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();
		}
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &force_graph::Node<NodeInfo>,
	scale: &ScaledValues,
	theme: &Theme,
	alpha: f64,
	radius_mult: f64,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let info = &node.data.user_data;
	let radius = scale.node_radius * radius_mult * info.size;

	ctx.set_global_alpha(alpha);

	if info.self_loop {
		draw_self_loop(ctx, x, y, radius, scale, theme);
	}

	let gradient = theme
		.node
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
				.ok()
		})
		.flatten();

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &info.color.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &info.color.to_css());
			let _ = gradient.add_color_stop(1.0, &info.color.darken(0.15).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&info.color.to_css()),
	}
	ctx.fill();

	if theme.node.border_width > 0.0 {
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width / scale.k);
		ctx.stroke();
	}

	if let Some(label) = &info.label {
		let label_alpha = alpha * scale.label_alpha;
		if label_alpha > 0.05 {
			ctx.set_global_alpha(label_alpha);
			ctx.set_fill_style_str(&theme.node.label_color.to_css());
			ctx.set_font(&scale.label_font);
			let _ = ctx.fill_text(label, x + radius + 3.0 / scale.k, y + 3.0 / scale.k);
		}
	}

	ctx.set_global_alpha(1.0);
}

/// Small ring above the node for a protein that interacts with itself.
fn draw_self_loop(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	radius: f64,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let loop_radius = radius * 0.6;
	ctx.begin_path();
	let _ = ctx.arc(x, y - radius - loop_radius * 0.6, loop_radius, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(&theme.node.self_loop_color.to_css());
	ctx.set_line_width(scale.edge_line_width);
	ctx.stroke();
}

fn lerp(from: Color, to: Color, t: f64) -> Color {
	let t = t.clamp(0.0, 1.0);
	let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;
	Color::rgba(
		mix(from.r, to.r),
		mix(from.g, to.g),
		mix(from.b, to.b),
		from.a * (1.0 - t) + to.a * t,
	)
}
