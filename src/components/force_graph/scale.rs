//! Zoom-dependent scaling for network visuals.
//!
//! Sizes are expressed either in world-space (the graph's own coordinates,
//! growing as you zoom in) or screen-space (pixels, constant under zoom).
//! [`ScaledValues`] resolves a [`ScaleConfig`] against the current zoom `k`
//! once per frame.

/// How a size reacts to the zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space value for `base` at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Linear fade between two zoom levels: invisible at `zero_alpha_k`,
/// opaque at `full_alpha_k`.
#[derive(Clone, Debug)]
pub struct ZoomFade {
	pub zero_alpha_k: f64,
	pub full_alpha_k: f64,
}

impl ZoomFade {
	pub fn apply(&self, k: f64) -> f64 {
		if self.zero_alpha_k == self.full_alpha_k {
			return 1.0;
		}
		((k - self.zero_alpha_k) / (self.full_alpha_k - self.zero_alpha_k)).clamp(0.0, 1.0)
	}
}

/// Configuration for node visual scaling.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Base node radius in world units, before the degree multiplier.
	pub radius: f64,
	pub radius_behavior: ScaleBehavior,
	/// Hit detection radius in world units.
	pub hit_radius: f64,
	pub hit_behavior: ScaleBehavior,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Zoom level below which label fonts stop shrinking.
	pub label_min_k: f64,
	/// Labels fade out when zoomed far out.
	pub label_fade: ZoomFade,
}

/// Configuration for edge visual scaling.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Base line width in screen pixels.
	pub line_width: f64,
}

/// Hover ring around the hovered protein.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	/// Stroke width in screen pixels.
	pub width: f64,
	/// Offset from node edge in screen pixels.
	pub offset: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub node: NodeScaleConfig,
	pub edge: EdgeScaleConfig,
	pub ring: RingScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 6.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 3.0,
					max_screen: f64::INFINITY,
				},
				hit_radius: 12.0,
				hit_behavior: ScaleBehavior::Clamped {
					min_screen: 6.0,
					max_screen: f64::INFINITY,
				},
				label_size: 10.0,
				label_min_k: 0.5,
				label_fade: ZoomFade {
					zero_alpha_k: 0.25,
					full_alpha_k: 0.6,
				},
			},
			edge: EdgeScaleConfig { line_width: 1.0 },
			ring: RingScaleConfig {
				width: 1.5,
				offset: 2.0,
			},
		}
	}
}

/// Scale values resolved for one zoom level, all in world-space.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Zoom level these values were resolved for.
	pub k: f64,
	/// Base radius before the degree multiplier.
	pub node_radius: f64,
	pub hit_radius: f64,
	/// Font string (e.g., "10px sans-serif").
	pub label_font: String,
	/// Label opacity after the zoom fade.
	pub label_alpha: f64,
	pub edge_line_width: f64,
	pub ring_width: f64,
	pub ring_offset: f64,
}

impl ScaledValues {
	/// Resolve `config` at zoom `k`.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let label_font_size = config.node.label_size / k.max(config.node.label_min_k);

		Self {
			k,
			node_radius: config.node.radius_behavior.apply(config.node.radius, k),
			hit_radius: config.node.hit_behavior.apply(config.node.hit_radius, k),
			label_font: format!("{}px sans-serif", label_font_size),
			label_alpha: config.node.label_fade.apply(k),
			edge_line_width: ScaleBehavior::Screen.apply(config.edge.line_width, k),
			ring_width: ScaleBehavior::Screen.apply(config.ring.width, k),
			ring_offset: ScaleBehavior::Screen.apply(config.ring.offset, k),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clamped_radius_keeps_minimum_screen_size() {
		let behavior = ScaleBehavior::Clamped {
			min_screen: 3.0,
			max_screen: f64::INFINITY,
		};
		assert_eq!(behavior.apply(6.0, 1.0), 6.0);
		// At k=0.25 a 6-unit radius would be 1.5px on screen.
		assert_eq!(behavior.apply(6.0, 0.25), 12.0);
	}

	#[test]
	fn labels_fade_when_zoomed_out() {
		let scale = ScaleConfig::default();
		assert_eq!(ScaledValues::new(&scale, 1.0).label_alpha, 1.0);
		assert_eq!(ScaledValues::new(&scale, 0.2).label_alpha, 0.0);
		let mid = ScaledValues::new(&scale, 0.425).label_alpha;
		assert!(mid > 0.4 && mid < 0.6);
	}
}
