//! Visual theming for the interaction network.

use crate::config::DashboardConfig;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	/// Opacity in `0.0..=1.0`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parse `#rrggbb` or `rgb()`/`rgba()` notation. Anything else is `None`.
	pub fn parse(text: &str) -> Option<Self> {
		let text = text.trim();
		if let Some(hex) = text.strip_prefix('#') {
			if hex.len() != 6 {
				return None;
			}
			let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
			return Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?));
		}

		let inner = text
			.strip_prefix("rgba(")
			.or_else(|| text.strip_prefix("rgb("))?
			.strip_suffix(')')?;
		let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
		if !(3..=4).contains(&parts.len()) {
			return None;
		}
		let a = match parts.get(3) {
			Some(a) => a.parse().ok()?,
			None => 1.0,
		};
		Some(Self::rgba(
			parts[0].parse().ok()?,
			parts[1].parse().ok()?,
			parts[2].parse().ok()?,
			a,
		))
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
	/// Outer color of the radial gradient
	pub color_secondary: Color,
	pub use_gradient: bool,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub color: Color,
	/// Color of highlighted edges around the hovered protein
	pub highlight_color: Color,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Fill for nodes without an explicit color
	pub color: Color,
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	pub border_color: Color,
	pub label_color: Color,
	/// Ring drawn around proteins that interact with themselves
	pub self_loop_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
}

impl Theme {
	/// Light theme with the configured node and edge colors.
	/// Unparseable colors keep the light theme defaults.
	pub fn from_config(config: &DashboardConfig) -> Self {
		let mut theme = Self::light();
		if let Some(color) = Color::parse(&config.node_color) {
			theme.node.color = color;
		}
		if let Some(color) = Color::parse(&config.edge_color) {
			theme.edge.color = color.with_alpha(0.6);
			theme.edge.highlight_color = color.darken(0.4);
		}
		theme
	}

	pub fn light() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::rgb(250, 251, 253),
				color_secondary: Color::rgb(236, 240, 245),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(128, 128, 128, 0.6),
				highlight_color: Color::rgb(77, 77, 77),
			},
			node: NodeStyle {
				color: Color::rgb(173, 216, 230),
				use_gradient: true,
				border_width: 1.0,
				border_color: Color::rgba(60, 90, 110, 0.6),
				label_color: Color::rgb(30, 35, 42),
				self_loop_color: Color::rgba(90, 120, 140, 0.8),
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_and_functional_notation() {
		assert_eq!(Color::parse("#add8e6"), Some(Color::rgb(173, 216, 230)));
		assert_eq!(Color::parse("rgb(1, 2, 3)"), Some(Color::rgb(1, 2, 3)));
		assert_eq!(Color::parse("rgba(1,2,3,0.5)"), Some(Color::rgba(1, 2, 3, 0.5)));
	}

	#[test]
	fn rejects_named_and_malformed_colors() {
		assert_eq!(Color::parse("lightblue"), None);
		assert_eq!(Color::parse("#abc"), None);
		assert_eq!(Color::parse("rgb(1, 2)"), None);
		assert_eq!(Color::parse("#zz0000"), None);
	}

	#[test]
	fn config_colors_override_theme() {
		let config = DashboardConfig {
			node_color: "#ff0000".to_string(),
			edge_color: "not a color".to_string(),
			..DashboardConfig::default()
		};
		let theme = Theme::from_config(&config);

		assert_eq!(theme.node.color, Color::rgb(255, 0, 0));
		assert_eq!(theme.edge.color, Theme::light().edge.color);
	}
}
