//! Dashboard configuration read from the host page.
//!
//! The page may embed a `<script id="ppi-config" type="application/json">`
//! element. Any field it omits keeps its default, and a missing or broken
//! element falls back to the defaults entirely.

use force_graph::SimulationParameters;
use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// DOM id of the embedded configuration element.
pub const CONFIG_ELEMENT_ID: &str = "ppi-config";

/// Curated interaction table loaded when no `data_url` is configured.
pub const DEFAULT_DATA_URL: &str =
	"https://raw.githubusercontent.com/jahnaviP05/protein-protein-database/main/cleaned_interactions.csv";
/// Editable copy of the default table.
pub const DEFAULT_EDIT_URL: &str =
	"https://github.com/jahnaviP05/protein-protein-database/edit/main/cleaned_interactions.csv";

/// Top-level dashboard settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
	/// Document title.
	pub title: String,
	/// CSV table to load. Column 0 is protein A, column 1 protein B.
	pub data_url: String,
	/// Static link to an editable copy of the source data.
	pub edit_url: String,
	/// File name offered by the CSV download.
	pub export_file_name: String,
	/// Node fill, as `#rrggbb` or `rgb()`/`rgba()`.
	pub node_color: String,
	/// Edge stroke, same formats as `node_color`.
	pub edge_color: String,
	/// Force simulation tuning.
	pub layout: LayoutConfig,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			title: "PPI Network Database".to_string(),
			data_url: DEFAULT_DATA_URL.to_string(),
			edit_url: DEFAULT_EDIT_URL.to_string(),
			export_file_name: "PPI_data.csv".to_string(),
			node_color: "#add8e6".to_string(),
			edge_color: "#808080".to_string(),
			layout: LayoutConfig::default(),
		}
	}
}

/// Force simulation tuning passed straight to `force_graph`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
	/// Repulsion between every pair of nodes.
	pub force_charge: f32,
	/// Spring constant pulling linked nodes together.
	pub force_spring: f32,
	/// Upper bound on the force applied to one node per step.
	pub force_max: f32,
	pub node_speed: f32,
	/// Velocity kept per step, in `0.0..1.0`.
	pub damping_factor: f32,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			force_charge: 250.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		}
	}
}

impl LayoutConfig {
	/// Parameters in the form `force_graph` expects.
	pub fn simulation_parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

impl DashboardConfig {
	/// Parse a JSON object; absent fields keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Read the configuration element from the current document.
	pub fn from_document() -> Self {
		let Some(text) = config_element_text() else {
			info!("ppi-dashboard: no #{} element, using defaults", CONFIG_ELEMENT_ID);
			return Self::default();
		};

		match Self::from_json(&text) {
			Ok(config) => {
				info!("ppi-dashboard: configured for {}", config.data_url);
				config
			}
			Err(e) => {
				warn!("ppi-dashboard: failed to parse config, using defaults: {}", e);
				Self::default()
			}
		}
	}
}

fn config_element_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_keeps_defaults() {
		let config = DashboardConfig::from_json(
			r#"{ "data_url": "https://example.org/ppi.csv", "layout": { "force_charge": 80.0 } }"#,
		)
		.unwrap();

		assert_eq!(config.data_url, "https://example.org/ppi.csv");
		assert_eq!(config.export_file_name, "PPI_data.csv");
		assert_eq!(config.edit_url, DEFAULT_EDIT_URL);
		assert_eq!(config.layout.force_charge, 80.0);
		assert_eq!(config.layout.damping_factor, 0.9);
	}

	#[test]
	fn empty_object_is_default() {
		assert_eq!(DashboardConfig::from_json("{}").unwrap(), DashboardConfig::default());
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(DashboardConfig::from_json("{ data_url: ").is_err());
	}
}
