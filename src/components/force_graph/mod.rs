//! Force-directed rendering of the protein interaction network.
//!
//! Renders an interactive network on an HTML canvas with:
//! - Physics-based node positioning via `force_graph`
//! - Node size scaled by interaction degree
//! - Pan, zoom, and node dragging interactions
//! - Smooth highlight of a protein and its partners on hover
//!
//! # Example
//!
//! ```ignore
//! use ppi_dashboard::{ForceGraphCanvas, GraphData};
//! use ppi_dashboard::data::{build_graph, InteractionTable};
//!
//! let table = InteractionTable::parse_csv(b"A,B\nTP53,MDM2\n");
//! let data = GraphData::from(&build_graph(&table));
//!
//! view! { <ForceGraphCanvas data=Signal::derive(move || data.clone()) /> }
//! ```

mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::ForceGraphCanvas;
pub use state::node_size;
pub use theme::{Color, Theme};
pub use types::{GraphData, GraphLink, GraphNode};
