//! Dashboard pages selectable from the sidebar.

pub mod data;
pub mod edit;
pub mod home;
pub mod visualization;

/// The sidebar destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
	/// Landing page with the protein search.
	Home,
	/// Full table and CSV download.
	Data,
	/// Force-directed network.
	Visualization,
	/// Link to the editable source data.
	Edit,
}

impl Page {
	/// Sidebar order.
	pub const ALL: [Page; 4] = [Page::Home, Page::Data, Page::Visualization, Page::Edit];

	/// Label shown in the sidebar.
	pub fn title(self) -> &'static str {
		match self {
			Page::Home => "Home",
			Page::Data => "Data",
			Page::Visualization => "Visualization Tool",
			Page::Edit => "GitHub Data Edit",
		}
	}
}
