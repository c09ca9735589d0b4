//! Full table view with CSV download.

use std::sync::Arc;

use leptos::prelude::*;
use log::warn;

use crate::components::interaction_table::InteractionTableView;
use crate::data::InteractionTable;

/// `data:` URI carrying the table as CSV, or `None` if encoding failed.
fn csv_download_href(table: &InteractionTable) -> Option<String> {
	match table.to_csv() {
		Ok(csv) => Some(format!(
			"data:text/csv;charset=utf-8,{}",
			String::from(js_sys::encode_uri_component(&csv))
		)),
		Err(e) => {
			warn!("ppi-dashboard: CSV export failed: {}", e);
			None
		}
	}
}

/// The whole table plus a download link offering it as `export_file_name`.
#[component]
pub fn DataPage(
	#[prop(into)] table: Signal<Arc<InteractionTable>>,
	#[prop(into)] export_file_name: String,
) -> impl IntoView {
	view! {
		<h1>"PPI Data"</h1>
		<h3>"Full Protein-Protein Interaction Data"</h3>
		{move || view! { <InteractionTableView table=table.get() /> }}
		<a
			class="download-button"
			href=move || csv_download_href(&table.get())
			download=export_file_name
		>
			"Download Processed Data"
		</a>
	}
}
