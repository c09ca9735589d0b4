//! ppi-dashboard: browse a protein-protein interaction dataset.
//!
//! Loads a CSV of protein pairs, searches it by protein identifier, renders
//! the interactions as a force-directed network and exports the table back
//! to CSV. The [`data`] module holds the DOM-free core; the rest is the
//! client-side shell around it.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod data;
pub mod pages;

pub use components::force_graph::{ForceGraphCanvas, GraphData, GraphLink, GraphNode};
pub use config::DashboardConfig;

use components::force_graph::Theme;
use data::{Dataset, DatasetLoader, HttpSource};
use pages::Page;
use pages::data::DataPage;
use pages::edit::EditPage;
use pages::home::Home;
use pages::visualization::VisualizationPage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ppi-dashboard: logging initialized");
}

/// Main application component.
/// Reads configuration from the DOM, loads the dataset once and routes
/// between the dashboard pages.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = DashboardConfig::from_document();
	let theme = Theme::from_config(&config);
	let layout = config.layout;

	let loader = Rc::new(DatasetLoader::new(HttpSource::new()));
	let reload = RwSignal::new(0u32);
	let location = config.data_url.clone();
	let dataset = LocalResource::new(move || {
		let generation = reload.get();
		let (loader, location) = (loader.clone(), location.clone());
		async move {
			if generation > 0 {
				loader.invalidate(&location);
			}
			Dataset::from(loader.load(&location).await)
		}
	});

	let table = Signal::derive(move || dataset.get().map(|d| d.table).unwrap_or_default());
	let graph = Signal::derive(move || dataset.get().map(|d| d.graph).unwrap_or_default());
	let diagnostic = move || {
		dataset.get().and_then(|d| d.diagnostic).map(|failure| {
			view! {
				<div class="error-banner">
					"Error loading dataset. Please check the file path. (" {failure.to_string()} ")"
				</div>
			}
		})
	};

	let page = RwSignal::new(Page::Home);
	let nav = Page::ALL
		.into_iter()
		.map(|p| {
			view! {
				<button class="nav-item" class:active=move || page.get() == p on:click=move |_| page.set(p)>
					{p.title()}
				</button>
			}
		})
		.collect_view();

	let export_file_name = config.export_file_name.clone();
	let edit_url = config.edit_url.clone();
	let content = move || match page.get() {
		Page::Home => view! { <Home table=table /> }.into_any(),
		Page::Data => {
			view! { <DataPage table=table export_file_name=export_file_name.clone() /> }.into_any()
		}
		Page::Visualization => {
			view! { <VisualizationPage graph=graph layout=layout theme=theme.clone() /> }.into_any()
		}
		Page::Edit => view! { <EditPage edit_url=edit_url.clone() /> }.into_any(),
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text=config.title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="dashboard">
			<nav class="sidebar">
				<h2>"Navigation"</h2>
				{nav}
				<button class="reload" on:click=move |_| reload.update(|g| *g += 1)>
					"Reload data"
				</button>
			</nav>
			<main class="content">
				{diagnostic}
				{move || {
					dataset
						.get()
						.is_none()
						.then(|| view! { <p class="loading">"Loading dataset..."</p> })
				}}
				{content}
			</main>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_page_has_a_distinct_title() {
		let titles: std::collections::HashSet<_> = Page::ALL.iter().map(|p| p.title()).collect();
		assert_eq!(titles.len(), Page::ALL.len());
	}

	#[test]
	fn empty_dataset_is_safe_to_render() {
		let dataset = Dataset::default();
		assert!(dataset.table.is_empty());
		assert!(dataset.diagnostic.is_none());
		assert!(GraphData::from(dataset.graph.as_ref()).nodes.is_empty());
	}
}
