//! Landing page with the two-column protein search.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::interaction_table::InteractionTableView;
use crate::data::{InteractionTable, SearchQuery};

/// Searches the table by protein A and protein B as the user types.
#[component]
pub fn Home(#[prop(into)] table: Signal<Arc<InteractionTable>>) -> impl IntoView {
	let protein_a = RwSignal::new(String::new());
	let protein_b = RwSignal::new(String::new());

	let results = move || {
		let query = SearchQuery::new(protein_a.get(), protein_b.get());
		if !query.is_active() {
			return None;
		}

		let matches = query.run(&table.get());
		let heading = format!(
			"Search Results for '{}' and '{}'",
			query.protein_a, query.protein_b
		);
		let body = if matches.is_empty() {
			view! { <h3>"No interactions found"</h3> }.into_any()
		} else {
			view! { <InteractionTableView table=matches /> }.into_any()
		};
		Some(view! {
			<h3>{heading}</h3>
			{body}
		})
	};

	view! {
		<h1>"Protein-Protein Interactions of Neurodegenerative Disorders"</h1>
		<p>
			"This database provides curated protein-protein interaction (PPI) data relevant to neurodegenerative diseases. "
			"It integrates data from STRING, BioGRID, and IntAct, with functional annotations and network topology analysis."
		</p>
		<div class="search-columns">
			<label>
				"Search for Protein A:"
				<input
					type="text"
					prop:value=move || protein_a.get()
					on:input=move |ev| protein_a.set(event_target_value(&ev))
				/>
			</label>
			<label>
				"Search for Protein B:"
				<input
					type="text"
					prop:value=move || protein_b.get()
					on:input=move |ev| protein_b.set(event_target_value(&ev))
				/>
			</label>
		</div>
		{results}
	}
}
