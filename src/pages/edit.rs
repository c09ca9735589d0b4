//! Link out to the editable copy of the dataset.

use leptos::prelude::*;

/// Static link to `edit_url`, opened in a new tab.
#[component]
pub fn EditPage(#[prop(into)] edit_url: String) -> impl IntoView {
	view! {
		<h1>"GitHub Data Edit"</h1>
		<a href=edit_url target="_blank" rel="noopener noreferrer">
			"Edit Data on GitHub"
		</a>
	}
}
