//! HTML table view of an interaction table.

use std::sync::Arc;

use leptos::prelude::*;

use crate::data::InteractionTable;

/// Renders every row in source order under the original header.
/// Missing cells render empty.
#[component]
pub fn InteractionTableView(#[prop(into)] table: Arc<InteractionTable>) -> impl IntoView {
	let columns = table.column_count();
	let headers: Vec<String> = (0..columns)
		.map(|i| table.headers().get(i).cloned().unwrap_or_default())
		.collect();

	let rows = table
		.rows()
		.iter()
		.map(|row| {
			let cells = (0..columns)
				.map(|i| {
					let value = row.cell(i).unwrap_or_default().to_string();
					view! { <td>{value}</td> }
				})
				.collect_view();
			view! { <tr>{cells}</tr> }
		})
		.collect_view();

	view! {
		<div class="table-scroll">
			<table class="interaction-table">
				<thead>
					<tr>
						{headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
					</tr>
				</thead>
				<tbody>{rows}</tbody>
			</table>
			<p class="row-count">{format!("{} rows", table.len())}</p>
		</div>
	}
}
