//! Case-insensitive substring search over the two protein columns.

use super::table::InteractionTable;

/// Search terms for the protein A and protein B columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
	/// Matched against column 0.
	pub protein_a: String,
	/// Matched against column 1.
	pub protein_b: String,
}

impl SearchQuery {
	/// Query from the two raw input values.
	pub fn new(protein_a: impl Into<String>, protein_b: impl Into<String>) -> Self {
		Self {
			protein_a: protein_a.into(),
			protein_b: protein_b.into(),
		}
	}

	/// A query with both terms empty matches nothing, so callers skip it.
	pub fn is_active(&self) -> bool {
		!self.protein_a.is_empty() || !self.protein_b.is_empty()
	}

	/// Apply [`search`] to `table`.
	pub fn run(&self, table: &InteractionTable) -> InteractionTable {
		search(table, &self.protein_a, &self.protein_b)
	}
}

/// Rows where column 0 contains `term_a` or column 1 contains `term_b`.
///
/// Each clause only applies when its term is non-empty, so two empty terms
/// yield no rows. Column 0 is never compared against `term_b` and vice
/// versa. Missing cells never match.
pub fn search(table: &InteractionTable, term_a: &str, term_b: &str) -> InteractionTable {
	let needle_a = (!term_a.is_empty()).then(|| term_a.to_lowercase());
	let needle_b = (!term_b.is_empty()).then(|| term_b.to_lowercase());

	let rows = table
		.rows()
		.iter()
		.filter(|row| {
			contains_term(row.protein_a.as_deref(), needle_a.as_deref())
				|| contains_term(row.protein_b.as_deref(), needle_b.as_deref())
		})
		.cloned()
		.collect();

	table.with_rows(rows)
}

fn contains_term(value: Option<&str>, needle: Option<&str>) -> bool {
	match (value, needle) {
		(Some(value), Some(needle)) => value.to_lowercase().contains(needle),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> InteractionTable {
		InteractionTable::parse_csv(
			b"Protein_A,Protein_B,Disease\n\
			TP53,MDM2,AD\n\
			MDM2,TP53,AD\n\
			SNCA,PARK7,PD\n\
			,HTT,HD\n\
			LRRK2,,PD\n",
		)
	}

	fn firsts(table: &InteractionTable) -> Vec<String> {
		table
			.rows()
			.iter()
			.map(|r| r.protein_a_label().to_string())
			.collect()
	}

	#[test]
	fn both_terms_empty_matches_nothing() {
		assert!(search(&sample(), "", "").is_empty());
		assert!(!SearchQuery::default().is_active());
	}

	#[test]
	fn term_a_only_consults_column_zero() {
		let result = search(&sample(), "tp53", "");
		assert_eq!(firsts(&result), ["TP53"]);
	}

	#[test]
	fn term_b_only_consults_column_one() {
		let result = search(&sample(), "", "Tp5");
		assert_eq!(firsts(&result), ["MDM2"]);
	}

	#[test]
	fn clauses_are_or_combined() {
		let result = search(&sample(), "snca", "htt");
		assert_eq!(firsts(&result), ["SNCA", "nan"]);
	}

	#[test]
	fn missing_cells_never_match() {
		assert!(search(&sample(), "nan", "").is_empty());
		assert!(search(&sample(), "", "na").is_empty());
	}

	#[test]
	fn result_keeps_header_and_order() {
		let table = sample();
		let result = search(&table, "2", "2");

		assert_eq!(result.headers(), table.headers());
		assert_eq!(firsts(&result), ["TP53", "MDM2", "LRRK2"]);
	}

	#[test]
	fn empty_table_yields_empty_result() {
		assert!(search(&InteractionTable::empty(), "TP53", "MDM2").is_empty());
	}
}
