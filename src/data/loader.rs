//! Dataset loader with an explicit per-location cache.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};

use super::error::LoadFailure;
use super::source::DataSource;
use super::table::InteractionTable;

/// Result of one load: always a table, plus the failure if there was one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadOutcome {
	/// Parsed table, or an empty one on failure.
	pub table: Arc<InteractionTable>,
	/// Set when the fetch failed.
	pub diagnostic: Option<LoadFailure>,
}

impl LoadOutcome {
	fn loaded(table: Arc<InteractionTable>) -> Self {
		Self {
			table,
			diagnostic: None,
		}
	}

	fn failed(failure: LoadFailure) -> Self {
		Self {
			table: Arc::new(InteractionTable::empty()),
			diagnostic: Some(failure),
		}
	}

	/// Whether the load degraded to an empty table.
	pub fn is_failure(&self) -> bool {
		self.diagnostic.is_some()
	}
}

/// Loads interaction tables through a [`DataSource`] and keeps successful
/// results until they are invalidated.
///
/// Lives on the UI thread, so the cache is a plain `RefCell`. Failed loads
/// are not cached; the next `load` makes a fresh single attempt.
pub struct DatasetLoader<S> {
	source: S,
	cache: RefCell<HashMap<String, Arc<InteractionTable>>>,
}

impl<S: DataSource> DatasetLoader<S> {
	/// Loader with an empty cache.
	pub fn new(source: S) -> Self {
		Self {
			source,
			cache: RefCell::new(HashMap::new()),
		}
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	/// Load the table at `location`, reusing the cached copy when present.
	///
	/// Never fails: a transport error or non-success status yields an empty
	/// table with the failure attached as a diagnostic.
	pub async fn load(&self, location: &str) -> LoadOutcome {
		if let Some(table) = self.cached(location) {
			debug!("ppi-dashboard: cache hit for {}", location);
			return LoadOutcome::loaded(table);
		}

		info!("ppi-dashboard: fetching {}", location);
		match self.source.fetch(location).await {
			Ok(payload) => {
				let table = Arc::new(InteractionTable::parse_csv(&payload));
				info!(
					"ppi-dashboard: loaded {} interactions across {} columns",
					table.len(),
					table.column_count()
				);
				self.cache
					.borrow_mut()
					.insert(location.to_string(), table.clone());
				LoadOutcome::loaded(table)
			}
			Err(failure) => {
				warn!("ppi-dashboard: error loading dataset: {}", failure);
				LoadOutcome::failed(failure)
			}
		}
	}

	fn cached(&self, location: &str) -> Option<Arc<InteractionTable>> {
		self.cache.borrow().get(location).cloned()
	}

	/// Whether a successful load for `location` is cached.
	pub fn is_cached(&self, location: &str) -> bool {
		self.cache.borrow().contains_key(location)
	}

	/// Drop the cached table for `location`. Returns whether one was cached.
	pub fn invalidate(&self, location: &str) -> bool {
		let removed = self.cache.borrow_mut().remove(location).is_some();
		if removed {
			debug!("ppi-dashboard: invalidated {}", location);
		}
		removed
	}

	/// Drop every cached table.
	pub fn invalidate_all(&self) {
		self.cache.borrow_mut().clear();
	}
}

#[cfg(test)]
mod tests {
	use futures::executor::block_on;

	use super::*;
	use crate::data::source::StaticSource;

	const URL: &str = "https://example.org/ppi.csv";
	const PAYLOAD: &str = "Protein_A,Protein_B\nTP53,MDM2\nSNCA,PARK7\n";

	#[test]
	fn successful_load_parses_payload() {
		let loader = DatasetLoader::new(StaticSource::new().with_payload(URL, PAYLOAD));
		let outcome = block_on(loader.load(URL));

		assert!(!outcome.is_failure());
		assert_eq!(outcome.table.len(), 2);
		assert_eq!(outcome.table.headers(), ["Protein_A", "Protein_B"]);
	}

	#[test]
	fn second_load_is_served_from_cache() {
		let loader = DatasetLoader::new(StaticSource::new().with_payload(URL, PAYLOAD));
		let first = block_on(loader.load(URL));
		let second = block_on(loader.load(URL));

		assert_eq!(loader.source().fetches(), 1);
		assert!(Arc::ptr_eq(&first.table, &second.table));
		assert!(loader.is_cached(URL));
	}

	#[test]
	fn invalidate_forces_a_fresh_fetch() {
		let loader = DatasetLoader::new(StaticSource::new().with_payload(URL, PAYLOAD));
		block_on(loader.load(URL));

		assert!(loader.invalidate(URL));
		assert!(!loader.invalidate(URL));
		block_on(loader.load(URL));
		assert_eq!(loader.source().fetches(), 2);

		loader.invalidate_all();
		assert!(!loader.is_cached(URL));
	}

	#[test]
	fn non_success_status_degrades_to_empty_table() {
		let loader = DatasetLoader::new(StaticSource::new());
		let outcome = block_on(loader.load(URL));

		assert!(outcome.table.is_empty());
		assert_eq!(outcome.diagnostic, Some(LoadFailure::status(URL, 404)));
	}

	#[test]
	fn failures_are_attempted_once_and_not_cached() {
		let failure = LoadFailure::transport(URL, "connection refused");
		let loader = DatasetLoader::new(StaticSource::new().with_failure(URL, failure.clone()));

		let outcome = block_on(loader.load(URL));
		assert_eq!(outcome.diagnostic, Some(failure));
		assert_eq!(loader.source().fetches(), 1);
		assert!(!loader.is_cached(URL));

		block_on(loader.load(URL));
		assert_eq!(loader.source().fetches(), 2);
	}
}
