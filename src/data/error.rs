//! Error types for loading and exporting interaction tables.

use thiserror::Error;

/// Why a dataset fetch did not produce a payload.
///
/// The loader never propagates this to its caller. It degrades to an empty
/// table and hands the failure back as a diagnostic for the UI to show.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadFailure {
	/// The request never completed (DNS, connection, CORS, body read).
	#[error("could not reach {location}: {reason}")]
	Transport {
		/// URL that was requested.
		location: String,
		/// Transport error text, as reported by the HTTP client.
		reason: String,
	},
	/// The server answered with a non-success status code.
	#[error("{location} answered with HTTP status {status}")]
	Status {
		/// URL that was requested.
		location: String,
		/// HTTP status code of the response.
		status: u16,
	},
}

impl LoadFailure {
	/// Transport failure for `location` with the client's error text.
	pub fn transport(location: &str, reason: impl ToString) -> Self {
		Self::Transport {
			location: location.to_string(),
			reason: reason.to_string(),
		}
	}

	/// Non-success status failure for `location`.
	pub fn status(location: &str, status: u16) -> Self {
		Self::Status {
			location: location.to_string(),
			status,
		}
	}
}

/// Failure while encoding a table back to CSV.
#[derive(Debug, Error)]
pub enum ExportError {
	/// The CSV writer rejected a record.
	#[error("failed to encode CSV: {0}")]
	Csv(#[from] csv::Error),
	/// The in-memory buffer could not be flushed.
	#[error("failed to flush CSV buffer: {0}")]
	Flush(String),
	/// Written bytes did not decode as UTF-8.
	#[error("exported CSV is not valid UTF-8: {0}")]
	Utf8(#[from] std::string::FromUtf8Error),
}
