//! Interaction table model and its CSV codec.
//!
//! Column 0 holds the protein A identifier, column 1 the protein B
//! identifier. Every further column is carried through untouched so the
//! table can be displayed and exported exactly as it was loaded.

use csv::{ByteRecord, ReaderBuilder, WriterBuilder};
use log::warn;

use super::error::ExportError;

/// Textual form a missing cell takes when coerced to a protein identifier.
pub const MISSING_VALUE: &str = "nan";

/// Coerce an optional cell to its string form, missing cells included.
pub fn coerce(value: Option<&str>) -> &str {
	value.unwrap_or(MISSING_VALUE)
}

/// One protein pair plus any passthrough annotation columns.
///
/// `None` marks a missing value: an empty CSV cell or a row shorter than
/// the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionRow {
	/// Column 0.
	pub protein_a: Option<String>,
	/// Column 1.
	pub protein_b: Option<String>,
	/// Columns 2 onwards, in source order.
	pub annotations: Vec<Option<String>>,
}

impl InteractionRow {
	/// Row with both identifiers present and no annotations.
	pub fn new(protein_a: impl Into<String>, protein_b: impl Into<String>) -> Self {
		Self {
			protein_a: Some(protein_a.into()),
			protein_b: Some(protein_b.into()),
			annotations: Vec::new(),
		}
	}

	/// Replace the passthrough columns.
	pub fn with_annotations<I, S>(mut self, annotations: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.annotations = annotations.into_iter().map(|a| Some(a.into())).collect();
		self
	}

	fn from_cells(cells: Vec<Option<String>>) -> Self {
		let mut cells = cells.into_iter();
		Self {
			protein_a: cells.next().flatten(),
			protein_b: cells.next().flatten(),
			annotations: cells.collect(),
		}
	}

	/// Number of cells this row carries (never less than the two identifiers).
	pub fn width(&self) -> usize {
		2 + self.annotations.len()
	}

	/// Cell at a column position, `None` when missing or out of range.
	pub fn cell(&self, column: usize) -> Option<&str> {
		match column {
			0 => self.protein_a.as_deref(),
			1 => self.protein_b.as_deref(),
			n => self.annotations.get(n - 2).and_then(|a| a.as_deref()),
		}
	}

	/// Protein A identifier in its graph node form.
	pub fn protein_a_label(&self) -> &str {
		coerce(self.protein_a.as_deref())
	}

	/// Protein B identifier in its graph node form.
	pub fn protein_b_label(&self) -> &str {
		coerce(self.protein_b.as_deref())
	}

	fn to_record(&self) -> ByteRecord {
		let mut record = ByteRecord::new();
		for column in 0..self.width() {
			record.push_field(self.cell(column).unwrap_or_default().as_bytes());
		}
		record
	}
}

/// Header plus rows in source order. Immutable once loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionTable {
	headers: Vec<String>,
	rows: Vec<InteractionRow>,
}

impl InteractionTable {
	/// Table from an explicit header and rows.
	pub fn new(headers: Vec<String>, rows: Vec<InteractionRow>) -> Self {
		Self { headers, rows }
	}

	/// The table substituted for a failed load.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Column names, verbatim from the source header.
	pub fn headers(&self) -> &[String] {
		&self.headers
	}

	/// Rows in source order.
	pub fn rows(&self) -> &[InteractionRow] {
		&self.rows
	}

	/// Number of rows; the header is not counted.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Whether the table has no rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Widest of the header and every row, for rendering ragged tables.
	pub fn column_count(&self) -> usize {
		self.rows
			.iter()
			.map(InteractionRow::width)
			.max()
			.unwrap_or(0)
			.max(self.headers.len())
	}

	/// A table with the same header and a different set of rows.
	pub fn with_rows(&self, rows: Vec<InteractionRow>) -> Self {
		Self {
			headers: self.headers.clone(),
			rows,
		}
	}

	/// Parse a comma-separated payload whose first line is the header.
	///
	/// Never fails: ragged rows are accepted, invalid UTF-8 is replaced
	/// lossily, and records the reader cannot decode are skipped with a
	/// warning.
	pub fn parse_csv(payload: &[u8]) -> Self {
		let mut reader = ReaderBuilder::new()
			.has_headers(true)
			.flexible(true)
			.from_reader(payload);

		let headers = match reader.byte_headers() {
			Ok(record) => record
				.iter()
				.map(|field| String::from_utf8_lossy(field).into_owned())
				.collect(),
			Err(e) => {
				warn!("ppi-dashboard: unreadable CSV header: {}", e);
				return Self::empty();
			}
		};

		let mut rows = Vec::new();
		for (line, record) in reader.byte_records().enumerate() {
			match record {
				Ok(record) => rows.push(InteractionRow::from_cells(
					record.iter().map(decode_cell).collect(),
				)),
				Err(e) => warn!("ppi-dashboard: skipping CSV record {}: {}", line + 1, e),
			}
		}

		Self { headers, rows }
	}

	/// Encode as UTF-8 CSV: header first, one line per row, no index column.
	/// Missing values become empty cells.
	///
	/// A table without a header writes its rows only, so re-parsing it
	/// reads the first row back as the header. Tables from [`parse_csv`]
	/// and [`search`](crate::data::search) always carry one.
	///
	/// [`parse_csv`]: Self::parse_csv
	pub fn to_csv(&self) -> Result<String, ExportError> {
		if self.headers.is_empty() && self.rows.is_empty() {
			return Ok(String::new());
		}

		let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());
		if !self.headers.is_empty() {
			writer.write_record(&self.headers)?;
		}
		for row in &self.rows {
			writer.write_byte_record(&row.to_record())?;
		}
		let bytes = writer
			.into_inner()
			.map_err(|e| ExportError::Flush(e.error().to_string()))?;
		Ok(String::from_utf8(bytes)?)
	}
}

fn decode_cell(field: &[u8]) -> Option<String> {
	if field.is_empty() {
		None
	} else {
		Some(String::from_utf8_lossy(field).into_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = "Protein_A,Protein_B,Source,Score\n\
		TP53,MDM2,STRING,0.99\n\
		SNCA,,BioGRID,0.41\n\
		APP\n";

	#[test]
	fn parses_header_and_rows_in_order() {
		let table = InteractionTable::parse_csv(SAMPLE.as_bytes());

		assert_eq!(table.headers(), ["Protein_A", "Protein_B", "Source", "Score"]);
		assert_eq!(table.len(), 3);
		assert_eq!(table.rows()[0].protein_a.as_deref(), Some("TP53"));
		assert_eq!(table.rows()[0].cell(3), Some("0.99"));
	}

	#[test]
	fn empty_and_short_cells_are_missing() {
		let table = InteractionTable::parse_csv(SAMPLE.as_bytes());

		assert_eq!(table.rows()[1].protein_b, None);
		assert_eq!(table.rows()[1].protein_b_label(), MISSING_VALUE);
		assert_eq!(table.rows()[2].protein_b, None);
		assert!(table.rows()[2].annotations.is_empty());
	}

	#[test]
	fn header_only_payload_has_no_rows() {
		let table = InteractionTable::parse_csv(b"Protein_A,Protein_B\n");
		assert_eq!(table.headers().len(), 2);
		assert!(table.is_empty());
	}

	#[test]
	fn empty_payload_is_empty_table() {
		let table = InteractionTable::parse_csv(b"");
		assert_eq!(table, InteractionTable::empty());
	}

	#[test]
	fn invalid_utf8_is_replaced() {
		let table = InteractionTable::parse_csv(b"a,b\nTP\xff53,MDM2\n");
		assert_eq!(table.rows()[0].protein_a.as_deref(), Some("TP\u{fffd}53"));
	}

	#[test]
	fn export_writes_header_and_empty_cells() {
		let table = InteractionTable::parse_csv(SAMPLE.as_bytes());
		let csv = table.to_csv().unwrap();

		let lines: Vec<&str> = csv.lines().collect();
		assert_eq!(lines[0], "Protein_A,Protein_B,Source,Score");
		assert_eq!(lines[2], "SNCA,,BioGRID,0.41");
		assert_eq!(lines[3], "APP,");
	}

	#[test]
	fn export_quotes_delimiters_and_round_trips() {
		let table = InteractionTable::new(
			vec!["A".into(), "B".into(), "Note".into()],
			vec![InteractionRow::new("LRRK2", "RAB10").with_annotations(["kinase, \"substrate\""])],
		);
		let csv = table.to_csv().unwrap();

		assert!(csv.contains("\"kinase, \"\"substrate\"\"\""));
		assert_eq!(InteractionTable::parse_csv(csv.as_bytes()), table);
	}

	#[test]
	fn headerless_table_exports_rows_only() {
		let table = InteractionTable::new(
			Vec::new(),
			vec![InteractionRow::new("A", "B"), InteractionRow::new("C", "D")],
		);
		let csv = table.to_csv().unwrap();

		assert_eq!(csv, "A,B\nC,D\n");
		let reparsed = InteractionTable::parse_csv(csv.as_bytes());
		assert_eq!(reparsed.headers(), ["A", "B"]);
		assert_eq!(reparsed.rows(), &table.rows()[1..]);
	}

	#[test]
	fn column_count_covers_ragged_rows() {
		let table = InteractionTable::parse_csv(b"a,b\nx,y,z,w\n");
		assert_eq!(table.column_count(), 4);
	}
}
