//! Server-side export of a frame (feature `export`)
//!
//! The download button exports the currently visible rows on the client; the
//! helpers here are the server-side counterpart, producing the same shape of
//! data for the whole frame.

use serde_json::Value as Json;

use crate::error::{Result, TableError};
use crate::frame::{DataFrame, Value};

fn to_json(value: &Value) -> Json {
	match value {
		Value::Number(n) => serde_json::Number::from_f64(*n).map_or(Json::Null, Json::Number),
		Value::Text(s) => Json::String(s.clone()),
		Value::Bool(b) => Json::Bool(*b),
		Value::Missing => Json::Null,
	}
}

impl DataFrame {
	/// Serializes the frame as CSV with a header row
	///
	/// Cell values are rendered exactly as they would be displayed; missing
	/// values become empty fields.
	///
	/// # Examples
	///
	/// ```
	/// use reportable::{ColumnSpec, DataFrame, Value};
	///
	/// let frame = DataFrame::with_rows(
	///     vec![ColumnSpec::plain("name"), ColumnSpec::plain("count")],
	///     vec![vec![Value::text("a"), Value::Number(2.0)]],
	/// )
	/// .unwrap();
	/// assert_eq!(frame.to_csv().unwrap(), "name,count\na,2\n");
	/// ```
	pub fn to_csv(&self) -> Result<String> {
		let mut writer = csv::Writer::from_writer(Vec::new());
		writer.write_record(self.columns().iter().map(|c| c.name.as_str()))?;
		for row in self.rows() {
			writer.write_record(row.iter().map(Value::render))?;
		}
		let bytes = writer
			.into_inner()
			.map_err(|e| TableError::Render(e.to_string()))?;
		String::from_utf8(bytes).map_err(|e| TableError::Render(e.to_string()))
	}

	/// Serializes the frame as a JSON array of row objects
	///
	/// Missing values and non-finite numbers become `null`.
	pub fn to_json_rows(&self) -> Json {
		let rows: Vec<Json> = self
			.rows()
			.iter()
			.map(|row| {
				let object: serde_json::Map<String, Json> = self
					.columns()
					.iter()
					.zip(row)
					.map(|(column, value)| (column.name.clone(), to_json(value)))
					.collect();
				Json::Object(object)
			})
			.collect();
		Json::Array(rows)
	}
}
