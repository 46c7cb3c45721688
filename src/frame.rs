//! Rectangular data model with schema-tagged columns
//!
//! A [`DataFrame`] is a row-major rectangular dataset. Every column declares
//! its kind up front: [`ColumnKind::Categorical`] columns carry a fixed,
//! ordered level set; everything else is [`ColumnKind::Plain`]. Column kind
//! is an explicit schema tag, never inferred from cell values at runtime.
//!
//! Nested or list-typed cells are unrepresentable: [`Value`] only has scalar
//! variants plus an explicit missing marker.

use serde::Serialize;

use crate::error::{Result, TableError};

/// A single cell value: a scalar or the explicit missing marker
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// A numeric value
	Number(f64),
	/// A textual value (also used for category labels)
	Text(String),
	/// A boolean value
	Bool(bool),
	/// Explicit "value absent" marker, distinct from every domain value
	Missing,
}

impl Value {
	/// Create a textual value
	///
	/// # Examples
	///
	/// ```
	/// use reportable::Value;
	///
	/// assert_eq!(Value::text("open"), Value::Text("open".to_string()));
	/// ```
	pub fn text(value: impl Into<String>) -> Self {
		Self::Text(value.into())
	}

	/// Returns true if this is the missing marker
	pub fn is_missing(&self) -> bool {
		matches!(self, Self::Missing)
	}

	/// Renders the value as a string for display, filtering and export
	///
	/// Missing values render as the empty string.
	///
	/// # Examples
	///
	/// ```
	/// use reportable::Value;
	///
	/// assert_eq!(Value::Number(3.0).render(), "3");
	/// assert_eq!(Value::text("open").render(), "open");
	/// assert_eq!(Value::Bool(true).render(), "true");
	/// assert_eq!(Value::Missing.render(), "");
	/// ```
	pub fn render(&self) -> String {
		match self {
			Self::Number(n) => n.to_string(),
			Self::Text(s) => s.clone(),
			Self::Bool(b) => b.to_string(),
			Self::Missing => String::new(),
		}
	}
}

/// Declared kind of a column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
	/// A factor column with a fixed, ordered set of labels
	Categorical {
		/// Declared label ordering; filter options follow this order
		levels: Vec<String>,
	},
	/// Any non-categorical column
	Plain,
}

/// A named column with its declared kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSpec {
	/// Column name, used as the filter binding key
	pub name: String,
	/// Declared kind
	pub kind: ColumnKind,
}

impl ColumnSpec {
	/// Declare a categorical column with its ordered level set
	///
	/// # Examples
	///
	/// ```
	/// use reportable::{ColumnKind, ColumnSpec};
	///
	/// let column = ColumnSpec::categorical("status", ["open", "closed"]);
	/// assert_eq!(column.name, "status");
	/// assert!(matches!(column.kind, ColumnKind::Categorical { .. }));
	/// ```
	pub fn categorical(
		name: impl Into<String>,
		levels: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		Self {
			name: name.into(),
			kind: ColumnKind::Categorical {
				levels: levels.into_iter().map(Into::into).collect(),
			},
		}
	}

	/// Declare a non-categorical column
	///
	/// # Examples
	///
	/// ```
	/// use reportable::{ColumnKind, ColumnSpec};
	///
	/// let column = ColumnSpec::plain("count");
	/// assert_eq!(column.kind, ColumnKind::Plain);
	/// ```
	pub fn plain(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind: ColumnKind::Plain,
		}
	}

	/// Returns true for categorical columns
	pub fn is_categorical(&self) -> bool {
		matches!(self.kind, ColumnKind::Categorical { .. })
	}
}

/// A row-major rectangular dataset
///
/// Every row must be exactly as wide as the declared column list; this is
/// enforced at insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
	columns: Vec<ColumnSpec>,
	rows: Vec<Vec<Value>>,
}

impl DataFrame {
	/// Create an empty frame with the given schema
	pub fn new(columns: Vec<ColumnSpec>) -> Self {
		Self {
			columns,
			rows: Vec::new(),
		}
	}

	/// Create a frame from a schema and rows
	///
	/// Fails with [`TableError::RowWidth`] if any row does not match the
	/// declared column count.
	pub fn with_rows(columns: Vec<ColumnSpec>, rows: Vec<Vec<Value>>) -> Result<Self> {
		let mut frame = Self::new(columns);
		for row in rows {
			frame.push_row(row)?;
		}
		Ok(frame)
	}

	/// Append a row
	///
	/// # Examples
	///
	/// ```
	/// use reportable::{ColumnSpec, DataFrame, Value};
	///
	/// let mut frame = DataFrame::new(vec![ColumnSpec::plain("count")]);
	/// frame.push_row(vec![Value::Number(1.0)]).unwrap();
	/// assert!(frame.push_row(vec![]).is_err());
	/// ```
	pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
		if row.len() != self.columns.len() {
			return Err(TableError::RowWidth {
				expected: self.columns.len(),
				actual: row.len(),
			});
		}
		self.rows.push(row);
		Ok(())
	}

	/// Returns the declared columns
	pub fn columns(&self) -> &[ColumnSpec] {
		&self.columns
	}

	/// Returns all rows
	pub fn rows(&self) -> &[Vec<Value>] {
		&self.rows
	}

	/// Returns the number of rows
	pub fn row_count(&self) -> usize {
		self.rows.len()
	}

	/// Returns true if the frame has no rows
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Returns the index of a column by name, if present
	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|c| c.name == name)
	}

	/// Replaces every missing value in categorical columns with the empty
	/// label, so missing values participate in filtering instead of being
	/// silently dropped
	pub fn fill_missing_categories(&mut self) {
		let categorical: Vec<usize> = self
			.columns
			.iter()
			.enumerate()
			.filter(|(_, c)| c.is_categorical())
			.map(|(i, _)| i)
			.collect();
		for row in &mut self.rows {
			for &index in &categorical {
				if row[index].is_missing() {
					row[index] = Value::Text(String::new());
				}
			}
		}
	}

	/// Returns the distinct labels actually present in a categorical column,
	/// ordered by the declared level ordering
	///
	/// Labels present in the data but absent from the declared level set
	/// follow in first-appearance order. The empty label (normalized missing
	/// values) sorts last unless it is itself a declared level. Returns an
	/// empty list for plain columns and for out-of-range indices.
	///
	/// # Examples
	///
	/// ```
	/// use reportable::{ColumnSpec, DataFrame, Value};
	///
	/// let frame = DataFrame::with_rows(
	///     vec![ColumnSpec::categorical("status", ["open", "closed"])],
	///     vec![
	///         vec![Value::text("closed")],
	///         vec![Value::text("open")],
	///         vec![Value::text("closed")],
	///     ],
	/// )
	/// .unwrap();
	/// assert_eq!(frame.present_labels(0), vec!["open", "closed"]);
	/// ```
	pub fn present_labels(&self, column: usize) -> Vec<String> {
		let Some(ColumnKind::Categorical { levels }) = self.columns.get(column).map(|c| &c.kind)
		else {
			return Vec::new();
		};

		let mut present: Vec<String> = Vec::new();
		for row in &self.rows {
			let label = row[column].render();
			if !present.contains(&label) {
				present.push(label);
			}
		}

		let mut ordered = Vec::with_capacity(present.len());
		for level in levels {
			if present.contains(level) && !ordered.contains(level) {
				ordered.push(level.clone());
			}
		}
		for label in &present {
			if label.is_empty() || ordered.contains(label) {
				continue;
			}
			ordered.push(label.clone());
		}
		if present.iter().any(String::is_empty) && !ordered.iter().any(String::is_empty) {
			ordered.push(String::new());
		}
		ordered
	}
}
