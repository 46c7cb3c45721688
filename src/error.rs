//! Error types for reportable

use thiserror::Error;

/// Error type for table construction and rendering
#[derive(Debug, Error)]
pub enum TableError {
	/// A row does not match the declared column count
	#[error("row has {actual} values but the frame declares {expected} columns")]
	RowWidth {
		/// Number of declared columns
		expected: usize,
		/// Number of values in the rejected row
		actual: usize,
	},

	/// A categorical value collides with the reserved filter-clearing option
	#[error("category label in column '{column}' collides with the reserved \"All\" filter option")]
	ReservedLabel {
		/// Name of the offending column
		column: String,
	},

	/// The table renderer collaborator failed
	#[error("rendering error: {0}")]
	Render(String),

	/// CSV serialization failed during export
	#[cfg(feature = "export")]
	#[error("CSV export failed: {0}")]
	Export(#[from] csv::Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
