//! Report-table widgets and numeric predicates for Reportable
//!
//! This crate provides two small, unrelated helpers for statistical and
//! reporting workflows:
//!
//! - **Integer predicates**: test whether numeric values or whole vectors
//!   are integral, with configurable handling of missing values
//! - **Filterable tables**: compose a [`DataFrame`], per-column exact-match
//!   dropdown filters, and a CSV-download button into a single renderable
//!   widget, delegating the actual rendering to a [`TableRenderer`]
//!
//! # Features
//!
//! - **Schema-tagged columns**: categorical columns carry their ordered
//!   level set; no runtime type inspection
//! - **Missing-value normalization**: missing category labels become the
//!   empty label so they participate in filtering
//! - **Injectable instance ids**: unique per `build` call, deterministic
//!   in tests via generator substitution
//! - **Export**: server-side CSV and JSON export (requires `export` feature)
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[FilterableTableBuilder] --> B[DataFrame]
//!     A --> C[ColumnFilter per categorical column]
//!     A --> D[InstanceIdGenerator]
//!     A --> E[TableRenderer]
//!     E --> F[RenderedTable]
//!     A --> G[DownloadButton]
//!     F --> H[FilterableTable]
//!     G --> H
//! ```
//!
//! # Example
//!
//! ```rust
//! use reportable::{ColumnSpec, DataFrame, Value, is_integer_vector};
//!
//! let values = vec![Value::Number(1.0), Value::Number(2.5), Value::Missing];
//! assert_eq!(is_integer_vector(&values, false), vec![true, false, false]);
//!
//! let mut frame = DataFrame::new(vec![
//!     ColumnSpec::categorical("status", ["open", "closed"]),
//!     ColumnSpec::plain("count"),
//! ]);
//! frame
//!     .push_row(vec![Value::text("open"), Value::Number(3.0)])
//!     .unwrap();
//! assert_eq!(frame.row_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod builder;
pub mod error;
#[cfg(feature = "export")]
pub mod export;
pub mod filter;
pub mod frame;
pub mod ids;
pub mod numeric;
pub mod render;
pub mod sanitize;
pub mod widget;

// Re-exports for convenience
pub use builder::FilterableTableBuilder;
pub use error::{Result, TableError};
pub use filter::{ALL_OPTION, ColumnFilter, MatchMode};
pub use frame::{ColumnKind, ColumnSpec, DataFrame, Value};
pub use ids::{InstanceIdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use numeric::{is_integer, is_integer_vector};
pub use render::{RenderConfig, RenderedTable, TableRenderer};
pub use widget::{Component, DownloadButton, FilterableTable};
