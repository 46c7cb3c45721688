//! The Table Renderer collaborator seam
//!
//! Actual table rendering is not this crate's business: a renderer consumes
//! a normalized [`DataFrame`] and a declarative [`RenderConfig`] and produces
//! an opaque [`RenderedTable`]. The renderer is expected to expose two
//! client-triggerable capabilities addressed by element id: programmatic
//! per-column filter-setting, and export of the currently visible rows as
//! CSV. The configuration is plain data (and serializable), never generated
//! script text.

use serde::Serialize;

use crate::error::Result;
use crate::filter::ColumnFilter;
use crate::frame::DataFrame;

/// Declarative rendering configuration for one table instance
#[derive(Debug, Clone, Serialize)]
pub struct RenderConfig {
	/// Unique element identifier binding filters and download to this table
	pub element_id: String,
	/// Whether per-column filtering is enabled at all
	pub filterable: bool,
	/// Exact-match dropdown configs, one per categorical column
	pub filters: Vec<ColumnFilter>,
	/// Caller-supplied renderer options, passed through unmodified
	pub options: serde_json::Map<String, serde_json::Value>,
}

impl RenderConfig {
	/// Serializes the configuration for a JavaScript-side renderer
	///
	/// # Examples
	///
	/// ```
	/// use reportable::RenderConfig;
	///
	/// let config = RenderConfig {
	///     element_id: "t1".to_string(),
	///     filterable: true,
	///     filters: Vec::new(),
	///     options: serde_json::Map::new(),
	/// };
	/// let json = config.to_json();
	/// assert_eq!(json["element_id"], "t1");
	/// assert_eq!(json["filterable"], true);
	/// ```
	pub fn to_json(&self) -> serde_json::Value {
		// Serialization of plain strings, bools and maps cannot fail.
		serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
	}
}

/// Opaque product of the Table Renderer
#[derive(Debug, Clone)]
pub struct RenderedTable {
	/// Element identifier the renderer bound the table to
	pub element_id: String,
	/// Rendered markup; opaque to this crate
	pub html: String,
}

/// External collaborator that turns a frame and a config into markup
///
/// Implementations adapt concrete table engines (a DataTables-style
/// JavaScript widget, a static HTML emitter, a test stub). Errors surface
/// unchanged through [`crate::TableError::Render`].
pub trait TableRenderer {
	/// Renders the frame according to the declarative configuration
	fn render(&self, frame: &DataFrame, config: &RenderConfig) -> Result<RenderedTable>;
}
