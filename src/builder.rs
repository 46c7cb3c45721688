//! Orchestration: from frame to browsable filterable table

use crate::error::{Result, TableError};
use crate::filter::{ALL_OPTION, ColumnFilter};
use crate::frame::DataFrame;
use crate::ids::{InstanceIdGenerator, SequentialIdGenerator};
use crate::render::{RenderConfig, TableRenderer};
use crate::sanitize;
use crate::widget::{DownloadButton, FilterableTable};

/// Builds filterable, CSV-downloadable table widgets
///
/// The builder owns the [`TableRenderer`] collaborator and the instance-id
/// source; each [`build`](Self::build) call is independent and produces a
/// widget with a fresh unique identifier.
///
/// # Examples
///
/// ```
/// use reportable::{
///     ColumnSpec, DataFrame, FilterableTableBuilder, RenderConfig, RenderedTable, Result,
///     TableRenderer, Value,
/// };
///
/// struct NullRenderer;
///
/// impl TableRenderer for NullRenderer {
///     fn render(&self, _frame: &DataFrame, config: &RenderConfig) -> Result<RenderedTable> {
///         Ok(RenderedTable {
///             element_id: config.element_id.clone(),
///             html: format!("<table id=\"{}\"></table>", config.element_id),
///         })
///     }
/// }
///
/// let frame = DataFrame::with_rows(
///     vec![ColumnSpec::categorical("status", ["open", "closed"])],
///     vec![vec![Value::text("open")]],
/// )
/// .unwrap();
///
/// let builder = FilterableTableBuilder::new(NullRenderer).with_download_file_name("report");
/// let widget = builder.build(frame).unwrap();
/// assert_eq!(widget.button.file_name, "report.csv");
/// ```
pub struct FilterableTableBuilder {
	renderer: Box<dyn TableRenderer>,
	ids: Box<dyn InstanceIdGenerator>,
	download_file_name: String,
	options: serde_json::Map<String, serde_json::Value>,
}

impl FilterableTableBuilder {
	/// Creates a builder around a renderer collaborator
	///
	/// The download name defaults to `"download"` and instance ids come from
	/// the process-wide [`SequentialIdGenerator`].
	pub fn new(renderer: impl TableRenderer + 'static) -> Self {
		Self {
			renderer: Box::new(renderer),
			ids: Box::new(SequentialIdGenerator),
			download_file_name: sanitize::FALLBACK_BASE_NAME.to_string(),
			options: serde_json::Map::new(),
		}
	}

	/// Sets the base name of the exported CSV file
	///
	/// The name is sanitized at build time; the `.csv` extension is always
	/// appended.
	pub fn with_download_file_name(mut self, name: impl Into<String>) -> Self {
		self.download_file_name = name.into();
		self
	}

	/// Adds a renderer option, passed through to the renderer unmodified
	pub fn with_render_option(
		mut self,
		key: impl Into<String>,
		value: serde_json::Value,
	) -> Self {
		self.options.insert(key.into(), value);
		self
	}

	/// Substitutes the instance-id source (deterministic ids in tests)
	pub fn with_id_generator(mut self, ids: impl InstanceIdGenerator + 'static) -> Self {
		self.ids = Box::new(ids);
		self
	}

	/// Builds the browsable widget for one frame
	///
	/// Missing category labels are normalized to the empty label, every
	/// categorical column gets an exact-match dropdown filter, the renderer
	/// is invoked with the declarative config, and the result is wrapped
	/// with a download button bound to the same instance id.
	///
	/// Fails with [`TableError::ReservedLabel`] if a categorical value
	/// equals the filter-clearing sentinel, and propagates renderer errors
	/// unchanged.
	pub fn build(&self, mut frame: DataFrame) -> Result<FilterableTable> {
		frame.fill_missing_categories();

		let file_name = sanitize::export_file_name(&self.download_file_name);
		let element_id = self.ids.next_id();

		let mut filters = Vec::new();
		for (index, column) in frame.columns().iter().enumerate() {
			if !column.is_categorical() {
				continue;
			}
			let labels = frame.present_labels(index);
			if labels.iter().any(|label| label == ALL_OPTION) {
				tracing::warn!(
					column = %column.name,
					"category label collides with the filter-clearing sentinel"
				);
				return Err(TableError::ReservedLabel {
					column: column.name.clone(),
				});
			}
			filters.push(ColumnFilter::exact(&column.name, labels));
		}

		let config = RenderConfig {
			element_id: element_id.clone(),
			filterable: true,
			filters,
			options: self.options.clone(),
		};
		let table = self.renderer.render(&frame, &config)?;
		let button = DownloadButton::new(element_id, file_name);

		Ok(FilterableTable { table, button })
	}
}

impl std::fmt::Debug for FilterableTableBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FilterableTableBuilder")
			.field("download_file_name", &self.download_file_name)
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}
