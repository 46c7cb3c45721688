//! Browsable UI composition: download button and combined table widget

use std::collections::HashMap;

use crate::render::RenderedTable;

/// Base interface for renderable UI components
///
/// Anything implementing this trait is directly displayable in an
/// interactive viewing surface without further wrapping.
pub trait Component: Send + Sync {
	/// Returns the component's name (for debugging)
	fn name(&self) -> &'static str;

	/// Renders the component to an HTML string
	fn render(&self) -> String;

	/// Returns HTML attributes for the component
	fn attributes(&self) -> HashMap<String, String> {
		HashMap::new()
	}
}

fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Button that triggers the renderer's export-visible-rows-as-CSV capability
///
/// The binding to the table instance and the target file name are carried as
/// structured data attributes; no script text is generated here.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadButton {
	/// Element identifier of the table instance this button exports
	pub table_id: String,
	/// Export file name, already sanitized and `.csv`-suffixed
	pub file_name: String,
	/// Visible button label
	pub label: String,
}

impl DownloadButton {
	/// Creates a download button bound to a table instance
	///
	/// # Examples
	///
	/// ```
	/// use reportable::DownloadButton;
	///
	/// let button = DownloadButton::new("tbl-1", "report.csv");
	/// assert_eq!(button.label, "Download");
	/// ```
	pub fn new(table_id: impl Into<String>, file_name: impl Into<String>) -> Self {
		Self {
			table_id: table_id.into(),
			file_name: file_name.into(),
			label: "Download".to_string(),
		}
	}

	/// Sets the visible button label
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}
}

impl Component for DownloadButton {
	fn name(&self) -> &'static str {
		"DownloadButton"
	}

	fn render(&self) -> String {
		format!(
			"<button type=\"button\" class=\"reportable-download\" data-table-target=\"{}\" data-export-file=\"{}\">{}</button>",
			escape_attr(&self.table_id),
			escape_attr(&self.file_name),
			escape_attr(&self.label),
		)
	}

	fn attributes(&self) -> HashMap<String, String> {
		HashMap::from([
			("data-table-target".to_string(), self.table_id.clone()),
			("data-export-file".to_string(), self.file_name.clone()),
		])
	}
}

/// The combined, browsable result: rendered table plus its download button
///
/// Produced once by [`crate::FilterableTableBuilder::build`] and not mutated
/// afterward.
#[derive(Debug, Clone)]
pub struct FilterableTable {
	/// The renderer's output
	pub table: RenderedTable,
	/// The export trigger bound to the same table instance
	pub button: DownloadButton,
}

impl FilterableTable {
	/// Returns the unique element identifier of this table instance
	pub fn element_id(&self) -> &str {
		&self.table.element_id
	}
}

impl Component for FilterableTable {
	fn name(&self) -> &'static str {
		"FilterableTable"
	}

	fn render(&self) -> String {
		format!(
			"<div class=\"reportable-widget\">{}{}</div>",
			self.button.render(),
			self.table.html,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_button_renders_structured_attributes() {
		let button = DownloadButton::new("tbl-1", "report.csv");
		let html = button.render();
		assert!(html.contains("data-table-target=\"tbl-1\""));
		assert!(html.contains("data-export-file=\"report.csv\""));
		assert!(html.contains(">Download</button>"));
	}

	#[test]
	fn test_button_escapes_attribute_values() {
		let button = DownloadButton::new("a\"b", "x<y>.csv").with_label("Save & go");
		let html = button.render();
		assert!(html.contains("data-table-target=\"a&quot;b\""));
		assert!(html.contains("data-export-file=\"x&lt;y&gt;.csv\""));
		assert!(html.contains("Save &amp; go"));
	}

	#[test]
	fn test_widget_wraps_button_before_table() {
		let widget = FilterableTable {
			table: RenderedTable {
				element_id: "tbl-1".to_string(),
				html: "<table id=\"tbl-1\"></table>".to_string(),
			},
			button: DownloadButton::new("tbl-1", "report.csv"),
		};
		let html = widget.render();
		assert!(html.starts_with("<div class=\"reportable-widget\"><button"));
		assert!(html.ends_with("</table></div>"));
		assert_eq!(widget.element_id(), "tbl-1");
	}
}
