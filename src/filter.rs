//! Per-column filter configuration for categorical columns

use serde::Serialize;

/// Synthetic option that clears a column filter instead of matching rows
///
/// A real category label must never equal this sentinel; the builder rejects
/// such frames up front rather than silently miscategorizing rows.
pub const ALL_OPTION: &str = "All";

/// Matching semantics of a column filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
	/// Row included iff the column value equals the selected option verbatim
	Exact,
	/// Row included if the column value contains the entered text; the
	/// renderer's default for columns without an explicit filter config
	Substring,
}

/// Filter configuration for one categorical column
///
/// The option list always starts with [`ALL_OPTION`], followed by the
/// distinct labels actually present in the data in declared-level order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnFilter {
	/// Name of the column this filter binds to
	pub column: String,
	/// Selectable options, deduplicated, sentinel first
	pub options: Vec<String>,
	/// Matching semantics
	pub match_mode: MatchMode,
}

impl ColumnFilter {
	/// Builds an exact-match dropdown filter from the present labels
	///
	/// # Examples
	///
	/// ```
	/// use reportable::{ColumnFilter, MatchMode};
	///
	/// let filter = ColumnFilter::exact("status", vec!["open".into(), "closed".into()]);
	/// assert_eq!(filter.options, vec!["All", "open", "closed"]);
	/// assert_eq!(filter.match_mode, MatchMode::Exact);
	/// ```
	pub fn exact(column: impl Into<String>, labels: Vec<String>) -> Self {
		let mut options = Vec::with_capacity(labels.len() + 1);
		options.push(ALL_OPTION.to_string());
		for label in labels {
			if !options.contains(&label) {
				options.push(label);
			}
		}
		Self {
			column: column.into(),
			options,
			match_mode: MatchMode::Exact,
		}
	}

	/// Applies the filter to one rendered cell value
	///
	/// Selecting [`ALL_OPTION`] clears the filter: every row matches. Any
	/// other selection matches by exact equality, never by substring.
	///
	/// # Examples
	///
	/// ```
	/// use reportable::ColumnFilter;
	///
	/// let filter = ColumnFilter::exact("status", vec!["open".into()]);
	/// assert!(filter.matches("All", "open"));
	/// assert!(filter.matches("open", "open"));
	/// assert!(!filter.matches("open", "reopened"));
	/// ```
	pub fn matches(&self, selected: &str, value: &str) -> bool {
		if selected == ALL_OPTION {
			return true;
		}
		match self.match_mode {
			MatchMode::Exact => selected == value,
			MatchMode::Substring => value.contains(selected),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sentinel_is_always_first() {
		let filter = ColumnFilter::exact("status", vec!["B".into(), "A".into()]);
		assert_eq!(filter.options[0], ALL_OPTION);
		assert_eq!(filter.options, vec!["All", "B", "A"]);
	}

	#[test]
	fn test_options_deduplicated() {
		let filter = ColumnFilter::exact("status", vec!["A".into(), "A".into(), "B".into()]);
		assert_eq!(filter.options, vec!["All", "A", "B"]);
	}

	#[test]
	fn test_empty_label_is_selectable() {
		let filter = ColumnFilter::exact("status", vec!["A".into(), String::new()]);
		assert_eq!(filter.options, vec!["All", "A", ""]);
		assert!(filter.matches("", ""));
		assert!(!filter.matches("", "A"));
	}

	#[test]
	fn test_all_clears_the_filter() {
		let filter = ColumnFilter::exact("status", vec!["A".into()]);
		assert!(filter.matches(ALL_OPTION, "A"));
		assert!(filter.matches(ALL_OPTION, "anything"));
	}

	#[test]
	fn test_exact_match_is_not_substring() {
		let filter = ColumnFilter::exact("status", vec!["open".into()]);
		assert!(!filter.matches("open", "open-ish"));
		assert!(!filter.matches("pen", "open"));
	}

	#[test]
	fn test_no_labels_leaves_only_the_sentinel() {
		let filter = ColumnFilter::exact("status", Vec::new());
		assert_eq!(filter.options, vec![ALL_OPTION]);
	}

	#[test]
	fn test_serializes_declaratively() {
		let filter = ColumnFilter::exact("status", vec!["A".into()]);
		let json = serde_json::to_value(&filter).unwrap();
		assert_eq!(json["column"], "status");
		assert_eq!(json["match_mode"], "exact");
		assert_eq!(json["options"][0], "All");
	}
}
