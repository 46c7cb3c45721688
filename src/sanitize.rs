//! Filesystem-safe names for the CSV download target

/// Fallback base name used when sanitization exhausts the input
pub const FALLBACK_BASE_NAME: &str = "download";

/// Characters that are invalid in file names on at least one platform
const INVALID: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Maps an arbitrary string to a safe file base name
///
/// Path separators, traversal segments and characters invalid in file names
/// are stripped; leading dots and surrounding whitespace are trimmed so the
/// result can never name a hidden file or escape its directory. Sanitization
/// never fails: an input with nothing left degrades to
/// [`FALLBACK_BASE_NAME`].
///
/// # Examples
///
/// ```
/// use reportable::sanitize::file_base_name;
///
/// assert_eq!(file_base_name("report"), "report");
/// assert_eq!(file_base_name("../evil"), "evil");
/// assert_eq!(file_base_name("my: report?"), "my report");
/// assert_eq!(file_base_name("///"), "download");
/// ```
pub fn file_base_name(raw: &str) -> String {
	let stripped: String = raw
		.chars()
		.filter(|ch| !INVALID.contains(ch) && !ch.is_control())
		.collect();
	let trimmed = stripped
		.trim()
		.trim_start_matches('.')
		.trim_end_matches('.')
		.trim();
	if trimmed.is_empty() {
		tracing::debug!(raw, "download name sanitized to nothing, using fallback");
		return FALLBACK_BASE_NAME.to_string();
	}
	trimmed.to_string()
}

/// Builds the full export file name: sanitized base plus the `.csv` extension
///
/// # Examples
///
/// ```
/// use reportable::sanitize::export_file_name;
///
/// assert_eq!(export_file_name("report"), "report.csv");
/// assert_eq!(export_file_name("../evil"), "evil.csv");
/// assert_eq!(export_file_name(""), "download.csv");
/// ```
pub fn export_file_name(raw: &str) -> String {
	format!("{}.csv", file_base_name(raw))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_plain_name_unchanged() {
		assert_eq!(file_base_name("summary-2024"), "summary-2024");
	}

	#[test]
	fn test_traversal_removed() {
		assert_eq!(file_base_name("../../etc/passwd"), "etcpasswd");
		assert_eq!(file_base_name("..\\evil"), "evil");
	}

	#[test]
	fn test_invalid_characters_removed() {
		assert_eq!(file_base_name("a:b*c?d\"e<f>g|h"), "abcdefgh");
	}

	#[test]
	fn test_control_characters_removed() {
		assert_eq!(file_base_name("re\x00po\x1frt"), "report");
	}

	#[test]
	fn test_hidden_file_prefix_trimmed() {
		assert_eq!(file_base_name(".hidden"), "hidden");
	}

	#[test]
	fn test_empty_input_falls_back() {
		assert_eq!(file_base_name(""), FALLBACK_BASE_NAME);
		assert_eq!(file_base_name(" .. "), FALLBACK_BASE_NAME);
	}

	#[test]
	fn test_unicode_preserved() {
		assert_eq!(file_base_name("rapport-été"), "rapport-été");
	}

	#[test]
	fn test_export_name_always_has_extension() {
		assert_eq!(export_file_name("data"), "data.csv");
		assert_eq!(export_file_name("?"), "download.csv");
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_no_invalid_characters_survive(s in "\\PC*") {
			let name = file_base_name(&s);
			assert!(name.chars().all(|ch| !INVALID.contains(&ch) && !ch.is_control()));
		}

		#[test]
		fn prop_never_empty_never_hidden(s in "\\PC*") {
			let name = file_base_name(&s);
			assert!(!name.is_empty());
			assert!(!name.starts_with('.'));
		}

		#[test]
		fn prop_export_name_ends_with_csv(s in "\\PC*") {
			assert!(export_file_name(&s).ends_with(".csv"));
		}
	}
}
