//! Integer predicates for numeric values and vectors

use crate::frame::Value;

/// Tests whether a single value is integral
///
/// Missing values return `allow_missing`; non-numeric values return `false`
/// regardless of `allow_missing`; numeric values return `true` iff the value
/// modulo 1 is exactly 0, with no tolerance. `NaN` and infinite values are
/// therefore not integral (`x % 1.0` is `NaN` for both).
///
/// # Examples
///
/// ```
/// use reportable::{Value, is_integer};
///
/// assert!(is_integer(&Value::Number(4.0), false));
/// assert!(!is_integer(&Value::Number(4.5), false));
/// assert!(!is_integer(&Value::Number(f64::NAN), false));
/// assert!(!is_integer(&Value::text("4"), true));
/// assert!(!is_integer(&Value::Missing, false));
/// assert!(is_integer(&Value::Missing, true));
/// ```
pub fn is_integer(value: &Value, allow_missing: bool) -> bool {
	match value {
		Value::Missing => allow_missing,
		Value::Number(n) => n % 1.0 == 0.0,
		_ => false,
	}
}

/// Applies [`is_integer`] elementwise, preserving order and length
///
/// Non-numeric elements yield `false` without raising an error. A collection
/// that was coerced to a textual representation upstream therefore yields
/// `false` for every element; that is a caller-visible edge case, not a
/// defect.
///
/// # Examples
///
/// ```
/// use reportable::{Value, is_integer_vector};
///
/// let values = vec![
///     Value::Number(1.0),
///     Value::Number(2.5),
///     Value::Missing,
/// ];
/// assert_eq!(is_integer_vector(&values, false), vec![true, false, false]);
/// assert_eq!(is_integer_vector(&values, true), vec![true, false, true]);
/// ```
pub fn is_integer_vector<'a, I>(values: I, allow_missing: bool) -> Vec<bool>
where
	I: IntoIterator<Item = &'a Value>,
{
	values
		.into_iter()
		.map(|value| is_integer(value, allow_missing))
		.collect()
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_whole_f64_is_integral(n in -1_000_000_i64..1_000_000_i64) {
			assert!(is_integer(&Value::Number(n as f64), false));
		}

		#[test]
		fn prop_fractional_f64_is_not_integral(n in -1_000_000.0_f64..1_000_000.0) {
			prop_assume!(n.fract() != 0.0);
			assert!(!is_integer(&Value::Number(n), false));
		}

		#[test]
		fn prop_vector_length_preserved(values in proptest::collection::vec(-100.0_f64..100.0, 0..50)) {
			let values: Vec<Value> = values.into_iter().map(Value::Number).collect();
			assert_eq!(is_integer_vector(&values, false).len(), values.len());
		}

		#[test]
		fn prop_allow_missing_only_affects_missing(n in -100.0_f64..100.0) {
			let value = Value::Number(n);
			assert_eq!(is_integer(&value, false), is_integer(&value, true));
		}
	}
}
