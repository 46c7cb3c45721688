//! Unique instance identifiers for rendered tables
//!
//! Every `build` call needs an element identifier that no other table in the
//! same display surface shares; the filter callbacks and the download button
//! are bound to the rendered table through it. Generation is behind a trait
//! so tests can substitute a deterministic source.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of unique table instance identifiers
pub trait InstanceIdGenerator: Send + Sync {
	/// Returns a fresh identifier, unique per call
	fn next_id(&self) -> String;
}

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Process-wide monotonic identifier source; the default
///
/// Identifiers are unique within a process, which is all a single display
/// surface requires.
///
/// # Examples
///
/// ```
/// use reportable::{InstanceIdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator;
/// assert_ne!(ids.next_id(), ids.next_id());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialIdGenerator;

impl InstanceIdGenerator for SequentialIdGenerator {
	fn next_id(&self) -> String {
		format!(
			"reportable-table-{}",
			NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed)
		)
	}
}

/// Random identifier source, collision-free across processes
///
/// Useful when one display surface aggregates tables rendered by several
/// processes.
///
/// # Examples
///
/// ```
/// use reportable::{InstanceIdGenerator, UuidIdGenerator};
///
/// let ids = UuidIdGenerator;
/// assert_ne!(ids.next_id(), ids.next_id());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl InstanceIdGenerator for UuidIdGenerator {
	fn next_id(&self) -> String {
		format!("reportable-table-{}", Uuid::new_v4())
	}
}
