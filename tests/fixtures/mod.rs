//! Common test fixtures for reportable integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use reportable::{
	ColumnSpec, DataFrame, InstanceIdGenerator, RenderConfig, RenderedTable, Result,
	TableRenderer, Value,
};
use rstest::*;

/// Stub renderer that records every config it was invoked with
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
	pub seen: Arc<Mutex<Vec<RenderConfig>>>,
}

impl RecordingRenderer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the configs recorded so far
	pub fn configs(&self) -> Vec<RenderConfig> {
		self.seen.lock().unwrap().clone()
	}
}

impl TableRenderer for RecordingRenderer {
	fn render(&self, _frame: &DataFrame, config: &RenderConfig) -> Result<RenderedTable> {
		self.seen.lock().unwrap().push(config.clone());
		Ok(RenderedTable {
			element_id: config.element_id.clone(),
			html: format!("<table id=\"{}\"></table>", config.element_id),
		})
	}
}

/// Stub renderer that always fails
#[derive(Debug, Clone, Copy)]
pub struct FailingRenderer;

impl TableRenderer for FailingRenderer {
	fn render(&self, _frame: &DataFrame, _config: &RenderConfig) -> Result<RenderedTable> {
		Err(reportable::TableError::Render("boom".to_string()))
	}
}

/// Deterministic id source for substitution tests
#[derive(Debug, Clone)]
pub struct FixedIdGenerator(pub &'static str);

impl InstanceIdGenerator for FixedIdGenerator {
	fn next_id(&self) -> String {
		self.0.to_string()
	}
}

/// Frame with one categorical column (values A, B, missing) and one plain
/// numeric column
#[fixture]
pub fn status_frame() -> DataFrame {
	DataFrame::with_rows(
		vec![
			ColumnSpec::categorical("status", ["A", "B"]),
			ColumnSpec::plain("count"),
		],
		vec![
			vec![Value::text("A"), Value::Number(1.0)],
			vec![Value::text("B"), Value::Number(2.0)],
			vec![Value::Missing, Value::Number(3.0)],
		],
	)
	.unwrap()
}

/// Frame with no categorical columns
#[fixture]
pub fn plain_frame() -> DataFrame {
	DataFrame::with_rows(
		vec![ColumnSpec::plain("name"), ColumnSpec::plain("count")],
		vec![vec![Value::text("a"), Value::Number(1.0)]],
	)
	.unwrap()
}

/// Categorical frame with zero rows
#[fixture]
pub fn empty_frame() -> DataFrame {
	DataFrame::new(vec![
		ColumnSpec::categorical("status", ["A", "B"]),
		ColumnSpec::plain("count"),
	])
}
