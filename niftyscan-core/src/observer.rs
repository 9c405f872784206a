//! Pipeline diagnostics.
//!
//! The pipeline never prints diagnostics itself; it reports them to a
//! [`PipelineObserver`]. The CLI wires in [`TracingObserver`], tests use
//! [`CollectingObserver`] and assert on the recorded events.

use crate::analysis::View;
use crate::data::Snapshot;
use chrono::NaiveDateTime;
use std::cell::RefCell;

/// Callbacks fired while the pipeline runs.
pub trait PipelineObserver {
    /// A snapshot arrived from `provider`.
    fn on_snapshot(&self, provider: &str, snapshot: &Snapshot);

    /// The source offers these columns (union of record keys).
    fn on_columns(&self, columns: &[String]);

    /// `view` was skipped because `column` is missing from the table.
    fn on_unavailable(&self, view: View, column: &str);
}

/// Observer that forwards every event to `tracing`.
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_snapshot(&self, provider: &str, snapshot: &Snapshot) {
        tracing::info!(
            provider,
            index = snapshot.index_name.as_deref().unwrap_or("unknown"),
            as_of = ?snapshot.as_of,
            rows = snapshot.records.len(),
            "snapshot received"
        );
    }

    fn on_columns(&self, columns: &[String]) {
        tracing::info!(count = columns.len(), "available columns: {columns:?}");
    }

    fn on_unavailable(&self, view: View, column: &str) {
        tracing::warn!(
            view = view.label(),
            column,
            "{}",
            view.unavailable_notice().unwrap_or("data not available")
        );
    }
}

/// Observer that discards everything.
pub struct NullObserver;

impl PipelineObserver for NullObserver {
    fn on_snapshot(&self, _provider: &str, _snapshot: &Snapshot) {}
    fn on_columns(&self, _columns: &[String]) {}
    fn on_unavailable(&self, _view: View, _column: &str) {}
}

/// One recorded pipeline event.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    Snapshot {
        provider: String,
        index_name: Option<String>,
        as_of: Option<NaiveDateTime>,
        rows: usize,
    },
    Columns(Vec<String>),
    Unavailable { view: View, column: String },
}

/// Observer that keeps every event in memory.
#[derive(Debug, Default)]
pub struct CollectingObserver {
    events: RefCell<Vec<PipelineEvent>>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.borrow().clone()
    }

    /// Views reported as unavailable, in report order.
    pub fn unavailable_views(&self) -> Vec<View> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PipelineEvent::Unavailable { view, .. } => Some(*view),
                _ => None,
            })
            .collect()
    }

    /// Columns from the most recent `on_columns` call.
    pub fn columns(&self) -> Option<Vec<String>> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            PipelineEvent::Columns(columns) => Some(columns.clone()),
            _ => None,
        })
    }
}

impl PipelineObserver for CollectingObserver {
    fn on_snapshot(&self, provider: &str, snapshot: &Snapshot) {
        self.events.borrow_mut().push(PipelineEvent::Snapshot {
            provider: provider.to_string(),
            index_name: snapshot.index_name.clone(),
            as_of: snapshot.as_of,
            rows: snapshot.records.len(),
        });
    }

    fn on_columns(&self, columns: &[String]) {
        self.events
            .borrow_mut()
            .push(PipelineEvent::Columns(columns.to_vec()));
    }

    fn on_unavailable(&self, view: View, column: &str) {
        self.events.borrow_mut().push(PipelineEvent::Unavailable {
            view,
            column: column.to_string(),
        });
    }
}
