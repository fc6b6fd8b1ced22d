//! Aggregation of asynchronously arriving per-axis samples

use crate::common::{Axis, AxisValues};
use std::sync::Mutex;

/// Collects six independently timed axis samples into one consistent snapshot
///
/// Each axis is fed by its own message handler, so updates may arrive from
/// different threads in any order and at any rate. The aggregator keeps only
/// the latest value per axis and reports readiness once every axis has been
/// observed at least once. Readiness is level-triggered: it is recomputed from
/// the current contents and never distinguishes fresh values from stale ones.
#[derive(Debug, Default)]
pub struct AxisAggregator {
    values: Mutex<AxisValues>,
}

impl AxisAggregator {
    /// Create an aggregator with no axis observed yet
    pub fn new() -> Self {
        AxisAggregator {
            values: Mutex::new(AxisValues::new()),
        }
    }

    /// Record a sample for one axis, overwriting any previous value
    ///
    /// Never fails; no history is kept.
    pub fn update(&self, axis: Axis, value: f64) {
        self.values.lock().unwrap().set(axis, value);
    }

    /// True once all six axes have been observed at least once
    ///
    /// Stays true under further updates.
    pub fn is_ready(&self) -> bool {
        self.values.lock().unwrap().is_complete()
    }

    /// Point-in-time copy of the current values
    ///
    /// Before `is_ready` returns true this is a partial set covering only the
    /// axes observed so far. That is a valid state, not an error; callers that
    /// need the full six axes gate on `is_ready` first.
    pub fn snapshot(&self) -> AxisValues {
        *self.values.lock().unwrap()
    }
}
