//! Telemetry module for the docking stack
pub mod aggregator;

pub use self::aggregator::AxisAggregator;

use crate::common::{Axis, AxisValues};
use crate::lifecycle::{LifecycleNode, LifecycleNodeBase, State};
use std::any::Any;

/// Telemetry stack for the docking maneuver
///
/// Owns two structurally identical aggregators: one fed by pose state
/// measurements, one fed by pose error measurements. The controller loop polls
/// `is_ready` and starts consuming snapshots only once both are complete.
pub struct TelemetryStack {
    base: LifecycleNodeBase,
    state: AxisAggregator,
    error: AxisAggregator,
}

impl TelemetryStack {
    /// Create a new telemetry stack with empty aggregators
    pub fn new() -> Self {
        TelemetryStack {
            base: LifecycleNodeBase::new("telemetry_stack"),
            state: AxisAggregator::new(),
            error: AxisAggregator::new(),
        }
    }

    /// Record a pose state sample for one axis
    pub fn update_state(&self, axis: Axis, value: f64) {
        self.state.update(axis, value);
    }

    /// Record a pose error sample for one axis
    pub fn update_error(&self, axis: Axis, value: f64) {
        self.error.update(axis, value);
    }

    /// True once both aggregators have seen all six axes
    pub fn is_ready(&self) -> bool {
        self.state.is_ready() && self.error.is_ready()
    }

    /// Point-in-time copy of the aggregated pose state
    pub fn state_snapshot(&self) -> AxisValues {
        self.state.snapshot()
    }

    /// Point-in-time copy of the aggregated pose error
    pub fn error_snapshot(&self) -> AxisValues {
        self.error.snapshot()
    }

    /// The pose state aggregator
    pub fn state(&self) -> &AxisAggregator {
        &self.state
    }

    /// The pose error aggregator
    pub fn error(&self) -> &AxisAggregator {
        &self.error
    }
}

impl Default for TelemetryStack {
    fn default() -> Self {
        TelemetryStack::new()
    }
}

impl LifecycleNode for TelemetryStack {
    fn on_configure(&mut self) -> Result<(), String> {
        println!("Configuring {}", self.base.name());
        self.base.set_state(State::Inactive);
        Ok(())
    }

    fn on_activate(&mut self) -> Result<(), String> {
        println!("Activating {}", self.base.name());
        self.base.set_state(State::Active);
        Ok(())
    }

    fn on_deactivate(&mut self) -> Result<(), String> {
        println!("Deactivating {}", self.base.name());
        self.base.set_state(State::Inactive);
        Ok(())
    }

    fn on_cleanup(&mut self) -> Result<(), String> {
        println!("Cleaning up {}", self.base.name());
        self.state = AxisAggregator::new();
        self.error = AxisAggregator::new();
        self.base.set_state(State::Unconfigured);
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
