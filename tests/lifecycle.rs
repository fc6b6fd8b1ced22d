//! Component lifecycle tests
//!
//! These tests validate:
//! 1. LifecycleNodeBase name and state bookkeeping
//! 2. DockingCore driving registered components through init and shutdown
//! 3. Typed downcast access to the registered stacks

use docking_core::common::Axis;
use docking_core::guidance::{GuidanceStack, MotionProfile};
use docking_core::lifecycle::{LifecycleNodeBase, State};
use docking_core::telemetry::TelemetryStack;
use docking_core::DockingCore;

#[test]
fn node_base_tracks_name_and_state() {
    let mut base = LifecycleNodeBase::new("approach_monitor");
    assert_eq!(base.name(), "approach_monitor");
    assert_eq!(base.get_state(), State::Unconfigured);

    base.set_state(State::Inactive);
    assert_eq!(base.get_state(), State::Inactive);
    base.set_state(State::Active);
    assert_eq!(base.get_state(), State::Active);
}

#[test]
fn core_initializes_and_shuts_down_registered_stacks() {
    let mut core = DockingCore::new();
    core.register(TelemetryStack::new());
    core.register(GuidanceStack::new());

    assert!(core.init().is_ok());
    assert!(core.shutdown().is_ok());
}

#[test]
fn core_exposes_stacks_through_typed_accessors() {
    let mut core = DockingCore::new();
    assert!(core.telemetry_mut().is_none());
    assert!(core.guidance_mut().is_none());

    core.register(TelemetryStack::new());
    core.register(GuidanceStack::new());

    let telemetry = core.telemetry_mut().unwrap();
    telemetry.update_state(Axis::X, 1.0);
    assert_eq!(telemetry.state_snapshot().get(Axis::X), Some(1.0));

    let guidance = core.guidance_mut().unwrap();
    guidance.set_profile(Axis::Z, MotionProfile::new(0.0, 2.0, 3.0, 6.0).unwrap());
    assert!(guidance.reference(Axis::Z, 0.0).is_some());
}

#[test]
fn cleanup_resets_stack_contents() {
    let mut core = DockingCore::new();
    core.register(TelemetryStack::new());
    core.register(GuidanceStack::new());
    assert!(core.init().is_ok());

    let telemetry = core.telemetry_mut().unwrap();
    for axis in Axis::ALL {
        telemetry.update_state(axis, 1.0);
        telemetry.update_error(axis, 0.0);
    }
    assert!(telemetry.is_ready());

    let guidance = core.guidance_mut().unwrap();
    guidance.set_profile(Axis::Z, MotionProfile::new(0.0, 2.0, 3.0, 6.0).unwrap());

    assert!(core.shutdown().is_ok());

    let telemetry = core.telemetry_mut().unwrap();
    assert!(!telemetry.is_ready());
    assert!(telemetry.state_snapshot().is_empty());
    let guidance = core.guidance_mut().unwrap();
    assert_eq!(guidance.reference(Axis::Z, 0.0), None);
}
