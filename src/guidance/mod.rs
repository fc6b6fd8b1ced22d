//! Guidance module for the docking stack
pub mod profile;

pub use self::profile::{MotionProfile, ProfileError};

use crate::common::Axis;
use crate::lifecycle::{LifecycleNode, LifecycleNodeBase, State};
use std::any::Any;

/// Guidance stack for the docking maneuver
///
/// Holds at most one reference trajectory per axis. The controller installs a
/// profile for each axis it guides and queries them all at the same mission
/// time to get consistent reference targets.
pub struct GuidanceStack {
    base: LifecycleNodeBase,
    profiles: [Option<MotionProfile>; Axis::COUNT],
}

impl GuidanceStack {
    /// Create a guidance stack with no profiles installed
    pub fn new() -> Self {
        GuidanceStack {
            base: LifecycleNodeBase::new("guidance_stack"),
            profiles: [None; Axis::COUNT],
        }
    }

    /// Install the reference trajectory for one axis, replacing any prior one
    pub fn set_profile(&mut self, axis: Axis, profile: MotionProfile) {
        self.profiles[axis.index()] = Some(profile);
    }

    /// The installed trajectory for an axis, if any
    pub fn profile(&self, axis: Axis) -> Option<&MotionProfile> {
        self.profiles[axis.index()].as_ref()
    }

    /// Reference (position, velocity, acceleration) for one axis at mission
    /// time `t`, or `None` if no profile is installed for that axis
    pub fn reference(&self, axis: Axis, t: f64) -> Option<(f64, f64, f64)> {
        self.profile(axis).map(|profile| profile.sample(t))
    }
}

impl Default for GuidanceStack {
    fn default() -> Self {
        GuidanceStack::new()
    }
}

impl LifecycleNode for GuidanceStack {
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
        self.profiles = [None; Axis::COUNT];
        self.base.set_state(State::Unconfigured);
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
