//! Lifecycle management for docking components

use std::any::Any;

/// Trait for components driven through a configure/activate lifecycle
pub trait LifecycleNode: Send + Sync {
    /// Configure the component
    fn on_configure(&mut self) -> Result<(), String>;

    /// Activate the component
    fn on_activate(&mut self) -> Result<(), String>;

    /// Deactivate the component
    fn on_deactivate(&mut self) -> Result<(), String>;

    /// Release the component's resources
    fn on_cleanup(&mut self) -> Result<(), String>;

    /// Convert to Any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Lifecycle state of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unconfigured,
    Inactive,
    Active,
    Finalized,
}

/// Name and state bookkeeping shared by lifecycle components
pub struct LifecycleNodeBase {
    name: String,
    state: State,
}

impl LifecycleNodeBase {
    /// Create an unconfigured base with the given component name
    pub fn new(name: &str) -> Self {
        LifecycleNodeBase {
            name: name.to_string(),
            state: State::Unconfigured,
        }
    }

    /// The component name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current lifecycle state
    pub fn get_state(&self) -> State {
        self.state
    }

    /// Move the component to a new lifecycle state
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }
}
