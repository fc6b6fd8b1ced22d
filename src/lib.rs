pub mod common;
pub mod guidance;
pub mod lifecycle;
pub mod telemetry;

use crate::guidance::GuidanceStack;
use crate::lifecycle::LifecycleNode;
use crate::telemetry::TelemetryStack;

/// Core functionality for the automated docking stack
pub struct DockingCore {
    components: Vec<Box<dyn LifecycleNode>>,
}

impl DockingCore {
    /// Create a new instance of DockingCore
    pub fn new() -> Self {
        DockingCore {
            components: Vec::new(),
        }
    }

    /// Register a component with the core
    pub fn register<T: LifecycleNode + 'static>(&mut self, component: T) {
        self.components.push(Box::new(component));
    }

    /// Initialize all registered components
    pub fn init(&mut self) -> Result<(), String> {
        for component in &mut self.components {
            component.on_configure()?;
            component.on_activate()?;
        }
        Ok(())
    }

    /// Shutdown all registered components
    pub fn shutdown(&mut self) -> Result<(), String> {
        for component in &mut self.components {
            component.on_deactivate()?;
            component.on_cleanup()?;
        }
        Ok(())
    }

    /// Get a reference to the registered telemetry stack
    pub fn telemetry_mut(&mut self) -> Option<&mut TelemetryStack> {
        self.components
            .iter_mut()
            .find_map(|component| component.as_any_mut().downcast_mut::<TelemetryStack>())
    }

    /// Get a reference to the registered guidance stack
    pub fn guidance_mut(&mut self) -> Option<&mut GuidanceStack> {
        self.components
            .iter_mut()
            .find_map(|component| component.as_any_mut().downcast_mut::<GuidanceStack>())
    }
}

impl Default for DockingCore {
    fn default() -> Self {
        DockingCore::new()
    }
}
