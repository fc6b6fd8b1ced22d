use anyhow::{anyhow, Result};
use docking_core::common::Axis;
use docking_core::guidance::{GuidanceStack, MotionProfile};
use docking_core::telemetry::TelemetryStack;
use docking_core::DockingCore;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    println!("Initializing Docking Core...");

    let mut core = DockingCore::new();

    // Register components
    core.register(TelemetryStack::new());
    core.register(GuidanceStack::new());

    // Initialize the core
    core.init().map_err(|e| anyhow!(e))?;
    println!("Core initialized successfully!");

    // Install a reference trajectory for the approach axis
    let profile = MotionProfile::new(0.0, 2.0, 3.0, 6.0)?;
    let guidance = core
        .guidance_mut()
        .ok_or_else(|| anyhow!("guidance stack not registered"))?;
    guidance.set_profile(Axis::Z, profile);

    // In a real application the telemetry stack would be fed by one message
    // subscription per axis; here each axis gets its own task instead.
    let telemetry = Arc::new(TelemetryStack::new());

    for (i, axis) in Axis::ALL.into_iter().enumerate() {
        let telemetry = Arc::clone(&telemetry);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10 * i as u64)).await;
            telemetry.update_state(axis, 10.0 + i as f64);
            telemetry.update_error(axis, 0.1 * i as f64);
        });
    }

    // Poll until both aggregators have seen all six axes
    while !telemetry.is_ready() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let state = telemetry.state_snapshot();
    let error = telemetry.error_snapshot();
    println!(
        "Telemetry ready: state={:?}",
        state.to_vector().ok_or_else(|| anyhow!("incomplete state"))?
    );
    println!(
        "                 error={:?}",
        error.to_vector().ok_or_else(|| anyhow!("incomplete error"))?
    );

    // Query the reference trajectory the way the controller loop would
    let guidance = core
        .guidance_mut()
        .ok_or_else(|| anyhow!("guidance stack not registered"))?;
    for t in [0.0, 1.5, 3.0, 4.5, 6.0, 10.0] {
        if let Some((pos, vel, acc)) = guidance.reference(Axis::Z, t) {
            println!("t={:4.1}  pos={:6.2}  vel={:5.2}  acc={:5.2}", t, pos, vel, acc);
        }
    }

    // Shutdown the core
    core.shutdown().map_err(|e| anyhow!(e))?;
    println!("Core shutdown successfully!");

    Ok(())
}
