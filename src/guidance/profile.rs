//! Closed-form trapezoidal-velocity reference trajectory

use thiserror::Error;

/// Rejected motion profile parameters
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProfileError {
    /// The phase breakpoints must satisfy 0 <= t1 <= t2
    #[error("time breakpoints out of order: expected 0 <= t1 <= t2, got t1={t1}, t2={t2}")]
    BreakpointOrder { t1: f64, t2: f64 },
    /// The acceleration magnitude carries no sign; the profile applies it per phase
    #[error("acceleration magnitude must be non-negative, got {0}")]
    NegativeAcceleration(f64),
    /// NaN or infinite parameters would poison every query
    #[error("parameter {name} is not finite: {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Single-axis bang-bang acceleration reference trajectory
///
/// Accelerates at `+a` until `t1`, decelerates at `-a` until `t2`, then coasts
/// at whatever velocity remains. All three queries are pure functions of the
/// query time; the profile holds no mutable state and is safe to share across
/// threads. Phase boundary values are computed once at construction, so
/// continuity at `t1` and `t2` holds by construction:
///
/// ```text
/// v1 = a * t1                                   p1 = p0 + a * t1^2 / 2
/// v2 = v1 - a * (t2 - t1)                       p2 = p1 + v1 * dt - a * dt^2 / 2
/// ```
///
/// Query times before zero fall into the acceleration phase and extrapolate
/// backward; callers are expected to query non-negative mission time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    initial_position: f64,
    acceleration: f64,
    t1: f64,
    t2: f64,
    // Phase boundary values, fixed at construction
    v1: f64,
    p1: f64,
    v2: f64,
    p2: f64,
}

impl MotionProfile {
    /// Build a profile from a start position, an acceleration magnitude and
    /// the two phase breakpoints
    ///
    /// Fails fast on `t2 < t1`, `t1 < 0`, a negative acceleration magnitude or
    /// non-finite parameters; a silently mis-ordered profile would otherwise
    /// produce discontinuous output.
    pub fn new(
        initial_position: f64,
        acceleration: f64,
        t1: f64,
        t2: f64,
    ) -> Result<Self, ProfileError> {
        for (name, value) in [
            ("initial_position", initial_position),
            ("acceleration", acceleration),
            ("t1", t1),
            ("t2", t2),
        ] {
            if !value.is_finite() {
                return Err(ProfileError::NonFinite { name, value });
            }
        }
        if acceleration < 0.0 {
            return Err(ProfileError::NegativeAcceleration(acceleration));
        }
        if t1 < 0.0 || t2 < t1 {
            return Err(ProfileError::BreakpointOrder { t1, t2 });
        }

        let v1 = acceleration * t1;
        let p1 = initial_position + acceleration * t1 * t1 / 2.0;
        let dt = t2 - t1;
        let v2 = v1 - acceleration * dt;
        let p2 = p1 + v1 * dt - acceleration * dt * dt / 2.0;

        Ok(MotionProfile {
            initial_position,
            acceleration,
            t1,
            t2,
            v1,
            p1,
            v2,
            p2,
        })
    }

    /// Reference acceleration at mission time `t`
    ///
    /// The acceleration phase owns `t1` and the deceleration phase owns `t2`.
    pub fn acceleration(&self, t: f64) -> f64 {
        if t <= self.t1 {
            self.acceleration
        } else if t <= self.t2 {
            -self.acceleration
        } else {
            0.0
        }
    }

    /// Reference velocity at mission time `t`
    pub fn velocity(&self, t: f64) -> f64 {
        if t <= self.t1 {
            self.acceleration * t
        } else if t <= self.t2 {
            self.v1 - self.acceleration * (t - self.t1)
        } else {
            self.v2
        }
    }

    /// Reference position at mission time `t`
    pub fn position(&self, t: f64) -> f64 {
        if t <= self.t1 {
            self.initial_position + self.acceleration * t * t / 2.0
        } else if t <= self.t2 {
            let dt = t - self.t1;
            self.p1 + self.v1 * dt - self.acceleration * dt * dt / 2.0
        } else {
            self.p2 + self.v2 * (t - self.t2)
        }
    }

    /// Position, velocity and acceleration at mission time `t`
    pub fn sample(&self, t: f64) -> (f64, f64, f64) {
        (self.position(t), self.velocity(t), self.acceleration(t))
    }

    /// Start position of the trajectory
    pub fn initial_position(&self) -> f64 {
        self.initial_position
    }

    /// Acceleration magnitude applied in the first two phases
    pub fn acceleration_magnitude(&self) -> f64 {
        self.acceleration
    }

    /// End of the acceleration phase
    pub fn t1(&self) -> f64 {
        self.t1
    }

    /// End of the deceleration phase
    pub fn t2(&self) -> f64 {
        self.t2
    }
}
