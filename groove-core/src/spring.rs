//! Damped spring integrator
//!
//! A small explicit stand-in for reactive motion values: each frame the host
//! advances the spring by the elapsed time and reads back the smoothed value.
//! Integration is semi-implicit Euler over fixed substeps so stiff, light
//! springs stay stable at any frame rate.

use std::time::Duration;

use crate::constants::spring as numerics;

/// Spring constants. Mass is floored to keep the acceleration finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; above 1 never overshoots.
    pub fn damping_ratio(&self) -> f32 {
        let critical = 2.0 * (self.stiffness * self.effective_mass()).sqrt();
        if critical <= 0.0 {
            return f32::INFINITY;
        }
        self.damping / critical
    }

    fn effective_mass(&self) -> f32 {
        self.mass.max(1e-3)
    }
}

#[derive(Debug, Clone)]
pub struct Spring {
    params: SpringParams,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// A spring resting at `initial`.
    pub fn new(initial: f32, params: SpringParams) -> Self {
        Self {
            params,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Swap constants mid-flight. Velocity carries over so the handoff
    /// between drive modes has no visible kink.
    pub fn set_params(&mut self, params: SpringParams) {
        self.params = params;
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` and return the new value.
    pub fn step(&mut self, dt: Duration) -> f32 {
        if self.is_at_rest() {
            return self.value;
        }

        let mut remaining = dt.as_secs_f32().min(numerics::MAX_FRAME_DT_S);
        let k = self.params.stiffness;
        let c = self.params.damping;
        let m = self.params.effective_mass();

        while remaining > 0.0 {
            let h = remaining.min(numerics::SUBSTEP_S);
            let displacement = self.value - self.target;
            let accel = (-k * displacement - c * self.velocity) / m;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() < numerics::REST_DELTA
            && self.velocity.abs() < numerics::REST_SPEED
        {
            self.value = self.target;
            self.velocity = 0.0;
        }

        self.value
    }

    /// Jump to `value` with no velocity.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }
}
