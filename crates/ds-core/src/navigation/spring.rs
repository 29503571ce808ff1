//! Damped spring driving the strip offset between pages

use crate::config::SpringConfig;

/// Longest integration step; larger frame deltas are split
const MAX_STEP_SECS: f32 = 1.0 / 240.0;

/// One-dimensional spring animation toward a target value
#[derive(Debug, Clone)]
pub struct SpringAnimation {
    position: f32,
    velocity: f32,
    target: f32,
    elapsed: f32,
    active: bool,
}

impl SpringAnimation {
    /// A spring at rest at `position`
    pub fn at_rest(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            elapsed: 0.0,
            active: false,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Redirect toward a new target, keeping current position and velocity
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Redirect with an explicit starting velocity (release momentum)
    pub fn launch(&mut self, target: f32, velocity: f32) {
        self.velocity = velocity;
        self.retarget(target);
    }

    /// Stop and pin the spring at `position`
    pub fn hold(&mut self, position: f32) {
        *self = Self::at_rest(position);
    }

    /// Jump to the target immediately
    pub fn finish(&mut self) {
        let target = self.target;
        self.hold(target);
    }

    /// Advance by `dt` seconds, returning the new position
    pub fn step(&mut self, dt: f32, config: &SpringConfig) -> f32 {
        if !self.active || dt <= 0.0 {
            return self.position;
        }

        let damping = config.damping();
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let displacement = self.position - self.target;
            let accel = (-config.stiffness * displacement - damping * self.velocity) / config.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        self.elapsed += dt;

        let at_rest = (self.position - self.target).abs() < config.rest_delta
            && self.velocity.abs() < config.rest_speed;
        if at_rest || self.elapsed >= config.max_duration_secs {
            self.finish();
        }

        self.position
    }
}
