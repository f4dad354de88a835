//! Timed camera interpolation with eased progress.
//!
//! A tween owns its endpoint poses and a millisecond clock; progress is
//! monotone, clamps at exactly 1.0 and stays there, so sampling after
//! completion keeps returning the end pose.

use glam::Vec3;

/// Monotonic reparameterization of linear progress.
///
/// In/out choices are asymmetric on purpose: engagement is snappier than
/// release, and the intro uses a long exponential tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// `t < 0.5: 4t^3`, else `1 - (-2t + 2)^3 / 2`.
    InOutCubic,
    /// `1 - (1 - t)^3`.
    OutCubic,
    /// `1 - 2^(-10t)`, pinned to 1 at `t = 1`.
    OutExpo,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::OutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// In-flight interpolation between two camera poses.
#[derive(Clone, Debug)]
pub struct CameraTween {
    from_eye: Vec3,
    from_target: Vec3,
    to_eye: Vec3,
    to_target: Vec3,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl CameraTween {
    pub fn new(
        from_eye: Vec3,
        from_target: Vec3,
        to_eye: Vec3,
        to_target: Vec3,
        duration_ms: f32,
        easing: Easing,
    ) -> Self {
        Self {
            from_eye,
            from_target,
            to_eye,
            to_target,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// Advance the clock; negative steps are ignored, the clock saturates
    /// at the duration.
    pub fn step(&mut self, dt_ms: f32) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms);
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    pub fn eased(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    pub fn done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    pub fn eye(&self) -> Vec3 {
        if self.done() {
            // Land on the endpoint exactly rather than on lerp rounding.
            self.to_eye
        } else {
            self.from_eye.lerp(self.to_eye, self.eased())
        }
    }

    pub fn target(&self) -> Vec3 {
        if self.done() {
            self.to_target
        } else {
            self.from_target.lerp(self.to_target, self.eased())
        }
    }

    pub fn end_eye(&self) -> Vec3 {
        self.to_eye
    }

    pub fn end_target(&self) -> Vec3 {
        self.to_target
    }
}
