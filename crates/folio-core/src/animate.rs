//! Per-frame scene advancement: panel drift and body orbits.
//!
//! All motion is rate-scaled by the frame delta, so a dropped frame skips
//! ahead instead of slowing the world down.

use glam::{EulerRot, Quat, Vec3};

use crate::constants::*;
use crate::scene::SceneState;

/// Advance the whole scene by `dt` seconds.
pub fn advance(scene: &mut SceneState, dt: f32) {
    scene.clock += dt;
    drift_items(scene, dt);
    spin_bodies(scene, dt);
}

fn drift_items(scene: &mut SceneState, dt: f32) {
    let t = scene.clock;
    for item in &mut scene.items {
        let d = item.drift;
        let offset = Vec3::new(
            (t * d.freq * 0.9 + d.phase).cos() * d.radius * 0.6,
            (t * d.freq + d.phase).sin() * d.radius,
            (t * d.freq * 0.7 + d.phase * 1.3).sin() * d.radius * 0.4,
        );
        item.position = item.home + offset;
        // Oscillating drift keeps the yaw bounded around the base facing.
        item.yaw_drift += dt * d.spin * (t * 0.5 + d.phase).sin();
        let pitch = (t * d.freq * 0.8 + d.phase).sin() * 0.06;
        let roll = (t * d.freq * 0.6 + d.phase).cos() * 0.04;
        item.rotation =
            Quat::from_euler(EulerRot::YXZ, item.base_yaw + item.yaw_drift, pitch, roll);
    }
}

fn spin_bodies(scene: &mut SceneState, dt: f32) {
    let b = &mut scene.bodies;
    b.earth_spin = (b.earth_spin + EARTH_SPIN_RATE * dt) % std::f32::consts::TAU;
    b.moon_angle = (b.moon_angle + MOON_ORBIT_RATE * dt) % std::f32::consts::TAU;
}
