//! Scene model: the five floating panels plus the two orbiting bodies.
//!
//! Panel placement is fixed by [`DEFAULT_PANELS`]; only the drift motion is
//! randomised, per item, from a caller-supplied seed so a given seed always
//! produces the same sway.

use glam::{Quat, Vec3};
use rand::{Rng, SeedableRng};

use crate::constants::*;

/// Per-item sway parameters, sampled once at construction.
#[derive(Copy, Clone, Debug)]
pub struct DriftParams {
    pub freq: f32,
    pub phase: f32,
    pub radius: f32,
    pub spin: f32,
}

#[derive(Clone, Debug)]
pub struct PanelItem {
    pub label: &'static str,
    pub home: Vec3,
    pub half_extents: Vec3,
    pub drift: DriftParams,
    pub position: Vec3,
    pub rotation: Quat,
    pub(crate) base_yaw: f32,
    pub(crate) yaw_drift: f32,
}

impl PanelItem {
    pub fn new(label: &'static str, home: Vec3, half_extents: Vec3, drift: DriftParams) -> Self {
        // Face roughly away from the origin so the +Z axis points at open space.
        let base_yaw = home.x.atan2(home.z);
        Self {
            label,
            home,
            half_extents,
            drift,
            position: home,
            rotation: Quat::from_rotation_y(base_yaw),
            base_yaw,
            yaw_drift: 0.0,
        }
    }

    /// Largest edge of the panel's bounding box, in world units.
    pub fn max_dimension(&self) -> f32 {
        2.0 * self.half_extents.max_element()
    }

    /// Radius of the bounding sphere used for ray picking.
    pub fn pick_radius(&self) -> f32 {
        self.half_extents.length()
    }

    /// The panel's +Z axis in world space at its current orientation.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn model_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

/// Spin/orbit phases for the earth and moon, in radians.
#[derive(Copy, Clone, Debug, Default)]
pub struct CelestialState {
    pub earth_spin: f32,
    pub moon_angle: f32,
}

impl CelestialState {
    /// Moon centre on its tilted circular orbit.
    pub fn moon_position(&self) -> Vec3 {
        let a = self.moon_angle;
        Vec3::new(
            a.cos() * MOON_ORBIT_RADIUS,
            a.sin() * MOON_ORBIT_RADIUS * MOON_ORBIT_TILT.sin(),
            a.sin() * MOON_ORBIT_RADIUS * MOON_ORBIT_TILT.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct SceneState {
    pub items: Vec<PanelItem>,
    pub bodies: CelestialState,
    pub clock: f32,
}

impl SceneState {
    pub fn new(seed: u64) -> Self {
        Self {
            items: build_panels(seed),
            bodies: CelestialState::default(),
            clock: 0.0,
        }
    }
}

/// Build the default panel set with per-item deterministic drift.
pub fn build_panels(seed: u64) -> Vec<PanelItem> {
    DEFAULT_PANELS
        .iter()
        .enumerate()
        .map(|(i, (label, home))| {
            let mut rng = rand::rngs::StdRng::seed_from_u64(
                seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15),
            );
            let drift = DriftParams {
                freq: rng.gen_range(DRIFT_FREQ_MIN..DRIFT_FREQ_MAX),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                radius: rng.gen_range(DRIFT_RADIUS_MIN..DRIFT_RADIUS_MAX),
                spin: rng.gen_range(DRIFT_SPIN_MIN..DRIFT_SPIN_MAX),
            };
            PanelItem::new(label, Vec3::from_array(*home), PANEL_HALF_EXTENTS, drift)
        })
        .collect()
}
