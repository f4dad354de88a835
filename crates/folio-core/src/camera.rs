//! Camera rig shared between the state machine and the renderer.
//!
//! These types avoid platform-specific APIs so the web frontend can build
//! matrices from them while host tests drive the same code natively.

use glam::{Mat4, Vec3, Vec4};

use crate::constants::{CAMERA_FAR, CAMERA_FOVY, CAMERA_NEAR};
use crate::pick::Ray;

/// Right-handed perspective camera pose.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraRig {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-4), self.znear, self.zfar)
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

/// Clamp range for the camera dolly distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
}

impl ZoomLimits {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, distance: f32) -> f32 {
        distance.clamp(self.min, self.max)
    }
}

/// Map canvas pixel coordinates to normalized device coordinates.
#[inline]
pub fn px_to_ndc(sx: f32, sy: f32, width: f32, height: f32) -> (f32, f32) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    (ndc_x, ndc_y)
}

/// Compute a world-space ray through an NDC point using the rig's live pose.
///
/// Unprojects the far-plane point and shoots from the eye through it, so the
/// same stationary pointer yields a different ray as the camera moves.
pub fn screen_ray(rig: &CameraRig, ndc_x: f32, ndc_y: f32) -> Ray {
    let inv = rig.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far: Vec3 = p_far.truncate() / p_far.w;
    Ray {
        origin: rig.eye,
        dir: (far - rig.eye).normalize_or_zero(),
    }
}
