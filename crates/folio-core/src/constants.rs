use glam::Vec3;

// Scene layout and interaction tuning constants.
//
// Values express intended behavior (orbit geometry, tween timing, zoom
// clamps) and keep magic numbers out of the code.

// Celestial bodies
pub const EARTH_RADIUS: f32 = 2.0;
pub const EARTH_SPIN_RATE: f32 = 0.05; // rad/s self-rotation
pub const MOON_RADIUS: f32 = 0.45;
pub const MOON_ORBIT_RADIUS: f32 = 5.2;
pub const MOON_ORBIT_RATE: f32 = 0.12; // rad/s around the Earth
pub const MOON_ORBIT_TILT: f32 = 0.18; // rad, orbital plane tilt about X

// Camera projection
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const LOOK_TARGET: Vec3 = Vec3::ZERO;

// Idle orbit path: eye = (cos(a)*R, H + sin(b*f)*A, sin(a)*R + Z0)
pub const ORBIT_RADIUS: f32 = 9.0;
pub const ORBIT_HEIGHT: f32 = 1.6;
pub const ORBIT_Z_OFFSET: f32 = 2.0;
pub const ORBIT_RATE: f32 = 0.04; // rad/s, scaled by frame dt
pub const ORBIT_BOB_AMPLITUDE: f32 = 0.35;
pub const ORBIT_BOB_FREQ: f32 = 0.4; // rad/s on the bob clock

// Canonical pose the machine returns to: orbit angle 0, bob clock 0.
pub const IDLE_ANCHOR_EYE: Vec3 = Vec3::new(ORBIT_RADIUS, ORBIT_HEIGHT, ORBIT_Z_OFFSET);

// Startup intro descent
pub const INTRO_EYE: Vec3 = Vec3::new(ORBIT_RADIUS * 0.6, 18.0, ORBIT_Z_OFFSET + 3.0);
pub const INTRO_DURATION_MS: f32 = 8000.0;

// Focus tweens
pub const FOCUS_IN_MS: f32 = 1200.0;
pub const FOCUS_OUT_MS: f32 = 1500.0;
pub const FOCUS_DISTANCE_FACTOR: f32 = 2.0; // eye offset = factor * largest bbox dimension
pub const FOCUS_ZOOM_MIN_FACTOR: f32 = 0.5; // zoom clamp while focused, relative to framing
pub const FOCUS_ZOOM_MAX_FACTOR: f32 = 2.0;

// Default (idle) zoom clamp on the orbit radius
pub const IDLE_ZOOM_MIN: f32 = ORBIT_RADIUS * 0.6;
pub const IDLE_ZOOM_MAX: f32 = ORBIT_RADIUS * 1.8;
pub const WHEEL_ZOOM_STEP: f32 = 0.0012; // relative distance change per wheel delta unit

// Panels
pub const PANEL_HALF_EXTENTS: Vec3 = Vec3::new(0.55, 0.35, 0.015);
pub const LABEL_OFFSET_Y: f32 = 0.58; // label quad center above the panel center
pub const LABEL_SCALE: f32 = 0.62;
pub const LABEL_HIGHLIGHT_ALPHA: f32 = 1.0;

// Per-item drift parameter ranges, sampled once at creation
pub const DRIFT_FREQ_MIN: f32 = 0.25;
pub const DRIFT_FREQ_MAX: f32 = 0.55;
pub const DRIFT_RADIUS_MIN: f32 = 0.08;
pub const DRIFT_RADIUS_MAX: f32 = 0.22;
pub const DRIFT_SPIN_MIN: f32 = 0.05;
pub const DRIFT_SPIN_MAX: f32 = 0.16;

// Default panel set: label and home position, counter-clockwise around the Earth
pub const DEFAULT_PANELS: [(&str, [f32; 3]); 5] = [
    ("About", [4.8, 0.9, 3.2]),
    ("Experience", [-3.6, 0.4, 4.8]),
    ("Projects", [-5.6, -0.5, -1.4]),
    ("Skills", [0.8, -0.8, -5.8]),
    ("Contact", [5.2, 1.2, -2.6]),
];
