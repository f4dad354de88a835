// Host-side tests for tuning constants and their relationships.

use folio_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_reasonable() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FOVY > 0.0 && CAMERA_FOVY < std::f32::consts::PI);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timeline_durations_are_ordered() {
    // The fly-in dwarfs both focus tweens, and the release is the
    // slower of the two.
    assert!(INTRO_DURATION_MS > FOCUS_OUT_MS);
    assert!(INTRO_DURATION_MS > FOCUS_IN_MS);
    assert!(FOCUS_OUT_MS > FOCUS_IN_MS);
    assert!(FOCUS_IN_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn panels_are_framed_at_twice_their_largest_dimension() {
    assert_eq!(FOCUS_DISTANCE_FACTOR, 2.0);
    assert!(FOCUS_ZOOM_MIN_FACTOR < 1.0);
    assert!(FOCUS_ZOOM_MAX_FACTOR > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_anchor_sits_on_the_orbit() {
    assert_eq!(IDLE_ANCHOR_EYE.x, ORBIT_RADIUS);
    assert_eq!(IDLE_ANCHOR_EYE.y, ORBIT_HEIGHT);
    assert_eq!(IDLE_ANCHOR_EYE.z, ORBIT_Z_OFFSET);
    assert!(IDLE_ZOOM_MIN < ORBIT_RADIUS && ORBIT_RADIUS < IDLE_ZOOM_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn intro_starts_away_from_the_anchor() {
    assert!((INTRO_EYE - IDLE_ANCHOR_EYE).length() > 1.0);
    assert!(INTRO_EYE.y > IDLE_ANCHOR_EYE.y);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drift_ranges_are_ordered() {
    assert!(DRIFT_FREQ_MIN < DRIFT_FREQ_MAX);
    assert!(DRIFT_RADIUS_MIN < DRIFT_RADIUS_MAX);
    assert!(DRIFT_SPIN_MIN < DRIFT_SPIN_MAX);
    assert!(DRIFT_FREQ_MIN > 0.0 && DRIFT_RADIUS_MIN > 0.0 && DRIFT_SPIN_MIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bodies_keep_clear_of_each_other() {
    assert!(MOON_ORBIT_RADIUS > EARTH_RADIUS + MOON_RADIUS);
    assert!(EARTH_SPIN_RATE > 0.0);
    assert!(MOON_ORBIT_RATE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_motion_rates_are_positive() {
    assert!(ORBIT_RATE > 0.0);
    assert!(ORBIT_BOB_FREQ > 0.0);
    assert!(ORBIT_BOB_AMPLITUDE > 0.0);
    assert!(ORBIT_BOB_AMPLITUDE < ORBIT_HEIGHT);
}

#[test]
fn panel_labels_are_unique() {
    let mut labels: Vec<&str> = DEFAULT_PANELS.iter().map(|(l, _)| *l).collect();
    assert_eq!(labels.len(), 5);
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), 5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn panels_sit_outside_the_bodies() {
    for (label, home) in DEFAULT_PANELS.iter() {
        let r = glam::Vec3::from_array(*home).length();
        assert!(r > EARTH_RADIUS + 1.0, "panel `{label}` is inside the globe");
        assert!(r < IDLE_ZOOM_MAX, "panel `{label}` is outside the orbit band");
    }
}
