// Host-side tests for scene construction, drift animation, and the
// procedural meshes the renderer uploads.

use folio_core::*;
use glam::Vec3;

#[test]
fn panels_build_deterministically_from_a_seed() {
    let a = build_panels(7);
    let b = build_panels(7);
    assert_eq!(a.len(), DEFAULT_PANELS.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.label, y.label);
        assert_eq!(x.home, y.home);
        assert_eq!(x.drift.freq, y.drift.freq);
        assert_eq!(x.drift.phase, y.drift.phase);
        assert_eq!(x.drift.radius, y.drift.radius);
        assert_eq!(x.drift.spin, y.drift.spin);
    }
}

#[test]
fn different_seeds_give_different_drift() {
    let a = build_panels(1);
    let b = build_panels(2);
    assert!(a
        .iter()
        .zip(b.iter())
        .any(|(x, y)| x.drift.freq != y.drift.freq || x.drift.phase != y.drift.phase));
}

#[test]
fn drift_parameters_stay_in_their_ranges() {
    for item in build_panels(99) {
        let d = item.drift;
        assert!(d.freq >= DRIFT_FREQ_MIN && d.freq < DRIFT_FREQ_MAX);
        assert!(d.radius >= DRIFT_RADIUS_MIN && d.radius < DRIFT_RADIUS_MAX);
        assert!(d.spin >= DRIFT_SPIN_MIN && d.spin < DRIFT_SPIN_MAX);
        assert!(d.phase >= 0.0 && d.phase < std::f32::consts::TAU);
    }
}

#[test]
fn panels_start_facing_away_from_the_origin() {
    for item in build_panels(3) {
        let outward = item.home.normalize();
        assert!(
            item.forward().dot(outward) > 0.9,
            "panel `{}` faces the wrong way",
            item.label
        );
    }
}

#[test]
fn drift_keeps_panels_near_their_homes() {
    let mut scene = SceneState::new(5);
    for _ in 0..600 {
        advance(&mut scene, 0.016);
        for item in &scene.items {
            let sway = (item.position - item.home).length();
            assert!(
                sway <= item.drift.radius * 1.3,
                "panel `{}` drifted {sway} from home",
                item.label
            );
        }
    }
}

#[test]
fn drift_never_spins_a_panel_around() {
    let mut scene = SceneState::new(5);
    for _ in 0..600 {
        advance(&mut scene, 0.05);
    }
    // 30 seconds in, every panel still faces roughly outward.
    for item in &scene.items {
        assert!(
            item.forward().dot(item.home.normalize()) > 0.6,
            "panel `{}` wound up",
            item.label
        );
    }
}

#[test]
fn body_phases_advance_and_wrap() {
    let mut scene = SceneState::new(0);
    advance(&mut scene, 1.0);
    assert!((scene.bodies.earth_spin - EARTH_SPIN_RATE).abs() < 1e-6);
    assert!((scene.bodies.moon_angle - MOON_ORBIT_RATE).abs() < 1e-6);
    for _ in 0..2_000 {
        advance(&mut scene, 1.0);
    }
    assert!(scene.bodies.earth_spin >= 0.0 && scene.bodies.earth_spin < std::f32::consts::TAU);
    assert!(scene.bodies.moon_angle >= 0.0 && scene.bodies.moon_angle < std::f32::consts::TAU);
}

#[test]
fn moon_stays_on_its_orbit_radius() {
    for i in 0..32 {
        let bodies = CelestialState {
            earth_spin: 0.0,
            moon_angle: std::f32::consts::TAU * i as f32 / 32.0,
        };
        let r = bodies.moon_position().length();
        assert!((r - MOON_ORBIT_RADIUS).abs() < 1e-4);
    }
}

#[test]
fn uv_sphere_has_expected_counts_and_unit_normals() {
    let mesh = uv_sphere(2.0, 16, 12);
    assert_eq!(mesh.vertices.len(), 17 * 13);
    assert_eq!(mesh.indices.len(), 16 * 12 * 6);
    assert_eq!(mesh.index_count(), mesh.indices.len() as u32);
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        let n = Vec3::from_array(v.normal);
        assert!((p.length() - 2.0).abs() < 1e-4);
        assert!((n.length() - 1.0).abs() < 1e-4);
    }
    for &i in &mesh.indices {
        assert!((i as usize) < mesh.vertices.len());
    }
}

#[test]
fn panel_box_matches_its_half_extents() {
    let half = Vec3::new(0.55, 0.35, 0.015);
    let mesh = panel_box(half);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    for v in &mesh.vertices {
        assert!(v.position[0].abs() <= half.x + 1e-6);
        assert!(v.position[1].abs() <= half.y + 1e-6);
        assert!(v.position[2].abs() <= half.z + 1e-6);
        // Face normals are axis-aligned and unit length.
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(n.abs().max_element(), 1.0);
    }
}

#[test]
fn label_quad_is_a_unit_quad() {
    let mesh = label_quad();
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.indices.len(), 6);
    for v in &mesh.vertices {
        assert!(v.position[0].abs() <= 0.5);
        assert!(v.position[1].abs() <= 0.5);
        assert_eq!(v.position[2], 0.0);
    }
}

#[test]
fn pick_radius_encloses_the_panel_box() {
    let item = &build_panels(0)[0];
    // The bounding sphere must contain every corner of the box.
    let corner = item.half_extents.length();
    assert!((item.pick_radius() - corner).abs() < 1e-6);
    assert!(item.pick_radius() >= item.half_extents.max_element());
}

#[test]
fn max_dimension_is_the_largest_edge() {
    let item = PanelItem::new(
        "About",
        Vec3::ZERO,
        Vec3::new(0.3, 0.2, 0.05),
        DriftParams {
            freq: 0.0,
            phase: 0.0,
            radius: 0.0,
            spin: 0.0,
        },
    );
    assert!((item.max_dimension() - 0.6).abs() < 1e-6);
}
