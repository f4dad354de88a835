// Host-side tests for the camera session state machine: intro gating,
// click-to-focus framing, release back to orbit, and wheel zoom bands.

use folio_core::*;
use glam::Vec3;

fn still(label: &'static str, home: Vec3, half: Vec3) -> PanelItem {
    PanelItem::new(
        label,
        home,
        half,
        DriftParams {
            freq: 0.0,
            phase: 0.0,
            radius: 0.0,
            spin: 0.0,
        },
    )
}

fn settled_session() -> Session {
    let mut session = Session::new();
    let mut events = Vec::new();
    session.tick(INTRO_DURATION_MS / 1000.0, &mut events);
    assert_eq!(session.phase(), SessionPhase::Idle);
    session
}

fn ray_at(session: &Session, point: Vec3) -> Ray {
    Ray {
        origin: session.rig.eye,
        dir: (point - session.rig.eye).normalize(),
    }
}

#[test]
fn new_session_starts_the_fly_in() {
    let session = Session::new();
    assert_eq!(session.phase(), SessionPhase::Intro);
    assert_eq!(session.rig.eye, INTRO_EYE);
    assert!(!session.pointer_enabled());
}

#[test]
fn intro_lands_exactly_on_the_orbit_anchor() {
    let mut session = Session::new();
    let mut events = Vec::new();
    session.tick(INTRO_DURATION_MS / 1000.0, &mut events);
    assert_eq!(events, vec![SessionEvent::IntroFinished]);
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.rig.eye, IDLE_ANCHOR_EYE);
    assert_eq!(session.rig.target, LOOK_TARGET);
    assert!(session.pointer_enabled());
}

#[test]
fn intro_is_still_running_at_the_halfway_mark() {
    let mut session = Session::new();
    let mut events = Vec::new();
    session.tick(INTRO_DURATION_MS / 2000.0, &mut events);
    assert_eq!(session.phase(), SessionPhase::Intro);
    assert!(events.is_empty());
    // Somewhere between the fly-in start and the anchor, not at either end.
    assert!((session.rig.eye - INTRO_EYE).length() > 0.1);
    assert!((session.rig.eye - IDLE_ANCHOR_EYE).length() > 0.1);
}

#[test]
fn pointer_input_is_inert_during_intro() {
    let mut session = Session::new();
    let items = vec![still(
        "About",
        Vec3::new(1.0, 0.0, 6.0),
        Vec3::new(0.3, 0.2, 0.05),
    )];
    let ray = ray_at(&session, items[0].position);
    assert!(!session.click(&ray, &items));
    assert_eq!(session.phase(), SessionPhase::Intro);
    let scan = session.scan_hover(Some(&ray), &items);
    assert_eq!(scan.hovered, None);
    assert_eq!(scan.entered, None);
    let before = session.distance();
    session.apply_wheel(500.0);
    assert_eq!(session.distance(), before);
    assert!(!session.request_close());
}

#[test]
fn click_frames_the_panel_at_twice_its_largest_dimension() {
    let mut session = settled_session();
    // Largest edge 0.6, so the held camera sits 1.2 units out.
    let items = vec![still(
        "About",
        Vec3::new(1.0, 0.0, 6.0),
        Vec3::new(0.3, 0.2, 0.05),
    )];
    let ray = ray_at(&session, items[0].position);
    assert!(session.click(&ray, &items));
    assert_eq!(session.phase(), SessionPhase::FocusTweenIn);
    assert_eq!(session.focused(), Some(0));

    let mut events = Vec::new();
    session.tick(FOCUS_IN_MS / 1000.0, &mut events);
    assert_eq!(events, vec![SessionEvent::FocusSettled { item: 0 }]);
    assert_eq!(session.phase(), SessionPhase::Focused);
    assert!((session.distance() - 1.2).abs() < 1e-5);
    assert!((session.rig.target - items[0].position).length() < 1e-4);
    assert!(((session.rig.eye - items[0].position).length() - 1.2).abs() < 1e-4);
    let expected_eye = items[0].position + items[0].forward() * 1.2;
    assert!((session.rig.eye - expected_eye).length() < 1e-4);
}

#[test]
fn focus_tween_passes_through_the_eased_midpoint() {
    let mut session = settled_session();
    let items = vec![still(
        "About",
        Vec3::new(1.0, 0.0, 6.0),
        Vec3::new(0.3, 0.2, 0.05),
    )];
    let start_eye = session.rig.eye;
    let ray = ray_at(&session, items[0].position);
    assert!(session.click(&ray, &items));
    let end_eye = items[0].position + items[0].forward() * 1.2;

    let mut events = Vec::new();
    session.tick(FOCUS_IN_MS / 2000.0, &mut events);
    assert_eq!(session.phase(), SessionPhase::FocusTweenIn);
    assert!(events.is_empty());
    // Ease-in-out-cubic has travelled exactly half way at half time.
    let midpoint = start_eye.lerp(end_eye, 0.5);
    assert!((session.rig.eye - midpoint).length() < 1e-3);
}

#[test]
fn clicks_are_ignored_outside_the_idle_orbit() {
    let mut session = settled_session();
    let items = vec![
        still("About", Vec3::new(1.0, 0.0, 6.0), Vec3::new(0.3, 0.2, 0.05)),
        still("Skills", Vec3::new(-4.0, 0.0, 2.0), Vec3::new(0.3, 0.2, 0.05)),
    ];
    let ray = ray_at(&session, items[0].position);
    assert!(session.click(&ray, &items));

    // Mid tween-in.
    let other = ray_at(&session, items[1].position);
    assert!(!session.click(&other, &items));

    let mut events = Vec::new();
    session.tick(FOCUS_IN_MS / 1000.0, &mut events);
    assert_eq!(session.phase(), SessionPhase::Focused);
    let other = ray_at(&session, items[1].position);
    assert!(!session.click(&other, &items));
    assert_eq!(session.focused(), Some(0));
}

#[test]
fn close_tweens_back_to_the_anchor_and_restores_the_orbit() {
    let mut session = settled_session();
    let items = vec![still(
        "About",
        Vec3::new(1.0, 0.0, 6.0),
        Vec3::new(0.3, 0.2, 0.05),
    )];
    let ray = ray_at(&session, items[0].position);
    assert!(session.click(&ray, &items));
    let mut events = Vec::new();
    session.tick(FOCUS_IN_MS / 1000.0, &mut events);
    assert_eq!(session.phase(), SessionPhase::Focused);

    assert!(session.request_close());
    assert_eq!(session.phase(), SessionPhase::FocusTweenOut);

    events.clear();
    session.tick(FOCUS_OUT_MS / 1000.0, &mut events);
    assert_eq!(events, vec![SessionEvent::ReturnedToIdle]);
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.rig.eye, IDLE_ANCHOR_EYE);
    assert_eq!(session.focused(), None);
    assert_eq!(session.distance(), ORBIT_RADIUS);

    // The first idle frame sits on the anchor pose, no snap.
    events.clear();
    session.tick(0.0, &mut events);
    assert_eq!(session.rig.eye, IDLE_ANCHOR_EYE);
}

#[test]
fn close_is_only_valid_while_focused() {
    let mut session = Session::new();
    assert!(!session.request_close());
    let mut session = settled_session();
    assert!(!session.request_close());

    let items = vec![still(
        "About",
        Vec3::new(1.0, 0.0, 6.0),
        Vec3::new(0.3, 0.2, 0.05),
    )];
    let ray = ray_at(&session, items[0].position);
    assert!(session.click(&ray, &items));
    assert!(!session.request_close());

    let mut events = Vec::new();
    session.tick(FOCUS_IN_MS / 1000.0, &mut events);
    assert!(session.request_close());
    // Already tweening out; a second close is a no-op.
    assert!(!session.request_close());
}

#[test]
fn focus_pose_is_frozen_at_click_time() {
    let mut session = settled_session();
    let drifting = PanelItem::new(
        "Projects",
        Vec3::new(1.0, 0.0, 6.0),
        Vec3::new(0.3, 0.2, 0.05),
        DriftParams {
            freq: 1.0,
            phase: 0.0,
            radius: 0.2,
            spin: 0.1,
        },
    );
    let mut scene = SceneState {
        items: vec![drifting],
        bodies: CelestialState::default(),
        clock: 0.0,
    };
    let clicked_at = scene.items[0].position;
    let ray = ray_at(&session, clicked_at);
    assert!(session.click(&ray, &scene.items));

    // The panel keeps drifting while the camera flies in.
    advance(&mut scene, 5.0);
    let mut events = Vec::new();
    session.tick(FOCUS_IN_MS / 1000.0, &mut events);
    assert_eq!(session.phase(), SessionPhase::Focused);
    assert!((session.rig.target - clicked_at).length() < 1e-4);
    assert!((scene.items[0].position - clicked_at).length() > 1e-2);
}

#[test]
fn wheel_zoom_clamps_to_the_focus_band() {
    let mut session = settled_session();
    let items = vec![still(
        "About",
        Vec3::new(1.0, 0.0, 6.0),
        Vec3::new(0.3, 0.2, 0.05),
    )];
    let ray = ray_at(&session, items[0].position);
    assert!(session.click(&ray, &items));
    let mut events = Vec::new();
    session.tick(FOCUS_IN_MS / 1000.0, &mut events);

    session.apply_wheel(10_000.0);
    assert!((session.distance() - 2.4).abs() < 1e-4);
    session.apply_wheel(-10_000.0);
    assert!((session.distance() - 0.6).abs() < 1e-4);

    events.clear();
    session.tick(0.016, &mut events);
    assert!(((session.rig.eye - session.rig.target).length() - 0.6).abs() < 1e-4);
}

#[test]
fn wheel_zoom_in_idle_respects_the_orbit_band() {
    let mut session = settled_session();
    session.apply_wheel(-10_000.0);
    assert!((session.distance() - IDLE_ZOOM_MIN).abs() < 1e-4);
    session.apply_wheel(100_000.0);
    assert!((session.distance() - IDLE_ZOOM_MAX).abs() < 1e-4);
}

#[test]
fn wheel_is_inert_during_tweens() {
    let mut session = settled_session();
    let items = vec![still(
        "About",
        Vec3::new(1.0, 0.0, 6.0),
        Vec3::new(0.3, 0.2, 0.05),
    )];
    let ray = ray_at(&session, items[0].position);
    assert!(session.click(&ray, &items));
    let before = session.distance();
    session.apply_wheel(10_000.0);
    assert_eq!(session.distance(), before);
}

#[test]
fn idle_orbit_circles_the_origin() {
    let mut session = settled_session();
    let mut events = Vec::new();
    session.tick(1.0, &mut events);
    let first = session.rig.eye;
    session.tick(1.0, &mut events);
    let second = session.rig.eye;
    assert!((first - second).length() > 1e-4);
    for eye in [first, second] {
        let ring = (eye.x * eye.x + (eye.z - ORBIT_Z_OFFSET) * (eye.z - ORBIT_Z_OFFSET)).sqrt();
        assert!((ring - ORBIT_RADIUS).abs() < 1e-3);
        assert!((eye.y - ORBIT_HEIGHT).abs() <= ORBIT_BOB_AMPLITUDE + 1e-4);
    }
    assert!(events.is_empty());
}

#[test]
fn a_full_focus_cycle_can_repeat() {
    let mut session = settled_session();
    let items = vec![still(
        "About",
        Vec3::new(1.0, 0.0, 6.0),
        Vec3::new(0.3, 0.2, 0.05),
    )];
    let mut events = Vec::new();
    for _ in 0..2 {
        let ray = ray_at(&session, items[0].position);
        assert!(session.click(&ray, &items));
        session.tick(FOCUS_IN_MS / 1000.0, &mut events);
        assert!(session.request_close());
        session.tick(FOCUS_OUT_MS / 1000.0, &mut events);
        assert_eq!(session.phase(), SessionPhase::Idle);
    }
    assert_eq!(
        events,
        vec![
            SessionEvent::FocusSettled { item: 0 },
            SessionEvent::ReturnedToIdle,
            SessionEvent::FocusSettled { item: 0 },
            SessionEvent::ReturnedToIdle,
        ]
    );
}
