// Host-side tests for pointer ray picking and the per-frame hover scan.

use folio_core::*;
use glam::Vec3;

fn still(label: &'static str, home: Vec3) -> PanelItem {
    PanelItem::new(
        label,
        home,
        Vec3::new(0.3, 0.2, 0.05),
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
fn nearest_hit_wins_when_panels_line_up() {
    let items = vec![
        still("About", Vec3::new(0.0, 0.0, 5.0)),
        still("Skills", Vec3::new(0.0, 0.0, 8.0)),
    ];
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::Z,
    };
    let hit = nearest_panel_hit(&ray, &items).unwrap();
    assert_eq!(hit.index, 0);
    assert!(hit.t > 0.0 && hit.t < 5.0);

    // Same geometry with the list reversed still picks the closer panel.
    let swapped = vec![
        still("Skills", Vec3::new(0.0, 0.0, 8.0)),
        still("About", Vec3::new(0.0, 0.0, 5.0)),
    ];
    let hit = nearest_panel_hit(&ray, &swapped).unwrap();
    assert_eq!(hit.index, 1);
}

#[test]
fn panels_behind_the_ray_do_not_hit() {
    let items = vec![still("About", Vec3::new(0.0, 0.0, 5.0))];
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: -Vec3::Z,
    };
    assert!(nearest_panel_hit(&ray, &items).is_none());
}

#[test]
fn hover_rising_edge_fires_once_per_entry() {
    let mut session = settled_session();
    let items = vec![still("About", Vec3::new(1.0, 0.0, 6.0))];
    let ray = ray_at(&session, items[0].position);

    let scan = session.scan_hover(Some(&ray), &items);
    assert_eq!(scan.hovered, Some(0));
    assert_eq!(scan.entered, Some(0));

    // Holding the pointer over the same panel is not a new entry.
    let scan = session.scan_hover(Some(&ray), &items);
    assert_eq!(scan.hovered, Some(0));
    assert_eq!(scan.entered, None);

    // Leaving clears the hover, returning re-fires the edge.
    let scan = session.scan_hover(None, &items);
    assert_eq!(scan.hovered, None);
    assert_eq!(scan.entered, None);
    let scan = session.scan_hover(Some(&ray), &items);
    assert_eq!(scan.entered, Some(0));
}

#[test]
fn moving_between_panels_fires_a_fresh_edge() {
    let mut session = settled_session();
    let items = vec![
        still("About", Vec3::new(1.0, 0.0, 6.0)),
        still("Skills", Vec3::new(-4.0, 0.0, 4.0)),
    ];
    let first = ray_at(&session, items[0].position);
    let second = ray_at(&session, items[1].position);

    let scan = session.scan_hover(Some(&first), &items);
    assert_eq!(scan.entered, Some(0));
    let scan = session.scan_hover(Some(&second), &items);
    assert_eq!(scan.hovered, Some(1));
    assert_eq!(scan.entered, Some(1));
}

#[test]
fn hover_is_suppressed_until_the_intro_lands() {
    let mut session = Session::new();
    let items = vec![still("About", Vec3::new(1.0, 0.0, 6.0))];
    let ray = ray_at(&session, items[0].position);
    let scan = session.scan_hover(Some(&ray), &items);
    assert_eq!(scan.hovered, None);
    assert_eq!(scan.entered, None);
    assert_eq!(session.label_alpha(0), 0.0);
}

#[test]
fn only_the_hovered_label_lights_up() {
    let mut session = settled_session();
    let items = vec![
        still("About", Vec3::new(1.0, 0.0, 6.0)),
        still("Skills", Vec3::new(-4.0, 0.0, 4.0)),
    ];
    let ray = ray_at(&session, items[0].position);
    session.scan_hover(Some(&ray), &items);
    assert_eq!(session.label_alpha(0), LABEL_HIGHLIGHT_ALPHA);
    assert_eq!(session.label_alpha(1), 0.0);

    session.scan_hover(None, &items);
    assert_eq!(session.label_alpha(0), 0.0);
}

#[test]
fn hover_keeps_scanning_after_the_intro_in_any_phase() {
    let mut session = settled_session();
    let items = vec![still("About", Vec3::new(1.0, 0.0, 6.0))];
    let ray = ray_at(&session, items[0].position);
    assert!(session.click(&ray, &items));
    assert_eq!(session.phase(), SessionPhase::FocusTweenIn);

    // The pointer is still parked over the panel while the camera flies.
    let ray = ray_at(&session, items[0].position);
    let scan = session.scan_hover(Some(&ray), &items);
    assert_eq!(scan.hovered, Some(0));
}
