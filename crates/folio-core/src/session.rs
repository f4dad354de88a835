//! Camera session state machine.
//!
//! One `Session` owns the camera rig and the phase it is in: the opening
//! fly-in, the idle orbit, a focus tween toward a clicked panel, the held
//! focus pose, or the tween back out. The frontend calls `tick` once per
//! frame and feeds pointer input through `click`, `scan_hover`,
//! `apply_wheel`, and `request_close`; phase transitions come back as
//! events so overlay and audio can react without reaching into the machine.

use glam::Vec3;

use crate::camera::{CameraRig, ZoomLimits};
use crate::constants::*;
use crate::pick::{nearest_panel_hit, Ray};
use crate::scene::PanelItem;
use crate::tween::{CameraTween, Easing};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Intro,
    Idle,
    FocusTweenIn,
    Focused,
    FocusTweenOut,
}

/// Phase-transition notifications emitted by [`Session::tick`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    IntroFinished,
    FocusSettled { item: usize },
    ReturnedToIdle,
}

/// Result of one per-frame hover scan. `entered` is set only on the frame
/// the pointer first lands on an item, so it can gate one-shot effects.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverScan {
    pub hovered: Option<usize>,
    pub entered: Option<usize>,
}

/// Focus pose captured at click time. The anchor and axis are frozen so the
/// held camera does not chase the panel's drift.
#[derive(Copy, Clone, Debug)]
struct FocusFrame {
    anchor: Vec3,
    axis: Vec3,
    framing_dist: f32,
}

pub struct Session {
    pub rig: CameraRig,
    phase: SessionPhase,
    focused: Option<usize>,
    hovered: Option<usize>,
    tween: Option<CameraTween>,
    orbit_angle: f32,
    bob_clock: f32,
    zoom: ZoomLimits,
    distance: f32,
    focus_frame: Option<FocusFrame>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            rig: CameraRig::new(INTRO_EYE, LOOK_TARGET),
            phase: SessionPhase::Intro,
            focused: None,
            hovered: None,
            tween: Some(CameraTween::new(
                INTRO_EYE,
                LOOK_TARGET,
                IDLE_ANCHOR_EYE,
                LOOK_TARGET,
                INTRO_DURATION_MS,
                Easing::OutExpo,
            )),
            orbit_angle: 0.0,
            bob_clock: 0.0,
            zoom: ZoomLimits::new(IDLE_ZOOM_MIN, IDLE_ZOOM_MAX),
            distance: ORBIT_RADIUS,
            focus_frame: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Pointer input is ignored until the fly-in has landed.
    pub fn pointer_enabled(&self) -> bool {
        self.phase != SessionPhase::Intro
    }

    /// Advance the camera by `dt_sec` seconds, pushing any phase
    /// transitions into `events`.
    pub fn tick(&mut self, dt_sec: f32, events: &mut Vec<SessionEvent>) {
        let dt = dt_sec.max(0.0);
        match self.phase {
            SessionPhase::Intro => {
                if self.step_tween(dt) {
                    self.enter_idle();
                    events.push(SessionEvent::IntroFinished);
                }
            }
            SessionPhase::Idle => {
                self.orbit_angle += ORBIT_RATE * dt;
                self.bob_clock += dt;
                let bob = (self.bob_clock * ORBIT_BOB_FREQ).sin() * ORBIT_BOB_AMPLITUDE;
                self.rig.eye = Vec3::new(
                    self.orbit_angle.cos() * self.distance,
                    ORBIT_HEIGHT + bob,
                    self.orbit_angle.sin() * self.distance + ORBIT_Z_OFFSET,
                );
                self.rig.target = LOOK_TARGET;
            }
            SessionPhase::FocusTweenIn => {
                if self.step_tween(dt) {
                    self.phase = SessionPhase::Focused;
                    if let Some(frame) = self.focus_frame {
                        self.distance = frame.framing_dist;
                        self.zoom = ZoomLimits::new(
                            frame.framing_dist * FOCUS_ZOOM_MIN_FACTOR,
                            frame.framing_dist * FOCUS_ZOOM_MAX_FACTOR,
                        );
                    }
                    if let Some(item) = self.focused {
                        events.push(SessionEvent::FocusSettled { item });
                    }
                }
            }
            SessionPhase::Focused => {
                if let Some(frame) = self.focus_frame {
                    self.rig.eye = frame.anchor + frame.axis * self.distance;
                    self.rig.target = frame.anchor;
                }
            }
            SessionPhase::FocusTweenOut => {
                if self.step_tween(dt) {
                    self.focused = None;
                    self.focus_frame = None;
                    self.enter_idle();
                    events.push(SessionEvent::ReturnedToIdle);
                }
            }
        }
    }

    /// Step the active tween, sample the rig from it, and report completion.
    fn step_tween(&mut self, dt_sec: f32) -> bool {
        let finished = match self.tween.as_mut() {
            Some(tw) => {
                tw.step(dt_sec * 1000.0);
                self.rig.eye = tw.eye();
                self.rig.target = tw.target();
                tw.done()
            }
            None => true,
        };
        if finished {
            self.tween = None;
        }
        finished
    }

    /// Re-enter the orbit with its phase zeroed, so the first idle frame
    /// sits exactly on the anchor pose the return tween landed on.
    fn enter_idle(&mut self) {
        self.phase = SessionPhase::Idle;
        self.orbit_angle = 0.0;
        self.bob_clock = 0.0;
        self.distance = ORBIT_RADIUS;
        self.zoom = ZoomLimits::new(IDLE_ZOOM_MIN, IDLE_ZOOM_MAX);
    }

    /// Handle a click ray. Starts a focus tween if an idle-phase click lands
    /// on a panel; returns whether a focus began.
    pub fn click(&mut self, ray: &Ray, items: &[PanelItem]) -> bool {
        if self.phase != SessionPhase::Idle {
            return false;
        }
        let hit = match nearest_panel_hit(ray, items) {
            Some(h) => h,
            None => return false,
        };
        let item = &items[hit.index];
        let framing_dist = FOCUS_DISTANCE_FACTOR * item.max_dimension();
        let axis = item.forward();
        let anchor = item.position;
        self.tween = Some(CameraTween::new(
            self.rig.eye,
            self.rig.target,
            anchor + axis * framing_dist,
            anchor,
            FOCUS_IN_MS,
            Easing::InOutCubic,
        ));
        self.focus_frame = Some(FocusFrame {
            anchor,
            axis,
            framing_dist,
        });
        self.focused = Some(hit.index);
        self.phase = SessionPhase::FocusTweenIn;
        log::info!("[focus] engaging panel {} `{}`", hit.index, item.label);
        true
    }

    /// Leave the focused pose and tween back to the orbit anchor. Returns
    /// whether a release began.
    pub fn request_close(&mut self) -> bool {
        if self.phase != SessionPhase::Focused {
            return false;
        }
        self.tween = Some(CameraTween::new(
            self.rig.eye,
            self.rig.target,
            IDLE_ANCHOR_EYE,
            LOOK_TARGET,
            FOCUS_OUT_MS,
            Easing::OutCubic,
        ));
        self.phase = SessionPhase::FocusTweenOut;
        log::info!("[focus] releasing back to orbit");
        true
    }

    /// Per-frame hover poll against the current pointer ray. During the
    /// intro no item is ever hovered.
    pub fn scan_hover(&mut self, ray: Option<&Ray>, items: &[PanelItem]) -> HoverScan {
        let previous = self.hovered;
        let current = if self.pointer_enabled() {
            ray.and_then(|r| nearest_panel_hit(r, items)).map(|h| h.index)
        } else {
            None
        };
        self.hovered = current;
        let entered = match current {
            Some(i) if previous != Some(i) => Some(i),
            _ => None,
        };
        HoverScan {
            hovered: current,
            entered,
        }
    }

    /// Label opacity for one item; only the hovered label lights up.
    pub fn label_alpha(&self, index: usize) -> f32 {
        if self.hovered == Some(index) {
            LABEL_HIGHLIGHT_ALPHA
        } else {
            0.0
        }
    }

    /// Dolly along the current view distance. Wheel input only applies in
    /// the steady phases; tweens own the camera while they run.
    pub fn apply_wheel(&mut self, delta_y: f32) {
        if !matches!(self.phase, SessionPhase::Idle | SessionPhase::Focused) {
            return;
        }
        let scaled = self.distance * (1.0 + delta_y * WHEEL_ZOOM_STEP);
        self.distance = self.zoom.clamp(scaled);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
