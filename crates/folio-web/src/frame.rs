use folio_core::{advance, ContentTable, SceneState, Session, SessionEvent};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::HoverChime;
use crate::input::{self, PointerState};
use crate::{overlay, render};

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<Session>>,
    pub scene: Rc<RefCell<SceneState>>,
    pub content: ContentTable,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub pointer: Rc<RefCell<PointerState>>,
    pub chime: Rc<RefCell<HoverChime>>,

    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        advance(&mut self.scene.borrow_mut(), dt_sec);

        let mut session_events = Vec::new();
        self.session.borrow_mut().tick(dt_sec, &mut session_events);
        for ev in &session_events {
            match ev {
                SessionEvent::IntroFinished => {
                    log::info!("[focus] fly-in landed, pointer input live");
                }
                SessionEvent::FocusSettled { item } => {
                    let label = self.scene.borrow().items[*item].label;
                    match self.content.lookup(label) {
                        Ok(body) => overlay::show_panel(&self.document, label, body),
                        Err(e) => log::warn!("[focus] no overlay copy: {}", e),
                    }
                }
                SessionEvent::ReturnedToIdle => {
                    log::info!("[focus] back on the idle orbit");
                }
            }
        }

        // Hover is resolved here once per frame against the live camera;
        // pointer events only record the cursor position.
        {
            let mut session = self.session.borrow_mut();
            let scene = self.scene.borrow();
            let pointer = *self.pointer.borrow();
            let ray = pointer
                .seen
                .then(|| input::pointer_ray(&self.canvas, &session.rig, pointer.x, pointer.y));
            let scan = session.scan_hover(ray.as_ref(), &scene.items);
            if scan.entered.is_some() {
                self.chime.borrow().play();
            }
        }

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            self.session.borrow_mut().rig.aspect = w.max(1) as f32 / h.max(1) as f32;
            g.resize_if_needed(w, h);
            let session = self.session.borrow();
            let scene = self.scene.borrow();
            if let Err(e) = g.render(dt_sec, &scene, &session) {
                log::error!("[gpu] render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    assets: &crate::assets::SceneAssets,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, assets).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
