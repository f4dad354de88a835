#![cfg(target_arch = "wasm32")]
use folio_core::{ContentTable, SceneState, Session, DEFAULT_PANELS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod overlay;
mod render;

/// Everyone gets the same sky and the same panel drift.
const SCENE_SEED: u64 = 42;

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(window, canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            dom::sync_canvas_backing_size(&w, &canvas_resize);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("folio-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #folio-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&window, &canvas);

    // Guard against double module instantiation under hot reload.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let canvas_inner = canvas.clone();
    let document_inner = document.clone();
    spawn_local(async move {
        // WebAudio comes up suspended; the first pointerdown resumes it.
        let audio_ctx = match web::AudioContext::new() {
            Ok(c) => c,
            Err(e) => {
                log::error!("[assets] AudioContext unavailable: {:?}", e);
                return;
            }
        };
        let mut chime = match audio::HoverChime::new(audio_ctx.clone()) {
            Ok(c) => c,
            Err(()) => return,
        };

        let label_texts: Vec<&str> = DEFAULT_PANELS.iter().map(|(label, _)| *label).collect();
        let scene_assets = assets::load_scene_assets(&document_inner, &audio_ctx, &label_texts).await;

        let gpu = frame::init_gpu(&canvas_inner, &scene_assets).await;
        chime.set_buffer(scene_assets.chime);

        let session = Rc::new(RefCell::new(Session::new()));
        let scene = Rc::new(RefCell::new(SceneState::new(SCENE_SEED)));
        let pointer = Rc::new(RefCell::new(input::PointerState::default()));
        let chime = Rc::new(RefCell::new(chime));

        // Close button: the overlay drops at once, the camera glides back.
        {
            let session_close = session.clone();
            let document_close = document_inner.clone();
            dom::add_click_listener(&document_inner, "panel-close", move || {
                if session_close.borrow_mut().request_close() {
                    overlay::hide(&document_close);
                }
            });
        }

        events::wire_global_keydown(session.clone(), canvas_inner.clone());
        events::wire_input_handlers(events::InputWiring {
            canvas: canvas_inner.clone(),
            session: session.clone(),
            scene: scene.clone(),
            pointer: pointer.clone(),
            chime: chime.clone(),
        });

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            session: session.clone(),
            scene: scene.clone(),
            content: ContentTable::new(),
            canvas: canvas_inner.clone(),
            document: document_inner.clone(),
            pointer: pointer.clone(),
            chime: chime.clone(),
            gpu,
            last_instant: Instant::now(),
        }));
        frame::start_loop(frame_ctx);
    });

    Ok(())
}
