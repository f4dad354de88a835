use crate::overlay;
use folio_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    session: &Rc<RefCell<Session>>,
    canvas: &web::HtmlCanvasElement,
) {
    match ev.key().as_str() {
        "Escape" => {
            // Overlay drops immediately; the camera glides back on its own.
            if session.borrow_mut().request_close() {
                if let Some(win) = web::window() {
                    if let Some(doc) = win.document() {
                        overlay::hide(&doc);
                    }
                }
                ev.prevent_default();
            }
        }
        "Enter" => {
            if let Some(win) = web::window() {
                if let Some(doc) = win.document() {
                    if doc.fullscreen_element().is_some() {
                        _ = doc.exit_fullscreen();
                    } else {
                        _ = canvas.request_fullscreen();
                    }
                }
            }
            ev.prevent_default();
        }
        _ => {}
    }
}

pub fn wire_global_keydown(session: Rc<RefCell<Session>>, canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                super::keyboard::handle_global_keydown(&ev, &session, &canvas);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
