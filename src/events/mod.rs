pub mod pointer;

pub use pointer::{wire_drag_handlers, DragWiring, PointerTrack};

use crate::dom::{self, Surfaces};
use entrance_core::{InteractionSession, Side};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Register drag handling on both draggables.
pub fn wire_draggables(session: &Rc<RefCell<InteractionSession>>, surfaces: &Surfaces) {
    for (side, element) in [
        (Side::Left, surfaces.left.clone()),
        (Side::Right, surfaces.right.clone()),
    ] {
        wire_drag_handlers(DragWiring {
            session: session.clone(),
            element,
            side,
            track: Rc::new(RefCell::new(PointerTrack::default())),
        });
    }
}

/// The enter button commits the reveal; the session ignores every commit
/// after the first. The frame loop publishes the resulting animation flag.
pub fn wire_affordance(session: &Rc<RefCell<InteractionSession>>, surfaces: &Surfaces) {
    let session = session.clone();
    dom::add_click_listener(&surfaces.affordance, move || {
        if session.borrow_mut().commit() {
            log::info!("[reveal] enter pressed");
        }
    });
}

/// Keep the session's viewport current so screen-space geometry stays right.
pub fn wire_resize(session: &Rc<RefCell<InteractionSession>>) {
    let Some(window) = web::window() else {
        return;
    };
    let session = session.clone();
    let window_for_resize = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let vp = dom::sample_viewport(&window_for_resize);
        session.borrow_mut().set_viewport(vp);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
