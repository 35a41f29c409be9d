use entrance_core::{InteractionSession, Side, VelocityTracker};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The pointer currently holding one draggable, if any.
#[derive(Default)]
pub struct PointerTrack {
    pub pointer_id: Option<i32>,
    pub last: Vec2,
    pub velocity: VelocityTracker,
}

#[derive(Clone)]
pub struct DragWiring {
    pub session: Rc<RefCell<InteractionSession>>,
    pub element: web::Element,
    pub side: Side,
    pub track: Rc<RefCell<PointerTrack>>,
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn event_time_sec(ev: &web::PointerEvent) -> f64 {
    ev.time_stamp() / 1000.0
}

pub fn wire_drag_handlers(w: DragWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
}

fn listen(el: &web::Element, event: &str, handler: impl FnMut(web::PointerEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &DragWiring) {
    let w = w.clone();
    let el = w.element.clone();
    listen(&el, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 || w.track.borrow().pointer_id.is_some() {
            return;
        }
        if !w.session.borrow_mut().press(w.side) {
            return;
        }
        let pos = client_pos(&ev);
        {
            let mut track = w.track.borrow_mut();
            track.pointer_id = Some(ev.pointer_id());
            track.last = pos;
            track.velocity.reset();
            track.velocity.record(event_time_sec(&ev), pos);
        }
        _ = w.element.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &DragWiring) {
    let w = w.clone();
    let el = w.element.clone();
    listen(&el, "pointermove", move |ev: web::PointerEvent| {
        let delta = {
            let mut track = w.track.borrow_mut();
            if track.pointer_id != Some(ev.pointer_id()) {
                return;
            }
            let pos = client_pos(&ev);
            let delta = pos - track.last;
            track.last = pos;
            track.velocity.record(event_time_sec(&ev), pos);
            delta
        };
        w.session.borrow_mut().drag(w.side, delta);
    });
}

fn wire_pointerup(w: &DragWiring, event: &'static str) {
    let w = w.clone();
    let el = w.element.clone();
    listen(&el, event, move |ev: web::PointerEvent| {
        let velocity = {
            let mut track = w.track.borrow_mut();
            if track.pointer_id != Some(ev.pointer_id()) {
                return;
            }
            track.pointer_id = None;
            if event == "pointercancel" {
                Vec2::ZERO
            } else {
                track.velocity.velocity(event_time_sec(&ev))
            }
        };
        _ = w.element.release_pointer_capture(ev.pointer_id());
        w.session.borrow_mut().release(w.side, velocity);
        log::debug!("[drag] {} {:?}", event, w.side);
    });
}
