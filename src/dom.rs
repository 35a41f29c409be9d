use crate::constants::*;
use entrance_core::error::missing_surfaces;
use entrance_core::{SetupError, Target, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The six elements the interaction drives.
#[derive(Clone)]
pub struct Surfaces {
    pub container: web::Element,
    pub left: web::Element,
    pub right: web::Element,
    pub affordance: web::Element,
    pub message: web::Element,
    pub content: web::Element,
}

impl Surfaces {
    /// Look up every surface; any absence fails the whole lookup.
    pub fn locate(document: &web::Document) -> Result<Self, SetupError> {
        let query = |selector: &str| document.query_selector(selector).ok().flatten();
        match (
            query(CONTAINER_SELECTOR),
            query(LEFT_SELECTOR),
            query(RIGHT_SELECTOR),
            query(AFFORDANCE_SELECTOR),
            query(MESSAGE_SELECTOR),
            query(CONTENT_SELECTOR),
        ) {
            (Some(container), Some(left), Some(right), Some(affordance), Some(message), Some(content)) => {
                Ok(Self {
                    container,
                    left,
                    right,
                    affordance,
                    message,
                    content,
                })
            }
            (container, left, right, affordance, message, content) => Err(missing_surfaces([
                (Target::Container, container.is_some()),
                (Target::Left, left.is_some()),
                (Target::Right, right.is_some()),
                (Target::Affordance, affordance.is_some()),
                (Target::Message, message.is_some()),
                (Target::Content, content.is_some()),
            ])),
        }
    }

    pub fn get(&self, target: Target) -> &web::Element {
        match target {
            Target::Container => &self.container,
            Target::Left => &self.left,
            Target::Right => &self.right,
            Target::Affordance => &self.affordance,
            Target::Message => &self.message,
            Target::Content => &self.content,
        }
    }

    #[inline]
    pub fn draggables_connected(&self) -> bool {
        self.left.is_connected() && self.right.is_connected()
    }
}

/// Viewport size the way layout sees it: the larger of the root element's
/// client box and the window's inner size.
pub fn sample_viewport(window: &web::Window) -> Viewport {
    let inner = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let (client_w, client_h) = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| (el.client_width() as f64, el.client_height() as f64))
        .unwrap_or((0.0, 0.0));
    let w = client_w.max(inner(window.inner_width()));
    let h = client_h.max(inner(window.inner_height()));
    Viewport::new(w as f32, h as f32)
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once the document has parsed, immediately if it already has.
pub fn on_dom_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    let state = js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string());
    if state.as_deref() != Some("loading") {
        f();
        return;
    }
    let closure = Closure::once(f);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Mirror the session's "animation in progress" flag onto `window`.
pub fn set_animation_flag(value: bool) {
    if let Some(w) = web::window() {
        _ = js_sys::Reflect::set(
            &w,
            &JsValue::from_str(ANIMATION_FLAG_PROPERTY),
            &JsValue::from_bool(value),
        );
    }
}
