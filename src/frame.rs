use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::render::Renderer;
use entrance_core::InteractionSession;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<InteractionSession>>,
    pub renderer: Renderer,
    pub last_instant: Instant,
    pub animation_flag: bool,
}

impl FrameContext {
    pub fn new(session: Rc<RefCell<InteractionSession>>, renderer: Renderer) -> Self {
        Self {
            session,
            renderer,
            last_instant: Instant::now(),
            animation_flag: false,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let wall_sec = js_sys::Date::now() / 1000.0;

        let attached = self.renderer.surfaces().draggables_connected();
        let mut session = self.session.borrow_mut();
        session.set_surfaces_attached(attached);
        for cue in session.tick(wall_sec, dt_sec) {
            log::debug!("[frame] cue {:?}", cue);
        }
        self.renderer.render(session.scene());

        let in_progress = session.animation_in_progress();
        if in_progress != self.animation_flag {
            dom::set_animation_flag(in_progress);
            self.animation_flag = in_progress;
        }
    }
}

/// Handle to the self-rescheduling frame task. Stopping (or dropping) it ends
/// the loop at the next frame boundary.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            // break the closure's self-reference so it can be freed
            tick_clone.borrow_mut().take();
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    LoopHandle { running }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
