#![cfg(target_arch = "wasm32")]
use entrance_core::{InteractionSession, Params};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod style;

/// Everything that has to outlive `bootstrap`. Dropping the loop handle
/// would stop the frame loop, so the app is parked in a thread local.
struct App {
    _session: Rc<RefCell<InteractionSession>>,
    _frame_loop: frame::LoopHandle,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("entrance-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::on_dom_ready(&document, || {
        if let Err(e) = bootstrap() {
            log::error!("init error: {:#}", e);
        }
    });
    Ok(())
}

fn bootstrap() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Without every surface there is nothing to drive; leave the page as-is.
    let surfaces = dom::Surfaces::locate(&document)?;

    let viewport = dom::sample_viewport(&window);
    let session = Rc::new(RefCell::new(InteractionSession::start(
        Params::default(),
        viewport,
        &mut rand::thread_rng(),
    )));

    let mut renderer = render::Renderer::new(surfaces.clone());
    renderer.render(session.borrow().scene());

    events::wire_draggables(&session, &surfaces);
    events::wire_affordance(&session, &surfaces);
    events::wire_resize(&session);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        session.clone(),
        renderer,
    )));
    let frame_loop = frame::start_loop(frame_ctx);

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            _session: session,
            _frame_loop: frame_loop,
        });
    });
    log::info!(
        "[setup] surfaces wired, viewport {:.0}x{:.0}",
        viewport.width,
        viewport.height
    );
    Ok(())
}
