#![cfg(target_arch = "wasm32")]

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::constants::AMBIENT_COUNT;
use folio_core::nav::Navigator;
use folio_core::particles::ParticleField;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let seed = js_sys::Date::now() as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(
        AMBIENT_COUNT,
        canvas.width() as f32,
        canvas.height() as f32,
        seed,
    )));
    let nav = Rc::new(RefCell::new(Navigator::new()));
    log::info!(
        "[scene] field {}x{} with {} particles",
        canvas.width(),
        canvas.height(),
        AMBIENT_COUNT
    );

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        field: field.clone(),
        nav: nav.clone(),
    });

    // Paint the initial navigator state before the first frame lands.
    ui::sync(&document, nav.borrow().view());

    let frame_ctx = frame::FrameContext::new(canvas, ctx, document, field, nav);
    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    Ok(())
}
