use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::nav::{NavView, Navigator};
use folio_core::particles::ParticleField;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;
use crate::ui;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub document: web::Document,
    pub field: Rc<RefCell<ParticleField>>,
    pub nav: Rc<RefCell<Navigator>>,

    pub last_instant: Instant,
    pub last_view: NavView,
}

impl FrameContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        document: web::Document,
        field: Rc<RefCell<ParticleField>>,
        nav: Rc<RefCell<Navigator>>,
    ) -> Self {
        Self {
            canvas,
            ctx,
            document,
            field,
            nav,
            last_instant: Instant::now(),
            last_view: NavView::default(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let width = self.canvas.width() as f32;
        let height = self.canvas.height() as f32;
        {
            let mut field = self.field.borrow_mut();
            // A resize can land between frames; apply it before stepping so
            // wrap-around and repulsion match the visible area.
            if field.width() != width || field.height() != height {
                field.resize(width, height);
            }
            field.step();
        }
        self.nav.borrow_mut().tick(dt);

        let commands = self.field.borrow().draw_list();
        render::draw(&self.ctx, width as f64, height as f64, &commands);

        let view = self.nav.borrow().view();
        if view != self.last_view {
            ui::sync(&self.document, view);
            self.last_view = view;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let raf_id: Rc<Cell<i32>> = Rc::new(Cell::new(0));
    let active: Rc<Cell<bool>> = Rc::new(Cell::new(true));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_for_tick = raf_id.clone();
    let active_for_tick = active.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !active_for_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_for_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }

    wire_teardown(raf_id, active);
}

// Cancel the pending frame when the page goes away so no callback mutates
// state that no longer has a live presentation target.
fn wire_teardown(raf_id: Rc<Cell<i32>>, active: Rc<Cell<bool>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || {
            active.set(false);
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(raf_id.get());
            }
            log::info!("[frame] loop cancelled on pagehide");
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
