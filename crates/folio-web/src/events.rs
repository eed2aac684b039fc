use std::cell::RefCell;
use std::rc::Rc;

use folio_core::content::PROJECTS;
use folio_core::nav::Navigator;
use folio_core::particles::ParticleField;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::input;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub field: Rc<RefCell<ParticleField>>,
    pub nav: Rc<RefCell<Navigator>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
    wire_wheel(&w);
    wire_resize(&w);
    wire_nav_buttons(&w);
    wire_project_cards(&w);
    wire_back_button(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.field.borrow_mut().pointer_moved(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.field.borrow_mut().pointer_left();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Wheel paging needs preventDefault, so the listener must opt out of the
// browser's passive default for window-level wheel handlers.
fn wire_wheel(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if let Some(direction) = input::wheel_direction(ev.delta_y()) {
            ev.prevent_default();
            w.nav.borrow_mut().on_scroll(direction);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }

    closure.forget();
}

// The handler only resyncs the canvas backing store; the field picks the new
// dimensions up before its next step.
fn wire_resize(w: &InputWiring) {
    let canvas = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_nav_buttons(w: &InputWiring) {
    if let Ok(buttons) = w.document.query_selector_all("[data-section]") {
        for i in 0..buttons.length() {
            if let Some(node) = buttons.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    let section = el
                        .get_attribute("data-section")
                        .as_deref()
                        .and_then(input::section_from_id);
                    if let Some(section) = section {
                        let nav = w.nav.clone();
                        dom::add_click_listener(&el, move || {
                            nav.borrow_mut().select_section(section);
                        });
                    }
                }
            }
        }
    }
}

fn wire_project_cards(w: &InputWiring) {
    for (index, _) in PROJECTS.iter().enumerate() {
        let nav = w.nav.clone();
        dom::add_click_listener_by_id(&w.document, &format!("project-card-{index}"), move || {
            log::info!("[nav] open project {index}");
            nav.borrow_mut().select_project(index);
        });
    }
}

fn wire_back_button(w: &InputWiring) {
    let nav = w.nav.clone();
    dom::add_click_listener_by_id(&w.document, "project-back", move || {
        nav.borrow_mut().clear_selection();
    });
}
