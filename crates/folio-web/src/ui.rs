//! Reflects navigator state into the DOM: active nav button, visible
//! section panel, project-detail fields.

use folio_core::content::PROJECTS;
use folio_core::nav::{NavView, Section};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub fn sync(document: &web::Document, view: NavView) {
    mark_active_button(document, view.active);

    for section in Section::ALL {
        let visible = view.selected.is_none() && section == view.active;
        dom::set_visible(document, &format!("panel-{}", section.id()), visible);
    }

    match view.selected {
        Some(index) => {
            if let Some(project) = PROJECTS.get(index) {
                dom::set_text(document, "project-title", project.title);
                dom::set_text(document, "project-tech", project.tech);
                dom::set_text(document, "project-blurb", project.blurb);
                if let Some(el) = document.get_element_by_id("project-link") {
                    let _ = el.set_attribute("href", project.url);
                }
            }
            dom::set_visible(document, "project-detail", true);
        }
        None => dom::set_visible(document, "project-detail", false),
    }
}

fn mark_active_button(document: &web::Document, active: Section) {
    if let Ok(buttons) = document.query_selector_all("[data-section]") {
        for i in 0..buttons.length() {
            if let Some(node) = buttons.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    let is_active = el.get_attribute("data-section").as_deref() == Some(active.id());
                    let _ = el.set_attribute("data-active", if is_active { "1" } else { "0" });
                }
            }
        }
    }
}
