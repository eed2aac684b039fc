// Host-side tests for pure input helpers.
// The crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use folio_core::nav::{ScrollDirection, Section};
use input::*;

#[test]
fn wheel_sign_maps_to_paging_direction() {
    assert_eq!(wheel_direction(3.0), Some(ScrollDirection::Forward));
    assert_eq!(wheel_direction(120.0), Some(ScrollDirection::Forward));
    assert_eq!(wheel_direction(-3.0), Some(ScrollDirection::Backward));
    assert_eq!(wheel_direction(-0.5), Some(ScrollDirection::Backward));
}

#[test]
fn zero_wheel_delta_pages_nowhere() {
    assert_eq!(wheel_direction(0.0), None);
    assert_eq!(wheel_direction(-0.0), None);
}

#[test]
fn every_section_id_parses_back_to_its_section() {
    for section in Section::ALL {
        assert_eq!(section_from_id(section.id()), Some(section));
    }
}

#[test]
fn unknown_section_ids_parse_to_none() {
    assert_eq!(section_from_id(""), None);
    assert_eq!(section_from_id("blog"), None);
    assert_eq!(section_from_id("Home"), None, "ids are lowercase");
}
