use crate::constants::*;
use crate::core::decipher::Decipher;
use crate::core::Phase;
use crate::dom::{self, Interval};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

const VISIBLE: &str = "is-visible";
const RELEASED: &str = "is-released";

#[inline]
fn set_visible(document: &web::Document, id: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        dom::set_class(&el, VISIBLE, on);
    }
}

/// Reveal the copy belonging to `phase` and hide the rest.
pub fn apply_phase(document: &web::Document, phase: Phase) {
    let copy = phase.overlay();
    set_visible(document, HERO_LINE_ONE_ID, copy.line_one);
    set_visible(document, HERO_LINE_TWO_ID, copy.line_two);
    set_visible(document, HERO_CTA_ID, copy.call_to_action);
}

pub fn set_released(section: &web::Element, released: bool) {
    dom::set_class(section, RELEASED, released);
}

#[inline]
pub fn show_loader(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HERO_LOADER_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_loader(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HERO_LOADER_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn set_loading_percent(document: &web::Document, percent: u8) {
    if let Some(el) = document.get_element_by_id(HERO_LOADER_PERCENT_ID) {
        el.set_text_content(Some(&format!("{:>3}%", percent)));
    }
    if let Some(el) = document.get_element_by_id(HERO_LOADER_ID) {
        _ = el.set_attribute("data-progress", &percent.to_string());
    }
}

/// Run the decipher reveal on `el`. Stops itself when the text is fully
/// revealed; dropping the handle stops it early.
///
/// The plain text is kept in the `data-decipher` attribute so a rerun after
/// an interrupted reveal starts from the real copy, not a scrambled frame.
pub fn start_decipher(el: web::Element) -> Option<Interval> {
    let text = match el.get_attribute("data-decipher") {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            let t = el.text_content().unwrap_or_default();
            _ = el.set_attribute("data-decipher", &t);
            t
        }
    };
    if text.trim().is_empty() {
        return None;
    }
    let mut effect = Decipher::new(&text);
    let mut rng = StdRng::from_entropy();
    Interval::new(DECIPHER_TICK_MS, move |stop| {
        el.set_text_content(Some(&effect.tick(&mut rng)));
        if effect.is_done() {
            stop.stop();
        }
    })
}

/// Start the decipher effect on every `[data-decipher]` element under `root`.
pub fn start_decipher_all(root: &web::Element) -> Vec<Interval> {
    let Ok(nodes) = root.query_selector_all("[data-decipher]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| wasm_bindgen::JsCast::dyn_into::<web::Element>(n).ok())
        .filter_map(start_decipher)
        .collect()
}
