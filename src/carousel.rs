use crate::constants::CAROUSEL_ITEMS_PER_VIEW;
use crate::core::carousel::Carousel;
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Prev/next paging for one `[data-carousel]`; unwired on drop.
pub struct ReviewCarousel {
    _listeners: Vec<Listener>,
}

fn apply_page(track: &web::Element, carousel: &Carousel) {
    _ = track.set_attribute(
        "style",
        &format!("transform:translateX(-{}%)", carousel.offset_percent()),
    );
    _ = track.set_attribute("data-page", &carousel.page().to_string());
}

fn per_view(root: &web::Element) -> usize {
    match root.get_attribute("data-per-view") {
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                log::warn!("[carousel] ignoring data-per-view={:?}", raw);
                CAROUSEL_ITEMS_PER_VIEW
            }
        },
        None => CAROUSEL_ITEMS_PER_VIEW,
    }
}

impl ReviewCarousel {
    pub fn wire(root: &web::Element) -> Option<Self> {
        let track = root.query_selector("[data-carousel-track]").ok().flatten()?;
        let carousel = Carousel::new(track.child_element_count() as usize, per_view(root));
        apply_page(&track, &carousel);
        let state = Rc::new(RefCell::new(carousel));

        let mut listeners = Vec::with_capacity(2);
        let buttons = [("[data-carousel-prev]", false), ("[data-carousel-next]", true)];
        for (selector, forward) in buttons {
            let Ok(Some(button)) = root.query_selector(selector) else {
                continue;
            };
            let track = track.clone();
            let state = state.clone();
            listeners.extend(dom::listen(&button, "click", move |ev: web::MouseEvent| {
                ev.prevent_default();
                let mut c = state.borrow_mut();
                let page = if forward { c.next() } else { c.prev() };
                apply_page(&track, &c);
                log::debug!("[carousel] page {}/{}", page + 1, c.pages());
            }));
        }
        Some(Self {
            _listeners: listeners,
        })
    }

    /// Wire every carousel under `root`.
    pub fn wire_all(root: &web::Element) -> Vec<Self> {
        let Ok(nodes) = root.query_selector_all("[data-carousel]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .filter_map(|el| Self::wire(&el))
            .collect()
    }
}
