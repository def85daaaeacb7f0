use crate::core::{HeroConfig, Phase, PhaseSequencer, ScrollDirection};
use crate::dom::{self, Listener};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct WheelWiring {
    /// Hero section used for the pinned check; `None` disables trapping.
    pub section: Option<web::Element>,
    pub sequencer: Rc<RefCell<PhaseSequencer>>,
    pub config: HeroConfig,
    /// Invoked after an accepted transition with `(from, to)`.
    pub on_transition: Box<dyn Fn(Phase, Phase)>,
}

/// Route window wheel events into the phase machine. Consumed gestures have
/// their default scroll suppressed; everything else scrolls the page.
pub fn wire_wheel(w: WheelWiring) -> Option<Listener> {
    let window = web::window()?;
    dom::listen_active(&window, "wheel", move |ev: web::WheelEvent| {
        let pinned = input::section_pinned(w.section.as_ref(), w.config.pin_tolerance_px);
        let direction = ScrollDirection::from_delta(ev.delta_y());
        let outcome = w
            .sequencer
            .borrow_mut()
            .on_wheel(direction, js_sys::Date::now(), pinned);
        if outcome.consumed && ev.cancelable() {
            ev.prevent_default();
        }
        if let Some((from, to)) = outcome.transition {
            (w.on_transition)(from, to);
        }
    })
}
