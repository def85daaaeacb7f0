use crate::dom::{self, Listener};
use crate::input;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Track the pointer over the whole window in normalized device coordinates.
/// The frame loop reads the latest sample; the handler never renders.
pub fn wire_pointer(pointer: Rc<Cell<Vec2>>) -> Option<Listener> {
    let window = web::window()?;
    let win = window.clone();
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        pointer.set(input::pointer_ndc(&ev, &win));
    })
}
