use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(id)
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Event listener that stays registered for as long as the handle lives.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    fn register(
        target: &web::EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(web::Event)>,
        passive: Option<bool>,
    ) -> Option<Listener> {
        let cb = closure.as_ref().unchecked_ref();
        let added = match passive {
            Some(p) => {
                let opts = web::AddEventListenerOptions::new();
                opts.set_passive(p);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    kind, cb, &opts,
                )
            }
            None => target.add_event_listener_with_callback(kind, cb),
        };
        match added {
            Ok(()) => Some(Listener {
                target: target.clone(),
                kind,
                closure,
            }),
            Err(e) => {
                log::error!("addEventListener({}) failed: {:?}", kind, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

fn typed<E, F>(mut handler: F) -> Closure<dyn FnMut(web::Event)>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>)
}

pub fn listen<E, F>(target: &web::EventTarget, kind: &'static str, handler: F) -> Option<Listener>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    Listener::register(target, kind, typed(handler), None)
}

/// Like [`listen`] but registered with `passive: false` so the handler may
/// call `preventDefault` (wheel, touchmove).
pub fn listen_active<E, F>(
    target: &web::EventTarget,
    kind: &'static str,
    handler: F,
) -> Option<Listener>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    Listener::register(target, kind, typed(handler), Some(false))
}

/// Click listener that lives for the whole page session.
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One-shot timer, cleared if dropped before it fires.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<Timeout> {
        let window = web::window()?;
        let closure: Closure<dyn FnMut()> = Closure::once(f);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms.max(0),
        ) {
            Ok(id) => Some(Timeout {
                id,
                _closure: closure,
            }),
            Err(e) => {
                log::error!("setTimeout failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// Repeating timer, cleared on drop. The callback receives a [`Stop`] it can
/// use to end the interval from inside.
pub struct Interval {
    id: Rc<Cell<Option<i32>>>,
    _closure: Closure<dyn FnMut()>,
}

#[derive(Clone)]
pub struct Stop(Rc<Cell<Option<i32>>>);

impl Stop {
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.0.take(), web::window()) {
            w.clear_interval_with_handle(id);
        }
    }
}

impl Interval {
    pub fn new(period_ms: i32, mut f: impl FnMut(&Stop) + 'static) -> Option<Interval> {
        let window = web::window()?;
        let id = Rc::new(Cell::new(None));
        let stop = Stop(id.clone());
        let closure = Closure::wrap(Box::new(move || f(&stop)) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms.max(1),
        ) {
            Ok(handle) => {
                id.set(Some(handle));
                Some(Interval {
                    id,
                    _closure: closure,
                })
            }
            Err(e) => {
                log::error!("setInterval failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        Stop(self.id.clone()).stop();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        // hero canvas renders at dpr 1..=1.5
        let dpr = w.device_pixel_ratio().clamp(1.0, 1.5);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keep the canvas backing store matched to its CSS size while the handle lives.
pub fn watch_canvas_size(canvas: &web::HtmlCanvasElement) -> Option<Listener> {
    sync_canvas_backing_size(canvas);
    let window = web::window()?;
    let canvas = canvas.clone();
    listen(&window, "resize", move |_: web::Event| {
        sync_canvas_backing_size(&canvas);
    })
}

pub fn scroll_to_top() {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
