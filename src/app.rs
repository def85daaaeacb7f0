use crate::carousel::ReviewCarousel;
use crate::constants::BOOKING_SCRIPT_URL;
use crate::core::nav::{Navigator, View};
use crate::core::Session;
use crate::dom::{self, Interval};
use crate::embed::ScriptEmbed;
use crate::hero::HeroView;
use crate::media::VideoControls;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page-session root: owns the navigator and the session, and the resources
/// of whichever view is currently visible.
pub struct App {
    document: web::Document,
    navigator: Navigator,
    session: Rc<RefCell<Session>>,
    hero: Option<HeroView>,
    videos: Vec<VideoControls>,
    carousels: Vec<ReviewCarousel>,
    booking: Option<ScriptEmbed>,
    decipher: Vec<Interval>,
}

fn view_root(document: &web::Document, view: View) -> Option<web::Element> {
    document
        .query_selector(&format!("[data-view=\"{}\"]", view.name()))
        .ok()
        .flatten()
}

impl App {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            navigator: Navigator::new(),
            session: Rc::new(RefCell::new(Session::new())),
            hero: None,
            videos: Vec::new(),
            carousels: Vec::new(),
            booking: None,
            decipher: Vec::new(),
        }
    }

    pub fn current(&self) -> View {
        self.navigator.current()
    }

    pub fn navigate(&mut self, to: View) {
        let Some(change) = self.navigator.navigate(to) else {
            return;
        };
        log::info!("[nav] {} -> {}", change.from.name(), change.to.name());
        self.leave();
        dom::scroll_to_top();
        self.enter();
    }

    fn apply_visibility(&self) {
        let flags = self.navigator.flags().as_array();
        for (view, visible) in View::ALL.iter().zip(flags) {
            if let Some(el) = view_root(&self.document, *view) {
                dom::set_class(&el, "hidden", !visible);
            }
        }
    }

    fn enter(&mut self) {
        self.apply_visibility();
        let view = self.navigator.current();
        let root = view_root(&self.document, view);

        if view.shows_hero() {
            match HeroView::mount(&self.document, &self.session) {
                Ok(h) => self.hero = Some(h),
                Err(e) => log::error!("[hero] mount failed: {:?}", e),
            }
        }
        if view.hosts_booking_embed() {
            match ScriptEmbed::insert(&self.document, BOOKING_SCRIPT_URL) {
                Ok(s) => self.booking = Some(s),
                Err(e) => log::warn!("[nav] booking embed failed: {:?}", e),
            }
        }
        if let Some(root) = root {
            self.videos = VideoControls::wire_all(&root);
            self.carousels = ReviewCarousel::wire_all(&root);
            self.decipher = overlay::start_decipher_all(&root);
        }
    }

    fn leave(&mut self) {
        self.hero = None;
        self.booking = None;
        self.videos.clear();
        self.carousels.clear();
        self.decipher.clear();
    }
}

/// Route every `[data-nav]` link through the app instead of the browser.
pub fn wire_nav_links(app: &Rc<RefCell<App>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Ok(links) = document.query_selector_all("[data-nav]") else {
        return;
    };
    for el in (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
    {
        let Some(view) = el.get_attribute("data-nav").and_then(|n| View::from_name(&n)) else {
            log::warn!("[nav] unknown data-nav target on {:?}", el.id());
            continue;
        };
        let app = app.clone();
        dom::add_click_listener(&el, move |ev| {
            ev.prevent_default();
            app.borrow_mut().navigate(view);
        });
    }
}

/// Build the app, show the initial view and wire navigation.
pub fn start(document: web::Document) -> Rc<RefCell<App>> {
    let app = Rc::new(RefCell::new(App::new(document)));
    app.borrow_mut().enter();
    wire_nav_links(&app);
    log::info!("[nav] started on {}", app.borrow().current().name());
    app
}
