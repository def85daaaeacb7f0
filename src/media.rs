use crate::core::media::{fullscreen_action, FullscreenAction, MediaState, PlaybackCommand};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Click handlers for one `[data-video-section]`; unwired on drop.
pub struct VideoControls {
    _listeners: Vec<Listener>,
}

fn sync_ui(section: &web::Element, state: &MediaState) {
    for (class, on) in state.ui().classes() {
        dom::set_class(section, class, on);
    }
}

fn request_play(
    video: &web::HtmlVideoElement,
    section: &web::Element,
    state: &Rc<RefCell<MediaState>>,
) {
    let promise = match video.play() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[media] play() threw: {:?}", e);
            state.borrow_mut().on_play_rejected();
            sync_ui(section, &state.borrow());
            return;
        }
    };
    let section = section.clone();
    let state = state.clone();
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => state.borrow_mut().on_play_resolved(),
            Err(e) => {
                log::warn!("[media] playback rejected: {:?}", e);
                state.borrow_mut().on_play_rejected();
            }
        }
        sync_ui(&section, &state.borrow());
    });
}

fn toggle_fullscreen(document: &web::Document, target: &web::Element) {
    match fullscreen_action(document.fullscreen_element().is_some()) {
        FullscreenAction::Enter => {
            if let Err(e) = target.request_fullscreen() {
                log::warn!("[media] fullscreen request failed: {:?}", e);
            }
        }
        FullscreenAction::Exit => document.exit_fullscreen(),
    }
}

impl VideoControls {
    pub fn wire(section: &web::Element) -> Option<Self> {
        let video = section
            .query_selector("video")
            .ok()
            .flatten()?
            .dyn_into::<web::HtmlVideoElement>()
            .ok()?;
        let state = Rc::new(RefCell::new(MediaState::new()));
        video.set_muted(state.borrow().is_muted());
        sync_ui(section, &state.borrow());
        request_play(&video, section, &state);

        let mut listeners = Vec::with_capacity(3);
        {
            let video_cb = video.clone();
            let section_cb = section.clone();
            let state = state.clone();
            listeners.extend(dom::listen(&video, "click", move |_: web::MouseEvent| {
                let cmd = state.borrow_mut().toggle_play();
                match cmd {
                    PlaybackCommand::Pause => {
                        if let Err(e) = video_cb.pause() {
                            log::warn!("[media] pause failed: {:?}", e);
                        }
                        sync_ui(&section_cb, &state.borrow());
                    }
                    PlaybackCommand::Play => request_play(&video_cb, &section_cb, &state),
                }
            }));
        }
        if let Ok(Some(button)) = section.query_selector("[data-video-mute]") {
            let video_cb = video.clone();
            let section_cb = section.clone();
            let state = state.clone();
            listeners.extend(dom::listen(&button, "click", move |ev: web::MouseEvent| {
                ev.stop_propagation();
                let muted = state.borrow_mut().toggle_mute();
                video_cb.set_muted(muted);
                sync_ui(&section_cb, &state.borrow());
                log::info!("[media] muted={}", muted);
            }));
        }
        if let Ok(Some(button)) = section.query_selector("[data-video-fullscreen]") {
            let target: web::Element = section.clone();
            listeners.extend(dom::listen(&button, "click", move |ev: web::MouseEvent| {
                ev.stop_propagation();
                if let Some(doc) = dom::window_document() {
                    toggle_fullscreen(&doc, &target);
                }
            }));
        }
        Some(Self {
            _listeners: listeners,
        })
    }

    /// Wire every video section under `root`.
    pub fn wire_all(root: &web::Element) -> Vec<Self> {
        let Ok(nodes) = root.query_selector_all("[data-video-section]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .filter_map(|el| Self::wire(&el))
            .collect()
    }
}
