use crate::constants::*;
use crate::core::loading::LoadingSequence;
use crate::core::{HeroCamera, HeroConfig, IntroMode, Phase, PhaseSequencer, Session, SimState};
use crate::dom::{self, Listener, Timeout};
use crate::events::{self, WheelWiring};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::overlay;
use glam::Vec2;
use instant::Instant;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

type ReleaseSlot = Rc<RefCell<Option<Timeout>>>;

/// The mounted 3D hero. Everything it registers (listeners, timers, the
/// animation frame) is owned here and undone when the view is dropped.
pub struct HeroView {
    document: web::Document,
    section: web::Element,
    _listeners: SmallVec<[Listener; 4]>,
    _loading: Vec<Timeout>,
    release: ReleaseSlot,
    _frame: Option<FrameLoop>,
}

impl HeroView {
    pub fn mount(document: &web::Document, session: &Rc<RefCell<Session>>) -> anyhow::Result<Self> {
        let section = dom::element_by_id(document, HERO_SECTION_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", HERO_SECTION_ID))?;
        let config = HeroConfig::from_attributes(|name| section.get_attribute(name));
        let mode = session.borrow_mut().claim_intro();
        log::info!("[hero] mount intro={:?} config={:?}", mode, config);

        overlay::apply_phase(document, Phase::MIN);
        overlay::set_released(&section, false);
        let loading = match mode {
            IntroMode::Play => run_loading(document),
            IntroMode::Skip => {
                overlay::hide_loader(document);
                Vec::new()
            }
        };

        let sequencer = Rc::new(RefCell::new(PhaseSequencer::new(config.cooldown_ms)));
        let pointer = Rc::new(Cell::new(Vec2::ZERO));
        let release: ReleaseSlot = Rc::new(RefCell::new(None));

        let mut listeners: SmallVec<[Listener; 4]> = SmallVec::new();
        listeners.extend(events::wire_pointer(pointer.clone()));
        listeners.extend(events::wire_wheel(WheelWiring {
            section: Some(section.clone()),
            sequencer: sequencer.clone(),
            config,
            on_transition: phase_handler(document, &section, &release, config.release_delay_ms),
        }));

        let canvas = dom::element_by_id(document, HERO_CANVAS_ID)
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
        let frame = match canvas {
            Some(canvas) => {
                listeners.extend(dom::watch_canvas_size(&canvas));
                start_frames(canvas, SimState::new(mode), sequencer, pointer)
            }
            None => {
                log::warn!("[hero] no #{} canvas; running without 3D", HERO_CANVAS_ID);
                None
            }
        };

        Ok(Self {
            document: document.clone(),
            section,
            _listeners: listeners,
            _loading: loading,
            release,
            _frame: frame,
        })
    }
}

impl Drop for HeroView {
    fn drop(&mut self) {
        self.release.borrow_mut().take();
        overlay::set_released(&self.section, false);
        overlay::hide_loader(&self.document);
        log::info!("[hero] unmounted");
    }
}

fn run_loading(document: &web::Document) -> Vec<Timeout> {
    let sequence = LoadingSequence::default();
    overlay::show_loader(document);
    overlay::set_loading_percent(document, 0);
    let mut timers: Vec<Timeout> = sequence
        .keyframes()
        .iter()
        .filter_map(|k| {
            let doc = document.clone();
            let percent = k.percent;
            Timeout::new(k.at_ms as i32, move || overlay::set_loading_percent(&doc, percent))
        })
        .collect();
    let doc = document.clone();
    timers.extend(Timeout::new(sequence.duration_ms() as i32, move || {
        overlay::hide_loader(&doc);
        log::info!("[loading] complete");
    }));
    timers
}

/// Overlay copy follows every accepted transition; reaching the last phase
/// releases the page scroll after a delay, leaving it cancels the release.
fn phase_handler(
    document: &web::Document,
    section: &web::Element,
    release: &ReleaseSlot,
    release_delay_ms: i32,
) -> Box<dyn Fn(Phase, Phase)> {
    let document = document.clone();
    let section = section.clone();
    let release = release.clone();
    Box::new(move |_from, to| {
        overlay::apply_phase(&document, to);
        if to.is_released() {
            let section = section.clone();
            *release.borrow_mut() = Timeout::new(release_delay_ms, move || {
                overlay::set_released(&section, true);
                log::info!("[hero] released");
            });
        } else {
            release.borrow_mut().take();
            overlay::set_released(&section, false);
        }
    })
}

fn start_frames(
    canvas: web::HtmlCanvasElement,
    sim: SimState,
    sequencer: Rc<RefCell<PhaseSequencer>>,
    pointer: Rc<Cell<Vec2>>,
) -> Option<FrameLoop> {
    let ctx = Rc::new(RefCell::new(FrameContext {
        sim,
        sequencer,
        pointer,
        canvas: canvas.clone(),
        camera: HeroCamera::default(),
        gpu: None,
        last_instant: Instant::now(),
    }));
    let weak = Rc::downgrade(&ctx);
    spawn_local(async move {
        let gpu = frame::init_gpu(&canvas).await;
        match weak.upgrade() {
            Some(ctx) => ctx.borrow_mut().gpu = gpu,
            None => log::info!("[hero] unmounted before the renderer was ready"),
        }
    });
    frame::start_loop(ctx)
}
