use crate::core::{map_scene, step, FrameInput, HeroCamera, PhaseSequencer, SimState};
use crate::render;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: SimState,
    pub sequencer: Rc<RefCell<PhaseSequencer>>,
    pub pointer: Rc<Cell<Vec2>>,
    pub canvas: web::HtmlCanvasElement,
    pub camera: HeroCamera,
    pub gpu: Option<render::GpuState>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let input = FrameInput {
            phase: self.sequencer.borrow().phase(),
            pointer: self.pointer.get(),
        };
        self.sim = step(&self.sim, &input, dt.as_secs_f32());

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        let viewport = self.camera.viewport_at_target(g.aspect());
        let scene = map_scene(&self.sim, viewport);
        match g.render(&scene, &self.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[hero] WebGPU init error: {:?}", e);
            None
        }
    }
}

struct LoopState {
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn request(&self, window: &web::Window) {
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// Running requestAnimationFrame loop. Dropping the handle cancels the
/// pending frame and releases the frame context.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> Option<FrameLoop> {
    let window = web::window()?;
    let state = Rc::new(LoopState {
        raf_id: Cell::new(None),
        tick: RefCell::new(None),
    });
    let weak: Weak<LoopState> = Rc::downgrade(&state);
    let win = window.clone();
    *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.raf_id.set(None);
        frame_ctx.borrow_mut().frame();
        state.request(&win);
    }) as Box<dyn FnMut()>));
    state.request(&window);
    Some(FrameLoop { state })
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.state.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.state.tick.borrow_mut().take();
    }
}
