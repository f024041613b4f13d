use crate::cursor::{CursorElements, MagneticElement, ParallaxElement, TiltElement};
use crate::dom;
use crate::render::CanvasLayer;
use folio_core::PointerState;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything that is updated once per animation frame.
pub struct Scene {
    pub layers: Vec<CanvasLayer>,
    /// Index into `layers` of the pointer trail, if mounted.
    pub trail: Option<usize>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub cursor: Option<CursorElements>,
    pub magnets: Vec<MagneticElement>,
    pub tilts: Vec<TiltElement>,
    pub parallax: Vec<ParallaxElement>,
    pub last_instant: Instant,
    pub last_spawn: Option<Vec2>,
    /// Set when no frame loop runs; resizing clears the canvases, so they are
    /// painted again right away.
    pub repaint_on_resize: bool,
}

impl Scene {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Pointer state first so every presentation sees the same sample.
        let pointer = {
            let mut p = self.pointer.borrow_mut();
            p.tick(dt_sec);
            p.clone()
        };

        if let Some(i) = self.trail {
            let raw = pointer.raw();
            if pointer.has_moved() && self.last_spawn != Some(raw) {
                self.last_spawn = Some(raw);
                let dpr = dom::device_pixel_ratio() as f32;
                self.layers[i].field.spawn_at(raw * dpr);
            }
        }

        for layer in &mut self.layers {
            layer.step_and_paint(dt_sec);
        }

        if let Some(c) = &mut self.cursor {
            c.apply(&pointer);
        }
        for m in &mut self.magnets {
            m.update(&pointer, dt_sec);
        }
        for t in &mut self.tilts {
            t.update(&pointer, dt_sec);
        }
        if !self.parallax.is_empty() {
            let scroll = dom::scroll_y() as f32;
            for p in &self.parallax {
                p.update(scroll);
            }
        }
    }

    pub fn resize(&mut self) {
        for layer in &mut self.layers {
            layer.resize();
            if self.repaint_on_resize {
                layer.paint();
            }
        }
    }

    /// Single static paint, used when motion is reduced.
    pub fn paint_once(&mut self) {
        for layer in &mut self.layers {
            layer.paint();
        }
    }
}

/// `requestAnimationFrame` loop; cancelled and released on drop.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

pub fn start_loop(scene: Rc<RefCell<Scene>>) -> anyhow::Result<FrameLoop> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    let stopped_tick = stopped.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if stopped_tick.get() {
            return;
        }
        scene.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            handle_tick.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }) as Box<dyn FnMut()>));

    let first = match tick.borrow().as_ref() {
        Some(cb) => window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?,
        None => anyhow::bail!("frame callback missing"),
    };
    handle.set(Some(first));
    Ok(FrameLoop {
        handle,
        stopped,
        tick,
    })
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stopped.set(true);
        if let (Some(w), Some(id)) = (web::window(), self.handle.take()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself.
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop stopped");
    }
}
