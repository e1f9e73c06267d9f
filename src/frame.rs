use crate::canvas::Canvas2dSurface;
use crate::constants::{BUDGET_LOG_INTERVAL_FRAMES, FRAME_BUDGET_MS};
use crate::core::{FieldEngine, InputSlots};
use anyhow::anyhow;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: FieldEngine<StdRng>,
    pub surface: Canvas2dSurface,
    pub slots: Rc<RefCell<InputSlots>>,
    last_budget_log: Option<u64>,
}

impl FrameContext {
    pub fn new(
        engine: FieldEngine<StdRng>,
        surface: Canvas2dSurface,
        slots: Rc<RefCell<InputSlots>>,
    ) -> Self {
        Self {
            engine,
            surface,
            slots,
            last_budget_log: None,
        }
    }

    /// Run one frame; `false` means the engine has stopped and no further frame should be requested.
    pub fn frame(&mut self) -> bool {
        let started = Instant::now();
        let running = {
            let mut slots = self.slots.borrow_mut();
            self.engine.frame(&mut slots, &mut self.surface)
        };
        if running {
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
            self.note_frame_time(elapsed_ms);
        }
        running
    }

    fn note_frame_time(&mut self, elapsed_ms: f64) {
        if elapsed_ms <= FRAME_BUDGET_MS {
            return;
        }
        let frame = self.engine.frame_count();
        let due = match self.last_budget_log {
            Some(last) => frame.saturating_sub(last) >= BUDGET_LOG_INTERVAL_FRAMES,
            None => true,
        };
        if due {
            log::debug!(
                "[frame] {:.1}ms over {:.0}ms budget at frame {} ({} particles)",
                elapsed_ms,
                FRAME_BUDGET_MS,
                frame,
                self.engine.particles().len()
            );
            self.last_budget_log = Some(frame);
        }
    }
}

/// Pending requestAnimationFrame callback; cancelling it ends the loop for good.
pub struct LoopHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Dropping the closure also breaks its self-reference.
        self.tick.borrow_mut().take();
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<LoopHandle> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_tick.set(None);
        if !frame_ctx.borrow_mut().frame() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = tick_clone.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => raf_id_tick.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }) as Box<dyn FnMut()>));

    // Built before the first request so an early error still drops the callback.
    let handle = LoopHandle { raf_id, tick };
    let requested = handle
        .tick
        .borrow()
        .as_ref()
        .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
    let first = match requested {
        Some(r) => r.map_err(|e| anyhow!("requestAnimationFrame: {:?}", e))?,
        None => return Err(anyhow!("frame callback missing")),
    };
    handle.raf_id.set(Some(first));
    Ok(handle)
}
