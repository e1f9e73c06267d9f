#![cfg(target_arch = "wasm32")]
use crate::canvas::Canvas2dSurface;
use crate::constants::DEFAULT_CANVAS_ID;
use crate::core::{FieldEngine, InputSlots};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;

/// Reasons a mount degrades to an idle field. None of these reach the page as exceptions.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("missing canvas #{0}")]
    NoCanvas(String),
    #[error("2d drawing context unavailable")]
    NoContext,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Everything acquired for one mount. Dropping it stops the engine, cancels the
/// pending frame and detaches every listener.
struct Mount {
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    loop_handle: frame::LoopHandle,
    _listeners: Vec<dom::EventListener>,
}

impl Drop for Mount {
    fn drop(&mut self) {
        if let Ok(mut ctx) = self.frame_ctx.try_borrow_mut() {
            ctx.engine.stop();
        }
        self.loop_handle.cancel();
    }
}

fn try_mount(canvas: web::HtmlCanvasElement) -> Result<Mount, MountError> {
    let window = web::window().ok_or(MountError::NoWindow)?;
    let mut surface = Canvas2dSurface::acquire(canvas.clone())?;

    let viewport = dom::viewport(&window);
    let engine = FieldEngine::mount(viewport, StdRng::from_entropy(), &mut surface);
    let slots = Rc::new(RefCell::new(InputSlots::default()));

    let mut listeners = events::wire_pointer_tracking(&events::PointerWiring {
        window: window.clone(),
        canvas,
        slots: slots.clone(),
    })?;
    listeners.push(events::wire_resize(&window, slots.clone())?);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        engine, surface, slots,
    )));
    let loop_handle = frame::start_loop(frame_ctx.clone())?;

    Ok(Mount {
        frame_ctx,
        loop_handle,
        _listeners: listeners,
    })
}

/// Handle for the animated background. Idle when mounting failed or after `unmount`.
#[wasm_bindgen]
pub struct ParticleField {
    mount: Option<Mount>,
}

#[wasm_bindgen]
impl ParticleField {
    pub fn mount(canvas: web::HtmlCanvasElement) -> ParticleField {
        match try_mount(canvas) {
            Ok(m) => {
                log::info!("particle field mounted");
                ParticleField { mount: Some(m) }
            }
            Err(e) => {
                log::warn!("particle field idle: {}", e);
                ParticleField { mount: None }
            }
        }
    }

    /// Mount onto the canvas with the given id, or `#particle-canvas` when omitted.
    #[wasm_bindgen(js_name = mountById)]
    pub fn mount_by_id(id: Option<String>) -> ParticleField {
        let id = id.unwrap_or_else(|| DEFAULT_CANVAS_ID.to_string());
        let canvas = dom::window_document()
            .ok_or(MountError::NoWindow)
            .and_then(|doc| {
                dom::canvas_by_id(&doc, &id).map_err(|e| {
                    log::debug!("{:?}", e);
                    MountError::NoCanvas(id.clone())
                })
            });
        match canvas {
            Ok(c) => Self::mount(c),
            Err(e) => {
                log::warn!("particle field idle: {}", e);
                ParticleField { mount: None }
            }
        }
    }

    pub fn unmount(&mut self) {
        if self.mount.take().is_some() {
            log::info!("particle field unmounted");
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mount
            .as_ref()
            .map(|m| m.frame_ctx.borrow().engine.is_running())
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.mount
            .as_ref()
            .map(|m| m.frame_ctx.borrow().engine.particles().len())
            .unwrap_or(0)
    }

    /// "compact" or "standard"; `undefined` while idle.
    pub fn tier(&self) -> Option<String> {
        self.mount
            .as_ref()
            .map(|m| m.frame_ctx.borrow().engine.tier().name().to_string())
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-field starting");
    Ok(())
}
