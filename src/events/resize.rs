use crate::core::InputSlots;
use crate::dom::{self, EventListener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Queue the new viewport; the next frame resizes the canvas and repopulates.
pub fn wire_resize(
    window: &web::Window,
    slots: Rc<RefCell<InputSlots>>,
) -> anyhow::Result<EventListener> {
    let window_resize = window.clone();
    EventListener::new(window, "resize", move |_ev: web::Event| {
        let viewport = dom::viewport(&window_resize);
        log::debug!("[resize] {}x{}", viewport.width, viewport.height);
        slots.borrow_mut().request_resize(viewport);
    })
}
