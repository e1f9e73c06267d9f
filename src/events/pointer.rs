use crate::core::InputSlots;
use crate::dom::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub slots: Rc<RefCell<InputSlots>>,
}

/// Mouse and touch both feed the single pointer slot, translated into canvas-local pixels.
pub fn wire_pointer_tracking(w: &PointerWiring) -> anyhow::Result<Vec<EventListener>> {
    Ok(vec![
        wire_mousemove(w)?,
        wire_touch(w, "touchstart")?,
        wire_touch(w, "touchmove")?,
    ])
}

#[inline]
fn record_client_pos(w: &PointerWiring, client_x: i32, client_y: i32) {
    let rect = w.canvas.get_bounding_client_rect();
    w.slots.borrow_mut().pointer.set_from_client(
        client_x as f32,
        client_y as f32,
        rect.left() as f32,
        rect.top() as f32,
    );
}

fn wire_mousemove(w: &PointerWiring) -> anyhow::Result<EventListener> {
    let wiring = w.clone();
    EventListener::new(&w.window, "mousemove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            record_client_pos(&wiring, ev.client_x(), ev.client_y());
        }
    })
}

fn wire_touch(w: &PointerWiring, event: &'static str) -> anyhow::Result<EventListener> {
    let wiring = w.clone();
    EventListener::new_passive(&w.window, event, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some(touch) = ev.touches().get(0) {
            record_client_pos(&wiring, touch.client_x(), touch.client_y());
        }
    })
}
