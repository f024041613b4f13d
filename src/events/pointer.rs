use crate::constants::INTERACTIVE_SELECTOR;
use crate::dom;
use crate::frame::Scene;
use crate::listeners::{on, DomScope};
use folio_core::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct PointerWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub pointer: Rc<RefCell<PointerState>>,
}

/// The one place pointer events are subscribed; every cursor-like effect reads
/// the resulting `PointerState`.
pub fn wire_pointer(scope: &mut DomScope, w: &PointerWiring) {
    let pointer = w.pointer.clone();
    on(scope, &w.window, "pointermove", move |ev: web::PointerEvent| {
        pointer
            .borrow_mut()
            .on_move(ev.client_x() as f32, ev.client_y() as f32);
    });

    let pointer = w.pointer.clone();
    on(scope, &w.window, "pointerdown", move |_: web::PointerEvent| {
        pointer.borrow_mut().on_down();
    });

    let pointer = w.pointer.clone();
    on(scope, &w.window, "pointerup", move |_: web::PointerEvent| {
        pointer.borrow_mut().on_up();
    });

    let hover_targets = dom::query_all(&w.document, INTERACTIVE_SELECTOR);
    log::debug!("[pointer] {} interactive elements", hover_targets.len());
    for el in hover_targets {
        let pointer = w.pointer.clone();
        on(scope, &el, "pointerenter", move |_: web::PointerEvent| {
            pointer.borrow_mut().set_hovering(true);
        });
        let pointer = w.pointer.clone();
        on(scope, &el, "pointerleave", move |_: web::PointerEvent| {
            pointer.borrow_mut().set_hovering(false);
        });
    }
}

pub fn wire_resize(scope: &mut DomScope, window: &web::Window, scene: Rc<RefCell<Scene>>) {
    on(scope, window, "resize", move |_: web::Event| {
        scene.borrow_mut().resize();
    });
}
