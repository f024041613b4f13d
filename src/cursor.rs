// Applies the pointer-derived transforms to DOM elements. All elements read
// the one shared `PointerState`; none of them own event listeners.

use crate::constants::*;
use crate::dom;
use crate::layout;
use folio_core::{cursor_transform, parallax_offset, CursorStyle, Magnet, PointerState, Tilt};
use web_sys as web;

pub struct CursorElements {
    dot: Option<web::HtmlElement>,
    ring: Option<web::HtmlElement>,
    shown: bool,
}

impl CursorElements {
    pub fn find(document: &web::Document) -> Option<Self> {
        let dot = dom::by_id::<web::HtmlElement>(document, CURSOR_DOT_ID);
        let ring = dom::by_id::<web::HtmlElement>(document, CURSOR_RING_ID);
        if dot.is_none() && ring.is_none() {
            return None;
        }
        Some(Self {
            dot,
            ring,
            shown: false,
        })
    }

    pub fn apply(&mut self, pointer: &PointerState) {
        for (el, style) in [(&self.dot, CursorStyle::Dot), (&self.ring, CursorStyle::Ring)] {
            if let Some(el) = el {
                let t = cursor_transform(pointer, style);
                dom::set_style(el, "transform", &t.to_css());
                dom::set_style(el, "opacity", &format!("{}", t.opacity));
            }
        }
        if !self.shown && pointer.is_visible() {
            self.shown = true;
            log::debug!("[cursor] visible");
        }
    }
}

pub struct MagneticElement {
    el: web::HtmlElement,
    magnet: Magnet,
}

pub struct TiltElement {
    el: web::HtmlElement,
    tilt: Tilt,
}

pub struct ParallaxElement {
    el: web::HtmlElement,
    speed: f32,
}

pub fn find_magnets(document: &web::Document) -> Vec<MagneticElement> {
    dom::query_all(document, MAGNETIC_SELECTOR)
        .into_iter()
        .map(|el| MagneticElement {
            el,
            magnet: Magnet::default(),
        })
        .collect()
}

pub fn find_tilts(document: &web::Document) -> Vec<TiltElement> {
    dom::query_all(document, TILT_SELECTOR)
        .into_iter()
        .map(|el| TiltElement {
            el,
            tilt: Tilt::default(),
        })
        .collect()
}

pub fn find_parallax(document: &web::Document) -> Vec<ParallaxElement> {
    dom::query_all(document, PARALLAX_SELECTOR)
        .into_iter()
        .map(|el| {
            let attr = el.get_attribute(PARALLAX_SPEED_ATTR);
            let speed = layout::parse_speed(attr.as_deref(), folio_core::constants::PARALLAX_SPEED);
            ParallaxElement { el, speed }
        })
        .collect()
}

impl MagneticElement {
    pub fn update(&mut self, pointer: &PointerState, dt_sec: f32) {
        let rect = dom::element_rect(&self.el);
        let inside = pointer.has_moved() && rect.contains(pointer.raw());
        self.magnet
            .update(inside.then(|| pointer.raw()), &rect, dt_sec);
        dom::set_style(&self.el, "transform", &self.magnet.to_css());
    }
}

impl TiltElement {
    pub fn update(&mut self, pointer: &PointerState, dt_sec: f32) {
        let rect = dom::element_rect(&self.el);
        let inside = pointer.has_moved() && rect.contains(pointer.raw());
        self.tilt.update(inside.then(|| pointer.raw()), &rect, dt_sec);
        dom::set_style(&self.el, "transform", &self.tilt.to_css());
    }
}

impl ParallaxElement {
    pub fn update(&self, scroll_y: f32) {
        let y = parallax_offset(scroll_y, self.speed);
        dom::set_style(&self.el, "transform", &format!("translate3d(0, {:.2}px, 0)", y));
    }
}
