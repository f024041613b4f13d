use crate::constants::ANALYTICS_META_SELECTOR;
use crate::dom;
use crate::listeners::{on, DomScope};
use folio_core::{AnalyticsEvent, AnalyticsQueue, AnalyticsSink, ScrollDepth};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type Analytics = AnalyticsQueue<GtagSink>;

/// Sink calling the page's global `gtag(command, targetId, config)`.
/// The tag counts as ready once that function exists.
pub struct GtagSink {
    measurement_id: Option<String>,
}

impl GtagSink {
    pub fn from_document(document: &web::Document) -> Self {
        let measurement_id = document
            .query_selector(ANALYTICS_META_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("content"))
            .filter(|id| !id.trim().is_empty());
        if measurement_id.is_none() {
            log::info!("[analytics] no measurement id meta tag");
        }
        Self { measurement_id }
    }

    fn gtag() -> Option<js_sys::Function> {
        let window = web::window()?;
        js_sys::Reflect::get(&window, &JsValue::from_str("gtag"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    }
}

impl AnalyticsSink for GtagSink {
    fn is_ready(&self) -> bool {
        Self::gtag().is_some()
    }

    fn dispatch(&mut self, event: &AnalyticsEvent) {
        let Some(gtag) = Self::gtag() else {
            return;
        };
        let params = Value::Object(event.gtag_params(self.measurement_id.as_deref()));
        let Ok(params) = js_sys::JSON::parse(&params.to_string()) else {
            return;
        };
        if let Err(e) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(&event.action),
            &params,
        ) {
            log::warn!("[analytics] gtag call failed: {:?}", e);
        }
    }
}

/// Track scroll milestones as the page is read.
pub fn wire_scroll_depth(
    scope: &mut DomScope,
    window: &web::Window,
    document: web::Document,
    analytics: Rc<RefCell<Analytics>>,
) {
    let mut depth = ScrollDepth::new();
    on(scope, window, "scroll", move |_: web::Event| {
        let (_, viewport_h) = dom::viewport_size();
        let pct = ScrollDepth::percent(
            dom::scroll_y() as f32,
            viewport_h as f32,
            dom::document_height(&document) as f32,
        );
        for milestone in depth.update(pct) {
            analytics
                .borrow_mut()
                .track(AnalyticsEvent::scroll_depth(milestone));
        }
    });
}
