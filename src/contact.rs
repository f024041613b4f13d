// Contact form submit handling: sanitize, validate, rate-limit, report.
// Delivery is left to the page, which listens for the `folio:contact` event.

use crate::analytics::Analytics;
use crate::constants::*;
use crate::dom;
use crate::layout;
use crate::listeners::{on, DomScope};
use folio_core::{sanitize_record, validate, AnalyticsEvent, ContactForm, Field, RateLimiter};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct ContactWiring {
    pub document: web::Document,
    pub limiter: Rc<RefCell<RateLimiter>>,
    pub analytics: Rc<RefCell<Analytics>>,
}

fn field_value(form: &web::HtmlFormElement, name: &str) -> String {
    let Ok(Some(el)) = form.query_selector(&format!("[name={}]", name)) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn read_record(form: &web::HtmlFormElement) -> Map<String, Value> {
    Field::ALL
        .iter()
        .map(|f| (f.key().to_owned(), Value::String(field_value(form, f.key()))))
        .collect()
}

fn show_field_errors(form: &web::HtmlFormElement, errors: &[(Field, Option<String>)]) {
    for (field, msg) in errors {
        let selector = format!("[data-error-for={}]", field.key());
        if let Ok(Some(el)) = form.query_selector(&selector) {
            el.set_text_content(msg.as_deref());
        }
    }
}

fn set_status(document: &web::Document, text: &str, ok: bool) {
    if let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) {
        el.set_text_content(Some(text));
        _ = el.class_list().toggle_with_force("error", !ok);
    }
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn emit_contact(form: &web::HtmlFormElement, clean: &ContactForm) -> anyhow::Result<()> {
    let json = serde_json::to_string(clean)?;
    let detail = js_sys::JSON::parse(&json).map_err(js_err)?;
    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    init.set_bubbles(true);
    let ev = web::CustomEvent::new_with_event_init_dict(CONTACT_EVENT, &init).map_err(js_err)?;
    form.dispatch_event(&ev).map_err(js_err)?;
    Ok(())
}

pub fn wire_contact_form(scope: &mut DomScope, w: ContactWiring) {
    let Some(form) = dom::by_id::<web::HtmlFormElement>(&w.document, CONTACT_FORM_ID) else {
        log::debug!("[contact] no #{} on page", CONTACT_FORM_ID);
        return;
    };
    let form_in_handler = form.clone();
    on(scope, &form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let form = &form_in_handler;
        let record = sanitize_record(&read_record(form));
        let clean = ContactForm::from_record(&record);
        let report = validate(&clean);
        let shown: Vec<_> = Field::ALL
            .iter()
            .map(|&f| (f, report.error(f).map(str::to_owned)))
            .collect();
        show_field_errors(form, &shown);

        if !report.is_valid() {
            log::info!("[contact] {} invalid fields", report.errors.len());
            let invalid = AnalyticsEvent::form_submit("invalid").with_value(report.errors.len() as i64);
            w.analytics.borrow_mut().track(invalid);
            return;
        }

        let mut limiter = w.limiter.borrow_mut();
        if !limiter.check_and_record(CONTACT_LIMIT_KEY) {
            let wait = limiter.retry_after(CONTACT_LIMIT_KEY).unwrap_or_default();
            set_status(&w.document, &layout::retry_message(wait), false);
            w.analytics
                .borrow_mut()
                .track(AnalyticsEvent::form_submit("rate_limited"));
            return;
        }
        let remaining = limiter.remaining_attempts(CONTACT_LIMIT_KEY);
        drop(limiter);

        match emit_contact(form, &clean) {
            Ok(()) => {
                set_status(&w.document, "Thanks! Your message is on its way.", true);
                form.reset();
                w.analytics
                    .borrow_mut()
                    .track(AnalyticsEvent::form_submit("sent").with_value(remaining as i64));
            }
            Err(e) => {
                log::error!("[contact] could not hand off message: {:?}", e);
                set_status(&w.document, "Something went wrong. Please try again.", false);
            }
        }
    });
    log::info!("[contact] form wired");
}
