use folio_core::{ListenerScope, ListenerTarget};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM event target usable with `folio_core::ListenerScope`.
#[derive(Clone)]
pub struct DomTarget(pub web::EventTarget);

impl ListenerTarget for DomTarget {
    type Callback = Closure<dyn FnMut(web::Event)>;

    fn attach(&self, event: &str, callback: &Self::Callback) {
        if let Err(e) = self
            .0
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::error!("[listen] add {} failed: {:?}", event, e);
        }
    }

    fn detach(&self, event: &str, callback: &Self::Callback) {
        _ = self
            .0
            .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    }
}

pub type DomScope = ListenerScope<DomTarget>;

/// Attach `handler` for `event` on `target`; it is removed when `scope` drops.
pub fn on<E, F>(scope: &mut DomScope, target: &web::EventTarget, event: &'static str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        handler(ev.unchecked_into::<E>());
    }) as Box<dyn FnMut(web::Event)>);
    scope.listen(DomTarget(target.clone()), event, closure);
}

/// `setInterval` handle cleared on drop.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(ms: i32, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}
