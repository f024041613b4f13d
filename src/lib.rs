#![cfg(target_arch = "wasm32")]
use folio_core::{
    AnalyticsEvent, FieldConfig, FollowerConfig, PointerState, RateLimitConfig, RateLimiter,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod analytics;
mod constants;
mod contact;
mod cursor;
mod dom;
mod events;
mod frame;
mod layout;
mod listeners;
mod render;

use analytics::{Analytics, GtagSink};
use constants::*;
use frame::{FrameLoop, Scene};
use listeners::{DomScope, Interval};
use render::CanvasLayer;

/// Everything the page holds on to while mounted. Dropping it tears the
/// effects down: the frame loop stops, the poll is cleared and every listener
/// is removed.
struct App {
    frame: Option<FrameLoop>,
    poll: Option<Interval>,
    listeners: DomScope,
    _scene: Rc<RefCell<Scene>>,
    _analytics: Rc<RefCell<Analytics>>,
    _limiter: Rc<RefCell<RateLimiter>>,
}

impl Drop for App {
    fn drop(&mut self) {
        self.frame.take();
        self.poll.take();
        self.listeners.clear();
        log::info!("[app] unmounted");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let search = web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let level = if layout::wants_debug_logging(&search) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("folio-web starting");

    match mount() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("mount error: {:?}", e),
    }
    Ok(())
}

/// Stop every effect and remove every listener the module added.
#[wasm_bindgen]
pub fn unmount() {
    APP.with(|slot| {
        slot.borrow_mut().take();
    });
}

fn mount_layers(
    document: &web::Document,
    with_trail: bool,
) -> anyhow::Result<(Vec<CanvasLayer>, Option<usize>)> {
    let mut layers = Vec::new();
    let mut mounts = vec![
        (BG_CANVAS_ID, FieldConfig::blobs()),
        (WAVE_CANVAS_ID, FieldConfig::wave()),
    ];
    if with_trail {
        mounts.push((TRAIL_CANVAS_ID, FieldConfig::trail()));
    }
    let mut trail = None;
    for (id, config) in mounts {
        if let Some(layer) = CanvasLayer::mount(document, id, config, rand::random())? {
            if id == TRAIL_CANVAS_ID {
                trail = Some(layers.len());
            }
            layers.push(layer);
        }
    }
    Ok((layers, trail))
}

fn mount() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced_motion = dom::media_matches(REDUCED_MOTION_QUERY);
    let coarse_pointer = dom::media_matches(COARSE_POINTER_QUERY);
    log::info!(
        "[app] reduced_motion={} coarse_pointer={}",
        reduced_motion,
        coarse_pointer
    );
    let pointer_effects = !coarse_pointer && !reduced_motion;

    let mut listeners = DomScope::new();

    let (layers, trail) = mount_layers(&document, pointer_effects)?;
    let pointer = Rc::new(RefCell::new(PointerState::new(FollowerConfig::default())));
    let scene = Rc::new(RefCell::new(Scene {
        layers,
        trail,
        pointer: pointer.clone(),
        cursor: if pointer_effects {
            cursor::CursorElements::find(&document)
        } else {
            None
        },
        magnets: if pointer_effects {
            cursor::find_magnets(&document)
        } else {
            Vec::new()
        },
        tilts: if pointer_effects {
            cursor::find_tilts(&document)
        } else {
            Vec::new()
        },
        parallax: if reduced_motion {
            Vec::new()
        } else {
            cursor::find_parallax(&document)
        },
        last_instant: Instant::now(),
        last_spawn: None,
        repaint_on_resize: reduced_motion,
    }));

    events::wire_resize(&mut listeners, &window, scene.clone());
    let frame = if reduced_motion {
        scene.borrow_mut().paint_once();
        None
    } else {
        if pointer_effects {
            events::wire_pointer(
                &mut listeners,
                &events::PointerWiring {
                    window: window.clone(),
                    document: document.clone(),
                    pointer,
                },
            );
        }
        Some(frame::start_loop(scene.clone())?)
    };

    let analytics = Rc::new(RefCell::new(Analytics::new(GtagSink::from_document(
        &document,
    ))));
    let path = window.location().pathname().unwrap_or_default();
    analytics
        .borrow_mut()
        .track(AnalyticsEvent::page_view(&path));
    let poll = if analytics.borrow().is_ready() {
        None
    } else {
        let queue = analytics.clone();
        Some(Interval::new(ANALYTICS_POLL_MS, move || {
            queue.borrow_mut().poll();
        })?)
    };
    analytics::wire_scroll_depth(&mut listeners, &window, document.clone(), analytics.clone());

    let limiter = Rc::new(RefCell::new(RateLimiter::new(RateLimitConfig::default())));
    contact::wire_contact_form(
        &mut listeners,
        contact::ContactWiring {
            document: document.clone(),
            limiter: limiter.clone(),
            analytics: analytics.clone(),
        },
    );

    log::info!("[app] mounted with {} listeners", listeners.len());
    Ok(App {
        frame,
        poll,
        listeners,
        _scene: scene,
        _analytics: analytics,
        _limiter: limiter,
    })
}
