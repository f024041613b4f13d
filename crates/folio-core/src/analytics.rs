//! Write-buffered analytics. Events tracked before the external tag is ready
//! wait in a FIFO; the first successful readiness check flushes them in order
//! and switches the queue to immediate dispatch for good.

use crate::constants::SCROLL_MILESTONES;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub action: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl AnalyticsEvent {
    pub fn new(action: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            category: category.into(),
            label: None,
            value: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn page_view(path: &str) -> Self {
        Self::new("page_view", "navigation").with_label(path)
    }

    /// Outcome of a contact form submission (`sent`, `invalid`, `rate_limited`).
    pub fn form_submit(outcome: &str) -> Self {
        Self::new("form_submit", "contact").with_label(outcome)
    }

    pub fn scroll_depth(percent: u8) -> Self {
        Self::new("scroll_depth", "engagement").with_value(percent as i64)
    }

    /// gtag `event` parameters. Absent label, value and target are left out.
    pub fn gtag_params(&self, send_to: Option<&str>) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("event_category".into(), self.category.clone().into());
        if let Some(label) = &self.label {
            params.insert("event_label".into(), label.clone().into());
        }
        if let Some(value) = self.value {
            params.insert("value".into(), value.into());
        }
        if let Some(target) = send_to {
            params.insert("send_to".into(), target.into());
        }
        params
    }
}

/// Destination for analytics events, e.g. the page's `gtag` function.
pub trait AnalyticsSink {
    fn is_ready(&self) -> bool;
    fn dispatch(&mut self, event: &AnalyticsEvent);
}

pub struct AnalyticsQueue<S: AnalyticsSink> {
    sink: S,
    pending: VecDeque<AnalyticsEvent>,
    ready: bool,
}

impl<S: AnalyticsSink> AnalyticsQueue<S> {
    pub fn new(sink: S) -> Self {
        let mut queue = Self {
            sink,
            pending: VecDeque::new(),
            ready: false,
        };
        queue.poll();
        queue
    }

    /// Check the sink once more. Returns whether the queue is in immediate
    /// mode afterwards.
    pub fn poll(&mut self) -> bool {
        if !self.ready && self.sink.is_ready() {
            self.ready = true;
            if !self.pending.is_empty() {
                log::info!("[analytics] tag ready, flushing {} events", self.pending.len());
            }
            while let Some(ev) = self.pending.pop_front() {
                self.sink.dispatch(&ev);
            }
        }
        self.ready
    }

    pub fn track(&mut self, event: AnalyticsEvent) {
        if self.poll() {
            self.sink.dispatch(&event);
        } else {
            log::debug!("[analytics] queued {}", event.action);
            self.pending.push_back(event);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Fires each scroll milestone once per page, lowest first.
#[derive(Clone, Debug, Default)]
pub struct ScrollDepth {
    reached: usize,
}

impl ScrollDepth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of the page scrolled, 0..=100.
    pub fn percent(scroll_y: f32, viewport_h: f32, document_h: f32) -> u8 {
        let scrollable = document_h - viewport_h;
        if scrollable <= 0.0 {
            return 100;
        }
        ((scroll_y / scrollable) * 100.0).clamp(0.0, 100.0).round() as u8
    }

    /// Milestones newly crossed at `percent`.
    pub fn update(&mut self, percent: u8) -> Vec<u8> {
        let mut crossed = Vec::new();
        while let Some(&m) = SCROLL_MILESTONES.get(self.reached) {
            if percent < m {
                break;
            }
            crossed.push(m);
            self.reached += 1;
        }
        crossed
    }
}
