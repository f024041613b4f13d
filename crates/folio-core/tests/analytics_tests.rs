// Host-side tests for the deferred analytics queue.

use folio_core::{AnalyticsEvent, AnalyticsQueue, AnalyticsSink, ScrollDepth};
use std::cell::Cell;
use std::rc::Rc;

struct FakeTag {
    ready: Rc<Cell<bool>>,
    sent: Vec<String>,
}

impl AnalyticsSink for FakeTag {
    fn is_ready(&self) -> bool {
        self.ready.get()
    }
    fn dispatch(&mut self, event: &AnalyticsEvent) {
        self.sent.push(event.action.clone());
    }
}

fn make_queue(ready: bool) -> (AnalyticsQueue<FakeTag>, Rc<Cell<bool>>) {
    let flag = Rc::new(Cell::new(ready));
    let tag = FakeTag {
        ready: flag.clone(),
        sent: Vec::new(),
    };
    (AnalyticsQueue::new(tag), flag)
}

#[test]
fn dispatches_immediately_when_ready() {
    let (mut q, _) = make_queue(true);
    assert!(q.is_ready());
    q.track(AnalyticsEvent::new("a", "test"));
    assert_eq!(q.sink().sent, vec!["a"]);
    assert_eq!(q.pending(), 0);
}

#[test]
fn queued_events_flush_in_submission_order() {
    let (mut q, ready) = make_queue(false);
    for name in ["one", "two", "three"] {
        q.track(AnalyticsEvent::new(name, "test"));
    }
    assert_eq!(q.pending(), 3);
    assert!(q.sink().sent.is_empty());

    ready.set(true);
    q.track(AnalyticsEvent::new("four", "test"));
    assert_eq!(q.sink().sent, vec!["one", "two", "three", "four"]);
    assert_eq!(q.pending(), 0);
}

#[test]
fn poll_flushes_without_new_event() {
    let (mut q, ready) = make_queue(false);
    q.track(AnalyticsEvent::page_view("/"));
    assert!(!q.poll());
    ready.set(true);
    assert!(q.poll());
    assert_eq!(q.sink().sent, vec!["page_view"]);
}

#[test]
fn stays_in_immediate_mode_once_ready() {
    let (mut q, ready) = make_queue(false);
    ready.set(true);
    q.poll();
    ready.set(false);
    q.track(AnalyticsEvent::form_submit("sent"));
    assert_eq!(q.sink().sent, vec!["form_submit"]);
    assert_eq!(q.pending(), 0);
}

#[test]
fn scroll_milestones_fire_once_in_order() {
    let mut depth = ScrollDepth::new();
    assert!(depth.update(10).is_empty());
    assert_eq!(depth.update(60), vec![25, 50]);
    assert!(depth.update(55).is_empty());
    assert_eq!(depth.update(100), vec![75, 100]);
    assert!(depth.update(100).is_empty());
}
