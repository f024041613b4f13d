// Host-side tests for scoped listener teardown, using a counting fake target.

use folio_core::{Disposer, Listener, ListenerScope, ListenerTarget};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Default)]
struct CountingTarget {
    attached: Rc<RefCell<HashMap<String, usize>>>,
}

impl CountingTarget {
    fn total(&self) -> usize {
        self.attached.borrow().values().sum()
    }
}

impl ListenerTarget for CountingTarget {
    type Callback = Box<dyn FnMut()>;

    fn attach(&self, event: &str, _callback: &Self::Callback) {
        *self.attached.borrow_mut().entry(event.to_owned()).or_default() += 1;
    }

    fn detach(&self, event: &str, _callback: &Self::Callback) {
        if let Some(n) = self.attached.borrow_mut().get_mut(event) {
            *n -= 1;
        }
    }
}

#[test]
fn listener_count_returns_to_zero_after_teardown() {
    let target = CountingTarget::default();
    {
        let mut scope = ListenerScope::new();
        for event in ["pointermove", "pointerdown", "pointerup", "scroll", "resize"] {
            scope.listen(target.clone(), event, Box::new(|| {}));
        }
        scope.listen(target.clone(), "pointermove", Box::new(|| {}));
        assert_eq!(scope.len(), 6);
        assert_eq!(target.total(), 6);
        assert_eq!(target.attached.borrow()["pointermove"], 2);
    }
    assert_eq!(target.total(), 0);
}

#[test]
fn teardown_runs_on_early_exit() {
    fn mount(target: &CountingTarget, fail: bool) -> Result<ListenerScope<CountingTarget>, String> {
        let mut scope = ListenerScope::new();
        scope.listen(target.clone(), "resize", Box::new(|| {}));
        if fail {
            return Err("mount failed".into());
        }
        scope.listen(target.clone(), "scroll", Box::new(|| {}));
        Ok(scope)
    }

    let target = CountingTarget::default();
    assert!(mount(&target, true).is_err());
    assert_eq!(target.total(), 0);

    let scope = mount(&target, false).unwrap();
    assert_eq!(target.total(), 2);
    drop(scope);
    assert_eq!(target.total(), 0);
}

#[test]
fn deferred_work_runs_once_on_clear() {
    let target = CountingTarget::default();
    let runs = Rc::new(Cell::new(0));
    let mut scope = ListenerScope::new();
    let r = runs.clone();
    scope.defer(move || r.set(r.get() + 1));
    scope.listen(target.clone(), "scroll", Box::new(|| {}));
    scope.clear();
    assert_eq!(runs.get(), 1);
    assert!(scope.is_empty());
    drop(scope);
    assert_eq!(runs.get(), 1);
}

#[test]
fn single_listener_detaches_on_drop() {
    let target = CountingTarget::default();
    let l = Listener::new(target.clone(), "submit", Box::new(|| {}) as Box<dyn FnMut()>);
    assert_eq!(l.event(), "submit");
    assert_eq!(target.total(), 1);
    drop(l);
    assert_eq!(target.total(), 0);
    let d = Disposer::new(|| {});
    drop(d);
}
