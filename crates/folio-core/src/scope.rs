//! Scoped event subscriptions. A `Listener` attaches on construction and
//! detaches when dropped; a `ListenerScope` owns a set of them plus any other
//! teardown work, so dropping the scope releases everything on every exit
//! path.

use smallvec::SmallVec;

/// Something callbacks can be attached to, e.g. a DOM `EventTarget`.
pub trait ListenerTarget {
    type Callback;

    fn attach(&self, event: &str, callback: &Self::Callback);
    fn detach(&self, event: &str, callback: &Self::Callback);
}

pub struct Listener<T: ListenerTarget> {
    target: T,
    event: &'static str,
    callback: T::Callback,
}

impl<T: ListenerTarget> Listener<T> {
    pub fn new(target: T, event: &'static str, callback: T::Callback) -> Self {
        target.attach(event, &callback);
        Self {
            target,
            event,
            callback,
        }
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl<T: ListenerTarget> Drop for Listener<T> {
    fn drop(&mut self) {
        self.target.detach(self.event, &self.callback);
        log::trace!("[scope] detached {}", self.event);
    }
}

/// Runs a closure once when dropped.
pub struct Disposer(Option<Box<dyn FnOnce()>>);

impl Disposer {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(f)))
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

pub struct ListenerScope<T: ListenerTarget> {
    listeners: SmallVec<[Listener<T>; 8]>,
    disposers: Vec<Disposer>,
}

impl<T: ListenerTarget> ListenerScope<T> {
    pub fn new() -> Self {
        Self {
            listeners: SmallVec::new(),
            disposers: Vec::new(),
        }
    }

    pub fn listen(&mut self, target: T, event: &'static str, callback: T::Callback) {
        self.listeners.push(Listener::new(target, event, callback));
    }

    /// Register extra teardown work (timers, frame loops).
    pub fn defer(&mut self, f: impl FnOnce() + 'static) {
        self.disposers.push(Disposer::new(f));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Detach everything now; the scope can be reused afterwards.
    pub fn clear(&mut self) {
        self.listeners.clear();
        self.disposers.clear();
    }
}

impl<T: ListenerTarget> Default for ListenerScope<T> {
    fn default() -> Self {
        Self::new()
    }
}
