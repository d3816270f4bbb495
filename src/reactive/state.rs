use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::trace;

use super::batch;
use super::node::{Dependents, Listeners, Node, Version};
use super::subscription::Subscription;
use super::Readable;

/// A root container: authoritative mutable state owned by a collaborator.
///
/// Every `set`/`update` is a committed change, even when the new value equals
/// the old one. Cloning the handle shares the same container.
pub struct State<T> {
    inner: Rc<StateInner<T>>,
}

struct StateInner<T> {
    value: RefCell<T>,
    version: Cell<Version>,
    dependents: Dependents,
    listeners: Listeners<T>,
    me: Weak<StateInner<T>>,
}

impl<T: Clone + 'static> State<T> {
    pub fn new(value: T) -> Self {
        let inner = Rc::new_cyclic(|me| StateInner {
            value: RefCell::new(value),
            version: Cell::new(1),
            dependents: Dependents::default(),
            listeners: Listeners::new(),
            me: me.clone(),
        });
        Self { inner }
    }

    /// Replaces the value wholesale.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Patches the value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.value.borrow_mut());
        self.inner.commit();
    }

    pub fn version(&self) -> Version {
        self.inner.version.get()
    }
}

impl<T: Clone + 'static> StateInner<T> {
    fn commit(&self) {
        let version = self.version.get() + 1;
        self.version.set(version);
        trace!("state committed version {version}");

        self.dependents.mark_stale();
        if !self.listeners.is_empty() {
            let me: Weak<dyn Node> = self.me.clone();
            batch::schedule(me);
        }
        batch::committed();
    }
}

impl<T: Clone + 'static> Node for StateInner<T> {
    fn refresh(&self) -> Version {
        self.version.get()
    }

    fn mark_stale(&self) {}

    fn add_dependent(&self, dependent: Weak<dyn Node>) {
        self.dependents.push(dependent);
    }

    fn height(&self) -> usize {
        0
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        // Every commit is a change for root listeners.
        let value = self.value.borrow().clone();
        self.listeners.publish(self.version.get(), &value, |_, _| false);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Default + Clone + 'static> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("value", &self.inner.value.borrow())
            .field("version", &self.inner.version.get())
            .finish()
    }
}

impl<T: Clone + 'static> Readable for State<T> {
    type Value = T;

    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        self.inner.listeners.add(listener, self.inner.version.get(), None)
    }

    fn node(&self) -> Rc<dyn Node> {
        self.inner.clone()
    }
}
