use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::trace;

use super::batch;
use super::node::{Dependents, Listeners, Node, Version};
use super::subscription::Subscription;
use super::Readable;

/// A read-only value computed from root containers or other derived values.
///
/// The value is computed once on construction and afterwards only when it is
/// read (or has listeners) after an upstream change. A recomputed value equal
/// to the previous one is not published: the version stays put and nothing
/// downstream hears about it.
pub struct Derived<T> {
    inner: Rc<DerivedInner<T>>,
}

struct DerivedInner<T> {
    compute: Box<dyn Fn() -> T>,
    sources: Vec<Rc<dyn Node>>,
    seen: RefCell<Vec<Version>>,
    value: RefCell<T>,
    stale: Cell<bool>,
    version: Cell<Version>,
    evaluations: Cell<u64>,
    height: usize,
    dependents: Dependents,
    listeners: Listeners<T>,
    me: Weak<DerivedInner<T>>,
}

impl<T: Clone + PartialEq + 'static> Derived<T> {
    /// Builds a derived value from explicit source nodes and a closure that
    /// reads them. Prefer [`derived`] and friends.
    pub fn from_sources(sources: Vec<Rc<dyn Node>>, compute: impl Fn() -> T + 'static) -> Self {
        let seen: Vec<Version> = sources.iter().map(|s| s.refresh()).collect();
        let height = sources.iter().map(|s| s.height() + 1).max().unwrap_or(1);
        let initial = compute();

        let inner = Rc::new_cyclic(|me| DerivedInner {
            compute: Box::new(compute),
            sources,
            seen: RefCell::new(seen),
            value: RefCell::new(initial),
            stale: Cell::new(false),
            version: Cell::new(1),
            evaluations: Cell::new(1),
            height,
            dependents: Dependents::default(),
            listeners: Listeners::new(),
            me: me.clone(),
        });

        let weak = Rc::downgrade(&inner);
        let edge: Weak<dyn Node> = weak;
        for source in &inner.sources {
            source.add_dependent(edge.clone());
        }

        Self { inner }
    }

    /// Number of times the compute closure has run.
    pub fn evaluations(&self) -> u64 {
        self.inner.evaluations.get()
    }

    pub fn version(&self) -> Version {
        self.inner.refresh()
    }
}

impl<T: Clone + PartialEq + 'static> Node for DerivedInner<T> {
    fn refresh(&self) -> Version {
        if !self.stale.get() {
            return self.version.get();
        }

        let current: Vec<Version> = self.sources.iter().map(|s| s.refresh()).collect();
        if *self.seen.borrow() != current {
            let next = (self.compute)();
            self.evaluations.set(self.evaluations.get() + 1);

            let changed = *self.value.borrow() != next;
            if changed {
                *self.value.borrow_mut() = next;
                self.version.set(self.version.get() + 1);
            }
            trace!(
                "derived recomputed (height {}, changed: {changed})",
                self.height
            );
            *self.seen.borrow_mut() = current;
        }

        self.stale.set(false);
        self.version.get()
    }

    fn mark_stale(&self) {
        if self.stale.replace(true) {
            return;
        }
        if !self.listeners.is_empty() {
            let me: Weak<dyn Node> = self.me.clone();
            batch::schedule(me);
        }
        self.dependents.mark_stale();
    }

    fn add_dependent(&self, dependent: Weak<dyn Node>) {
        self.dependents.push(dependent);
    }

    fn height(&self) -> usize {
        self.height
    }

    fn notify(&self) {
        let version = self.refresh();
        if self.listeners.is_empty() {
            return;
        }
        let value = self.value.borrow().clone();
        self.listeners.publish(version, &value, |last, next| last == next);
    }
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Derived")
            .field("value", &self.inner.value.borrow())
            .field("stale", &self.inner.stale.get())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Readable for Derived<T> {
    type Value = T;

    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.refresh();
        f(&self.inner.value.borrow())
    }

    fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let version = self.inner.refresh();
        let current = self.inner.value.borrow().clone();
        self.inner.listeners.add(listener, version, Some(current))
    }

    fn node(&self) -> Rc<dyn Node> {
        self.inner.clone()
    }
}

/// Derives a value from one source.
pub fn derived<A, T, F>(a: &A, f: F) -> Derived<T>
where
    A: Readable,
    T: Clone + PartialEq + 'static,
    F: Fn(&A::Value) -> T + 'static,
{
    let ra = a.clone();
    Derived::from_sources(vec![a.node()], move || ra.with(|a| f(a)))
}

/// Derives a value from two sources.
pub fn derived2<A, B, T, F>(a: &A, b: &B, f: F) -> Derived<T>
where
    A: Readable,
    B: Readable,
    T: Clone + PartialEq + 'static,
    F: Fn(&A::Value, &B::Value) -> T + 'static,
{
    let (ra, rb) = (a.clone(), b.clone());
    Derived::from_sources(vec![a.node(), b.node()], move || {
        ra.with(|a| rb.with(|b| f(a, b)))
    })
}

/// Derives a value from three sources.
pub fn derived3<A, B, C, T, F>(a: &A, b: &B, c: &C, f: F) -> Derived<T>
where
    A: Readable,
    B: Readable,
    C: Readable,
    T: Clone + PartialEq + 'static,
    F: Fn(&A::Value, &B::Value, &C::Value) -> T + 'static,
{
    let (ra, rb, rc) = (a.clone(), b.clone(), c.clone());
    Derived::from_sources(vec![a.node(), b.node(), c.node()], move || {
        ra.with(|a| rb.with(|b| rc.with(|c| f(a, b, c))))
    })
}

/// Derives a value from four sources.
pub fn derived4<A, B, C, D, T, F>(a: &A, b: &B, c: &C, d: &D, f: F) -> Derived<T>
where
    A: Readable,
    B: Readable,
    C: Readable,
    D: Readable,
    T: Clone + PartialEq + 'static,
    F: Fn(&A::Value, &B::Value, &C::Value, &D::Value) -> T + 'static,
{
    let (ra, rb, rc, rd) = (a.clone(), b.clone(), c.clone(), d.clone());
    Derived::from_sources(vec![a.node(), b.node(), c.node(), d.node()], move || {
        ra.with(|a| rb.with(|b| rc.with(|c| rd.with(|d| f(a, b, c, d)))))
    })
}

/// Derives a value from five sources.
pub fn derived5<A, B, C, D, E, T, F>(a: &A, b: &B, c: &C, d: &D, e: &E, f: F) -> Derived<T>
where
    A: Readable,
    B: Readable,
    C: Readable,
    D: Readable,
    E: Readable,
    T: Clone + PartialEq + 'static,
    F: Fn(&A::Value, &B::Value, &C::Value, &D::Value, &E::Value) -> T + 'static,
{
    let (ra, rb, rc, rd, re) = (a.clone(), b.clone(), c.clone(), d.clone(), e.clone());
    Derived::from_sources(
        vec![a.node(), b.node(), c.node(), d.node(), e.node()],
        move || ra.with(|a| rb.with(|b| rc.with(|c| rd.with(|d| re.with(|e| f(a, b, c, d, e)))))),
    )
}
