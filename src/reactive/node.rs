//! Graph plumbing shared by root containers and derived values.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::subscription::Subscription;

/// Monotonic counter bumped every time a node publishes a new value.
pub type Version = u64;

/// A vertex of the dependency graph.
///
/// Staleness is pushed downstream eagerly; values are pulled upstream lazily.
pub trait Node {
    /// Brings the node up to date and returns its current version.
    fn refresh(&self) -> Version;

    /// Marks the node and everything downstream of it as stale.
    fn mark_stale(&self);

    /// Registers a node that reads this one.
    fn add_dependent(&self, dependent: Weak<dyn Node>);

    /// Longest path from a root container. Roots are 0.
    fn height(&self) -> usize;

    /// Refreshes the node and runs its listeners if the published version
    /// moved since they were last called.
    fn notify(&self);
}

/// Downstream edges. Held weakly so a derived value dies with its last handle.
#[derive(Default)]
pub(crate) struct Dependents {
    list: RefCell<Vec<Weak<dyn Node>>>,
}

impl Dependents {
    pub(crate) fn push(&self, dependent: Weak<dyn Node>) {
        self.list.borrow_mut().push(dependent);
    }

    pub(crate) fn mark_stale(&self) {
        let alive: Vec<Rc<dyn Node>> = {
            let mut list = self.list.borrow_mut();
            list.retain(|d| d.strong_count() > 0);
            list.iter().filter_map(Weak::upgrade).collect()
        };

        for dependent in alive {
            dependent.mark_stale();
        }
    }
}

type Listener<T> = Rc<dyn Fn(&T)>;

struct Slot<T> {
    id: usize,
    /// Last version this listener has been brought up to.
    seen: Version,
    /// Last value it received (or the value it subscribed at). Only kept
    /// for nodes that publish by value.
    last: Option<T>,
    listener: Listener<T>,
}

type Slots<T> = RefCell<Vec<Slot<T>>>;

/// Change listeners attached to one node.
pub(crate) struct Listeners<T> {
    slots: Rc<Slots<T>>,
    next_id: Cell<usize>,
}

impl<T: Clone + 'static> Listeners<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    /// Registers `listener` as already up to date with `version` (and with
    /// `current`, when given), so it only hears later changes.
    pub(crate) fn add(
        &self,
        listener: impl Fn(&T) + 'static,
        version: Version,
        current: Option<T>,
    ) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let listener: Listener<T> = Rc::new(listener);
        self.slots.borrow_mut().push(Slot {
            id,
            seen: version,
            last: current,
            listener,
        });

        let slots = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.borrow_mut().retain(|slot| slot.id != id);
            }
        })
    }

    /// Delivers `value` at `version` to every listener that has not seen it.
    /// Listeners that track values skip it when `same` says it matches what
    /// they last received.
    pub(crate) fn publish(&self, version: Version, value: &T, same: impl Fn(&T, &T) -> bool) {
        let due: Vec<Listener<T>> = {
            let mut slots = self.slots.borrow_mut();
            let mut due = Vec::new();
            for slot in slots.iter_mut().filter(|slot| slot.seen < version) {
                slot.seen = version;
                if let Some(last) = slot.last.as_mut() {
                    if same(last, value) {
                        continue;
                    }
                    *last = value.clone();
                }
                due.push(slot.listener.clone());
            }
            due
        };

        // Listeners may subscribe or unsubscribe while running.
        for listener in due {
            listener(value);
        }
    }
}
