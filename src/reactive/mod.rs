//! Incremental derivation engine.
//!
//! - [`State`]: a root container mutated by collaborators.
//! - [`Derived`]: a pure function of other containers, kept up to date.
//! - [`batch`] / [`BatchScope`]: group root mutations so listeners observe
//!   them atomically.
//!
//! # Invariants
//! - A derived value always equals its function applied to the current values
//!   of its sources.
//! - Listeners never run while a batch is open, and each derived value is
//!   recomputed at most once per batch when nothing reads it mid-batch.
//! - A recomputed value equal to the previous one is not published.
//!
//! Single-threaded: handles are `Rc` based and the batch context is
//! thread-local.

mod batch;
mod derived;
mod node;
mod state;
mod subscription;

use std::rc::Rc;

pub use batch::{BatchScope, batch, in_batch};
pub use derived::{Derived, derived, derived2, derived3, derived4, derived5};
pub use node::{Node, Version};
pub use state::State;
pub use subscription::Subscription;

/// Read and subscribe contract shared by root containers and derived values.
pub trait Readable: Clone + 'static {
    type Value: Clone + 'static;

    /// Current value, cloned.
    fn get(&self) -> Self::Value {
        self.with(|value| value.clone())
    }

    /// Borrows the current value. `f` must not mutate any container.
    fn with<R>(&self, f: impl FnOnce(&Self::Value) -> R) -> R;

    /// Calls `listener` with the new value after every published change.
    /// The current value is not replayed.
    fn subscribe(&self, listener: impl Fn(&Self::Value) + 'static) -> Subscription;

    /// Graph vertex backing this handle.
    fn node(&self) -> Rc<dyn Node>;

    /// Shorthand for [`derived`] over this single source.
    fn map<T, F>(&self, f: F) -> Derived<T>
    where
        T: Clone + PartialEq + 'static,
        F: Fn(&Self::Value) -> T + 'static,
    {
        derived(self, f)
    }
}
