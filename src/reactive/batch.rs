//! Batch boundary and notification flush.
//!
//! Root containers commit immediately, but listeners only run once no batch
//! is open. Nested scopes are allowed; the outermost one flushes.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use log::trace;

use super::node::Node;

#[derive(Default)]
struct BatchContext {
    depth: usize,
    flushing: bool,
    pending: Vec<Weak<dyn Node>>,
}

thread_local! {
    static CONTEXT: RefCell<BatchContext> = RefCell::new(BatchContext::default());
}

/// Runs `f` as one atomic batch of root-container mutations.
pub fn batch<R>(f: impl FnOnce() -> R) -> R {
    let _scope = BatchScope::new();
    f()
}

/// True while at least one batch is open on this thread.
pub fn in_batch() -> bool {
    CONTEXT.with(|c| c.borrow().depth > 0)
}

/// Guard form of [`batch`]: notifications are deferred until it is dropped.
pub struct BatchScope {
    // Batches are per thread.
    _not_send: PhantomData<*const ()>,
}

impl BatchScope {
    pub fn new() -> Self {
        CONTEXT.with(|c| c.borrow_mut().depth += 1);
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Default for BatchScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BatchScope {
    fn drop(&mut self) {
        let outermost = CONTEXT.with(|c| {
            let mut c = c.borrow_mut();
            c.depth -= 1;
            c.depth == 0
        });
        if outermost {
            flush();
        }
    }
}

/// Queues a node whose listeners must run at the next flush.
pub(crate) fn schedule(node: Weak<dyn Node>) {
    CONTEXT.with(|c| c.borrow_mut().pending.push(node));
}

/// Called after every root commit.
pub(crate) fn committed() {
    let idle = CONTEXT.with(|c| {
        let c = c.borrow();
        c.depth == 0 && !c.flushing
    });
    if idle {
        flush();
    }
}

struct FlushGuard;

impl Drop for FlushGuard {
    fn drop(&mut self) {
        CONTEXT.with(|c| c.borrow_mut().flushing = false);
    }
}

fn flush() {
    let already_flushing = CONTEXT.with(|c| std::mem::replace(&mut c.borrow_mut().flushing, true));
    if already_flushing {
        return;
    }
    let _guard = FlushGuard;

    loop {
        let pending = CONTEXT.with(|c| std::mem::take(&mut c.borrow_mut().pending));
        if pending.is_empty() {
            break;
        }

        let mut nodes: Vec<Rc<dyn Node>> = Vec::with_capacity(pending.len());
        for node in pending.iter().filter_map(Weak::upgrade) {
            let addr = Rc::as_ptr(&node) as *const ();
            if !nodes.iter().any(|n| Rc::as_ptr(n) as *const () == addr) {
                nodes.push(node);
            }
        }
        // Upstream first, so listeners see settled upstream values.
        nodes.sort_by_key(|n| n.height());

        trace!("flush: notifying {} node(s)", nodes.len());
        for node in nodes {
            node.notify();
        }
    }
}
