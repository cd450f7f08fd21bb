//! The process-wide registry of planted trees and the dispatch path that
//! fans calls out to them.
//!
//! The registry is guarded by a single mutex, and dispatch never holds it
//! while a sink runs: each call clones a snapshot of the planted trees,
//! releases the lock, and iterates the snapshot. A slow sink therefore
//! cannot stall [`plant`]/[`uproot`] on other threads, and a sink that
//! calls back into the registry does not deadlock.
use crate::fail;
use crate::tree::{Callsite, Priority, Record, Tree};
use std::borrow::Cow;
use std::cell::Cell;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

static FOREST: Mutex<Vec<Arc<dyn Tree>>> = Mutex::new(Vec::new());

static TRUNK: OnceLock<Arc<Trunk>> = OnceLock::new();

thread_local! {
    /// One-shot tag for the next dispatch on this thread.
    static EXPLICIT_TAG: Cell<Option<String>> = const { Cell::new(None) };
}

fn lock() -> MutexGuard<'static, Vec<Arc<dyn Tree>>> {
    // The guarded Vec is never left torn by a panicking sink (sinks run
    // with the lock released), so a poisoned lock is still usable.
    FOREST.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Adds `tree` to the forest. Every subsequent dispatch call reaches it,
/// in plant order, until it is uprooted.
///
/// Planting the same tree twice is allowed and doubles its output.
///
/// # Panics
///
/// Panics when handed the composite returned by [`as_tree`], which would
/// otherwise recurse unboundedly.
///
/// # Examples
///
/// ```
/// use timber::DebugTree;
/// use std::sync::Arc;
///
/// timber::plant(Arc::new(DebugTree::new()));
/// timber::info!("Hello, world!");
/// # timber::uproot_all();
/// ```
pub fn plant(tree: Arc<dyn Tree>) {
    if let Some(trunk) = TRUNK.get() {
        if Arc::as_ptr(&tree) as *const () == Arc::as_ptr(trunk) as *const () {
            fail::plant_into_self();
        }
    }
    lock().push(tree);
}

/// Plants every tree in the iterator, in order.
pub fn plant_all<I>(trees: I)
where
    I: IntoIterator<Item = Arc<dyn Tree>>,
{
    for tree in trees {
        plant(tree);
    }
}

/// Removes the first planted occurrence of `tree`, compared by identity.
///
/// # Panics
///
/// Panics if `tree` is not currently planted.
pub fn uproot(tree: &Arc<dyn Tree>) {
    let mut planted = lock();
    match planted.iter().position(|candidate| Arc::ptr_eq(candidate, tree)) {
        Some(index) => {
            planted.remove(index);
        }
        None => {
            drop(planted);
            fail::uproot_not_planted(tree.as_ref());
        }
    }
}

/// Removes every planted tree. Subsequent dispatch calls reach nothing.
pub fn uproot_all() {
    lock().clear();
}

/// Returns a snapshot of the currently planted trees, oldest first.
///
/// The snapshot is a copy: planting or uprooting afterwards does not
/// affect it.
pub fn forest() -> Vec<Arc<dyn Tree>> {
    lock().clone()
}

/// Returns the number of currently planted trees.
pub fn tree_count() -> usize {
    lock().len()
}

/// Returns a single [`Tree`] standing in for every currently planted
/// tree.
///
/// The composite resolves the forest at call time, so trees planted after
/// `as_tree` is called are still reached. It cannot itself be planted.
pub fn as_tree() -> Arc<dyn Tree> {
    TRUNK.get_or_init(|| Arc::new(Trunk)).clone()
}

/// Sets a one-shot tag for the next logging call on the calling thread.
///
/// The tag applies to exactly one call: the next dispatch on this thread
/// consumes it, even when that dispatch turns out to record nothing. It is
/// never visible to other threads. Calling `tag` again before logging
/// replaces the pending tag.
///
/// # Examples
///
/// ```
/// timber::tag("ManualTag");
/// timber::debug!("tagged");   // recorded with tag "ManualTag"
/// timber::debug!("untagged"); // sinks derive their own tag again
/// ```
pub fn tag(tag: impl Into<String>) {
    EXPLICIT_TAG.with(|slot| slot.set(Some(tag.into())));
}

#[doc(hidden)]
pub fn dispatch(
    priority: Priority,
    callsite: Callsite,
    error: Option<&(dyn std::error::Error + 'static)>,
    message: Option<fmt::Arguments<'_>>,
) {
    // The one-shot tag is consumed up front, even when the call turns out
    // to be a no-op.
    let tag = EXPLICIT_TAG.with(Cell::take);

    let text: Cow<str> = match message {
        Some(args) => match args.as_str() {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Owned(args.to_string()),
        },
        None => Cow::Borrowed(""),
    };

    if text.is_empty() && error.is_none() {
        return;
    }

    let planted = forest();
    if planted.is_empty() {
        return;
    }

    let record = Record::new(priority, tag.as_deref(), callsite, &text, error);
    for tree in &planted {
        if tree.is_loggable(priority) {
            tree.log(&record);
        }
    }
}

/// The composite behind [`as_tree`]: re-dispatches every record to the
/// planted trees.
#[derive(Debug)]
struct Trunk;

impl Tree for Trunk {
    fn log(&self, record: &Record<'_>) {
        for tree in forest() {
            if tree.is_loggable(record.priority()) {
                tree.log(record);
            }
        }
    }
}
