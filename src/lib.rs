//! Plant logging trees.
//!
//! # Overview
//!
//! This crate is a small dispatch facade: application code calls
//! priority-scoped macros, and every call is fanned out to the currently
//! planted sinks, called [`Tree`]s. Each tree decides independently
//! whether to record a call ([`Tree::is_loggable`]) and how
//! ([`Tree::log`]). The crate ships one reference sink, [`DebugTree`],
//! which derives a tag from the calling function and splits oversized
//! messages into segments a line-length-limited writer can take.
//!
//! Behavior, formatting, and routing live entirely in trees, so an
//! application installs its logging strategy once at startup and the rest
//! of the code logs unconditionally:
//!
//! ```
//! use std::sync::Arc;
//! use timber::DebugTree;
//!
//! fn main() {
//!     timber::plant(Arc::new(DebugTree::new()));
//!
//!     timber::info!("server listening on {}", 8080);
//! }
//! ```
//! ```log
//! I/main: server listening on 8080
//! ```
//!
//! # Planting and uprooting
//!
//! The registry is process-wide and thread-safe. [`plant`] appends a tree,
//! [`uproot`] removes it again, [`uproot_all`] clears the registry, and
//! [`forest`] returns a snapshot of the planted trees in plant order.
//! Dispatch iterates such a snapshot without holding any lock, so trees
//! are free to block, and free to call back into the registry.
//!
//! # Calling surface
//!
//! Six leveled macros ([`trace!`], [`debug!`], [`info!`], [`warn!`],
//! [`error!`], and [`wtf!`]) plus the generic [`log!`], which takes an
//! explicit [`Priority`]. Each accepts a plain message, a format string
//! with arguments, an error, or an error with a message:
//!
//! ```
//! # use std::io;
//! let err = io::Error::new(io::ErrorKind::TimedOut, "no heartbeat");
//!
//! timber::debug!("retrying");
//! timber::warn!("retrying in {}ms", 250);
//! timber::error!(err: err, "giving up");
//! ```
//!
//! A call with an empty message and no error is a no-op: nothing reaches
//! any tree. Interpolation happens once, in the facade; trees always see
//! final text.
//!
//! # One-shot tags
//!
//! [`tag`] sets a tag for exactly the next call on the calling thread:
//!
//! ```
//! timber::tag("Billing");
//! timber::info!("invoice issued");  // tagged "Billing"
//! timber::info!("invoice mailed");  // back to derived tags
//! ```
//!
//! Tags set on one thread are never visible to another.
//!
//! # Writing a tree
//!
//! Implement [`Tree`] and override the hooks you care about. See the
//! [`tree` module documentation][mod@crate::tree] for the exact contract
//! sinks can rely on.
//!
//! # Feature flags
//!
//! * `full`: Enables all features listed below.
//! * `bridge-log`: Enables the `bridge` module, routing `log` crate
//!   records into the forest.
pub mod debug;
pub mod forest;
pub mod tree;
#[doc(hidden)]
#[macro_use]
mod cfg;
#[macro_use]
mod macros;
mod fail;

cfg_log! {
    pub mod bridge;
}

pub use crate::debug::{DebugTree, MakeStderr, MakeStdout};
pub use crate::forest::{
    as_tree, forest, plant, plant_all, tag, tree_count, uproot, uproot_all,
};
pub use crate::tree::{error_chain, Callsite, Priority, Record, Tree};

// Items that are required for macros but not intended for public API
#[doc(hidden)]
pub mod private {
    pub use crate::forest::dispatch;

    pub fn type_name_of_val<T: ?Sized>(_: &T) -> &'static str {
        std::any::type_name::<T>()
    }

    pub fn as_dyn_error<E>(error: &E) -> &(dyn std::error::Error + 'static)
    where
        E: std::error::Error + 'static,
    {
        error
    }
}
