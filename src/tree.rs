//! The sink side of the facade: the [`Tree`] trait and the types handed
//! to it on every dispatched call.
use std::error::Error;
use std::fmt::{self, Write};

/// The priority of a logging call.
///
/// Priorities are totally ordered from [`Trace`] up to [`Assert`]. The
/// numeric values are stable and safe to persist or send over the wire.
///
/// [`Trace`]: Priority::Trace
/// [`Assert`]: Priority::Assert
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Trace = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    /// The "what a terrible failure" priority, for events that should
    /// never happen.
    Assert = 7,
}

impl Priority {
    /// Returns the single-letter transport label for this priority.
    pub const fn letter(self) -> char {
        match self {
            Priority::Trace => 'V',
            Priority::Debug => 'D',
            Priority::Info => 'I',
            Priority::Warn => 'W',
            Priority::Error => 'E',
            Priority::Assert => 'A',
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.letter())
    }
}

/// Where a logging call was made from.
///
/// A `Callsite` is captured statically at the macro expansion site, so
/// deriving a tag from it costs nothing at runtime. Custom tag closures on
/// [`DebugTree`] receive the callsite and can combine [`name`] with
/// [`file`] and [`line`] however they like.
///
/// [`DebugTree`]: crate::DebugTree
/// [`name`]: Callsite::name
/// [`file`]: Callsite::file
/// [`line`]: Callsite::line
#[derive(Clone, Copy, Debug)]
pub struct Callsite {
    path: &'static str,
    file: &'static str,
    line: u32,
}

impl Callsite {
    /// Returns a `Callsite` from a function path, a file name, and a line
    /// number.
    pub const fn new(path: &'static str, file: &'static str, line: u32) -> Self {
        Callsite { path, file, line }
    }

    #[doc(hidden)]
    pub fn from_fn_path(raw: &'static str, file: &'static str, line: u32) -> Self {
        // `raw` is the type name of a probe function declared inside the
        // logging macro; its final segment is the probe itself.
        let path = match raw.rsplit_once("::") {
            Some((path, _)) => path,
            None => raw,
        };
        Callsite { path, file, line }
    }

    /// The full path of the function containing the logging call.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// The source file containing the logging call.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The source line of the logging call.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The simple name of the nearest enclosing named scope.
    ///
    /// Closures and async blocks show up in the path as synthetic
    /// `{{closure}}` frames; those are stripped, so a call made inside
    /// nested closures resolves to the function that contains them.
    pub fn name(&self) -> &'static str {
        let mut path = self.path;
        while let Some(enclosing) = path.strip_suffix("::{{closure}}") {
            path = enclosing;
        }
        match path.rsplit_once("::") {
            Some((_, name)) => name,
            None => path,
        }
    }
}

/// A single logging call, as seen by a [`Tree`].
///
/// The message text is already final: interpolation happened once in the
/// facade, and the one-shot tag (if any) has been resolved. Records borrow
/// from the dispatching call and only live for the duration of [`Tree::log`].
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    priority: Priority,
    tag: Option<&'a str>,
    callsite: Callsite,
    message: &'a str,
    error: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Record<'a> {
    /// Returns a new `Record`.
    ///
    /// The facade builds records internally; this constructor exists so
    /// custom [`Tree`] implementations can be exercised directly in tests.
    pub fn new(
        priority: Priority,
        tag: Option<&'a str>,
        callsite: Callsite,
        message: &'a str,
        error: Option<&'a (dyn Error + 'static)>,
    ) -> Self {
        Record {
            priority,
            tag,
            callsite,
            message,
            error,
        }
    }

    /// The priority the call was made at.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The explicit one-shot tag, if the calling thread set one.
    ///
    /// When this is `None`, sinks that want a tag derive their own, the
    /// way [`DebugTree`] derives one from the [`callsite`].
    ///
    /// [`DebugTree`]: crate::DebugTree
    /// [`callsite`]: Record::callsite
    pub fn tag(&self) -> Option<&'a str> {
        self.tag
    }

    /// Where the call was made from.
    pub fn callsite(&self) -> &Callsite {
        &self.callsite
    }

    /// The final message text. Empty when the call carried only an error.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The error attached to the call, if any.
    pub fn error(&self) -> Option<&'a (dyn Error + 'static)> {
        self.error
    }
}

/// A destination for logging calls.
///
/// Implementations decide independently whether to record a call
/// ([`is_loggable`]) and how ([`log`]). Both hooks have defaults: an
/// unfiltered tree accepts every priority, and a tree that doesn't
/// override `log` records nothing.
///
/// Trees receive calls once per planted occurrence, in plant order, for
/// each dispatch that passes their filter; no other ordering is
/// guaranteed.
///
/// [`is_loggable`]: Tree::is_loggable
/// [`log`]: Tree::log
///
/// # Examples
///
/// A tree that only records warnings and above:
/// ```
/// use timber::{Priority, Record, Tree};
///
/// #[derive(Debug)]
/// struct WarningsOnly;
///
/// impl Tree for WarningsOnly {
///     fn is_loggable(&self, priority: Priority) -> bool {
///         priority >= Priority::Warn
///     }
///
///     fn log(&self, record: &Record) {
///         eprintln!("{}: {}", record.priority(), record.message());
///     }
/// }
/// ```
pub trait Tree: Send + Sync + fmt::Debug {
    /// Returns whether a call at `priority` should be recorded.
    fn is_loggable(&self, priority: Priority) -> bool {
        let _ = priority;
        true
    }

    /// Records a call that passed [`is_loggable`].
    ///
    /// [`is_loggable`]: Tree::is_loggable
    fn log(&self, record: &Record<'_>) {
        let _ = record;
    }
}

/// Renders an error and its chain of sources, one `Caused by:` line per
/// link.
///
/// This is the text [`DebugTree`] appends to (or substitutes for) the
/// message when a call carries an error.
///
/// [`DebugTree`]: crate::DebugTree
pub fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        // Writing to a String cannot fail.
        let _ = write!(text, "\nCaused by: {}", cause);
        source = cause.source();
    }
    text
}
