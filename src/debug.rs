//! The reference sink: derives tags from the callsite and chunks oversized
//! messages for a line-length-limited writer.
use crate::tree::{error_chain, Callsite, Record, Tree};
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use tracing_subscriber::fmt::MakeWriter;

/// Longest message segment emitted in a single write.
pub(crate) const MAX_MESSAGE_LEN: usize = 4000;

/// Longest tag the default derivation will produce.
pub(crate) const MAX_TAG_LEN: usize = 23;

type TagFn = Box<dyn Fn(&Callsite) -> String + Send + Sync>;

/// A [`Tree`] that writes every record as `P/tag: message` lines.
///
/// When the facade supplies no explicit tag, `DebugTree` derives one from
/// the record's [`Callsite`]: the name of the nearest enclosing named
/// scope, truncated to 23 characters. The derivation can be replaced with
/// [`with_tag`].
///
/// Messages are split into segments of at most 4000 bytes before writing,
/// one write per segment. Newlines are always respected: no segment spans
/// two lines of the original message, and lines longer than the limit are
/// hard-split with no soft-wrapping. An attached error is rendered with
/// [`error_chain`] and appended after the message.
///
/// By default output goes to stderr; use [`writer`] to redirect it.
///
/// [`with_tag`]: DebugTree::with_tag
/// [`writer`]: DebugTree::writer
///
/// # Examples
///
/// ```
/// use timber::DebugTree;
/// use std::sync::Arc;
///
/// timber::plant(Arc::new(DebugTree::new()));
/// # timber::uproot_all();
/// ```
///
/// Appending the line number to the derived tag:
/// ```
/// use timber::DebugTree;
///
/// let tree = DebugTree::new()
///     .with_tag(|callsite| format!("{}:{}", callsite.name(), callsite.line()));
/// ```
pub struct DebugTree<W = MakeStderr> {
    make_writer: W,
    tag: Option<TagFn>,
}

impl DebugTree {
    /// Returns a `DebugTree` that writes to stderr with the default tag
    /// derivation.
    pub fn new() -> Self {
        DebugTree {
            make_writer: MakeStderr,
            tag: None,
        }
    }
}

impl Default for DebugTree {
    fn default() -> Self {
        DebugTree::new()
    }
}

impl<W> DebugTree<W> {
    /// Sets the writer that segments are emitted to.
    pub fn writer<W2>(self, make_writer: W2) -> DebugTree<W2>
    where
        W2: for<'a> MakeWriter<'a>,
    {
        DebugTree {
            make_writer,
            tag: self.tag,
        }
    }

    /// Replaces the default tag derivation.
    ///
    /// The closure receives the record's [`Callsite`] and its output is
    /// used verbatim, without truncation.
    pub fn with_tag<F>(mut self, tag: F) -> Self
    where
        F: Fn(&Callsite) -> String + Send + Sync + 'static,
    {
        self.tag = Some(Box::new(tag));
        self
    }

    fn derive_tag(&self, callsite: &Callsite) -> Cow<'static, str> {
        match &self.tag {
            Some(tag) => Cow::Owned(tag(callsite)),
            None => Cow::Borrowed(truncated(callsite.name())),
        }
    }
}

impl<W> fmt::Debug for DebugTree<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DebugTree").finish_non_exhaustive()
    }
}

impl<W> Tree for DebugTree<W>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fn log(&self, record: &Record<'_>) {
        let tag = match record.tag() {
            Some(tag) => Cow::Borrowed(tag),
            None => self.derive_tag(record.callsite()),
        };

        let text: Cow<str> = match record.error() {
            Some(error) if record.message().is_empty() => Cow::Owned(error_chain(error)),
            Some(error) => {
                Cow::Owned(format!("{}\n{}", record.message(), error_chain(error)))
            }
            None => Cow::Borrowed(record.message()),
        };

        let mut writer = self.make_writer.make_writer();
        for chunk in chunks(&text) {
            // One write per segment; write failures are not observable
            // through the logging surface.
            let _ = writeln!(writer, "{}/{}: {}", record.priority(), tag, chunk);
        }
    }
}

/// A [`MakeWriter`] that writes to stdout, usable in type signatures.
#[derive(Clone, Debug)]
pub struct MakeStdout;

/// A [`MakeWriter`] that writes to stderr, usable in type signatures.
#[derive(Clone, Debug)]
pub struct MakeStderr;

impl<'a> MakeWriter<'a> for MakeStdout {
    type Writer = io::Stdout;

    fn make_writer(&'a self) -> Self::Writer {
        io::stdout()
    }
}

impl<'a> MakeWriter<'a> for MakeStderr {
    type Writer = io::Stderr;

    fn make_writer(&'a self) -> Self::Writer {
        io::stderr()
    }
}

/// Truncates a derived tag to at most [`MAX_TAG_LEN`] characters.
fn truncated(name: &str) -> &str {
    match name.char_indices().nth(MAX_TAG_LEN) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

/// Returns the bounded segments of `text`, in order.
///
/// Each line of `text` is yielded independently: lines within the length
/// limit come out whole, longer lines are hard-split into maximal
/// segments with a shorter remainder. A blank line yields one empty
/// segment; a trailing newline yields nothing after it.
pub(crate) fn chunks(text: &str) -> Chunks<'_> {
    Chunks { text, pos: 0 }
}

pub(crate) struct Chunks<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.pos >= self.text.len() {
            return None;
        }
        let line_end = match self.text[self.pos..].find('\n') {
            Some(offset) => self.pos + offset,
            None => self.text.len(),
        };
        if line_end - self.pos <= MAX_MESSAGE_LEN {
            let chunk = &self.text[self.pos..line_end];
            // Step over the newline; at end of text this leaves `pos`
            // past the length, which ends the iteration.
            self.pos = line_end + 1;
            Some(chunk)
        } else {
            let split = floor_char_boundary(self.text, self.pos + MAX_MESSAGE_LEN);
            let chunk = &self.text[self.pos..split];
            self.pos = split;
            Some(chunk)
        }
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
