#![allow(dead_code)]
use std::io;
use std::sync::{Arc, Mutex};
use timber::{Priority, Record, Tree};
use tracing_subscriber::fmt::MakeWriter;

/// One call as seen by a [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub priority: Priority,
    pub tag: Option<String>,
    pub name: String,
    pub message: String,
    pub error: Option<String>,
}

/// A tree that keeps every record it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    entries: Mutex<Vec<Entry>>,
}

impl Recorder {
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }
}

impl Tree for Recorder {
    fn log(&self, record: &Record<'_>) {
        self.entries.lock().unwrap().push(Entry {
            priority: record.priority(),
            tag: record.tag().map(str::to_owned),
            name: record.callsite().name().to_owned(),
            message: record.message().to_owned(),
            error: record.error().map(|error| error.to_string()),
        });
    }
}

/// A [`MakeWriter`] over a shared buffer, split back into lines for
/// assertions. One written line corresponds to one transport call.
#[derive(Clone, Debug, Default)]
pub struct MockWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MockWriter {
    pub fn new() -> Self {
        MockWriter::default()
    }

    pub fn lines(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap();
        let text = String::from_utf8(buf.clone()).expect("mock writer holds UTF-8");
        text.lines().map(str::to_owned).collect()
    }
}

impl io::Write for MockWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MockWriter {
    type Writer = MockWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
