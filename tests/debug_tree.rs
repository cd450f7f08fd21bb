mod common;

use common::MockWriter;
use std::io;
use timber::{Callsite, DebugTree, Priority, Record, Tree};

const CALLSITE: Callsite = Callsite::new("app::net::fetch_page", "net.rs", 41);

fn tree() -> (DebugTree<MockWriter>, MockWriter) {
    let writer = MockWriter::new();
    (DebugTree::new().writer(writer.clone()), writer)
}

#[test]
fn short_message_is_a_single_transport_line() {
    let (tree, writer) = tree();

    tree.log(&Record::new(
        Priority::Debug,
        None,
        CALLSITE,
        "Hello, world!",
        None,
    ));

    assert_eq!(writer.lines(), ["D/fetch_page: Hello, world!"]);
}

#[test]
fn priorities_map_to_single_letters() {
    let (tree, writer) = tree();

    for priority in [
        Priority::Trace,
        Priority::Debug,
        Priority::Info,
        Priority::Warn,
        Priority::Error,
        Priority::Assert,
    ] {
        tree.log(&Record::new(priority, None, CALLSITE, "x", None));
    }

    let prefixes: Vec<_> = writer
        .lines()
        .into_iter()
        .map(|line| line.chars().next().unwrap())
        .collect();
    assert_eq!(prefixes, ['V', 'D', 'I', 'W', 'E', 'A']);
}

#[test]
fn long_message_is_split_into_chunks() {
    let (tree, writer) = tree();
    let message = format!("{}\n{}\n{}", "a".repeat(3000), "b".repeat(6000), "c".repeat(3000));

    tree.log(&Record::new(
        Priority::Debug,
        Some("Chunky"),
        CALLSITE,
        &message,
        None,
    ));

    assert_eq!(
        writer.lines(),
        [
            format!("D/Chunky: {}", "a".repeat(3000)),
            format!("D/Chunky: {}", "b".repeat(4000)),
            format!("D/Chunky: {}", "b".repeat(2000)),
            format!("D/Chunky: {}", "c".repeat(3000)),
        ]
    );
}

#[test]
fn chunks_break_at_newlines_first() {
    let (tree, writer) = tree();
    let message = format!("{}\n{}", "a".repeat(3000), "b".repeat(3000));

    tree.log(&Record::new(
        Priority::Debug,
        Some("Chunky"),
        CALLSITE,
        &message,
        None,
    ));

    assert_eq!(
        writer.lines(),
        [
            format!("D/Chunky: {}", "a".repeat(3000)),
            format!("D/Chunky: {}", "b".repeat(3000)),
        ]
    );
}

#[test]
fn blank_line_is_preserved_as_an_empty_chunk() {
    let (tree, writer) = tree();

    tree.log(&Record::new(
        Priority::Info,
        Some("T"),
        CALLSITE,
        "first\n\nsecond",
        None,
    ));

    assert_eq!(writer.lines(), ["I/T: first", "I/T: ", "I/T: second"]);
}

#[test]
fn trailing_newline_adds_no_phantom_chunk() {
    let (tree, writer) = tree();

    tree.log(&Record::new(Priority::Info, Some("T"), CALLSITE, "done\n", None));

    assert_eq!(writer.lines(), ["I/T: done"]);
}

#[test]
fn derived_tag_is_truncated_to_the_transport_limit() {
    let (tree, writer) = tree();
    let callsite = Callsite::new(
        "app::worker::a_function_name_well_beyond_the_limit",
        "worker.rs",
        5,
    );

    tree.log(&Record::new(Priority::Debug, None, callsite, "hi", None));

    assert_eq!(writer.lines(), ["D/a_function_name_well_be: hi"]);
}

#[test]
fn explicit_tag_is_never_truncated() {
    let (tree, writer) = tree();
    let tag = "a_tag_well_beyond_the_transport_limit";

    tree.log(&Record::new(Priority::Debug, Some(tag), CALLSITE, "hi", None));

    assert_eq!(writer.lines(), [format!("D/{}: hi", tag)]);
}

#[test]
fn closure_frames_are_stripped_from_derived_tags() {
    let (tree, writer) = tree();
    let callsite = Callsite::new(
        "app::worker::run::{{closure}}::{{closure}}",
        "worker.rs",
        9,
    );

    tree.log(&Record::new(Priority::Debug, None, callsite, "hi", None));

    assert_eq!(writer.lines(), ["D/run: hi"]);
}

#[test]
fn custom_tag_closure_overrides_derivation() {
    let writer = MockWriter::new();
    let tree = DebugTree::new()
        .writer(writer.clone())
        .with_tag(|callsite| format!("{}:{}", callsite.file(), callsite.line()));

    tree.log(&Record::new(Priority::Info, None, CALLSITE, "hi", None));

    assert_eq!(writer.lines(), ["I/net.rs:41: hi"]);
}

#[test]
fn record_tag_beats_the_custom_closure() {
    let writer = MockWriter::new();
    let tree = DebugTree::new()
        .writer(writer.clone())
        .with_tag(|_| String::from("FromClosure"));

    tree.log(&Record::new(
        Priority::Info,
        Some("FromRecord"),
        CALLSITE,
        "hi",
        None,
    ));

    assert_eq!(writer.lines(), ["I/FromRecord: hi"]);
}

#[test]
fn error_chain_is_appended_after_the_message() {
    let (tree, writer) = tree();
    let err = io::Error::new(io::ErrorKind::NotFound, "missing widget");

    tree.log(&Record::new(
        Priority::Error,
        Some("T"),
        CALLSITE,
        "request failed",
        Some(&err),
    ));

    assert_eq!(
        writer.lines(),
        ["E/T: request failed", "E/T: missing widget"]
    );
}

#[test]
fn error_alone_is_written_without_a_leading_blank() {
    let (tree, writer) = tree();
    let err = io::Error::new(io::ErrorKind::NotFound, "missing widget");

    tree.log(&Record::new(Priority::Error, Some("T"), CALLSITE, "", Some(&err)));

    assert_eq!(writer.lines(), ["E/T: missing widget"]);
}
