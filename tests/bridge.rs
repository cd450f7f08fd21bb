#![cfg(feature = "bridge-log")]

mod common;

use common::{MockWriter, Recorder};
use std::sync::Arc;
use timber::{DebugTree, Priority};

#[test]
fn log_records_reach_planted_trees() {
    timber::bridge::install().unwrap();
    let recorder = Arc::new(Recorder::default());
    let writer = MockWriter::new();
    timber::plant(recorder.clone());
    timber::plant(Arc::new(DebugTree::new().writer(writer.clone())));

    log::info!("Hello, {}!", "World");
    log::warn!("Hello, {}!", "World");

    let entries = recorder.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].priority, Priority::Info);
    assert_eq!(entries[1].priority, Priority::Warn);
    assert!(entries.iter().all(|e| e.message == "Hello, World!"));
    assert_eq!(entries[0].name, "bridge");

    assert_eq!(
        writer.lines(),
        ["I/bridge: Hello, World!", "W/bridge: Hello, World!"]
    );

    timber::uproot_all();
}
