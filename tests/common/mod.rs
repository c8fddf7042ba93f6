//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use map_state_reducer::Action;
use parking_lot::Mutex;

/// Records which mapper or reducer ran, in order.
pub type SpyLog = Arc<Mutex<Vec<&'static str>>>;

pub fn spy_log() -> SpyLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Minimal action carrying only its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestAction {
    pub kind: &'static str,
}

impl TestAction {
    pub fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

impl Action for TestAction {
    fn action_type(&self) -> &str {
        self.kind
    }
}

/// Counter reducer: `INCREMENT` adds one, anything else leaves the state.
pub fn counter(state: i64, action: TestAction) -> i64 {
    match action.kind {
        "INCREMENT" => state + 1,
        _ => state,
    }
}

/// Mapper that records its call under `label` and applies `f`.
pub fn spying_mapper(
    log: &SpyLog,
    label: &'static str,
    f: fn(i64) -> i64,
) -> impl Fn(i64) -> i64 + Send + Sync + 'static {
    let log = Arc::clone(log);
    move |state| {
        log.lock().push(label);
        f(state)
    }
}

/// Counter reducer that records its call.
pub fn spying_counter(log: &SpyLog) -> impl Fn(i64, TestAction) -> i64 + Send + Sync + 'static {
    let log = Arc::clone(log);
    move |state, action| {
        log.lock().push("reducer");
        counter(state, action)
    }
}
