#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use trycatch::{logging::SharedSink, Record};

/// In-memory sink that keeps `LEVEL:message` lines.
#[derive(Clone, Default)]
pub struct Capture {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sink(&self) -> SharedSink {
        let lines = Arc::clone(&self.lines);
        Arc::new(move |record: &Record<'_>| {
            lines
                .lock()
                .push(format!("{}:{}", record.level(), record.args()));
        })
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}
