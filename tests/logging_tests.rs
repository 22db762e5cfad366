mod common;

use std::{sync::Arc, thread};

use common::Capture;
use parking_lot::Mutex;
use proptest::prelude::*;
use trycatch::{log_to, logging::SharedSink, LogLevel, Logger, Record};

const EVENT_LEVELS: [LogLevel; 5] = [
    LogLevel::Trace,
    LogLevel::Debug,
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Error,
];

#[test]
fn test_info_threshold_delivers_three_of_four() {
    let capture = Capture::new();
    let logger = Logger::new(LogLevel::Info, Some(capture.sink()));

    log_to!(logger, LogLevel::Debug, "hidden");
    log_to!(logger, LogLevel::Info, "show {}", 1);
    log_to!(logger, LogLevel::Warn, "warn {}", "x");
    log_to!(logger, LogLevel::Error, "err");

    assert_eq!(capture.lines(), ["INFO:show 1", "WARN:warn x", "ERROR:err"]);
}

#[test]
fn test_replaced_sink_receives_the_next_call() {
    let first = Capture::new();
    let second = Capture::new();
    let logger = Logger::new(LogLevel::Trace, Some(first.sink()));

    log_to!(logger, LogLevel::Info, "one");
    logger.set_sink(Some(second.sink()));
    log_to!(logger, LogLevel::Info, "two");

    assert_eq!(first.lines(), ["INFO:one"]);
    assert_eq!(second.lines(), ["INFO:two"]);
}

#[test]
fn test_sink_change_is_visible_from_other_threads() {
    let capture = Capture::new();
    let logger = Arc::new(Logger::new(LogLevel::Trace, None));
    logger.set_sink(Some(capture.sink()));

    let worker = Arc::clone(&logger);
    thread::spawn(move || log_to!(worker, LogLevel::Warn, "from {}", "worker"))
        .join()
        .unwrap();

    assert_eq!(capture.lines(), ["WARN:from worker"]);
}

#[test]
fn test_level_round_trips() {
    let logger = Logger::new(LogLevel::Trace, None);
    for level in LogLevel::ALL {
        logger.set_level(level);
        assert_eq!(logger.level(), level);
    }
}

#[test]
fn test_unset_sink_drops_events() {
    let capture = Capture::new();
    let logger = Logger::new(LogLevel::Trace, Some(capture.sink()));

    let previous = logger.replace_sink(None);
    log_to!(logger, LogLevel::Error, "lost");

    assert!(previous.is_some());
    assert!(capture.lines().is_empty());
}

#[test]
fn test_records_carry_call_site() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let out = Arc::clone(&seen);
    let sink: SharedSink = Arc::new(move |record: &Record<'_>| {
        out.lock().push((record.file(), record.line(), record.func()));
    });
    let logger = Logger::new(LogLevel::Trace, Some(sink));

    let line = line!() + 1;
    log_to!(logger, LogLevel::Info, "here");

    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, file!());
    assert_eq!(seen[0].1, line);
    assert!(seen[0].2.ends_with("test_records_carry_call_site"), "{}", seen[0].2);
}

#[test]
fn test_failing_sink_is_swallowed() {
    struct Broken;

    impl trycatch::LogSink for Broken {
        fn write_log(&self, _record: &Record<'_>) -> std::io::Result<()> {
            Err(std::io::Error::other("disk gone"))
        }
    }

    let logger = Logger::new(LogLevel::Trace, Some(Arc::new(Broken)));
    log_to!(logger, LogLevel::Error, "still fine");
}

fn level_strategy() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

fn event_strategy() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(EVENT_LEVELS.to_vec())
}

proptest! {
    #[test]
    fn delivered_iff_event_at_or_above_threshold(threshold in level_strategy(), event in event_strategy()) {
        let capture = Capture::new();
        let logger = Logger::new(threshold, Some(capture.sink()));

        log_to!(logger, event, "event");

        let delivered = !capture.lines().is_empty();
        prop_assert_eq!(delivered, event >= threshold);
        prop_assert_eq!(logger.enabled(event), event >= threshold);
    }
}
