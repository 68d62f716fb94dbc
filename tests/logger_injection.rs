use neurogames_log::{DomainLogger, DynLogger, LogLevel, LoggerResult};
use std::sync::{Arc, Mutex};

struct CaptureLogger {
    messages: Mutex<Vec<String>>,
}

impl CaptureLogger {
    fn new() -> Self { Self { messages: Mutex::new(Vec::new()) } }
}

impl DomainLogger for CaptureLogger {
    fn log(&self, level: LogLevel, msg: &str) -> LoggerResult<()> {
        self.messages.lock().unwrap().push(format!("{}:{}", level, msg));
        Ok(())
    }
}

#[test]
fn test_provided_methods_route_through_log() {
    let capture = Arc::new(CaptureLogger::new());
    let logger = capture.clone() as DynLogger;

    logger.debug("zero").unwrap();
    logger.info("one").unwrap();
    logger.warning("two").unwrap();
    logger.error("three").unwrap();
    logger.log_game_event("SCORE", Some("p7"), Some("300")).unwrap();

    let msgs = capture.messages.lock().unwrap();
    assert_eq!(
        *msgs,
        vec![
            "DEBUG:zero",
            "INFO:one",
            "WARNING:two",
            "ERROR:three",
            "INFO:GAME_EVENT: SCORE | Player: p7 | Details: 300",
        ]
    );
}

#[test]
fn test_injected_logger_sees_no_empty_event() {
    let capture = Arc::new(CaptureLogger::new());
    let logger = capture.clone() as DynLogger;

    assert!(logger.log_game_event("", None, None).is_err());
    assert!(capture.messages.lock().unwrap().is_empty());
}
