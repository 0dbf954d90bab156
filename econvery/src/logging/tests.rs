use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::logging::{
    DevelopmentFormatter, LogError, level_to_log_level, log_level_to_level, parse_log_level,
};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_init_without_outputs_is_noop() {
    let config = LoggingConfig {
        level: LogLevel::Debug,
        format: LogFormat::Pretty,
        file: None,
        console: false,
    };

    assert!(crate::logging::init(&config).is_ok());
}

#[test]
fn test_development_formatter_output() {
    let capture = CaptureWriter::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .event_format(DevelopmentFormatter::new(false))
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let span = tracing::info_span!("rank");
        let _entered = span.enter();
        tracing::info!(papers = 3, "Ranked batch");
    });

    let output = capture.contents();
    assert!(output.contains("INFO "));
    assert!(output.contains("rank: "));
    assert!(output.contains("Ranked batch"));
    assert!(output.contains("papers=3"));
    assert!(!output.contains("\x1b["));
    assert!(output.ends_with('\n'));
}

#[test]
fn test_development_formatter_ansi() {
    let capture = CaptureWriter::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .event_format(DevelopmentFormatter::new(true))
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!("Unknown interest label");
    });

    assert!(capture.contents().contains("\x1b[33mWARN \x1b[0m"));
}

#[test]
fn test_non_blocking_file_creates_directories() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("nested").join("econvery.log");

    let (mut writer, guard) = super::create_non_blocking_file(&log_path).unwrap();
    writer.write_all(b"scored 1 paper\n").unwrap();
    drop(guard);

    let written = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(written, "scored 1 paper\n");
}

#[test]
fn test_level_conversion() {
    assert_eq!(parse_log_level("trace").unwrap(), LogLevel::Trace);
    assert_eq!(parse_log_level("DEBUG").unwrap(), LogLevel::Debug);
    assert_eq!(parse_log_level("info").unwrap(), LogLevel::Info);
    assert_eq!(parse_log_level("warning").unwrap(), LogLevel::Warn);
    assert_eq!(parse_log_level("error").unwrap(), LogLevel::Error);
    assert!(matches!(
        parse_log_level("invalid"),
        Err(LogError::InvalidLogLevel(_))
    ));

    for level in [
        tracing::Level::TRACE,
        tracing::Level::DEBUG,
        tracing::Level::INFO,
        tracing::Level::WARN,
        tracing::Level::ERROR,
    ] {
        assert_eq!(log_level_to_level(level_to_log_level(level)), level);
    }
}
