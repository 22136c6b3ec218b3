use super::*;

use std::sync::{Arc, Mutex};

use serial_test::serial;

/// Test logger that captures entries instead of printing them
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    set_logger(CaptureLogger {
        entries: Arc::clone(&entries),
    });
    entries
}

// ============
// Severity ordering
// ============

#[test]
fn test_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

// ============
// Global logger dispatch
// ============

#[test]
#[serial]
fn test_write_reaches_custom_logger() {
    let entries = install_capture();

    write(LogSeverity::Info, "ember::Test", "hello".to_string());

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, LogSeverity::Info);
        assert_eq!(entries[0].source, "ember::Test");
        assert_eq!(entries[0].message, "hello");
        assert!(entries[0].file.is_none());
        assert!(entries[0].line.is_none());
    }

    reset_logger();
}

#[test]
#[serial]
fn test_write_detailed_carries_location() {
    let entries = install_capture();

    write_detailed(
        LogSeverity::Error,
        "ember::Test",
        "boom".to_string(),
        "renderer.rs",
        42,
    );

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, LogSeverity::Error);
        assert_eq!(entries[0].file, Some("renderer.rs"));
        assert_eq!(entries[0].line, Some(42));
    }

    reset_logger();
}

#[test]
#[serial]
fn test_macros_format_and_tag_severity() {
    let entries = install_capture();

    crate::gfx_trace!("ember::Test", "t {}", 1);
    crate::gfx_debug!("ember::Test", "d {}", 2);
    crate::gfx_info!("ember::Test", "i {}", 3);
    crate::gfx_warn!("ember::Test", "w {}", 4);
    crate::gfx_error!("ember::Test", "e {}", 5);

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].severity, LogSeverity::Trace);
        assert_eq!(entries[0].message, "t 1");
        assert_eq!(entries[1].severity, LogSeverity::Debug);
        assert_eq!(entries[2].severity, LogSeverity::Info);
        assert_eq!(entries[3].severity, LogSeverity::Warn);
        assert_eq!(entries[4].severity, LogSeverity::Error);
        assert_eq!(entries[4].message, "e 5");
        assert!(entries[4].file.is_some());
        assert!(entries[4].line.is_some());
    }

    reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_restores_default() {
    let entries = install_capture();
    reset_logger();

    write(LogSeverity::Info, "ember::Test", "after reset".to_string());

    let entries = entries.lock().unwrap();
    assert!(entries.is_empty());
}
