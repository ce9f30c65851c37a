//! Logger module
//!
//! Server lifecycle and error logging. Lifecycle messages go to stdout,
//! errors to stderr. Individual requests are never logged.

use chrono::{DateTime, Local};

/// Timestamp layout used as the prefix of fatal log lines
const FATAL_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(port: u16) {
    write_info(&format!("Starting server at port {port}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

/// Log an unrecoverable error. The caller is expected to exit afterwards.
pub fn log_fatal(err: &impl std::fmt::Display) {
    write_error(&format_fatal(Local::now(), err));
}

fn format_fatal(time: DateTime<Local>, err: &impl std::fmt::Display) -> String {
    format!("{} {err}", time.format(FATAL_TIME_FORMAT))
}
