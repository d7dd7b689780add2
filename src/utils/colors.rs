//! ANSI color helper utilities for terminal output.

use crate::models::status::Status;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Grey for not started, blue while running, green once done.
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::NotStarted => GREY,
        Status::InProgress => BLUE,
        Status::Done => GREEN,
    }
}
