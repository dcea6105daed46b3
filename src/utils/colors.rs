//! ANSI color helper utilities for terminal output.

use crate::models::cluster::MajorityKind;
use crate::models::session_summary::SessionStatus;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// complete → green, partial → yellow, incomplete → red
pub fn color_for_status(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Complete => GREEN,
        SessionStatus::Partial => YELLOW,
        SessionStatus::Incomplete => RED,
    }
}

pub fn color_for_majority(kind: MajorityKind) -> &'static str {
    match kind {
        MajorityKind::CheckInMajority => GREEN,
        MajorityKind::CheckOutMajority => RED,
        MajorityKind::Mixed => YELLOW,
    }
}

/// Wrap `value` in `color`; empty values and "0.0h" are greyed out.
pub fn paint(value: &str, color: &str) -> String {
    if value.trim().is_empty() || value.trim() == "0.0h" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
