//! Short, colored status lines for humans. Diagnostics go through `tracing`.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Tone::Info => (BLUE, "ℹ️"),
            Tone::Success => (GREEN, "✅"),
            Tone::Warning => (YELLOW, "⚠️"),
            Tone::Error => (RED, "❌"),
        }
    }
}

fn emit<T: fmt::Display>(tone: Tone, msg: T) {
    let (color, icon) = tone.style();
    let line = format!("{color}{BOLD}{icon}{RESET} {msg}");
    match tone {
        Tone::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Tone::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Tone::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Tone::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Tone::Error, msg);
}

/// Section header printed above tables.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}=== {msg} ==={RESET}");
}
