//! ANSI color helper utilities for terminal output.
use crate::models::label::Tone;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Today's cell: white on blue.
pub const TODAY_CELL: &str = "\x1b[44;97;1m";

/// Terminal colour for a relative-day badge:
/// past → grey, today → bold red, tomorrow → magenta,
/// 2-3 days → yellow, later → blue
pub fn color_for_tone(tone: Tone) -> &'static str {
    match tone {
        Tone::Past => GREY,
        Tone::Today => "\x1b[1;31m",
        Tone::Tomorrow => MAGENTA,
        Tone::Soon => YELLOW,
        Tone::Later => BLUE,
    }
}

/// Grid cell colour: today highlighted, other months greyed out.
pub fn color_for_cell(is_today: bool, is_current_month: bool) -> &'static str {
    if is_today {
        TODAY_CELL
    } else if !is_current_month {
        GREY
    } else {
        RESET
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
