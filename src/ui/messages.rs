//! User-facing status lines. Diagnostics go through `tracing` instead.

use crate::utils::colors::{BLUE, BOLD, CYAN, RED, RESET, YELLOW};
use std::fmt;

const GREEN: &str = "\x1b[32m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Month heading above grids and agenda listings
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=========== {} ==========={}", CYAN, BOLD, msg, RESET);
}
