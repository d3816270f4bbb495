//! Human-readable status lines for the CLI.

use std::fmt;

use crate::utils::colors::{CYAN, RED, RESET, YELLOW};

const BOLD: &str = "\x1b[1m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{CYAN}{BOLD}i{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}!{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}x{RESET} {msg}");
}

/// Section header above a table.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{CYAN}{BOLD}=== {msg} ==={RESET}");
}
