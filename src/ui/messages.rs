//! User-facing messages. Colour is dropped when stdout is not a terminal or
//! `NO_COLOR` is set, so piped output stays plain.

use ansi_term::{Colour, Style};
use std::fmt;
use std::io::IsTerminal;

fn colour_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn styled<T: fmt::Display>(style: Style, msg: T) -> String {
    if colour_enabled() {
        style.paint(msg.to_string()).to_string()
    } else {
        msg.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", styled(Colour::Blue.normal(), msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", styled(Colour::Green.bold(), msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", styled(Colour::Yellow.normal(), msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(Colour::Red.bold(), format!("Error: {msg}")));
}

