use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout and read the answer from stdin.
/// Only `y` / `yes` (any case) confirms; EOF or a read error means no.
pub fn ask_confirmation(prompt: &str) -> bool {
    let stdin = io::stdin();
    confirm_from(prompt, &mut stdin.lock(), &mut io::stdout())
}

pub fn confirm_from<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> bool {
    let _ = write!(out, "{prompt} (y/n) ");
    let _ = out.flush();

    let mut s = String::new();
    match input.read_line(&mut s) {
        Ok(_) => matches!(s.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
