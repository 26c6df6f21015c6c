use std::io::{self, BufRead, Write};

use crate::output::Console;

/// Interpret one line of operator input. `None` means unrecognised.
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Ask a yes/no question, re-prompting until the answer is recognised.
///
/// End of input reads as an empty answer and therefore declines. Bytes that
/// are not UTF-8 are just another unrecognised answer.
pub fn confirm<W: Write>(
    input: &mut dyn BufRead,
    console: &mut Console<W>,
    question: &str,
) -> io::Result<bool> {
    let mut line = Vec::new();
    loop {
        console.print_prompt(question)?;
        line.clear();
        input.read_until(b'\n', &mut line)?;
        if let Some(answer) = parse_answer(&String::from_utf8_lossy(&line)) {
            return Ok(answer);
        }
        console.print_invalid_answer()?;
    }
}
