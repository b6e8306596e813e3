//! Interactive prompt helpers for the create-rsp flow.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};

/// Ask until a non-empty answer arrives. EOF while waiting is fatal.
pub fn prompt_required(reader: &mut impl BufRead, question: &str) -> Result<String> {
    loop {
        let answer = prompt_optional(reader, question)?;
        match answer {
            Some(answer) if !answer.is_empty() => return Ok(answer),
            Some(_) => println!("A value is required."),
            None => bail!("input ended before '{question}' was answered"),
        }
    }
}

/// Ask once; an empty answer is allowed. `None` means stdin was closed.
pub fn prompt_optional(reader: &mut impl BufRead, question: &str) -> Result<Option<String>> {
    print!("{question}: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Yes/no question: `y` or `yes` (case-insensitive) is true, anything else
/// (including an empty answer) is false.
pub fn prompt_yes_no(reader: &mut impl BufRead, question: &str) -> Result<bool> {
    let answer = prompt_optional(reader, question)?.unwrap_or_default().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
