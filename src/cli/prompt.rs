//! Interactive prompts.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Ask for the directory to clean and return the trimmed answer.
///
/// End of input yields an empty string.
pub fn read_directory<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(
        output,
        "Enter the directory path to clean filenames and foldernames: "
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask whether to go ahead. Only `y` (any case) confirms.
pub fn read_confirmation<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "Do you want to continue? (y/n): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(is_confirmation(&line))
}

/// Whether an answer line confirms. Surrounding spaces are not ignored.
pub fn is_confirmation(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y")
}
