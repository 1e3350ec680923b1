use std::io::{BufRead, Write};

use anyhow::{bail, Context};

pub(crate) const INPUT_PROMPT: &str = "Enter name of inputFile: ";
pub(crate) const OUTPUT_PROMPT: &str = "Enter name of output HTML file: ";

/// Prints `question` on its own line and reads one answer line, without its
/// terminator.
pub(crate) fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> anyhow::Result<String> {
    writeln!(out, "{question}")?;
    out.flush()?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .context("failed to read from standard input")?;
    if read == 0 {
        bail!("standard input closed before answering {:?}", question.trim_end());
    }
    let trimmed_len = answer.trim_end_matches(['\n', '\r']).len();
    answer.truncate(trimmed_len);
    Ok(answer)
}

/// Asks for the input file, then the output file.
pub(crate) fn prompt_paths<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<(String, String)> {
    let input_path = prompt_line(input, out, INPUT_PROMPT)?;
    let output_path = prompt_line(input, out, OUTPUT_PROMPT)?;
    Ok((input_path, output_path))
}
