//! Line-oriented prompting over any reader/writer pair.
//!
//! `None` from a prompt means the input reached end-of-file.

use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write to output")
    }

    /// Write pre-rendered text as-is
    pub fn write_block(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("Failed to write to output")
    }

    /// Show `label` and read one line, without the trailing newline
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask until `parse` accepts the answer, printing each rejection
    pub fn ask_until<T, E, F>(&mut self, label: &str, mut parse: F) -> Result<Option<T>>
    where
        E: Display,
        F: FnMut(&str) -> std::result::Result<T, E>,
    {
        loop {
            let Some(answer) = self.ask(label)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.say(format_args!("Error: {err}. Please try again."))?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
