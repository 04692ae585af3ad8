// std imports
use std::io::{BufRead, Write};

// third-party imports
use regex::Regex;

// local imports
use crate::{
    error::*,
    input::InputReference,
    matcher::{Matcher, Pattern},
};

// ---

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Match against lowercased lines, the output keeps the original text.
    pub lower: bool,
}

/// Filters input lines with a compiled matcher.
pub struct App<P = Regex> {
    matcher: Matcher<P>,
    options: Options,
}

impl<P: Pattern> App<P> {
    pub fn new(matcher: Matcher<P>, options: Options) -> Self {
        Self { matcher, options }
    }

    /// Processes the inputs in order and writes matching lines to the output.
    ///
    /// Inputs that cannot be opened are reported and skipped.
    pub fn run(&self, inputs: &[InputReference], output: &mut dyn Write) -> Result<()> {
        for input in inputs {
            let stream = match input.open() {
                Ok(stream) => stream,
                Err(err) => {
                    Error::Io(err).log();
                    continue;
                }
            };
            let n = self.process(stream, &mut *output)?;
            log::debug!("{} matching lines in {}", n, input.description());
        }
        output.flush()?;
        Ok(())
    }

    /// Writes lines of the input matching the expression to the output and returns their number.
    ///
    /// Lines are separated by `\n`, a trailing `\r` is not part of the line.
    /// Invalid UTF-8 sequences are replaced for matching only.
    pub fn process<R: BufRead, W: Write + ?Sized>(&self, mut input: R, output: &mut W) -> Result<usize> {
        let mut buf = Vec::new();
        let mut n = 0;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = trim_line(&buf);
            let text = String::from_utf8_lossy(line);
            let matched = if self.options.lower {
                self.matcher.matches(&text.to_lowercase())
            } else {
                self.matcher.matches(&text)
            };

            if matched {
                output.write_all(line)?;
                output.write_all(b"\n")?;
                n += 1;
            }
        }
        Ok(n)
    }
}

fn trim_line(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

// ---
