//! Line-oriented terminal prompter.
//!
//! Questions and validation feedback go to the writer (stderr for the real
//! binary, so stdout stays reserved for the emitted document); answers are
//! read line by line from the reader. The prompter owns the
//! re-ask-until-valid loop: a rejected answer prints the validator's message
//! verbatim and asks again, with no retry limit.

use std::io::{self, BufRead, BufReader, Stderr, Stdin, Write};

use cyan::descriptor::flow::{PromptError, Prompter, TextQuestion};

pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<BufReader<Stdin>, Stderr> {
    /// Prompter over the process's stdin and stderr.
    pub fn stdio() -> Self {
        TerminalPrompter::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalPrompter { input, output }
    }

    /// Read one answer line, without its trailing newline. EOF before the
    /// flow finishes is a channel failure, not an answer.
    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(PromptError::Io)?;
        if read == 0 {
            return Err(PromptError::Closed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select(&mut self, prompt: &str, options: &[&str]) -> Result<usize, PromptError> {
        loop {
            writeln!(self.output, "{}", prompt).map_err(PromptError::Io)?;
            for (index, option) in options.iter().enumerate() {
                writeln!(self.output, "  {}) {}", index + 1, option).map_err(PromptError::Io)?;
            }
            write!(self.output, "> ").map_err(PromptError::Io)?;
            self.output.flush().map_err(PromptError::Io)?;

            let line = self.read_line()?;
            let answer = line.trim();
            if let Ok(number) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&number) {
                    return Ok(number - 1);
                }
            }
            if let Some(index) = options.iter().position(|o| o.eq_ignore_ascii_case(answer)) {
                return Ok(index);
            }
            writeln!(self.output, "Pick one of the listed options").map_err(PromptError::Io)?;
        }
    }

    fn text(&mut self, question: &TextQuestion<'_>) -> Result<String, PromptError> {
        loop {
            writeln!(self.output, "{}", question.message).map_err(PromptError::Io)?;
            if let Some(description) = question.description {
                writeln!(self.output, "  {}", description).map_err(PromptError::Io)?;
            }
            write!(self.output, "> ").map_err(PromptError::Io)?;
            self.output.flush().map_err(PromptError::Io)?;

            let answer = self.read_line()?;
            match question.validate {
                Some(validate) => match validate(&answer) {
                    Ok(()) => return Ok(answer),
                    Err(err) => {
                        writeln!(self.output, "{}", err).map_err(PromptError::Io)?;
                    }
                },
                None => return Ok(answer),
            }
        }
    }
}
