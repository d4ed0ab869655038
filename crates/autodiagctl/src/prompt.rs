//! Terminal questions: yes/no and numbered single choice.
//!
//! Both re-ask until the answer is valid. End of input is reported as
//! `UnexpectedEof` instead of looping forever.

use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Source of answers for the interview
pub trait Prompter {
    fn ask_yes_no(&mut self, question: &str) -> io::Result<bool>;

    /// Returns the 0-based index of the chosen option
    fn ask_choice(&mut self, question: &str, options: &[&str]) -> io::Result<usize>;
}

/// Parse a yes/no answer; `None` if unrecognised
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "s" | "si" | "sí" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Prompter over any line reader and writer
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the question was answered",
            ));
        }
        Ok(line.trim().to_string())
    }

    fn hint(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}  {}", "!".yellow(), text)
        } else {
            writeln!(self.output, "!  {}", text)
        }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        loop {
            if self.color {
                write!(self.output, "{} {} ", question.bright_white(), "[s/n]:".cyan())?;
            } else {
                write!(self.output, "{} [s/n]: ", question)?;
            }

            let answer = self.read_answer()?;
            if let Some(value) = parse_yes_no(&answer) {
                return Ok(value);
            }
            self.hint("Answer 's' for yes or 'n' for no.")?;
        }
    }

    fn ask_choice(&mut self, question: &str, options: &[&str]) -> io::Result<usize> {
        loop {
            writeln!(self.output, "{}", question)?;
            for (i, option) in options.iter().enumerate() {
                if self.color {
                    writeln!(self.output, "  {} {}", format!("{}.", i + 1).cyan(), option)?;
                } else {
                    writeln!(self.output, "  {}. {}", i + 1, option)?;
                }
            }
            write!(self.output, "Choose an option: ")?;

            let answer = self.read_answer()?;
            if let Ok(num) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&num) {
                    return Ok(num - 1);
                }
            }
            self.hint("Invalid option, try again.")?;
        }
    }
}
