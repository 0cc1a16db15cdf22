use anyhow::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

// ============================================================================
// Prompter - line-oriented console I/O
// ============================================================================

/// Standard input reached end of file.
#[derive(Debug, thiserror::Error)]
#[error("input closed")]
pub struct InputClosed;

pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter a number.";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one trimmed line.
    pub fn ask_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer parses as `T`.
    pub fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let answer = self.ask_line(prompt)?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!(answer = %answer, "Rejected non-numeric input");
                    self.say(INVALID_NUMBER_MESSAGE)?;
                }
            }
        }
    }

    /// Ask until `parse` accepts the answer; its error is shown before re-asking.
    pub fn ask_until<T, E, F>(&mut self, prompt: &str, mut parse: F) -> Result<T>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.ask_line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(format!("{e}. Please try again."))?,
            }
        }
    }

    /// Only "yes" (any case) counts as agreement.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask_line(prompt)?.eq_ignore_ascii_case("yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_ask_line_trims() {
        let mut p = prompter("  hello  \n");
        assert_eq!(p.ask_line("Say: ").unwrap(), "hello");
        assert_eq!(output(p), "Say: ");
    }

    #[test]
    fn test_ask_number_reprompts() {
        let mut p = prompter("abc\n\n42\n");
        let value: u32 = p.ask_number("Your choice: ").unwrap();
        assert_eq!(value, 42);

        let out = output(p);
        assert_eq!(out.matches("Your choice: ").count(), 3);
        assert_eq!(out.matches(INVALID_NUMBER_MESSAGE).count(), 2);
    }

    #[test]
    fn test_ask_until_shows_parse_error() {
        let mut p = prompter("7\n2\n");
        let value = p
            .ask_until("Pick: ", |s| match s {
                "2" => Ok(2),
                _ => Err("Not two"),
            })
            .unwrap();
        assert_eq!(value, 2);
        assert!(output(p).contains("Not two. Please try again."));
    }

    #[test]
    fn test_ask_yes_no() {
        let mut p = prompter("YES\nno\ny\n");
        assert!(p.ask_yes_no("? ").unwrap());
        assert!(!p.ask_yes_no("? ").unwrap());
        assert!(!p.ask_yes_no("? ").unwrap());
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut p = prompter("");
        let err = p.ask_line("? ").unwrap_err();
        assert!(err.is::<InputClosed>());
    }
}
