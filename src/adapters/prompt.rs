//! Line-oriented input with default fallback.
//!
//! Parsing raw text happens here so the numeric core only ever receives
//! typed values. Blank or unparsable answers fall back to the caller's
//! default; with no default they yield `None`.

use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub struct LinePrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` and returns the trimmed answer. End of input reads as blank.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    pub fn read_int(&mut self, prompt: &str, default: Option<i64>) -> Result<Option<i64>> {
        self.read_parsed(prompt, default)
    }

    pub fn read_f64(&mut self, prompt: &str, default: Option<f64>) -> Result<Option<f64>> {
        self.read_parsed(prompt, default)
    }

    /// Reads whitespace-separated numbers, skipping tokens that do not parse.
    pub fn read_numbers(&mut self, prompt: &str) -> Result<Vec<f64>> {
        let raw = self.ask(prompt)?;
        let mut values = Vec::new();
        for token in raw.split_whitespace() {
            match token.parse::<f64>() {
                Ok(v) => values.push(v),
                Err(_) => {
                    tracing::warn!("Skipping non-number: {}", token);
                    writeln!(self.output, "Skipping non-number: {}", token)?;
                }
            }
        }
        Ok(values)
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_parsed<T: FromStr + Copy>(&mut self, prompt: &str, default: Option<T>) -> Result<Option<T>> {
        let raw = self.ask(prompt)?;
        if raw.is_empty() {
            return Ok(default);
        }
        match raw.parse::<T>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => {
                let note = if default.is_some() {
                    "That's not a valid number. Using default."
                } else {
                    "Invalid input."
                };
                tracing::debug!("unparsable answer {:?}", raw);
                writeln!(self.output, "{}", note)?;
                Ok(default)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_int_parses_value() {
        let mut p = prompter("  42 \n");
        assert_eq!(p.read_int("n: ", Some(0)).unwrap(), Some(42));
    }

    #[test]
    fn test_read_int_blank_uses_default() {
        let mut p = prompter("\n\n");
        assert_eq!(p.read_int("n: ", Some(7)).unwrap(), Some(7));
        assert_eq!(p.read_int("n: ", None).unwrap(), None);
    }

    #[test]
    fn test_read_int_garbage_uses_default() {
        let mut p = prompter("abc\nxyz\n");
        assert_eq!(p.read_int("n: ", Some(1)).unwrap(), Some(1));
        assert_eq!(p.read_int("n: ", None).unwrap(), None);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Using default."));
        assert!(out.contains("Invalid input."));
    }

    #[test]
    fn test_end_of_input_reads_as_blank() {
        let mut p = prompter("");
        assert_eq!(p.read_f64("rate: ", Some(5.0)).unwrap(), Some(5.0));
    }

    #[test]
    fn test_read_numbers_skips_bad_tokens() {
        let mut p = prompter("1 2.5 x 3\n");
        assert_eq!(p.read_numbers("nums: ").unwrap(), vec![1.0, 2.5, 3.0]);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Skipping non-number: x"));
    }
}
