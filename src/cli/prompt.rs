//! Line-based prompting over any reader/writer pair.
//!
//! Numbers are shown and typed 1-based and returned 0-based. Input that does
//! not parse is reported and asked again; only a closed input is an error.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::core::{GameError, Result};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text).map_err(GameError::Input)
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{} ", prompt).map_err(GameError::Input)?;
        self.output.flush().map_err(GameError::Input)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(GameError::Input)?;
        if read == 0 {
            return Err(GameError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim().to_owned())
    }

    /// Ask for one number in `1..=count`.
    pub fn read_index(&mut self, prompt: &str, count: usize) -> Result<usize> {
        Ok(self.read_indices(prompt, count, 1)?[0])
    }

    /// Ask for exactly `n` distinct numbers in `1..=count`, separated by
    /// spaces or commas.
    pub fn read_indices(&mut self, prompt: &str, count: usize, n: usize) -> Result<Vec<usize>> {
        loop {
            let line = self.ask(prompt)?;
            match parse_indices(&line, count, n) {
                Ok(indices) => return Ok(indices),
                Err(reason) => self.say(format!("  {}, try again.", reason))?,
            }
        }
    }

    /// Ask a yes/no question. Anything but `y` or `yes` is no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} [y/N]", prompt))?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

/// Parse 1-based numbers into 0-based indices.
fn parse_indices(line: &str, count: usize, n: usize) -> std::result::Result<Vec<usize>, String> {
    let mut indices = Vec::with_capacity(n);
    for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let number: usize = token
            .parse()
            .map_err(|_| format!("{:?} is not a number", token))?;
        if number == 0 || number > count {
            return Err(format!("{} is not between 1 and {}", number, count));
        }
        if indices.contains(&(number - 1)) {
            return Err(format!("{} was given twice", number));
        }
        indices.push(number - 1);
    }

    if indices.len() != n {
        return Err(format!("expected {} number(s), got {}", n, indices.len()));
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output.clone()).unwrap()
    }

    #[test]
    fn test_parse_indices() {
        assert_eq!(parse_indices("2", 5, 1), Ok(vec![1]));
        assert_eq!(parse_indices("3, 1", 5, 2), Ok(vec![2, 0]));
        assert_eq!(parse_indices(" 5 4  ", 5, 2), Ok(vec![4, 3]));
        assert!(parse_indices("0", 5, 1).is_err());
        assert!(parse_indices("6", 5, 1).is_err());
        assert!(parse_indices("two", 5, 1).is_err());
        assert!(parse_indices("1 1", 5, 2).is_err());
        assert!(parse_indices("1", 5, 2).is_err());
        assert!(parse_indices("", 5, 1).is_err());
    }

    #[test]
    fn test_read_index_reprompts() {
        let mut p = prompter("abc\n9\n3\n");

        assert_eq!(p.read_index("Pick:", 4).unwrap(), 2);

        let out = output(&p);
        assert_eq!(out.matches("Pick:").count(), 3);
        assert!(out.contains("\"abc\" is not a number"));
        assert!(out.contains("9 is not between 1 and 4"));
    }

    #[test]
    fn test_read_indices() {
        let mut p = prompter("1\n4 2\n");
        assert_eq!(p.read_indices("Cards:", 5, 2).unwrap(), vec![3, 1]);
    }

    #[test]
    fn test_closed_input_is_error() {
        let mut p = prompter("");
        let err = p.read_index("Pick:", 3).unwrap_err();
        assert!(matches!(err, GameError::Input(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_confirm() {
        assert!(prompter("y\n").confirm("Again?").unwrap());
        assert!(prompter("YES\n").confirm("Again?").unwrap());
        assert!(!prompter("n\n").confirm("Again?").unwrap());
        assert!(!prompter("\n").confirm("Again?").unwrap());
    }
}
