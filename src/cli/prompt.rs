//! Line-oriented console prompting.
//!
//! Every read returns `Ok(None)` once input is exhausted so callers can
//! wind down as if the user had quit.

use std::io::{self, BufRead, Write};

use crate::domain::foundation::DifficultyLevel;
use crate::domain::session::capture::{validate_positive, validate_text};

pub const POSITIVE_NUMBER_HINT: &str = "Please enter a positive number.";
pub const INVALID_MENU_CHOICE: &str = "Invalid menu choice. Please enter a new choice: ";
pub const DIFFICULTY_PROMPT: &str = "Select difficulty (1 = Easy, 2 = Intermediate, 3 = Hard): ";
pub const DIFFICULTY_DEFAULTED: &str = "Invalid choice. Defaulting to 'Easy'.";

/// Reads answers from `input` and writes prompts to `output`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output sink, mainly so tests can inspect it.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes text without a trailing newline and flushes it.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Writes a full line.
    pub fn say_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompts until a non-blank line is entered.
    pub fn read_text(&mut self, prompt: &str, field: &str) -> io::Result<Option<String>> {
        loop {
            self.say(prompt)?;
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            match validate_text(field, &line) {
                Ok(text) => return Ok(Some(text)),
                Err(err) => tracing::debug!(error = %err, "Re-prompting"),
            }
        }
    }

    /// Prompts until a strictly positive number is entered.
    pub fn read_positive(&mut self, prompt: &str, field: &str) -> io::Result<Option<f64>> {
        loop {
            self.say(prompt)?;
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            match validate_positive(field, &line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    tracing::debug!(error = %err, "Re-prompting");
                    self.say_line(POSITIVE_NUMBER_HINT)?;
                }
            }
        }
    }

    /// Like [`read_positive`](Self::read_positive), but an empty answer
    /// takes `default`.
    pub fn read_positive_or(
        &mut self,
        prompt: &str,
        field: &str,
        default: f64,
    ) -> io::Result<Option<f64>> {
        loop {
            self.say(prompt)?;
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                return Ok(Some(default));
            }
            match validate_positive(field, &line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    tracing::debug!(error = %err, "Re-prompting");
                    self.say_line(POSITIVE_NUMBER_HINT)?;
                }
            }
        }
    }

    /// Asks once for a difficulty; anything outside 1-3 becomes Easy.
    pub fn read_difficulty(&mut self) -> io::Result<Option<DifficultyLevel>> {
        self.say(DIFFICULTY_PROMPT)?;
        let Some(line) = self.next_line()? else {
            return Ok(None);
        };
        let (level, defaulted) = DifficultyLevel::parse_selection(&line);
        if defaulted {
            self.say_line(DIFFICULTY_DEFAULTED)?;
        }
        Ok(Some(level))
    }

    /// Reads a menu choice, re-asking until the answer is an integer.
    ///
    /// Blank lines are skipped silently. Range checking is left to the
    /// caller.
    pub fn read_menu_choice(&mut self) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            let answer = line.trim();
            if answer.is_empty() {
                continue;
            }
            match answer.parse::<i64>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(_) => self.say(INVALID_MENU_CHOICE)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn read_text_reprompts_on_blank_lines() {
        let mut p = prompter("\n   \nRose border\n");
        let text = p.read_text("Name: ", "name").unwrap();
        assert_eq!(text.as_deref(), Some("Rose border"));
        assert_eq!(output(p), "Name: Name: Name: ");
    }

    #[test]
    fn read_text_returns_none_at_end_of_input() {
        let mut p = prompter("");
        assert_eq!(p.read_text("Name: ", "name").unwrap(), None);
    }

    #[test]
    fn read_positive_reprompts_with_hint() {
        let mut p = prompter("abc\n0\n-2\n2.5\n");
        let value = p.read_positive("Hours spent: ", "hours").unwrap();
        assert_eq!(value, Some(2.5));
        let out = output(p);
        assert_eq!(out.matches(POSITIVE_NUMBER_HINT).count(), 3);
        assert_eq!(out.matches("Hours spent: ").count(), 4);
    }

    #[test]
    fn read_positive_or_takes_default_on_empty_answer() {
        let mut p = prompter("\n");
        assert_eq!(p.read_positive_or("Goal: ", "goal", 5.0).unwrap(), Some(5.0));

        let mut p = prompter("-1\n8\n");
        assert_eq!(p.read_positive_or("Goal: ", "goal", 5.0).unwrap(), Some(8.0));
        assert!(output(p).contains(POSITIVE_NUMBER_HINT));
    }

    #[test]
    fn read_difficulty_accepts_valid_choice() {
        let mut p = prompter("3\n");
        assert_eq!(p.read_difficulty().unwrap(), Some(DifficultyLevel::Hard));
        assert_eq!(output(p), DIFFICULTY_PROMPT);
    }

    #[test]
    fn read_difficulty_defaults_without_reprompting() {
        let mut p = prompter("7\n2\n");
        assert_eq!(p.read_difficulty().unwrap(), Some(DifficultyLevel::Easy));
        let out = output(p);
        assert!(out.contains(DIFFICULTY_DEFAULTED));
        assert_eq!(out.matches(DIFFICULTY_PROMPT).count(), 1);
    }

    #[test]
    fn read_menu_choice_reasks_on_non_numeric_input() {
        let mut p = prompter("x\nfour\n4\n");
        assert_eq!(p.read_menu_choice().unwrap(), Some(4));
        assert_eq!(output(p).matches(INVALID_MENU_CHOICE).count(), 2);
    }

    #[test]
    fn read_menu_choice_skips_blank_lines_quietly() {
        let mut p = prompter("\n  \n\n3\n");
        assert_eq!(p.read_menu_choice().unwrap(), Some(3));
        assert_eq!(output(p), "");
    }

    #[test]
    fn read_positive_reprompts_on_infinity() {
        let mut p = prompter("inf\ninfinity\n-inf\n1.5\n");
        let value = p.read_positive("Hours spent: ", "hours").unwrap();
        assert_eq!(value, Some(1.5));
        let out = output(p);
        assert_eq!(out.matches(POSITIVE_NUMBER_HINT).count(), 3);
        assert_eq!(out.matches("Hours spent: ").count(), 4);
    }

    #[test]
    fn read_positive_or_reprompts_on_infinity() {
        let mut p = prompter("inf\n\n");
        assert_eq!(p.read_positive_or("Goal: ", "goal", 5.0).unwrap(), Some(5.0));
        assert!(output(p).contains(POSITIVE_NUMBER_HINT));
    }

    #[test]
    fn read_menu_choice_passes_out_of_range_numbers_through() {
        let mut p = prompter("9\n");
        assert_eq!(p.read_menu_choice().unwrap(), Some(9));
    }
}
