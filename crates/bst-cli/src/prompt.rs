//! Line-oriented prompts for the interactive menu.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use colored::Colorize;

/// Asks the user questions.
pub trait Prompter {
    /// Ask for free text; an empty answer yields `default`.
    fn input(&mut self, message: &str, default: &str) -> Result<String, String>;

    /// Ask the user to choose one of `choices`; returns its index.
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, String>;
}

/// Prompts over a reader/writer pair, numbering the choices.
///
/// A choice may be answered with its number or its exact text.
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Prompt over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_answer(&mut self) -> Result<String, String> {
        self.writer.flush().map_err(|e| e.to_string())?;
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err("input closed before an answer was given".into()),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn input(&mut self, message: &str, default: &str) -> Result<String, String> {
        let marker = "?".green().bold();
        let written = if default.is_empty() {
            write!(self.writer, "{marker} {message}: ")
        } else {
            write!(self.writer, "{marker} {message} ({default}): ")
        };
        written.map_err(|e| e.to_string())?;

        let answer = self.read_answer()?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, String> {
        if choices.is_empty() {
            return Err("nothing to choose from".into());
        }

        let io_err = |e: io::Error| e.to_string();
        writeln!(self.writer, "{} {message}", "?".green().bold()).map_err(io_err)?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}) {choice}", i + 1).map_err(io_err)?;
        }

        loop {
            write!(self.writer, "  Answer: ").map_err(io_err)?;
            let answer = self.read_answer()?;

            if let Ok(n) = answer.parse::<usize>() {
                if (1..=choices.len()).contains(&n) {
                    return Ok(n - 1);
                }
            } else if let Some(idx) = choices
                .iter()
                .position(|c| c.eq_ignore_ascii_case(&answer))
            {
                return Ok(idx);
            }

            let hint = format!("Please enter a number between 1 and {}.", choices.len());
            writeln!(self.writer, "  {}", hint.yellow()).map_err(io_err)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn choices(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn input_uses_default_for_empty_answer() {
        let mut p = prompter("\n");
        assert_eq!(p.input("CR Rating", "1").unwrap(), "1");
        let written = String::from_utf8(p.writer).unwrap();
        assert!(written.contains("CR Rating (1): "));
    }

    #[test]
    fn input_trims_answer() {
        let mut p = prompter("  gob  \n");
        assert_eq!(p.input("Monster name", "").unwrap(), "gob");
    }

    #[test]
    fn select_by_number() {
        let mut p = prompter("2\n");
        let idx = p.select("Which monster?", &choices(&["Goblin", "Knight"])).unwrap();
        assert_eq!(idx, 1);
        let written = String::from_utf8(p.writer).unwrap();
        assert!(written.contains("1) Goblin"));
        assert!(written.contains("2) Knight"));
    }

    #[test]
    fn select_by_name() {
        let mut p = prompter("knight\n");
        let idx = p.select("Which monster?", &choices(&["Goblin", "Knight"])).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn select_reprompts_on_bad_answer() {
        let mut p = prompter("7\nnope\n1\n");
        let idx = p.select("Which monster?", &choices(&["Goblin", "Knight"])).unwrap();
        assert_eq!(idx, 0);
        let written = String::from_utf8(p.writer).unwrap();
        assert_eq!(written.matches("between 1 and 2").count(), 2);
    }

    #[test]
    fn eof_is_an_error() {
        let mut p = prompter("");
        assert!(p.select("Which monster?", &choices(&["Goblin"])).is_err());
        assert!(p.input("Monster name", "").is_err());
    }

    #[test]
    fn empty_choices_is_an_error() {
        let mut p = prompter("1\n");
        assert!(p.select("Which monster?", &[]).is_err());
    }
}
