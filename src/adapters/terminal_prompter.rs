use std::cell::RefCell;
use std::io::{self, BufRead, ErrorKind, IsTerminal, StdinLock, Stdout, Write};

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::AppError;
use crate::ports::{PromptPort, is_affirmative};

/// Prompts on the controlling terminal, or plain stdin lines when piped.
pub struct TerminalPrompter {
    lines: Option<LinePrompter<StdinLock<'static>, Stdout>>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        let lines = if io::stdin().is_terminal() {
            None
        } else {
            Some(LinePrompter::new(io::stdin().lock(), io::stdout()))
        };
        Self { lines }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn map_dialoguer(what: &str, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(io_err)
            if matches!(io_err.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
        {
            AppError::Cancelled
        }
        err => AppError::prompt_error(what, err),
    }
}

impl PromptPort for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        if let Some(lines) = &self.lines {
            return lines.confirm(prompt);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact_opt()
            .map_err(|err| map_dialoguer("confirmation", err))?
            .ok_or(AppError::Cancelled)
    }

    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError> {
        if let Some(lines) = &self.lines {
            return lines.input(prompt, default);
        }
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input
            .interact_text()
            .map(|value| value.trim().to_string())
            .map_err(|err| map_dialoguer(prompt, err))
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError> {
        if let Some(lines) = &self.lines {
            return lines.select(prompt, items, default);
        }
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(|err| map_dialoguer(prompt, err))?
            .ok_or(AppError::Cancelled)
    }
}

/// Line-oriented prompts over any reader and writer.
pub struct LinePrompter<R, W> {
    reader: RefCell<R>,
    writer: RefCell<W>,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader: RefCell::new(reader), writer: RefCell::new(writer) }
    }

    fn ask(&self, text: &str) -> Result<String, AppError> {
        {
            let mut writer = self.writer.borrow_mut();
            write!(writer, "{text}")?;
            writer.flush()?;
        }
        let mut line = String::new();
        let read = self.reader.borrow_mut().read_line(&mut line)?;
        if read == 0 {
            let _ = writeln!(self.writer.borrow_mut());
            return Err(AppError::Cancelled);
        }
        Ok(line.trim().to_string())
    }

    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}

impl<R: BufRead, W: Write> PromptPort for LinePrompter<R, W> {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        self.ask(&format!("{prompt} [y/N]: ")).map(|answer| is_affirmative(&answer))
    }

    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError> {
        let answer = match default {
            Some(default) => self.ask(&format!("{prompt} [{default}]: "))?,
            None => self.ask(&format!("{prompt}: "))?,
        };
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError> {
        {
            let mut writer = self.writer.borrow_mut();
            writeln!(writer, "{prompt}:")?;
            for (index, item) in items.iter().enumerate() {
                writeln!(writer, "  {}. {}", index + 1, item)?;
            }
        }
        let answer = self.ask(&format!("Enter choice [1-{}]: ", items.len()))?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<usize>() {
            Ok(choice) if (1..=items.len()).contains(&choice) => Ok(choice - 1),
            _ => Err(AppError::InvalidChoice(answer)),
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
    fn confirm_accepts_only_yes() {
        assert!(prompter("YES\n").confirm("Proceed?").unwrap());
        assert!(!prompter("n\n").confirm("Proceed?").unwrap());
        assert!(!prompter("\n").confirm("Proceed?").unwrap());
    }

    #[test]
    fn end_of_input_cancels() {
        let err = prompter("").confirm("Proceed?").unwrap_err();
        assert!(matches!(err, AppError::Cancelled));
    }

    #[test]
    fn input_uses_default_on_empty_line() {
        let p = prompter("\n");
        assert_eq!(p.input("Member email", Some("a@b.io")).unwrap(), "a@b.io");
        let out = String::from_utf8(p.into_writer()).unwrap();
        assert!(out.contains("Member email [a@b.io]: "));
    }

    #[test]
    fn select_is_one_based() {
        let items = vec!["Organization".to_string(), "Folder".to_string(), "Project".to_string()];
        assert_eq!(prompter("3\n").select("Select scope", &items, 0).unwrap(), 2);
        assert_eq!(prompter("\n").select("Select scope", &items, 0).unwrap(), 0);
        let err = prompter("7\n").select("Select scope", &items, 0).unwrap_err();
        assert!(matches!(err, AppError::InvalidChoice(choice) if choice == "7"));
    }
}
