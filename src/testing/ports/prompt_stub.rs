use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{PromptPort, is_affirmative};

/// Answers prompts from a fixed script; running out means the user hit Ctrl-D.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    pub asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    fn next(&self, prompt: &str) -> Result<String, AppError> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.answers.lock().unwrap().pop_front().ok_or(AppError::Cancelled)
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

impl PromptPort for ScriptedPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        self.next(prompt).map(|answer| is_affirmative(&answer))
    }

    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError> {
        let answer = self.next(prompt)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    /// Answers are zero-based indexes.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError> {
        let answer = self.next(prompt)?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<usize>() {
            Ok(index) if index < items.len() => Ok(index),
            _ => Err(AppError::InvalidChoice(answer)),
        }
    }
}
