// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::collections::VecDeque;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use outlay::cli::Prompt;
use outlay::storage::ExpenseStore;

/// Helper to build a NaiveDate from a literal known to be valid
pub fn date(input: &str) -> NaiveDate {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").unwrap()
}

/// Test fixture: the four demo expenses
pub fn sample_store() -> Result<ExpenseStore> {
    let mut store = ExpenseStore::new();
    outlay::cli::seed_samples(&mut store)?;
    Ok(store)
}

/// Categories and totals sorted by name, for order-independent comparisons
pub fn sorted_totals(store: &ExpenseStore) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = store.summarize().by_category.into_iter().collect();
    totals.sort_by(|a, b| a.0.cmp(&b.0));
    totals
}

/// Scripted answer for a prompt
pub enum Answer {
    Pick(usize),
    Text(&'static str),
}

/// Prompt that replays a fixed script and fails once it runs dry
pub struct ScriptedPrompt {
    answers: VecDeque<Answer>,
}

impl ScriptedPrompt {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        match self.answers.pop_front() {
            Some(Answer::Pick(index)) if index < items.len() => Ok(index),
            Some(Answer::Pick(index)) => Err(anyhow!("{}: no item {}", prompt, index)),
            Some(Answer::Text(text)) => {
                Err(anyhow!("{}: expected a pick, got {:?}", prompt, text))
            }
            None => Err(anyhow!("{}: script exhausted", prompt)),
        }
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        match self.answers.pop_front() {
            Some(Answer::Text(text)) => Ok(text.to_string()),
            Some(Answer::Pick(index)) => {
                Err(anyhow!("{}: expected text, got pick {}", prompt, index))
            }
            None => Err(anyhow!("{}: script exhausted", prompt)),
        }
    }
}
