use chrono::NaiveDate;
use serde::Serialize;

use super::{Amount, ExpenseError, ToAmount};

/// The only accepted textual date shape.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single dated expense. Records are immutable once built; the only way to
/// get one is through [`ExpenseRecord::parse`], so every record carries a real
/// calendar date, a finite amount and a normalized category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRecord {
    date: NaiveDate,
    amount: Amount,
    category: String,
    description: String,
}

impl ExpenseRecord {
    /// Build a record from raw user input.
    pub fn parse(
        date: &str,
        amount: impl ToAmount,
        category: &str,
        description: &str,
    ) -> Result<Self, ExpenseError> {
        let date = parse_date(date)?;
        let amount = amount.to_amount()?;
        Ok(Self {
            date,
            amount,
            category: normalize_category(category),
            description: description.to_string(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Title-cased category.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Case-insensitive category comparison against arbitrary user input.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == normalize_category(category).to_lowercase()
    }

    /// Inclusive on both ends. An inverted range matches nothing.
    pub fn within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }

    /// `query` must already be lowercased.
    pub fn description_contains(&self, query: &str) -> bool {
        self.description.to_lowercase().contains(query)
    }
}

/// Parse a strict, zero-padded `YYYY-MM-DD` date.
///
/// chrono alone would accept `2023-1-5`, so the shape is checked first and the
/// calendar check (month 13, Feb 30, ...) is left to chrono.
pub fn parse_date(input: &str) -> Result<NaiveDate, ExpenseError> {
    let invalid = || ExpenseError::InvalidDate(input.to_string());

    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return Err(invalid());
    }
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

/// Title-case a category: trim the ends, then upper-case the first character of
/// every whitespace-separated word and lower-case the rest.
/// Example: "  fast FOOD" -> "Fast Food"
pub fn normalize_category(input: &str) -> String {
    let mut normalized = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.trim().chars() {
        if c.is_whitespace() {
            normalized.push(c);
            at_word_start = true;
        } else if at_word_start {
            normalized.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            normalized.extend(c.to_lowercase());
        }
    }

    normalized
}
