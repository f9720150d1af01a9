use tracing::{debug, info};

use crate::domain::{parse_date, ExpenseError, ExpenseRecord, Summary, ToAmount};

/// In-memory, insertion-ordered collection of expense records.
///
/// The store is the sole owner of its records. Queries hand out clones, and
/// there is no update or delete: a record, once appended, stays as it was.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    records: Vec<ExpenseRecord>,
}

impl ExpenseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate the raw inputs and append a new record.
    ///
    /// On error nothing is appended.
    pub fn add_expense(
        &mut self,
        date: &str,
        amount: impl ToAmount,
        category: &str,
        description: &str,
    ) -> Result<&ExpenseRecord, ExpenseError> {
        debug!(date, category, "add_expense received");

        let record = ExpenseRecord::parse(date, amount, category, description)
            .inspect_err(|e| debug!(error = %e, "expense rejected"))?;

        info!(
            date = %record.date(),
            amount = record.amount(),
            category = record.category(),
            "expense recorded"
        );
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> Vec<ExpenseRecord> {
        self.records.clone()
    }

    /// Records whose category matches `category`, ignoring case.
    pub fn filter_by_category(&self, category: &str) -> Vec<ExpenseRecord> {
        self.records
            .iter()
            .filter(|r| r.in_category(category))
            .cloned()
            .collect()
    }

    /// Records dated within `[start, end]`, both ends inclusive.
    ///
    /// Both bounds are parsed before any filtering, so a bad bound fails the whole
    /// call. An inverted range is taken literally and yields nothing.
    pub fn filter_by_date_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<ExpenseRecord>, ExpenseError> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;

        Ok(self
            .records
            .iter()
            .filter(|r| r.within(start, end))
            .cloned()
            .collect())
    }

    /// Records whose description contains `query`, ignoring case.
    pub fn search_description(&self, query: &str) -> Vec<ExpenseRecord> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.description_contains(&query))
            .cloned()
            .collect()
    }

    /// Distinct categories in the order they were first recorded.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in &self.records {
            if !seen.iter().any(|c| c == record.category()) {
                seen.push(record.category().to_string());
            }
        }
        seen
    }

    /// Overall and per-category totals.
    pub fn summarize(&self) -> Summary {
        Summary::compute(&self.records)
    }
}
