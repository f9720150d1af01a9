use anyhow::Result;
use dialoguer::{Input, Select};
use std::io::Write;

use crate::domain::format_amount;
use crate::io::{export_records, export_records_to_path, export_summary, ExportFormat};
use crate::storage::ExpenseStore;

use super::render::{render_summary, render_table, write_error, write_info, write_success};

/// Top-level menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewAll,
    AddExpense,
    FilterCategory,
    FilterDateRange,
    SearchDescription,
    Summary,
    Export,
    Exit,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::ViewAll,
        Action::AddExpense,
        Action::FilterCategory,
        Action::FilterDateRange,
        Action::SearchDescription,
        Action::Summary,
        Action::Export,
        Action::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::ViewAll => "View all expenses",
            Action::AddExpense => "Add expense",
            Action::FilterCategory => "Filter by category",
            Action::FilterDateRange => "Filter by date range",
            Action::SearchDescription => "Search descriptions",
            Action::Summary => "Summary",
            Action::Export => "Export",
            Action::Exit => "Exit",
        }
    }
}

/// Source of user answers for the interactive session.
pub trait Prompt {
    /// Pick one of `items`, returning its index.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;

    /// Free-form text. May be empty.
    fn text(&mut self, prompt: &str) -> Result<String>;
}

/// Terminal prompts backed by dialoguer.
pub struct Terminal;

impl Prompt for Terminal {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }
}

/// Interactive session over a single expense store.
pub struct Session {
    store: ExpenseStore,
    currency: String,
}

impl Session {
    pub fn new(store: ExpenseStore, currency: impl Into<String>) -> Self {
        Self {
            store,
            currency: currency.into(),
        }
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Show the menu until the user picks Exit.
    pub fn run<P: Prompt, W: Write>(&mut self, prompt: &mut P, out: &mut W) -> Result<()> {
        let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();

        loop {
            let choice = prompt.select("Choose an action", &labels)?;
            let Some(&action) = Action::ALL.get(choice) else {
                write_error(out, "Invalid choice.")?;
                continue;
            };

            if action == Action::Exit {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
            self.dispatch(action, prompt, out)?;
        }
    }

    /// Run one menu action. Store errors are reported to `out`, never returned.
    pub fn dispatch<P: Prompt, W: Write>(
        &mut self,
        action: Action,
        prompt: &mut P,
        out: &mut W,
    ) -> Result<()> {
        match action {
            Action::ViewAll => {
                render_table(out, "All Expenses", &self.store.list_all(), &self.currency)?;
            }
            Action::AddExpense => {
                let date = prompt.text("Date (YYYY-MM-DD)")?;
                let amount = prompt.text("Amount")?;
                let category = prompt.text("Category")?;
                let description = prompt.text("Description")?;

                match self.store.add_expense(
                    date.trim(),
                    amount.trim(),
                    category.trim(),
                    description.trim(),
                ) {
                    Ok(record) => write_success(
                        out,
                        &format!(
                            "Added: {} ({}{})",
                            record.description(),
                            self.currency,
                            format_amount(record.amount())
                        ),
                    )?,
                    Err(e) => write_error(out, &e.to_string())?,
                }
            }
            Action::FilterCategory => {
                let known = self.store.categories();
                if !known.is_empty() {
                    write_info(out, &format!("Known categories: {}", known.join(", ")))?;
                }

                let category = prompt.text("Category to filter")?;
                let matches = self.store.filter_by_category(&category);
                render_table(
                    out,
                    &format!("Category: {}", category.trim()),
                    &matches,
                    &self.currency,
                )?;
            }
            Action::FilterDateRange => {
                let start = prompt.text("Start date (YYYY-MM-DD)")?;
                let end = prompt.text("End date (YYYY-MM-DD)")?;
                let (start, end) = (start.trim(), end.trim());

                match self.store.filter_by_date_range(start, end) {
                    Ok(matches) => render_table(
                        out,
                        &format!("From {} to {}", start, end),
                        &matches,
                        &self.currency,
                    )?,
                    Err(e) => write_error(out, &e.to_string())?,
                }
            }
            Action::SearchDescription => {
                let query = prompt.text("Search keyword")?;
                let matches = self.store.search_description(query.trim());
                render_table(
                    out,
                    &format!("Search: {}", query.trim()),
                    &matches,
                    &self.currency,
                )?;
            }
            Action::Summary => {
                render_summary(out, &self.store.summarize(), &self.currency)?;
            }
            Action::Export => self.export(prompt, out)?,
            Action::Exit => {}
        }

        Ok(())
    }

    fn export<P: Prompt, W: Write>(&self, prompt: &mut P, out: &mut W) -> Result<()> {
        let what = prompt.select("Export what?", &["All expenses", "Summary"])?;
        let format = match prompt.select("Format", &["csv", "json"])? {
            0 => ExportFormat::Csv,
            _ => ExportFormat::Json,
        };

        if what == 1 {
            return export_summary(&self.store.summarize(), format, &mut *out);
        }

        let path = prompt.text("Output file (empty for screen)")?;
        let path = path.trim();
        let records = self.store.list_all();

        if path.is_empty() {
            export_records(&records, format, &mut *out)?;
            return Ok(());
        }

        match export_records_to_path(&records, format, path) {
            Ok(count) => write_success(
                out,
                &format!("Exported {} expenses to {} ({})", count, path, format),
            ),
            Err(e) => write_error(out, &format!("{:#}", e)),
        }
    }
}
