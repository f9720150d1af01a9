use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::domain::{format_amount, ExpenseRecord, Summary};

const RULE_WIDTH: usize = 65;

/// Render records as an aligned table under a `--- title ---` banner.
pub fn render_table<W: Write>(
    out: &mut W,
    title: &str,
    records: &[ExpenseRecord],
    currency: &str,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} ---", title)?;

    if records.is_empty() {
        writeln!(out, "No expenses found.")?;
    } else {
        writeln!(
            out,
            "{:<12} | {:<15} | {:<10} | {}",
            "Date", "Category", "Amount", "Description"
        )?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for record in records {
            writeln!(
                out,
                "{:<12} | {:<15} | {}{:<9.2} | {}",
                record.date().format("%Y-%m-%d").to_string(),
                record.category(),
                currency,
                record.amount(),
                record.description()
            )?;
        }
    }

    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out)?;
    Ok(())
}

/// Render the overall total and one line per category, sorted by name.
pub fn render_summary<W: Write>(out: &mut W, summary: &Summary, currency: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Expense Summary ---")?;
    writeln!(
        out,
        "Total Expenses: {}{}",
        currency,
        format_amount(summary.total)
    )?;

    if summary.by_category.is_empty() {
        writeln!(out, "No expenses recorded.")?;
    }
    for (category, total) in summary.sorted_categories() {
        writeln!(
            out,
            " - {}: {}{} ({:.1}%)",
            category,
            currency,
            format_amount(total),
            summary.share_of(category)
        )?;
    }

    writeln!(out, "{}", "-".repeat(26))?;
    writeln!(out)?;
    Ok(())
}

pub fn write_success<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", format!("✓ {}", message).green())?;
    Ok(())
}

pub fn write_info<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", format!("ℹ {}", message).bright_cyan())?;
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", format!("✗ {}", message).red())?;
    Ok(())
}
