use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{format_amount, Amount, ExpenseRecord, Summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => bail!("Unknown export format: {} (expected csv or json)", other),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Summary shape used for JSON output: categories sorted by name.
#[derive(Serialize)]
struct SummaryExport<'a> {
    total: Amount,
    categories: BTreeMap<&'a str, Amount>,
}

/// Write records to `writer`. Returns the number of records written.
pub fn export_records<W: Write>(
    records: &[ExpenseRecord],
    format: ExportFormat,
    mut writer: W,
) -> Result<usize> {
    match format {
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            csv_writer.write_record(["date", "amount", "category", "description"])?;

            for record in records {
                csv_writer.write_record([
                    record.date().to_string(),
                    format_amount(record.amount()),
                    record.category().to_string(),
                    record.description().to_string(),
                ])?;
            }

            csv_writer.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }

    Ok(records.len())
}

/// Write per-category totals followed by the overall total.
pub fn export_summary<W: Write>(
    summary: &Summary,
    format: ExportFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            csv_writer.write_record(["category", "total"])?;

            for (category, total) in summary.sorted_categories() {
                csv_writer.write_record([category, format_amount(total).as_str()])?;
            }
            csv_writer.write_record(["TOTAL", format_amount(summary.total).as_str()])?;

            csv_writer.flush()?;
        }
        ExportFormat::Json => {
            let export = SummaryExport {
                total: summary.total,
                categories: summary.sorted_categories().into_iter().collect(),
            };
            serde_json::to_writer_pretty(&mut writer, &export)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Export records to a file, creating or truncating it.
pub fn export_records_to_path(
    records: &[ExpenseRecord],
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    export_records(records, format, BufWriter::new(file))
}
