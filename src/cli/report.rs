use clap::ValueEnum;
use tabled::Table;

use crate::types::MigrationRow;

/// How the end-of-run summary is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Txt,
    Json,
}

pub fn render(rows: &[MigrationRow], format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Txt => Ok(Table::new(rows.to_vec()).to_string()),
        ReportFormat::Json => serde_json::to_string_pretty(rows),
    }
}
