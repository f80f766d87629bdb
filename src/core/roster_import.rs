use crate::core::guest_validator::validate_create;
use crate::domain::model::GuestRecord;
use crate::domain::violation::FieldViolation;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    /// 1-based line in the CSV file, header included.
    pub line: u64,
    pub violations: Vec<FieldViolation>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub accepted: Vec<GuestRecord>,
    pub rejected: Vec<RejectedRow>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validates a CSV guest roster row by row through the creation rules.
pub struct RosterImport;

impl RosterImport {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ImportReport> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ImportReport> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        tracing::debug!("Roster columns: {:?}", headers);

        let mut report = ImportReport::default();

        for row in csv_reader.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();

            // 空白儲存格視為未提供
            let mut payload = Map::new();
            for (header, cell) in headers.iter().zip(row.iter()) {
                if !cell.is_empty() {
                    payload.insert(header.to_string(), Value::String(cell.to_string()));
                }
            }

            match validate_create(&Value::Object(payload)) {
                Ok(record) => report.accepted.push(record),
                Err(e) => {
                    tracing::warn!("Roster line {} rejected: {}", line, e);
                    report.rejected.push(RejectedRow {
                        line,
                        violations: e.into_violations(),
                    });
                }
            }
        }

        tracing::info!(
            "Roster validated: {} accepted, {} rejected",
            report.accepted.len(),
            report.rejected.len()
        );
        Ok(report)
    }
}
