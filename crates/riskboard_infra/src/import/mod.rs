//! Bulk import of spreadsheet rows.
//!
//! Input is a JSON array of row objects (header -> cell), the shape a
//! spreadsheet reader emits. Output is scored drafts plus one diagnostic per
//! problem, formatted `Row {n}: {message}` where `n` is the 1-based sheet row
//! (the header occupies row 1).
//!
//! Rows are built with a single timestamp read once per batch.

pub mod row;

use chrono::{DateTime, Utc};
use riskboard_core::item::{RiskDraft, build_risk_item_at};
use serde_json::Value;

pub use row::{Column, RowError, normalize_header, parse_row};

/// Default row cap per import.
pub const DEFAULT_MAX_ROWS: usize = 1000;

/// Sheet row of the first data row.
const FIRST_DATA_ROW: usize = 2;

/// Outcome of one import.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportResult {
    /// At least one row was built. Errors may still be present.
    pub success: bool,
    pub risks: Vec<RiskDraft>,
    pub errors: Vec<String>,
}

impl ImportResult {
    fn rejected(error: String) -> Self {
        Self {
            success: false,
            risks: Vec::new(),
            errors: vec![error],
        }
    }
}

/// Import a JSON document, stamping rows with the current time.
pub fn import_json(text: &str, max_rows: usize) -> ImportResult {
    import_json_at(text, max_rows, Utc::now())
}

pub fn import_json_at(text: &str, max_rows: usize, now: DateTime<Utc>) -> ImportResult {
    match serde_json::from_str::<Value>(text) {
        Ok(document) => import_rows_at(document, max_rows, now),
        Err(err) => {
            tracing::warn!(error = %err, "import document is not valid JSON");
            ImportResult::rejected(format!("Invalid JSON: {err}"))
        }
    }
}

/// Import an already-parsed document.
pub fn import_rows_at(document: Value, max_rows: usize, now: DateTime<Utc>) -> ImportResult {
    let Value::Array(rows) = document else {
        tracing::warn!("import document is not an array");
        return ImportResult::rejected("Import must be a JSON array of row objects".to_string());
    };
    if rows.iter().any(|row| !row.is_object()) {
        tracing::warn!("import document contains non-object rows");
        return ImportResult::rejected("Import must be a JSON array of row objects".to_string());
    }

    let mut result = ImportResult::default();
    let total_rows = rows.len();

    for (index, row) in rows.iter().take(max_rows).enumerate() {
        let Value::Object(cells) = row else {
            continue;
        };
        let sheet_row = index + FIRST_DATA_ROW;
        match parse_row(cells) {
            Ok(Some(raw)) => result.risks.push(build_risk_item_at(raw, now)),
            Ok(None) => tracing::debug!(sheet_row, "blank import row skipped"),
            Err(errors) => {
                tracing::warn!(sheet_row, problems = errors.len(), "import row rejected");
                result
                    .errors
                    .extend(errors.iter().map(|err| format!("Row {sheet_row}: {err}")));
            }
        }
    }

    if total_rows > max_rows {
        let dropped = total_rows - max_rows;
        tracing::warn!(dropped, max_rows, "import rows over limit dropped");
        result.errors.push(format!(
            "{dropped} row(s) beyond the {max_rows}-row limit were not imported"
        ));
    }

    result.success = !result.risks.is_empty();
    tracing::info!(
        built = result.risks.len(),
        errors = result.errors.len(),
        "import finished"
    );
    result
}
