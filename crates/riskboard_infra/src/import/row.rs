//! Single-row parsing: header matching and cell coercion.
//!
//! A row is the JSON object a spreadsheet reader emits (header -> cell).
//! Every problem in a row is collected; a row with any problem yields no
//! input.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use riskboard_core::item::{ParseStatusError, RawRiskInput, RiskStatus, validate_raw_input};
use riskboard_core::scoring::{Violation, validate_mitigation_effectiveness};
use serde_json::{Map, Value};
use thiserror::Error;

/// Spreadsheet epoch for serial date cells (day 0).
const SERIAL_DATE_EPOCH: (i32, u32, u32) = (1899, 12, 30);

// --- Errors -------------------------------------------------------------

/// A problem with one cell of an import row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be a whole number, got {value}")]
    NotAnInteger { field: &'static str, value: f64 },
    #[error(transparent)]
    OutOfRange(#[from] Violation),
    #[error(transparent)]
    UnknownStatus(#[from] ParseStatusError),
    #[error("Completion Date must be YYYY-MM-DD, got '{0}'")]
    InvalidDate(String),
}

// --- Headers ------------------------------------------------------------

/// Columns the importer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Column {
    Description,
    Probability,
    Impact,
    MitigationEffectiveness,
    Owner,
    Category,
    Status,
    Notes,
    Comments,
    CompletionDate,
}

impl Column {
    /// Label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Column::Description => "Description",
            Column::Probability => "Probability",
            Column::Impact => "Impact",
            Column::MitigationEffectiveness => "Mitigation Effectiveness",
            Column::Owner => "Owner",
            Column::Category => "Category",
            Column::Status => "Status",
            Column::Notes => "Notes",
            Column::Comments => "Comments",
            Column::CompletionDate => "Completion Date",
        }
    }

    /// Column for a raw header, if any.
    pub fn from_header(header: &str) -> Option<Column> {
        match normalize_header(header).as_str() {
            "description" | "riskdescription" | "risk" => Some(Column::Description),
            "probability" => Some(Column::Probability),
            "impact" => Some(Column::Impact),
            "mitigationeffectiveness" | "effectiveness" | "mitigation" => {
                Some(Column::MitigationEffectiveness)
            }
            "owner" => Some(Column::Owner),
            "category" => Some(Column::Category),
            "status" => Some(Column::Status),
            "notes" => Some(Column::Notes),
            "comments" => Some(Column::Comments),
            "completiondate" => Some(Column::CompletionDate),
            _ => None,
        }
    }
}

/// Lowercase and drop spaces, underscores and hyphens.
pub fn normalize_header(header: &str) -> String {
    header
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

// --- Row parsing --------------------------------------------------------

/// Parse one row. `Ok(None)` means every cell was blank.
pub fn parse_row(row: &Map<String, Value>) -> Result<Option<RawRiskInput>, Vec<RowError>> {
    if row.values().all(is_blank) {
        return Ok(None);
    }
    let cells = map_columns(row);

    let mut errors = Vec::new();

    let description = text_cell(&cells, Column::Description);
    if description.is_none() {
        errors.push(RowError::MissingField {
            field: Column::Description.label(),
        });
    }
    let probability = collect(&mut errors, rating_cell(&cells, Column::Probability));
    let impact = collect(&mut errors, rating_cell(&cells, Column::Impact));
    let effectiveness = collect(&mut errors, effectiveness_cell(&cells)).flatten();
    let status = collect(&mut errors, status_cell(&cells)).flatten();
    let completion_date = collect(&mut errors, date_cell(&cells)).flatten();

    let (Some(description), Some(probability), Some(impact)) = (description, probability, impact)
    else {
        return Err(errors);
    };

    let raw = RawRiskInput {
        description,
        probability,
        impact,
        mitigation_effectiveness: effectiveness,
        owner: text_cell(&cells, Column::Owner),
        category: text_cell(&cells, Column::Category),
        status,
        notes: text_cell(&cells, Column::Notes),
        comments: text_cell(&cells, Column::Comments),
        completion_date,
    };

    errors.extend(validate_raw_input(&raw).into_iter().map(RowError::from));
    if errors.is_empty() {
        Ok(Some(raw))
    } else {
        Err(errors)
    }
}

/// Non-blank cells of known columns. When several headers map to one column
/// the first non-blank cell in key order wins.
fn map_columns(row: &Map<String, Value>) -> BTreeMap<Column, &Value> {
    let mut cells = BTreeMap::new();
    for (header, value) in row {
        if is_blank(value) {
            continue;
        }
        if let Some(column) = Column::from_header(header) {
            cells.entry(column).or_insert(value);
        }
    }
    cells
}

fn collect<T>(errors: &mut Vec<RowError>, result: Result<T, RowError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

// --- Cell coercion ------------------------------------------------------

fn is_blank(cell: &Value) -> bool {
    match cell {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn cell<'a>(cells: &BTreeMap<Column, &'a Value>, column: Column) -> Option<&'a Value> {
    cells.get(&column).copied()
}

fn text_cell(cells: &BTreeMap<Column, &Value>, column: Column) -> Option<String> {
    match cell(cells, column)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number_cell(cell: &Value, field: &'static str) -> Result<f64, RowError> {
    let parsed = match cell {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|n| n.is_finite())
        .ok_or_else(|| RowError::NotANumber {
            field,
            value: display_cell(cell),
        })
}

fn rating_cell(cells: &BTreeMap<Column, &Value>, column: Column) -> Result<i32, RowError> {
    let field = column.label();
    let value = cell(cells, column).ok_or(RowError::MissingField { field })?;
    let number = number_cell(value, field)?;
    if number.fract() != 0.0 || number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
        return Err(RowError::NotAnInteger {
            field,
            value: number,
        });
    }
    Ok(number as i32)
}

/// Numbers are fractions; text ending in `%` is a percentage.
fn effectiveness_cell(cells: &BTreeMap<Column, &Value>) -> Result<Option<f64>, RowError> {
    let field = Column::MitigationEffectiveness.label();
    let Some(value) = cell(cells, Column::MitigationEffectiveness) else {
        return Ok(None);
    };
    let effectiveness = match value {
        Value::String(s) if s.trim().ends_with('%') => {
            let percent = s.trim().trim_end_matches('%').trim();
            percent
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(|n| n / 100.0)
                .ok_or_else(|| RowError::NotANumber {
                    field,
                    value: s.trim().to_string(),
                })?
        }
        other => number_cell(other, field)?,
    };
    if let Some(violation) = validate_mitigation_effectiveness(effectiveness).into_iter().next() {
        return Err(violation.into());
    }
    Ok(Some(effectiveness))
}

fn status_cell(cells: &BTreeMap<Column, &Value>) -> Result<Option<RiskStatus>, RowError> {
    match text_cell(cells, Column::Status) {
        Some(text) => Ok(Some(text.parse()?)),
        None => Ok(None),
    }
}

/// `YYYY-MM-DD` text, or a spreadsheet serial day number.
fn date_cell(cells: &BTreeMap<Column, &Value>) -> Result<Option<NaiveDate>, RowError> {
    let Some(value) = cell(cells, Column::CompletionDate) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        Value::Number(n) => n.as_f64().and_then(serial_date),
        _ => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| RowError::InvalidDate(display_cell(value)))
}

fn serial_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 || serial > f64::from(u32::MAX) {
        return None;
    }
    let (year, month, day) = SERIAL_DATE_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day)?.checked_add_days(Days::new(serial.trunc() as u64))
}

fn display_cell(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}
