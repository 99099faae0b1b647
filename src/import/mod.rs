//! Ingestion of roster and budget rows.
//!
//! Rows arrive either as JSON bodies on the bulk endpoints or from flat CSV
//! files. Both paths go through [`prepare_roster`] / [`prepare_budgets`], which
//! normalize dates, drop spreadsheet-epoch artifacts and reject negative
//! numbers before anything reaches the store.

mod reader;

pub use reader::{read_budget_csv, read_roster_csv};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{DailyBudget, StaffMember, format_date, validate_staff_name};

/// Spreadsheets render an empty date cell as their epoch.
pub const SPREADSHEET_EPOCH: &str = "1899-12-31";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    pub staff_name: String,
    pub date: String,
    pub shift_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRow {
    pub date: String,
    pub total_budget: f64,
    #[serde(default)]
    pub total_hours: f64,
}

/// A roster row that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterImport {
    pub staff_name: String,
    pub date: NaiveDate,
    pub shift_hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub created_staff: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<NaiveDate>,
}

/// Accepts `YYYY-MM-DD`, `YYYY/M/D` and day-first `D/M/YYYY`, with `-` or `/`.
pub fn normalize_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    let parts: Vec<&str> = trimmed.split(['-', '/']).collect();

    let (year, month, day) = match parts.as_slice() {
        [y, m, d] if y.len() == 4 => (*y, *m, *d),
        [d, m, y] if y.len() == 4 => (*y, *m, *d),
        _ => return Err(Error::validation(format!("unrecognized date '{trimmed}'"))),
    };

    let parse = |s: &str| s.parse::<u32>().ok();
    let ymd = year
        .parse::<i32>()
        .ok()
        .zip(parse(month))
        .zip(parse(day))
        .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d));

    ymd.ok_or_else(|| Error::validation(format!("invalid date '{trimmed}'")))
}

fn is_epoch_artifact(raw: &str) -> bool {
    raw.trim() == SPREADSHEET_EPOCH
        || normalize_date(raw).is_ok_and(|d| format_date(d) == SPREADSHEET_EPOCH)
}

fn require_non_negative(value: f64, field: &str, row: usize) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::validation(format!(
            "row {row}: {field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

/// Validates roster rows, dropping spreadsheet-epoch dates.
pub fn prepare_roster(rows: &[RosterRow]) -> Result<(Vec<RosterImport>, usize)> {
    let mut prepared = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for (index, row) in rows.iter().enumerate() {
        let line = index + 1;
        if is_epoch_artifact(&row.date) {
            tracing::warn!("Skipping roster row {} with placeholder date {}", line, row.date);
            skipped += 1;
            continue;
        }

        let staff_name = validate_staff_name(&row.staff_name)
            .map_err(|e| Error::validation(format!("row {line}: {e}")))?;
        require_non_negative(row.shift_hours, "shift_hours", line)?;

        prepared.push(RosterImport {
            staff_name: staff_name.to_string(),
            date: normalize_date(&row.date)
                .map_err(|e| Error::validation(format!("row {line}: {e}")))?,
            shift_hours: row.shift_hours,
        });
    }

    Ok((prepared, skipped))
}

/// Validates budget rows, dropping spreadsheet-epoch dates. Zero hours become
/// "unknown" so the store keeps or derives them.
pub fn prepare_budgets(rows: &[BudgetRow]) -> Result<(Vec<DailyBudget>, usize)> {
    let mut prepared = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for (index, row) in rows.iter().enumerate() {
        let line = index + 1;
        if is_epoch_artifact(&row.date) {
            tracing::warn!("Skipping budget row {} with placeholder date {}", line, row.date);
            skipped += 1;
            continue;
        }

        require_non_negative(row.total_budget, "total_budget", line)?;
        require_non_negative(row.total_hours, "total_hours", line)?;

        prepared.push(DailyBudget {
            date: normalize_date(&row.date)
                .map_err(|e| Error::validation(format!("row {line}: {e}")))?,
            total_budget: row.total_budget,
            total_hours: DailyBudget::hours_from_column(row.total_hours),
        });
    }

    Ok((prepared, skipped))
}

/// Finds the staff member an imported name refers to: an exact match first,
/// then the first known name contained in the imported one.
#[must_use]
pub fn resolve_staff<'a>(name: &str, staff: &'a [StaffMember]) -> Option<&'a StaffMember> {
    let name = name.trim();
    if let Some(exact) = staff.iter().find(|s| s.name == name) {
        return Some(exact);
    }

    let lowered = name.to_lowercase();
    staff
        .iter()
        .find(|s| !s.name.is_empty() && lowered.contains(&s.name.to_lowercase()))
}
