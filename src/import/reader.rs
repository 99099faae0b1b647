use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::{BudgetRow, RosterRow};
use crate::error::Result;

fn records<R: Read>(reader: R) -> Result<Vec<StringRecord>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    csv.records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Into::into)
}

fn first_cell_mentions(record: Option<&StringRecord>, words: &[&str]) -> bool {
    record
        .and_then(|r| r.get(0))
        .map(str::to_lowercase)
        .is_some_and(|cell| words.iter().any(|w| cell.contains(w)))
}

fn number(record: &StringRecord, index: usize) -> f64 {
    record
        .get(index)
        .and_then(|cell| cell.parse().ok())
        .unwrap_or(0.0)
}

fn cell(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index).filter(|c| !c.is_empty())
}

/// Reads a flat `staff_name,date,shift_hours` file. An optional header row is
/// recognised by a first cell naming the staff column.
pub fn read_roster_csv<R: Read>(reader: R) -> Result<Vec<RosterRow>> {
    let records = records(reader)?;
    let skip = usize::from(first_cell_mentions(records.first(), &["name", "employee"]));

    Ok(records
        .iter()
        .skip(skip)
        .filter_map(|record| {
            let staff_name = cell(record, 0)?;
            let date = cell(record, 1)?;
            Some(RosterRow {
                staff_name: staff_name.to_string(),
                date: date.to_string(),
                shift_hours: number(record, 2),
            })
        })
        .collect())
}

/// Reads a flat `date,total_budget,total_hours` file with an optional header.
pub fn read_budget_csv<R: Read>(reader: R) -> Result<Vec<BudgetRow>> {
    let records = records(reader)?;
    let skip = usize::from(first_cell_mentions(records.first(), &["date"]));

    Ok(records
        .iter()
        .skip(skip)
        .filter_map(|record| {
            let date = cell(record, 0)?;
            Some(BudgetRow {
                date: date.to_string(),
                total_budget: number(record, 1),
                total_hours: number(record, 2),
            })
        })
        .collect())
}
