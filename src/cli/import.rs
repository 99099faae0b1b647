use std::fs::File;
use std::path::Path;

use anyhow::Context;

use crate::import::{prepare_budgets, prepare_roster, read_budget_csv, read_roster_csv};
use crate::store::Store;

use super::init_store;

fn open(file: &Path) -> anyhow::Result<File> {
    File::open(file).with_context(|| format!("Failed to open {}", file.display()))
}

pub fn run_import_roster(data_dir: String, file: &Path) -> anyhow::Result<()> {
    let store = init_store(&data_dir)?;

    let rows = read_roster_csv(open(file)?)?;
    let (prepared, skipped) = prepare_roster(&rows)?;
    let summary = store.bulk_upsert_roster(&prepared)?;

    println!(
        "Imported {} roster rows across {} dates ({} skipped)",
        summary.imported,
        summary.dates.len(),
        skipped
    );
    for name in &summary.created_staff {
        println!("  new staff member: {name}");
    }
    Ok(())
}

pub fn run_import_budget(data_dir: String, file: &Path) -> anyhow::Result<()> {
    let store = init_store(&data_dir)?;

    let rows = read_budget_csv(open(file)?)?;
    let (prepared, skipped) = prepare_budgets(&rows)?;
    let imported = store.bulk_upsert_budgets(&prepared)?;

    println!("Imported {imported} budget rows ({skipped} skipped)");
    Ok(())
}
