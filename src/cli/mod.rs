mod commands;
mod import;
mod report;
mod staff;

pub use commands::{ImportCommands, ReportCommands, StaffCommands};
pub use import::{run_import_budget, run_import_roster};
pub use report::{run_report_day, run_report_month, run_report_tracker};
pub use staff::{run_staff_add, run_staff_list, run_staff_remove};

use crate::config::DB_FILE;
use crate::store::SqliteStore;

/// Initialize store from data directory, checking it exists
pub fn init_store(data_dir: &str) -> anyhow::Result<SqliteStore> {
    let data_path: std::path::PathBuf = data_dir.into();
    let db_path = data_path.join(DB_FILE);

    if !db_path.exists() {
        anyhow::bail!(
            "Database not found at {}. Run 'kpi-tracker init' first.",
            db_path.display()
        );
    }

    SqliteStore::new(&db_path).map_err(Into::into)
}
