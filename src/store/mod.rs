mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use chrono::NaiveDate;

use crate::error::Result;
use crate::import::{ImportSummary, RosterImport};
use crate::types::*;

/// Store defines the database interface.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Staff operations
    fn create_staff(&self, name: &str) -> Result<StaffMember>;
    fn get_staff(&self, id: i64) -> Result<Option<StaffMember>>;
    fn get_staff_by_name(&self, name: &str) -> Result<Option<StaffMember>>;
    fn list_staff(&self) -> Result<Vec<StaffMember>>;
    /// Deletes a staff member that has no roster or sales rows.
    /// Returns `Ok(false)` for an unknown id and `Error::Conflict` when rows exist.
    fn delete_staff(&self, id: i64) -> Result<bool>;
    /// Inserts the given names only when the staff table is empty.
    fn seed_staff(&self, names: &[String]) -> Result<usize>;

    // Budget operations
    fn get_budget(&self, date: NaiveDate) -> Result<Option<DailyBudget>>;
    fn list_budgets(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<DailyBudget>>;
    fn upsert_budget(&self, budget: &DailyBudget) -> Result<()>;
    /// Upserts all budgets in one transaction, keeping stored hours when an
    /// incoming row has none.
    fn bulk_upsert_budgets(&self, budgets: &[DailyBudget]) -> Result<usize>;

    // Roster operations
    fn list_roster(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<RosterEntry>>;
    fn rostered_hours(&self, date: NaiveDate) -> Result<f64>;
    /// Upserts roster rows in one transaction, creating unknown staff and
    /// recomputing budget hours for every affected date.
    fn bulk_upsert_roster(&self, rows: &[RosterImport]) -> Result<ImportSummary>;

    // Sales operations
    fn get_sales(&self, staff_id: i64, date: NaiveDate) -> Result<Option<SalesEntry>>;
    fn list_sales(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<SalesEntry>>;
    fn upsert_sales(&self, entry: &SalesEntry) -> Result<()>;
}
