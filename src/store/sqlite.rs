use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Mutex;

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::import::{ImportSummary, RosterImport, resolve_staff};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn staff_from_row(row: &Row<'_>) -> rusqlite::Result<StaffMember> {
    Ok(StaffMember {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn budget_from_row(row: &Row<'_>) -> rusqlite::Result<DailyBudget> {
    Ok(DailyBudget {
        date: row.get(0)?,
        total_budget: row.get(1)?,
        total_hours: DailyBudget::hours_from_column(row.get(2)?),
    })
}

fn roster_from_row(row: &Row<'_>) -> rusqlite::Result<RosterEntry> {
    Ok(RosterEntry {
        staff_id: row.get(0)?,
        date: row.get(1)?,
        shift_hours: row.get(2)?,
    })
}

fn sales_from_row(row: &Row<'_>) -> rusqlite::Result<SalesEntry> {
    Ok(SalesEntry {
        staff_id: row.get(0)?,
        date: row.get(1)?,
        shift_hours: row.get(2)?,
        actual_sales: row.get(3)?,
        target_sales: row.get(4)?,
        ips: row.get(5)?,
        avg_sale: row.get(6)?,
        jcp_sales: row.get(7)?,
    })
}

const SALES_COLUMNS: &str =
    "staff_id, date, shift_hours, actual_sales, target_sales, ips, avg_sale, jcp_sales";

const UPSERT_ROSTER: &str = "INSERT INTO rosters (staff_id, date, shift_hours)
     VALUES (?1, ?2, ?3)
     ON CONFLICT(staff_id, date) DO UPDATE SET
       shift_hours = excluded.shift_hours";

const SYNC_BUDGET_HOURS: &str = "INSERT INTO daily_budgets (date, total_budget, total_hours)
     VALUES (?1, 0, COALESCE((SELECT SUM(shift_hours) FROM rosters WHERE date = ?1), 0))
     ON CONFLICT(date) DO UPDATE SET
       total_hours = excluded.total_hours";

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // Staff operations

    fn create_staff(&self, name: &str) -> Result<StaffMember> {
        let name = validate_staff_name(name)?;
        let conn = self.conn();
        let result = conn.execute("INSERT INTO staff (name) VALUES (?1)", params![name]);

        match result {
            Ok(_) => Ok(StaffMember {
                id: conn.last_insert_rowid(),
                name: name.to_string(),
            }),
            Err(e) if is_constraint_violation(&e) => Err(Error::Conflict(format!(
                "staff member '{name}' already exists"
            ))),
            Err(e) => Err(Error::from(e)),
        }
    }

    fn get_staff(&self, id: i64) -> Result<Option<StaffMember>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, name FROM staff WHERE id = ?1",
            params![id],
            staff_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn get_staff_by_name(&self, name: &str) -> Result<Option<StaffMember>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, name FROM staff WHERE name = ?1",
            params![name],
            staff_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_staff(&self) -> Result<Vec<StaffMember>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT id, name FROM staff ORDER BY name ASC, id ASC")?;
        let rows = stmt.query_map([], staff_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn delete_staff(&self, id: i64) -> Result<bool> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let exists: Option<i64> = tx
            .query_row("SELECT id FROM staff WHERE id = ?1", params![id], |row| {
                row.get(0)
            })
            .optional()?;
        if exists.is_none() {
            return Ok(false);
        }

        let linked: i64 = tx.query_row(
            "SELECT (SELECT COUNT(*) FROM sales_entries WHERE staff_id = ?1)
                  + (SELECT COUNT(*) FROM rosters WHERE staff_id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        if linked > 0 {
            return Err(Error::Conflict(
                "cannot delete staff with existing sales or roster records".to_string(),
            ));
        }

        let rows = tx.execute("DELETE FROM staff WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(rows > 0)
    }

    fn seed_staff(&self, names: &[String]) -> Result<usize> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let count: i64 = tx.query_row("SELECT COUNT(*) FROM staff", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(0);
        }

        let mut inserted = 0;
        for name in names {
            inserted += tx.execute(
                "INSERT OR IGNORE INTO staff (name) VALUES (?1)",
                params![validate_staff_name(name)?],
            )?;
        }

        tx.commit()?;
        Ok(inserted)
    }

    // Budget operations

    fn get_budget(&self, date: NaiveDate) -> Result<Option<DailyBudget>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT date, total_budget, total_hours FROM daily_budgets WHERE date = ?1",
            params![date],
            budget_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_budgets(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<DailyBudget>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT date, total_budget, total_hours FROM daily_budgets
             WHERE date BETWEEN ?1 AND ?2 ORDER BY date",
        )?;
        let rows = stmt.query_map(params![from, to], budget_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn upsert_budget(&self, budget: &DailyBudget) -> Result<()> {
        self.conn().execute(
            "INSERT INTO daily_budgets (date, total_budget, total_hours)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(date) DO UPDATE SET
               total_budget = excluded.total_budget,
               total_hours = excluded.total_hours",
            params![budget.date, budget.total_budget, budget.hours_column()],
        )?;
        Ok(())
    }

    fn bulk_upsert_budgets(&self, budgets: &[DailyBudget]) -> Result<usize> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO daily_budgets (date, total_budget, total_hours)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(date) DO UPDATE SET
                   total_budget = excluded.total_budget,
                   total_hours = CASE
                     WHEN excluded.total_hours > 0 THEN excluded.total_hours
                     ELSE daily_budgets.total_hours
                   END",
            )?;
            for budget in budgets {
                stmt.execute(params![budget.date, budget.total_budget, budget.hours_column()])?;
            }
        }

        tx.commit()?;
        tracing::info!("Imported {} budget rows", budgets.len());
        Ok(budgets.len())
    }

    // Roster operations

    fn list_roster(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<RosterEntry>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT staff_id, date, shift_hours FROM rosters
             WHERE date BETWEEN ?1 AND ?2 ORDER BY date, staff_id",
        )?;
        let rows = stmt.query_map(params![from, to], roster_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn rostered_hours(&self, date: NaiveDate) -> Result<f64> {
        let conn = self.conn();
        let hours: f64 = conn.query_row(
            "SELECT COALESCE(SUM(shift_hours), 0) FROM rosters WHERE date = ?1",
            params![date],
            |row| row.get(0),
        )?;
        Ok(hours)
    }

    fn bulk_upsert_roster(&self, rows: &[RosterImport]) -> Result<ImportSummary> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let mut staff = {
            let mut stmt = tx.prepare("SELECT id, name FROM staff ORDER BY id")?;
            let rows = stmt.query_map([], staff_from_row)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()?
        };

        let mut summary = ImportSummary::default();
        let mut dates = BTreeSet::new();

        for row in rows {
            let known = resolve_staff(&row.staff_name, &staff).map(|s| s.id);
            let staff_id = match known {
                Some(id) => id,
                None => {
                    let name = validate_staff_name(&row.staff_name)?;
                    tx.execute("INSERT INTO staff (name) VALUES (?1)", params![name])?;
                    let member = StaffMember {
                        id: tx.last_insert_rowid(),
                        name: name.to_string(),
                    };
                    tracing::info!("Created staff member '{}' from roster", member.name);
                    summary.created_staff.push(member.name.clone());
                    let id = member.id;
                    staff.push(member);
                    id
                }
            };

            tx.execute(UPSERT_ROSTER, params![staff_id, row.date, row.shift_hours])?;
            dates.insert(row.date);
        }

        for date in &dates {
            tx.execute(SYNC_BUDGET_HOURS, params![date])?;
        }

        tx.commit()?;

        summary.imported = rows.len();
        summary.dates = dates.into_iter().collect();
        tracing::info!(
            "Imported {} roster rows across {} dates",
            summary.imported,
            summary.dates.len()
        );
        Ok(summary)
    }

    // Sales operations

    fn get_sales(&self, staff_id: i64, date: NaiveDate) -> Result<Option<SalesEntry>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {SALES_COLUMNS} FROM sales_entries WHERE staff_id = ?1 AND date = ?2"),
            params![staff_id, date],
            sales_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_sales(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<SalesEntry>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {SALES_COLUMNS} FROM sales_entries
             WHERE date BETWEEN ?1 AND ?2 ORDER BY date, staff_id"
        ))?;
        let rows = stmt.query_map(params![from, to], sales_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn upsert_sales(&self, entry: &SalesEntry) -> Result<()> {
        let conn = self.conn();

        let exists: Option<i64> = conn
            .query_row(
                "SELECT id FROM staff WHERE id = ?1",
                params![entry.staff_id],
                |row| row.get(0),
            )
            .optional()?;
        if exists.is_none() {
            return Err(Error::NotFound(format!("staff member {}", entry.staff_id)));
        }

        conn.execute(
            &format!(
                "INSERT INTO sales_entries ({SALES_COLUMNS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 ON CONFLICT(staff_id, date) DO UPDATE SET
                   shift_hours = excluded.shift_hours,
                   actual_sales = excluded.actual_sales,
                   target_sales = excluded.target_sales,
                   ips = excluded.ips,
                   avg_sale = excluded.avg_sale,
                   jcp_sales = excluded.jcp_sales"
            ),
            params![
                entry.staff_id,
                entry.date,
                entry.shift_hours,
                entry.actual_sales,
                entry.target_sales,
                entry.ips,
                entry.avg_sale,
                entry.jcp_sales,
            ],
        )?;
        Ok(())
    }
}
