//! KPI computation.
//!
//! The submodules are pure functions over typed rows. The functions in this
//! module load those rows from an injected [`Store`] and run the core over
//! them; nothing here caches or holds state between calls.

pub mod allocator;
pub mod daily;
pub mod monthly;
pub mod weekly;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::{
    DailyBudget, DayRecord, EffectiveBudget, IndividualTracker, MonthPeriod, MonthlySummary,
    RosterEntry, SalesEntry, StaffMember,
};
use monthly::MonthRows;

/// Current budget for a date with the hours sentinel resolved.
pub fn effective_budget(store: &dyn Store, date: NaiveDate) -> Result<EffectiveBudget> {
    let budget = store.get_budget(date)?;
    let rostered = store.rostered_hours(date)?;
    Ok(EffectiveBudget::for_date(budget.as_ref(), rostered))
}

/// One record per staff member for the date, ordered by name.
pub fn compute_day_records(store: &dyn Store, date: NaiveDate) -> Result<Vec<DayRecord>> {
    let staff = store.list_staff()?;
    let roster = store.list_roster(date, date)?;
    let sales = store.list_sales(date, date)?;
    let budget = store.get_budget(date)?;

    tracing::debug!(
        "Computing day {} for {} staff ({} sales)",
        date,
        staff.len(),
        sales.len()
    );
    daily::aggregate_day(date, &staff, &roster, &sales, budget.as_ref())
}

struct LoadedMonth {
    period: MonthPeriod,
    staff: Vec<StaffMember>,
    roster: Vec<RosterEntry>,
    sales: Vec<SalesEntry>,
    budgets: Vec<DailyBudget>,
}

impl LoadedMonth {
    fn load(store: &dyn Store, year: i32, month: u32) -> Result<Self> {
        let period = MonthPeriod::new(year, month)?;
        let (from, to) = (period.first_day(), period.last_day());

        Ok(Self {
            period,
            staff: store.list_staff()?,
            roster: store.list_roster(from, to)?,
            sales: store.list_sales(from, to)?,
            budgets: store.list_budgets(from, to)?,
        })
    }

    fn rows(&self) -> MonthRows<'_> {
        MonthRows {
            staff: &self.staff,
            roster: &self.roster,
            sales: &self.sales,
            budgets: &self.budgets,
        }
    }
}

pub fn compute_monthly_summary(store: &dyn Store, year: i32, month: u32) -> Result<MonthlySummary> {
    let loaded = LoadedMonth::load(store, year, month)?;
    tracing::debug!(
        "Rolling up {}-{:02}: {} days, {} staff",
        year,
        month,
        loaded.period.day_count(),
        loaded.staff.len()
    );
    monthly::roll_month(loaded.period, loaded.rows())
}

/// Every day of the month crossed with every staff member, date-major.
pub fn compute_monthly_details(store: &dyn Store, year: i32, month: u32) -> Result<Vec<DayRecord>> {
    let loaded = LoadedMonth::load(store, year, month)?;
    monthly::month_records(loaded.period, loaded.rows())
}

pub fn compute_individual_tracker(
    store: &dyn Store,
    staff_id: i64,
    year: i32,
    month: u32,
) -> Result<IndividualTracker> {
    let member = store
        .get_staff(staff_id)?
        .ok_or_else(|| Error::NotFound(format!("staff member {staff_id}")))?;
    let loaded = LoadedMonth::load(store, year, month)?;

    let records = monthly::month_records(loaded.period, loaded.rows())?;

    tracing::debug!("Tracking {} for {}-{:02}", member.name, year, month);
    Ok(IndividualTracker {
        totals: monthly::staff_totals(&member, &records),
        weeks: weekly::track_month(loaded.period, &member, &records),
        staff: member,
        year,
        month,
    })
}

/// A sales entry as submitted. `target_sales` is optional; when it is missing
/// or zero the allocator fills it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSubmission {
    pub staff_id: i64,
    pub date: NaiveDate,
    pub shift_hours: f64,
    pub actual_sales: f64,
    #[serde(default)]
    pub target_sales: Option<f64>,
    #[serde(default)]
    pub ips: f64,
    #[serde(default)]
    pub avg_sale: f64,
    #[serde(default)]
    pub jcp_sales: f64,
}

impl SalesSubmission {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("shift_hours", self.shift_hours),
            ("actual_sales", self.actual_sales),
            ("target_sales", self.target_sales.unwrap_or(0.0)),
            ("ips", self.ips),
            ("avg_sale", self.avg_sale),
            ("jcp_sales", self.jcp_sales),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::validation(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Stores a sales entry, fixing its target at submit time.
pub fn submit_sales(store: &dyn Store, submission: SalesSubmission) -> Result<SalesEntry> {
    submission.validate()?;

    if store.get_staff(submission.staff_id)?.is_none() {
        return Err(Error::NotFound(format!(
            "staff member {}",
            submission.staff_id
        )));
    }

    let target_sales = match submission.target_sales {
        Some(target) if target > 0.0 => target,
        _ => {
            let budget = effective_budget(store, submission.date)?;
            allocator::allocate_target(&budget, submission.shift_hours)?
        }
    };

    let entry = SalesEntry {
        staff_id: submission.staff_id,
        date: submission.date,
        shift_hours: submission.shift_hours,
        actual_sales: submission.actual_sales,
        target_sales,
        ips: submission.ips,
        avg_sale: submission.avg_sale,
        jcp_sales: submission.jcp_sales,
    };
    store.upsert_sales(&entry)?;

    tracing::info!(
        "Recorded sales for staff {} on {} (target {})",
        entry.staff_id,
        entry.date,
        entry.target_sales
    );
    Ok(entry)
}
