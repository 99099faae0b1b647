use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub staff_id: i64,
    pub date: NaiveDate,
    pub shift_hours: f64,
}

/// Store-wide labor budget for one day.
///
/// `total_hours` is `None` when the hours are unknown and must be derived from
/// the roster sum for the date. The database stores that state as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBudget {
    pub date: NaiveDate,
    pub total_budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,
}

impl DailyBudget {
    /// Converts a stored hours column into the explicit optional form.
    #[must_use]
    pub fn hours_from_column(value: f64) -> Option<f64> {
        (value > 0.0).then_some(value)
    }

    #[must_use]
    pub fn hours_column(&self) -> f64 {
        self.total_hours.unwrap_or(0.0)
    }

    /// Resolves the hours sentinel against the roster sum for the same date.
    #[must_use]
    pub fn resolve(&self, rostered_hours: f64) -> EffectiveBudget {
        EffectiveBudget {
            total_budget: self.total_budget,
            total_hours: self.total_hours.unwrap_or(rostered_hours),
        }
    }
}

/// A budget with the hours sentinel already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectiveBudget {
    pub total_budget: f64,
    pub total_hours: f64,
}

impl EffectiveBudget {
    /// Effective budget for a date that has no budget row.
    #[must_use]
    pub fn unbudgeted(rostered_hours: f64) -> Self {
        Self {
            total_budget: 0.0,
            total_hours: rostered_hours,
        }
    }

    #[must_use]
    pub fn for_date(budget: Option<&DailyBudget>, rostered_hours: f64) -> Self {
        budget.map_or_else(
            || Self::unbudgeted(rostered_hours),
            |b| b.resolve(rostered_hours),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesEntry {
    pub staff_id: i64,
    pub date: NaiveDate,
    pub shift_hours: f64,
    pub actual_sales: f64,
    pub target_sales: f64,
    #[serde(default)]
    pub ips: f64,
    #[serde(default)]
    pub avg_sale: f64,
    #[serde(default)]
    pub jcp_sales: f64,
}

/// One staff member's normalized view of a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub staff_id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub shift_hours: f64,
    pub actual_sales: f64,
    pub target_sales: f64,
    pub ips: f64,
    pub avg_sale: f64,
    pub jcp_sales: f64,
    pub is_submitted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMonthTotals {
    pub staff_id: i64,
    pub name: String,
    pub total_sales: f64,
    pub total_target: f64,
    pub total_hours: f64,
    pub avg_ips: f64,
    pub avg_sale_val: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreTotals {
    pub total_budget: f64,
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBudget {
    pub date: NaiveDate,
    pub total_budget: f64,
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub staff: Vec<StaffMonthTotals>,
    pub store: StoreTotals,
    pub daily_budgets: Vec<DayBudget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerDay {
    pub date: NaiveDate,
    pub weekday: String,
    pub actual_sales: f64,
    pub target_sales: f64,
    pub variance: f64,
    pub running_actual: f64,
    pub running_target: f64,
    pub running_variance: f64,
    pub ips: f64,
    pub avg_sale: f64,
    pub jcp_sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerWeek {
    pub number: usize,
    pub week_actual: f64,
    pub week_target: f64,
    pub days: Vec<TrackerDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualTracker {
    pub staff: StaffMember,
    pub year: i32,
    pub month: u32,
    pub totals: StaffMonthTotals,
    pub weeks: Vec<TrackerWeek>,
}
