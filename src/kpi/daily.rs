use std::collections::HashMap;

use chrono::NaiveDate;

use super::allocator::effective_target;
use crate::error::Result;
use crate::types::{DailyBudget, DayRecord, EffectiveBudget, RosterEntry, SalesEntry, StaffMember};

/// Roster and sales rows for a single date, keyed by staff id.
#[derive(Debug, Default)]
pub struct DaySheet<'a> {
    roster: HashMap<i64, f64>,
    sales: HashMap<i64, &'a SalesEntry>,
}

impl<'a> DaySheet<'a> {
    pub fn new(
        date: NaiveDate,
        roster: impl IntoIterator<Item = &'a RosterEntry>,
        sales: impl IntoIterator<Item = &'a SalesEntry>,
    ) -> Self {
        let mut sheet = Self::default();
        for entry in roster.into_iter().filter(|r| r.date == date) {
            sheet.roster.insert(entry.staff_id, entry.shift_hours);
        }
        for entry in sales.into_iter().filter(|s| s.date == date) {
            sheet.sales.insert(entry.staff_id, entry);
        }
        sheet
    }

    /// Sum of rostered hours, used when a budget does not carry its own hours.
    #[must_use]
    pub fn rostered_hours(&self) -> f64 {
        self.roster.values().sum()
    }

    pub fn records(
        &self,
        date: NaiveDate,
        staff: &[StaffMember],
        budget: &EffectiveBudget,
    ) -> Result<Vec<DayRecord>> {
        let mut records = staff
            .iter()
            .map(|member| self.record(date, member, budget))
            .collect::<Result<Vec<_>>>()?;
        sort_by_name(&mut records);
        Ok(records)
    }

    fn record(
        &self,
        date: NaiveDate,
        member: &StaffMember,
        budget: &EffectiveBudget,
    ) -> Result<DayRecord> {
        let sale = self.sales.get(&member.id).copied();
        let shift_hours = sale
            .map(|s| s.shift_hours)
            .or_else(|| self.roster.get(&member.id).copied())
            .unwrap_or(0.0);
        let target_sales = effective_target(sale.map(|s| s.target_sales), budget, shift_hours)?;

        Ok(DayRecord {
            staff_id: member.id,
            name: member.name.clone(),
            date,
            shift_hours,
            actual_sales: sale.map_or(0.0, |s| s.actual_sales),
            target_sales,
            ips: sale.map_or(0.0, |s| s.ips),
            avg_sale: sale.map_or(0.0, |s| s.avg_sale),
            jcp_sales: sale.map_or(0.0, |s| s.jcp_sales),
            is_submitted: sale.is_some(),
        })
    }
}

/// Ordinal name order; ids break ties so the output is fully deterministic.
pub(crate) fn sort_by_name(records: &mut [DayRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name).then(a.staff_id.cmp(&b.staff_id)));
}

/// Joins staff, roster, sales and budget rows for one date into one record
/// per staff member.
pub fn aggregate_day(
    date: NaiveDate,
    staff: &[StaffMember],
    roster: &[RosterEntry],
    sales: &[SalesEntry],
    budget: Option<&DailyBudget>,
) -> Result<Vec<DayRecord>> {
    let sheet = DaySheet::new(date, roster, sales);
    let effective = EffectiveBudget::for_date(budget, sheet.rostered_hours());
    sheet.records(date, staff, &effective)
}
