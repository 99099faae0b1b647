use std::collections::HashMap;

use chrono::NaiveDate;

use super::daily::DaySheet;
use crate::error::Result;
use crate::types::{
    DailyBudget, DayBudget, DayRecord, EffectiveBudget, MonthPeriod, MonthlySummary, RosterEntry,
    SalesEntry, StaffMember, StaffMonthTotals, StoreTotals,
};

/// Rows loaded for one month; anything dated outside the month is ignored.
#[derive(Debug, Clone, Copy)]
pub struct MonthRows<'a> {
    pub staff: &'a [StaffMember],
    pub roster: &'a [RosterEntry],
    pub sales: &'a [SalesEntry],
    pub budgets: &'a [DailyBudget],
}

/// One calendar day of a month: the store budget and every staff record.
#[derive(Debug, Clone)]
pub struct MonthDay {
    pub budget: DayBudget,
    pub records: Vec<DayRecord>,
}

fn by_date<T>(rows: &[T], date_of: impl Fn(&T) -> NaiveDate) -> HashMap<NaiveDate, Vec<&T>> {
    let mut grouped: HashMap<NaiveDate, Vec<&T>> = HashMap::new();
    for row in rows {
        grouped.entry(date_of(row)).or_default().push(row);
    }
    grouped
}

/// Builds every day of the month, including days without any rows.
pub fn month_days(period: MonthPeriod, rows: MonthRows<'_>) -> Result<Vec<MonthDay>> {
    let roster = by_date(rows.roster, |r| r.date);
    let sales = by_date(rows.sales, |s| s.date);
    let budgets: HashMap<NaiveDate, &DailyBudget> =
        rows.budgets.iter().map(|b| (b.date, b)).collect();

    period
        .days()
        .map(|date| {
            let sheet = DaySheet::new(
                date,
                roster.get(&date).into_iter().flatten().copied(),
                sales.get(&date).into_iter().flatten().copied(),
            );
            let effective =
                EffectiveBudget::for_date(budgets.get(&date).copied(), sheet.rostered_hours());
            let records = sheet.records(date, rows.staff, &effective)?;

            Ok(MonthDay {
                budget: DayBudget {
                    date,
                    total_budget: effective.total_budget,
                    total_hours: effective.total_hours,
                },
                records,
            })
        })
        .collect()
}

/// Date-major grid of the month's records: every day, every staff member.
pub fn month_records(period: MonthPeriod, rows: MonthRows<'_>) -> Result<Vec<DayRecord>> {
    Ok(month_days(period, rows)?
        .into_iter()
        .flat_map(|day| day.records)
        .collect())
}

#[derive(Debug, Default, Clone, Copy)]
struct PositiveMean {
    sum: f64,
    count: u32,
}

impl PositiveMean {
    fn add(&mut self, value: f64) {
        if value > 0.0 {
            self.sum += value;
            self.count += 1;
        }
    }

    fn value(self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / f64::from(self.count)
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct StaffFold {
    total_sales: f64,
    total_target: f64,
    total_hours: f64,
    ips: PositiveMean,
    avg_sale: PositiveMean,
}

impl StaffFold {
    fn add(&mut self, record: &DayRecord) {
        self.total_sales += record.actual_sales;
        self.total_target += record.target_sales;
        self.total_hours += record.shift_hours;
        self.ips.add(record.ips);
        self.avg_sale.add(record.avg_sale);
    }

    fn finish(self, member: &StaffMember) -> StaffMonthTotals {
        StaffMonthTotals {
            staff_id: member.id,
            name: member.name.clone(),
            total_sales: self.total_sales,
            total_target: self.total_target,
            total_hours: self.total_hours,
            avg_ips: self.ips.value(),
            avg_sale_val: self.avg_sale.value(),
        }
    }
}

/// Folds a staff member's records into monthly totals.
#[must_use]
pub fn staff_totals<'a>(
    member: &StaffMember,
    records: impl IntoIterator<Item = &'a DayRecord>,
) -> StaffMonthTotals {
    let mut fold = StaffFold::default();
    for record in records.into_iter().filter(|r| r.staff_id == member.id) {
        fold.add(record);
    }
    fold.finish(member)
}

/// Summarises the month from already-built days.
#[must_use]
pub fn summarize(period: MonthPeriod, staff: &[StaffMember], days: &[MonthDay]) -> MonthlySummary {
    let mut folds: HashMap<i64, StaffFold> = HashMap::new();
    let mut store = StoreTotals::default();

    for day in days {
        store.total_budget += day.budget.total_budget;
        store.total_hours += day.budget.total_hours;
        for record in &day.records {
            folds.entry(record.staff_id).or_default().add(record);
        }
    }

    let mut ordered: Vec<&StaffMember> = staff.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

    MonthlySummary {
        year: period.year(),
        month: period.month(),
        staff: ordered
            .into_iter()
            .map(|member| {
                folds
                    .get(&member.id)
                    .copied()
                    .unwrap_or_default()
                    .finish(member)
            })
            .collect(),
        store,
        daily_budgets: days.iter().map(|day| day.budget.clone()).collect(),
    }
}

/// Rolls the month's rows into per-staff totals, store totals and the
/// per-day budget series.
pub fn roll_month(period: MonthPeriod, rows: MonthRows<'_>) -> Result<MonthlySummary> {
    let days = month_days(period, rows)?;
    Ok(summarize(period, rows.staff, &days))
}
