use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::{DayRecord, MonthPeriod, StaffMember, TrackerDay, TrackerWeek};

#[derive(Debug, Default, Clone, Copy)]
struct Running {
    actual: f64,
    target: f64,
    variance: f64,
}

impl Running {
    fn push(&mut self, actual: f64, target: f64) {
        self.actual += actual;
        self.target += target;
        self.variance += actual - target;
    }
}

/// Splits the month into weeks that close after each Sunday and after the
/// last day of the month.
#[must_use]
pub fn month_weeks(period: MonthPeriod) -> Vec<Vec<NaiveDate>> {
    let last = period.last_day();
    let mut weeks = Vec::new();
    let mut current = Vec::new();

    for day in period.days() {
        current.push(day);
        if day.weekday() == Weekday::Sun || day == last {
            weeks.push(std::mem::take(&mut current));
        }
    }
    weeks
}

/// Builds one staff member's weekly tracker with month-to-date running totals.
///
/// Only `member`'s records inside the month are used; days without one count
/// as zero.
#[must_use]
pub fn track_month(
    period: MonthPeriod,
    member: &StaffMember,
    records: &[DayRecord],
) -> Vec<TrackerWeek> {
    let by_date: HashMap<NaiveDate, &DayRecord> = records
        .iter()
        .filter(|r| r.staff_id == member.id && period.contains(r.date))
        .map(|r| (r.date, r))
        .collect();

    let mut running = Running::default();

    month_weeks(period)
        .into_iter()
        .enumerate()
        .map(|(index, days)| {
            let mut week = TrackerWeek {
                number: index + 1,
                week_actual: 0.0,
                week_target: 0.0,
                days: Vec::with_capacity(days.len()),
            };

            for date in days {
                let record = by_date.get(&date).copied();
                let actual = record.map_or(0.0, |r| r.actual_sales);
                let target = record.map_or(0.0, |r| r.target_sales);

                week.week_actual += actual;
                week.week_target += target;
                running.push(actual, target);

                week.days.push(TrackerDay {
                    date,
                    weekday: date.format("%a").to_string(),
                    actual_sales: actual,
                    target_sales: target,
                    variance: actual - target,
                    running_actual: running.actual,
                    running_target: running.target,
                    running_variance: running.variance,
                    ips: record.map_or(0.0, |r| r.ips),
                    avg_sale: record.map_or(0.0, |r| r.avg_sale),
                    jcp_sales: record.map_or(0.0, |r| r.jcp_sales),
                });
            }
            week
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isis() -> StaffMember {
        StaffMember {
            id: 7,
            name: "Isis".to_string(),
        }
    }

    fn record(day: &str, actual_sales: f64, target_sales: f64) -> DayRecord {
        DayRecord {
            staff_id: 7,
            name: "Isis".to_string(),
            date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
            shift_hours: 6.0,
            actual_sales,
            target_sales,
            ips: 0.0,
            avg_sale: 0.0,
            jcp_sales: 0.0,
            is_submitted: true,
        }
    }

    #[test]
    fn test_month_starting_wednesday() {
        // May 2024 starts on a Wednesday and ends on a Friday.
        let weeks = month_weeks(MonthPeriod::new(2024, 5).unwrap());
        let lengths: Vec<_> = weeks.iter().map(Vec::len).collect();

        assert_eq!(lengths, [5, 7, 7, 7, 5]);
        assert_eq!(weeks[0][0].weekday(), Weekday::Wed);
        assert_eq!(weeks[0][4].weekday(), Weekday::Sun);
        assert_eq!(weeks[1][0].weekday(), Weekday::Mon);
    }

    #[test]
    fn test_month_starting_monday() {
        // April 2024 starts on a Monday.
        let lengths: Vec<_> = month_weeks(MonthPeriod::new(2024, 4).unwrap())
            .iter()
            .map(Vec::len)
            .collect();
        assert_eq!(lengths, [7, 7, 7, 7, 2]);
    }

    #[test]
    fn test_month_starting_sunday() {
        // September 2024 starts on a Sunday.
        let lengths: Vec<_> = month_weeks(MonthPeriod::new(2024, 9).unwrap())
            .iter()
            .map(Vec::len)
            .collect();
        assert_eq!(lengths, [1, 7, 7, 7, 7, 1]);
    }

    #[test]
    fn test_empty_month_has_zeroed_weeks() {
        let weeks = track_month(MonthPeriod::new(2024, 2).unwrap(), &isis(), &[]);

        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks.iter().map(|w| w.days.len()).sum::<usize>(), 29);
        for week in &weeks {
            assert_eq!(week.week_actual, 0.0);
            assert_eq!(week.week_target, 0.0);
            assert!(week.days.iter().all(|d| d.running_variance == 0.0));
        }
    }

    #[test]
    fn test_running_totals_cross_weeks() {
        let records = [
            record("2024-05-01", 100.0, 80.0),
            record("2024-05-05", 50.0, 80.0),
            record("2024-05-06", 200.0, 100.0),
        ];
        let weeks = track_month(MonthPeriod::new(2024, 5).unwrap(), &isis(), &records);

        assert_eq!(weeks[0].week_actual, 150.0);
        assert_eq!(weeks[0].week_target, 160.0);

        let sunday = &weeks[0].days[4];
        assert_eq!(sunday.weekday, "Sun");
        assert_eq!(sunday.running_actual, 150.0);
        assert_eq!(sunday.running_variance, -10.0);

        let monday = &weeks[1].days[0];
        assert_eq!(monday.variance, 100.0);
        assert_eq!(monday.running_actual, 350.0);
        assert_eq!(monday.running_target, 260.0);
        assert_eq!(monday.running_variance, 90.0);

        let last = weeks.last().unwrap().days.last().unwrap();
        assert_eq!(last.running_actual, 350.0);
        assert_eq!(last.running_variance, 90.0);
    }

    #[test]
    fn test_other_staff_records_ignored() {
        let mut other = record("2024-05-01", 999.0, 1.0);
        other.staff_id = 8;
        other.name = "Gurleen".to_string();
        let records = [record("2024-05-01", 100.0, 80.0), other];

        let weeks = track_month(MonthPeriod::new(2024, 5).unwrap(), &isis(), &records);
        assert_eq!(weeks[0].days[0].actual_sales, 100.0);
        assert_eq!(weeks[0].week_target, 80.0);
    }
}
