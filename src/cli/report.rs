use crate::kpi;
use crate::types::parse_date;

use super::init_store;

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run_report_day(data_dir: String, date: String, json: bool) -> anyhow::Result<()> {
    let store = init_store(&data_dir)?;
    let date = parse_date(&date)?;
    let records = kpi::compute_day_records(&store, date)?;

    if json {
        return print_json(&records);
    }

    println!("{date}");
    println!(
        "{:<20} {:>6} {:>10} {:>10} {:>6} {:>8}  SUBMITTED",
        "NAME", "HOURS", "ACTUAL", "TARGET", "IPS", "AVG"
    );
    for r in &records {
        println!(
            "{:<20} {:>6.1} {:>10.2} {:>10.0} {:>6.2} {:>8.2}  {}",
            r.name,
            r.shift_hours,
            r.actual_sales,
            r.target_sales,
            r.ips,
            r.avg_sale,
            if r.is_submitted { "yes" } else { "no" }
        );
    }
    Ok(())
}

pub fn run_report_month(data_dir: String, year: i32, month: u32, json: bool) -> anyhow::Result<()> {
    let store = init_store(&data_dir)?;
    let summary = kpi::compute_monthly_summary(&store, year, month)?;

    if json {
        return print_json(&summary);
    }

    println!("{year}-{month:02}");
    println!(
        "{:<20} {:>10} {:>10} {:>7} {:>6} {:>8}",
        "NAME", "SALES", "TARGET", "HOURS", "IPS", "AVG"
    );
    for s in &summary.staff {
        println!(
            "{:<20} {:>10.2} {:>10.0} {:>7.1} {:>6.2} {:>8.2}",
            s.name, s.total_sales, s.total_target, s.total_hours, s.avg_ips, s.avg_sale_val
        );
    }
    println!();
    println!(
        "Store budget {:.2} over {:.1} hours",
        summary.store.total_budget, summary.store.total_hours
    );
    Ok(())
}

pub fn run_report_tracker(
    data_dir: String,
    staff_id: i64,
    year: i32,
    month: u32,
    json: bool,
) -> anyhow::Result<()> {
    let store = init_store(&data_dir)?;
    let tracker = kpi::compute_individual_tracker(&store, staff_id, year, month)?;

    if json {
        return print_json(&tracker);
    }

    println!("{} {year}-{month:02}", tracker.staff.name);
    for week in &tracker.weeks {
        println!(
            "Week {}: actual {:.2} / target {:.0}",
            week.number, week.week_actual, week.week_target
        );
        for day in &week.days {
            println!(
                "  {} {}  {:>10.2} {:>10.0} {:>+10.2}  running {:>+10.2}",
                day.date,
                day.weekday,
                day.actual_sales,
                day.target_sales,
                day.variance,
                day.running_variance
            );
        }
    }
    Ok(())
}
