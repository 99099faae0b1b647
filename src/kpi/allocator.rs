use crate::error::{Error, Result};
use crate::types::EffectiveBudget;

fn require_non_negative(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::validation(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Sales rate per rostered hour, or 0 when either side of the ratio is empty.
#[must_use]
pub fn hourly_rate(budget: &EffectiveBudget) -> f64 {
    if budget.total_budget > 0.0 && budget.total_hours > 0.0 {
        budget.total_budget / budget.total_hours
    } else {
        0.0
    }
}

/// Target sales for a shift: its share of the day's budget, rounded to whole
/// currency units.
pub fn allocate_target(budget: &EffectiveBudget, shift_hours: f64) -> Result<f64> {
    require_non_negative(budget.total_budget, "total_budget")?;
    require_non_negative(budget.total_hours, "total_hours")?;
    require_non_negative(shift_hours, "shift_hours")?;

    // Both factors are non-negative, so round() rounds halves up.
    Ok((shift_hours * hourly_rate(budget)).round())
}

/// A persisted target wins when it is positive; otherwise allocate afresh.
pub fn effective_target(
    persisted: Option<f64>,
    budget: &EffectiveBudget,
    shift_hours: f64,
) -> Result<f64> {
    match persisted {
        Some(target) if target > 0.0 => Ok(target),
        _ => allocate_target(budget, shift_hours),
    }
}
