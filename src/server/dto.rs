use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kpi::SalesSubmission;
use crate::types::parse_date;

#[derive(Debug, Deserialize)]
pub struct CreateStaffRequest {
    pub name: String,
}

/// Sales submission as posted. The date stays a string until validated so a
/// malformed date is reported like any other invalid field.
#[derive(Debug, Deserialize)]
pub struct SubmitSalesRequest {
    pub staff_id: i64,
    pub date: String,
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

impl SubmitSalesRequest {
    pub fn into_submission(self) -> Result<SalesSubmission> {
        Ok(SalesSubmission {
            staff_id: self.staff_id,
            date: parse_date(&self.date)?,
            shift_hours: self.shift_hours,
            actual_sales: self.actual_sales,
            target_sales: self.target_sales,
            ips: self.ips,
            avg_sale: self.avg_sale,
            jcp_sales: self.jcp_sales,
        })
    }
}

/// Effective budget for a date, as served by `GET /budget/{date}`.
#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    pub date: NaiveDate,
    pub total_budget: f64,
    pub total_hours: f64,
    pub hourly_rate: f64,
}

#[derive(Debug, Deserialize)]
pub struct AllocateQuery {
    #[serde(default)]
    pub total_budget: f64,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub shift_hours: f64,
}

#[derive(Debug, Serialize)]
pub struct AllocateResponse {
    pub hourly_rate: f64,
    pub target_sales: f64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}
