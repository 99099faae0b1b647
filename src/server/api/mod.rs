mod budget;
mod reports;
mod roster;
mod sales;
mod staff;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::server::AppState;

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Staff routes
        .route("/staff", get(staff::list_staff))
        .route("/staff", post(staff::create_staff))
        .route("/staff/{id}", delete(staff::delete_staff))
        // Budget and roster routes
        .route("/budget/{date}", get(budget::get_budget))
        .route("/budget", post(budget::upsert_budget))
        .route("/budget/bulk", post(budget::bulk_budgets))
        .route("/roster/bulk", post(roster::bulk_roster))
        // Sales routes
        .route("/sales/{date}", get(sales::day_records))
        .route("/sales", post(sales::submit_sales))
        // Reports
        .route("/summary/{year}/{month}", get(reports::monthly_summary))
        .route("/details/{year}/{month}", get(reports::monthly_details))
        .route(
            "/tracker/{staff_id}/{year}/{month}",
            get(reports::individual_tracker),
        )
        .route("/allocate", get(reports::allocate))
}
