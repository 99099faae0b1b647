mod models;
mod period;
mod validation;

pub use models::*;
pub use period::{DATE_FORMAT, MonthPeriod, format_date, parse_date};
pub use validation::{MAX_STAFF_NAME_LEN, validate_staff_name};
