use crate::error::{Error, Result};

pub const MAX_STAFF_NAME_LEN: usize = 100;

fn validate_name(name: &str, entity: &str, max_len: usize) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err(format!("{entity} name cannot be empty"));
    }
    if name.chars().count() > max_len {
        return Err(format!("{entity} name cannot exceed {max_len} characters"));
    }
    if name.chars().any(char::is_control) {
        return Err(format!("{entity} name cannot contain control characters"));
    }
    Ok(())
}

/// Returns the trimmed name when it is acceptable. Every path that creates a
/// staff row goes through this.
pub fn validate_staff_name(name: &str) -> Result<&str> {
    let name = name.trim();
    validate_name(name, "Staff", MAX_STAFF_NAME_LEN).map_err(Error::Validation)?;
    Ok(name)
}
