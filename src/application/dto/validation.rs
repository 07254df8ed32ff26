//! Custom field rules shared by the request DTOs

use std::borrow::Cow;

use validator::ValidationError;

fn not_blank(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(Cow::Borrowed(message));
        return Err(error);
    }
    Ok(())
}

pub fn zone_name_not_blank(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "Zone name must not be blank")
}

pub fn name_not_blank(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "name must not be blank")
}

pub fn species_not_blank(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "species must not be blank")
}

pub fn health_status_not_blank(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "healthStatus must not be blank")
}

/// For optional patch fields: absent is fine, present must not be blank
pub fn name_not_blank_when_provided(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "name must not be blank when provided")
}
