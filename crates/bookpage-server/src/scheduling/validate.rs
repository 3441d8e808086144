use crate::error::{AppError, Result};

/// Column width of names and emails (`VARCHAR(255)`).
pub(crate) const MAX_TEXT_LEN: usize = 255;
/// Column width of phone numbers (`VARCHAR(64)`).
pub(crate) const MAX_PHONE_LEN: usize = 64;

pub(crate) fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

/// Required single-line text that has to fit a `VARCHAR(255)` column.
pub(crate) fn text(field: &str, value: &str) -> Result<String> {
    let value = required(field, value)?;
    fits(field, &value, MAX_TEXT_LEN)?;
    Ok(value)
}

pub(crate) fn phone(field: &str, value: &str) -> Result<String> {
    let value = required(field, value)?;
    fits(field, &value, MAX_PHONE_LEN)?;
    Ok(value)
}

pub(crate) fn email(field: &str, value: &str) -> Result<String> {
    let value = text(field, value)?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(value),
        _ => Err(AppError::Validation(format!(
            "{} must be an email address",
            field
        ))),
    }
}

/// Blank optional text is treated as absent.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn optional_phone(field: &str, value: Option<String>) -> Result<Option<String>> {
    let value = optional(value);
    if let Some(v) = &value {
        fits(field, v, MAX_PHONE_LEN)?;
    }
    Ok(value)
}

// Counted in characters, as Postgres counts VARCHAR length.
fn fits(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
