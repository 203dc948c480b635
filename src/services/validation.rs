use crate::error::AppError;

/// Column limit shared by `todo_list.name` and `todo_item.description`.
pub const MAX_FIELD_LEN: usize = 250;

/// A form field is usable only when it was sent and is not empty.
pub fn required_field(value: Option<&str>) -> Result<&str, AppError> {
    match value {
        Some(value) if !value.is_empty() && value.chars().count() <= MAX_FIELD_LEN => Ok(value),
        _ => Err(AppError::invalid_params()),
    }
}
