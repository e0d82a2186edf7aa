use thiserror::Error;

/// Maximum accepted dish name length in characters (after trimming).
pub const MAX_DISH_NAME_CHARS: usize = 200;

/// Maximum number of dishes accepted in a single batch request.
pub const MAX_BATCH_DISHES: usize = 20;

/// Input validation errors.
///
/// These are the only errors callers ever see. Once a request passes
/// validation, estimation always produces a well-formed result: inference
/// failures, malformed model output, and unrecognized ingredients all
/// degrade to lower-confidence estimates instead of erroring.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Dish name must not be empty")]
    EmptyDishName,

    #[error("Dish name too long: {0} characters (max {MAX_DISH_NAME_CHARS})")]
    DishNameTooLong(usize),

    #[error("Image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: usize, max: usize },

    #[error("Could not detect image format")]
    UnknownImageFormat,

    #[error("Unsupported image format: {0}. Allowed: JPEG, PNG, GIF, WebP")]
    UnsupportedImageFormat(String),

    #[error("Batch must contain at least one dish")]
    EmptyBatch,

    #[error("Batch too large: {0} dishes (max {MAX_BATCH_DISHES})")]
    BatchTooLarge(usize),
}

/// Validate a dish name, returning the trimmed name on success.
pub fn validate_dish_name(dish: &str) -> Result<&str, InputError> {
    let trimmed = dish.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyDishName);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_DISH_NAME_CHARS {
        return Err(InputError::DishNameTooLong(chars));
    }
    Ok(trimmed)
}
