pub mod animals;
pub mod events;
pub mod reports;
pub mod volunteers;

use crate::error::{AppError, ReadError};

/// Fallback for listing routes hit with an unsupported method.
pub async fn read_method_not_allowed() -> ReadError {
    ReadError(AppError::MethodNotAllowed)
}

/// Fallback for submission routes hit with anything but `POST`.
pub async fn write_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
