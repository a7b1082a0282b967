use crate::reservation::{ReservationCategory, ReservationId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReservationError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Invalid reservation request: {0}")]
    Validation(String),

    #[error("No availability for category {category}")]
    NoAvailability { category: ReservationCategory },

    #[error("No capacity configured for category {0}")]
    UnconfiguredCategory(ReservationCategory),

    #[error("Reservation with ID {0} not found")]
    NotFound(ReservationId),
}

impl ReservationError {
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid capacity for {category}: {value:?}")]
    InvalidCapacity {
        category: ReservationCategory,
        value: String,
    },

    #[error("Capacity for {0} must be greater than zero")]
    ZeroCapacity(ReservationCategory),
}
