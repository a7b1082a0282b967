pub mod admission;
pub mod config;
pub mod engine;
pub mod error;
pub mod reservation;
pub mod store;
pub mod validator;

pub use config::CapacityConfig;
pub use engine::ReservationEngine;
pub use error::{ConfigError, ReservationError, Result};
pub use reservation::{Reservation, ReservationCategory, ReservationId, ReservationRequest};
pub use store::{InMemoryReservationStore, ReservationStore};
pub use validator::{Clock, FixedClock, ReservationValidator, SystemClock};
