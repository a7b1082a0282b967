pub mod in_memory;
pub mod store;

pub use in_memory::InMemoryReservationStore;
pub use store::ReservationStore;
