use chrono::{NaiveDate, NaiveDateTime};
use fleet_reservations::{
    CapacityConfig, FixedClock, InMemoryReservationStore, ReservationCategory, ReservationEngine,
    ReservationValidator, admission::AdmissionGate,
};
use std::sync::Arc;

pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

/// Fixed "now" well before every date the tests book.
pub fn test_now() -> NaiveDateTime {
    at(2029, 6, 1, 0)
}

pub fn build_engine<G: AdmissionGate>(
    entries: &[(ReservationCategory, u32)],
) -> (
    Arc<InMemoryReservationStore>,
    ReservationEngine<InMemoryReservationStore, G>,
) {
    let store = Arc::new(InMemoryReservationStore::new());
    let config = CapacityConfig::new(entries.iter().copied()).unwrap();
    let validator = ReservationValidator::new(FixedClock(test_now()));
    let engine = ReservationEngine::with_gate(store.clone(), validator, Some(config));
    (store, engine)
}
