use super::store::ReservationStore;
use crate::reservation::{Reservation, ReservationCategory, ReservationId};
use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct InMemoryReservationStore {
    by_category: DashMap<ReservationCategory, Vec<Reservation>>,
    by_id: SkipMap<ReservationId, Reservation>,
    len: AtomicUsize,
}

impl Default for InMemoryReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self {
            by_category: DashMap::new(),
            by_id: SkipMap::new(),
            len: AtomicUsize::new(0),
        }
    }
}

impl ReservationStore for InMemoryReservationStore {
    fn append(&self, reservation: Reservation) {
        self.by_category
            .entry(reservation.category())
            .or_default()
            .push(reservation);
        // first writer keeps the id slot
        self.by_id.get_or_insert(reservation.id(), reservation);
        self.len.fetch_add(1, Ordering::AcqRel);
    }

    fn find_by_category(&self, category: ReservationCategory) -> Vec<Reservation> {
        self.by_category
            .get(&category)
            .map(|list| list.value().clone())
            .unwrap_or_default()
    }

    fn find_by_id(&self, id: ReservationId) -> Option<Reservation> {
        self.by_id.get(&id).map(|entry| *entry.value())
    }

    fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }
}
