use crate::reservation::{Reservation, ReservationCategory, ReservationId};

/// Where committed reservations live. The engine only ever appends and reads;
/// removal belongs to whatever lifecycle the backing store enforces.
pub trait ReservationStore: Send + Sync + 'static {
    /// List semantics: insertion order kept, nothing deduplicated.
    fn append(&self, reservation: Reservation);
    fn find_by_category(&self, category: ReservationCategory) -> Vec<Reservation>;
    /// With duplicate ids the first appended record wins.
    fn find_by_id(&self, id: ReservationId) -> Option<Reservation>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
