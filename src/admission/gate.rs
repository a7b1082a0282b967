use crate::reservation::ReservationCategory;

/// Mutual-exclusion region around the engine's check-then-commit sequence.
///
/// Two admissions for the same category must never run `f` at the same time.
/// Implementations are free to serialise more than that.
pub trait AdmissionGate: Default + Send + Sync + 'static {
    fn admit<R>(&self, category: ReservationCategory, f: impl FnOnce() -> R) -> R;
}
