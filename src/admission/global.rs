use super::gate::AdmissionGate;
use crate::reservation::ReservationCategory;
use parking_lot::Mutex;

/// One lock for every category.
#[derive(Default)]
pub struct GlobalGate {
    lock: Mutex<()>,
}

impl AdmissionGate for GlobalGate {
    fn admit<R>(&self, _category: ReservationCategory, f: impl FnOnce() -> R) -> R {
        let _guard = self.lock.lock();
        f()
    }
}
