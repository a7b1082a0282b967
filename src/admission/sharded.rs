use super::gate::AdmissionGate;
use crate::reservation::ReservationCategory;
use parking_lot::Mutex;

/// One lock per category. Admission for a category only reads and writes that
/// category's reservations, so disjoint categories can proceed in parallel.
#[derive(Default)]
pub struct ShardedGate {
    sedan: Mutex<()>,
    suv: Mutex<()>,
    van: Mutex<()>,
}

impl ShardedGate {
    fn shard(&self, category: ReservationCategory) -> &Mutex<()> {
        match category {
            ReservationCategory::Sedan => &self.sedan,
            ReservationCategory::Suv => &self.suv,
            ReservationCategory::Van => &self.van,
        }
    }
}

impl AdmissionGate for ShardedGate {
    fn admit<R>(&self, category: ReservationCategory, f: impl FnOnce() -> R) -> R {
        let _guard = self.shard(category).lock();
        f()
    }
}
