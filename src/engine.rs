use crate::{
    admission::{ActiveGate, AdmissionGate},
    config::CapacityConfig,
    error::{ReservationError, Result},
    reservation::{
        AdmissionRequest, Reservation, ReservationCategory, ReservationId, ReservationRequest,
    },
    store::ReservationStore,
    validator::ReservationValidator,
};
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use std::{
    num::NonZeroU32,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};
use tracing::{debug, info, warn};

/// Admission control over a fixed number of fungible units per category.
///
/// A request is granted when fewer than `capacity(category)` committed
/// reservations overlap its interval. The overlap count and the append that
/// follows run inside the admission gate, so concurrent callers can never both
/// take the last unit.
pub struct ReservationEngine<S: ReservationStore, G: AdmissionGate = ActiveGate> {
    store: Arc<S>,
    validator: ReservationValidator,
    capacity: CapacityConfig,
    next_id: AtomicU64,
    // id draw and append happen together so the store sees ids in order,
    // even when the gate lets categories admit in parallel
    commit: Mutex<()>,
    gate: G,
}

impl<S: ReservationStore> ReservationEngine<S> {
    /// `capacity` falls back to [`CapacityConfig::default`] when `None`.
    pub fn new(
        store: Arc<S>,
        validator: ReservationValidator,
        capacity: Option<CapacityConfig>,
    ) -> Self {
        Self::with_gate(store, validator, capacity)
    }

    pub fn with_defaults(store: Arc<S>) -> Self {
        Self::new(store, ReservationValidator::default(), None)
    }
}

impl<S: ReservationStore, G: AdmissionGate> ReservationEngine<S, G> {
    pub fn with_gate(
        store: Arc<S>,
        validator: ReservationValidator,
        capacity: Option<CapacityConfig>,
    ) -> Self {
        Self {
            store,
            validator,
            capacity: capacity.unwrap_or_default(),
            next_id: AtomicU64::new(0),
            commit: Mutex::new(()),
            gate: G::default(),
        }
    }

    pub fn reserve(&self, request: &ReservationRequest) -> Result<Reservation> {
        let admission = self.validator.validate(request)?;
        let category = admission.category();
        let capacity = self.configured_capacity(category)?;

        self.gate
            .admit(category, || self.admit_locked(admission, capacity))
    }

    // Must only run inside `self.gate`.
    fn admit_locked(
        &self,
        admission: AdmissionRequest,
        capacity: NonZeroU32,
    ) -> Result<Reservation> {
        let category = admission.category();
        let overlapping = self.count_overlapping(category, admission.start(), admission.end());

        debug!(
            %category,
            overlapping,
            capacity = capacity.get(),
            "admission check"
        );

        if overlapping >= capacity.get() as usize {
            return Err(ReservationError::NoAvailability { category });
        }

        // ids are only drawn once admission has succeeded
        let reservation = {
            let _commit = self.commit.lock();
            let id = ReservationId(self.next_id.fetch_add(1, Ordering::AcqRel) + 1);
            let reservation =
                Reservation::new(id, category, admission.start(), admission.end());
            self.store.append(reservation);
            reservation
        };
        let id = reservation.id();

        info!(
            %id,
            %category,
            start = %reservation.start(),
            end = %reservation.end(),
            "reservation committed"
        );
        Ok(reservation)
    }

    /// Every committed reservation for the category, in commit order.
    pub fn reservations_by_category(
        &self,
        category: impl Into<Option<ReservationCategory>>,
    ) -> Result<Vec<Reservation>> {
        let category = category
            .into()
            .ok_or_else(|| ReservationError::validation("category is required"))?;
        Ok(self.store.find_by_category(category))
    }

    pub fn reservation(&self, id: ReservationId) -> Result<Reservation> {
        self.store
            .find_by_id(id)
            .ok_or(ReservationError::NotFound(id))
    }

    /// Units still free over `[start, end)`. Advisory: a later `reserve` may
    /// still be refused if another caller gets there first.
    pub fn available_units(
        &self,
        category: ReservationCategory,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<u32> {
        if start >= end {
            return Err(ReservationError::validation(
                "interval start must be before its end",
            ));
        }
        let capacity = self.configured_capacity(category)?;
        let overlapping = self.count_overlapping(category, start, end);
        let overlapping = u32::try_from(overlapping).unwrap_or(u32::MAX);
        Ok(capacity.get().saturating_sub(overlapping))
    }

    pub fn capacity(&self, category: ReservationCategory) -> Option<NonZeroU32> {
        self.capacity.get(category)
    }

    fn configured_capacity(&self, category: ReservationCategory) -> Result<NonZeroU32> {
        self.capacity.get(category).ok_or_else(|| {
            warn!(%category, "no capacity configured");
            ReservationError::UnconfiguredCategory(category)
        })
    }

    fn count_overlapping(
        &self,
        category: ReservationCategory,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> usize {
        self.store
            .find_by_category(category)
            .iter()
            .filter(|r| r.overlaps(start, end))
            .count()
    }
}
