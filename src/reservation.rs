use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Kinds of vehicle that can be reserved. Each one is an independent pool of
/// interchangeable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationCategory {
    Sedan,
    Suv,
    Van,
}

impl ReservationCategory {
    pub const ALL: [ReservationCategory; 3] = [Self::Sedan, Self::Suv, Self::Van];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sedan => "SEDAN",
            Self::Suv => "SUV",
            Self::Van => "VAN",
        }
    }
}

impl fmt::Display for ReservationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown reservation category: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub u64);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed reservation over the half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReservation")]
pub struct Reservation {
    id: ReservationId,
    category: ReservationCategory,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Reservation {
    /// Only the engine commits reservations; the interval has already been
    /// checked to be non-empty by the time this is called.
    pub(crate) fn new(
        id: ReservationId,
        category: ReservationCategory,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        debug_assert!(start < end);
        Self {
            id,
            category,
            start,
            end,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn category(&self) -> ReservationCategory {
        self.category
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Back-to-back intervals (one ending exactly where the other starts) do
    /// not overlap.
    pub fn overlaps(&self, other_start: NaiveDateTime, other_end: NaiveDateTime) -> bool {
        other_start < self.end && self.start < other_end
    }
}

#[derive(Deserialize)]
struct RawReservation {
    id: ReservationId,
    category: ReservationCategory,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<RawReservation> for Reservation {
    type Error = String;

    fn try_from(raw: RawReservation) -> Result<Self, Self::Error> {
        if raw.start >= raw.end {
            return Err(format!(
                "reservation {} starts at {} which is not before its end {}",
                raw.id, raw.start, raw.end
            ));
        }
        Ok(Self::new(raw.id, raw.category, raw.start, raw.end))
    }
}

/// Caller input. Fields are optional because requests arrive from untrusted
/// sources; the validator rejects anything missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    #[serde(default)]
    pub category: Option<ReservationCategory>,
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    pub duration_days: i64,
}

impl ReservationRequest {
    pub fn new(category: ReservationCategory, start: NaiveDateTime, duration_days: i64) -> Self {
        Self {
            category: Some(category),
            start: Some(start),
            duration_days,
        }
    }
}

/// A request that passed validation: category known and `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionRequest {
    category: ReservationCategory,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl AdmissionRequest {
    pub(crate) fn new(
        category: ReservationCategory,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            category,
            start,
            end,
        }
    }

    pub fn category(&self) -> ReservationCategory {
        self.category
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }
}
