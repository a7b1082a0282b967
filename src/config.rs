use crate::{error::ConfigError, reservation::ReservationCategory};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, num::NonZeroU32};
use tracing::debug;

pub const ENV_PREFIX: &str = "FLEET_CAPACITY_";

/// Per-category ceiling on simultaneously active reservations. Fixed once an
/// engine is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapacityConfig {
    limits: HashMap<ReservationCategory, NonZeroU32>,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        let limits = ReservationCategory::ALL
            .into_iter()
            .map(|c| (c, default_capacity(c)))
            .collect();
        Self { limits }
    }
}

const SEDAN_CAPACITY: NonZeroU32 = NonZeroU32::new(5).unwrap();
const SUV_CAPACITY: NonZeroU32 = NonZeroU32::new(3).unwrap();
const VAN_CAPACITY: NonZeroU32 = NonZeroU32::new(2).unwrap();

fn default_capacity(category: ReservationCategory) -> NonZeroU32 {
    match category {
        ReservationCategory::Sedan => SEDAN_CAPACITY,
        ReservationCategory::Suv => SUV_CAPACITY,
        ReservationCategory::Van => VAN_CAPACITY,
    }
}

impl CapacityConfig {
    /// Builds a config holding exactly the given entries. Categories left out
    /// stay unconfigured.
    pub fn new(
        entries: impl IntoIterator<Item = (ReservationCategory, u32)>,
    ) -> Result<Self, ConfigError> {
        let mut limits = HashMap::new();
        for (category, n) in entries {
            let n = NonZeroU32::new(n).ok_or(ConfigError::ZeroCapacity(category))?;
            limits.insert(category, n);
        }
        Ok(Self { limits })
    }

    /// Defaults overlaid with `FLEET_CAPACITY_<CATEGORY>` variables, after
    /// loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        for category in ReservationCategory::ALL {
            let key = format!("{ENV_PREFIX}{}", category.as_str());
            let Some(raw) = lookup(&key) else {
                continue;
            };

            let parsed: u32 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidCapacity {
                    category,
                    value: raw.clone(),
                })?;
            let n = NonZeroU32::new(parsed).ok_or(ConfigError::ZeroCapacity(category))?;

            debug!(%category, capacity = n.get(), "capacity override");
            config.limits.insert(category, n);
        }
        Ok(config)
    }

    pub fn get(&self, category: ReservationCategory) -> Option<NonZeroU32> {
        self.limits.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ReservationCategory, NonZeroU32)> + '_ {
        ReservationCategory::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|n| (c, n)))
    }
}
