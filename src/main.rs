use fleet_reservations::{CapacityConfig, InMemoryReservationStore, ReservationEngine};
use std::{error::Error, sync::Arc};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    info!("Starting up");
    let config = CapacityConfig::from_env()?;
    for (category, capacity) in config.iter() {
        info!(%category, capacity = capacity.get(), "capacity configured");
    }

    let store = Arc::new(InMemoryReservationStore::new());
    let _engine = ReservationEngine::new(store, Default::default(), Some(config));

    info!("Reservation engine ready");
    Ok(())
}
