pub mod gate;
pub mod global;
pub mod sharded;

pub use gate::AdmissionGate;

#[cfg(not(feature = "admission-sharded"))]
pub use global::GlobalGate as ActiveGate;

#[cfg(feature = "admission-sharded")]
pub use sharded::ShardedGate as ActiveGate;
