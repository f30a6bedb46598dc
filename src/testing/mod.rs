pub mod fixed_clock;
pub mod fixtures;
pub mod memory_bundle_store;

pub use fixed_clock::FixedClock;
pub use memory_bundle_store::MemoryBundleStore;
