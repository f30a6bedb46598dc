mod bundle_store;
mod clock;

pub use bundle_store::BundleStore;
pub use clock::Clock;
