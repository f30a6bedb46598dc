use crate::ports::{BundleStore, Clock};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: BundleStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: BundleStore, C: Clock> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Get a reference to the bundle store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
