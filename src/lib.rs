//! olm-bundle: Compose versioned OLM operator bundles from deploy manifests.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ComposeOutcome, ComposeRequest, compose, compose_at, compose_with_clock, load_config,
    load_config_at,
};
pub use domain::{AppError, BundleConfig, BundleVersion};
