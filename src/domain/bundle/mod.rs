//! Bundle building blocks derived from the deploy manifests.

mod cluster_permission;
mod deployment;
mod descriptor;
mod owned_crd;

pub use cluster_permission::ClusterPermission;
pub use deployment::OperatorDeployment;
pub use descriptor::{BundleDescriptor, render};
pub use owned_crd::OwnedCrd;
