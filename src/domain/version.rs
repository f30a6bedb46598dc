use std::fmt;

/// Default base prepended to the commit count, e.g. `0.1` in `0.1.189-3f73a592`.
pub const DEFAULT_VERSION_BASE: &str = "0.1";

/// Bundle version of the form `<base>.<commit count>-<commit hash>`.
///
/// Count and hash are opaque: they are concatenated verbatim without validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleVersion {
    full: String,
}

impl BundleVersion {
    pub fn derive(base: &str, commit_count: &str, commit_hash: &str) -> Self {
        Self { full: format!("{}.{}-{}", base, commit_count, commit_hash) }
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// Name of the version directory under the output root.
    pub fn dir_name(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for BundleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

/// CSV `metadata.name` for a bundle at `version`.
pub fn csv_name(bundle_name: &str, version: &str) -> String {
    format!("{}.v{}", bundle_name, version)
}

/// File name of the generated ClusterServiceVersion.
pub fn csv_file_name(bundle_name: &str, version: &BundleVersion) -> String {
    format!("{}.clusterserviceversion.yaml", csv_name(bundle_name, version.as_str()))
}
