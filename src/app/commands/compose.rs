//! Compose command - assembles a versioned OLM bundle directory.

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::app::AppContext;
use crate::domain::bundle::{
    self, BundleDescriptor, ClusterPermission, OperatorDeployment, OwnedCrd,
};
use crate::domain::version::{self, BundleVersion};
use crate::domain::{AppError, BundleConfig, InputPaths, yaml};
use crate::ports::{BundleStore, Clock};

/// Caller-supplied values for one bundle build.
#[derive(Debug, Clone)]
pub struct ComposeRequest {
    /// Root under which the `<version>/` directory is created.
    pub output_dir: PathBuf,
    /// Version of the bundle this one replaces, e.g. `0.1.40-abc123`.
    pub previous_version: String,
    pub commit_count: String,
    pub commit_hash: String,
    /// Operator image written into the deployment's first container.
    pub image: String,
}

impl ComposeRequest {
    pub fn version(&self, config: &BundleConfig) -> BundleVersion {
        BundleVersion::derive(&config.bundle.version_base, &self.commit_count, &self.commit_hash)
    }
}

/// Result of a successful compose.
#[derive(Debug, Clone)]
pub struct ComposeOutcome {
    pub version: BundleVersion,
    pub version_dir: PathBuf,
    /// Path of the written ClusterServiceVersion.
    pub csv_path: PathBuf,
    /// CRD copies inside `version_dir`, in bundle order.
    pub copied_crds: Vec<PathBuf>,
}

/// Execute the compose command.
///
/// Every step fails fast; files already copied are left in place.
pub fn execute<S: BundleStore, C: Clock>(
    ctx: &AppContext<S, C>,
    config: &BundleConfig,
    request: &ComposeRequest,
) -> Result<ComposeOutcome, AppError> {
    let store = ctx.store();
    let identity = &config.bundle;
    let inputs = &config.inputs;

    let version = request.version(config);
    let version_dir = request.output_dir.join(version.dir_name());
    store.create_dir_all(&request.output_dir)?;
    store.create_dir_all(&version_dir)?;
    log::info!("Composing bundle {} in {}", version, version_dir.display());

    let template_path = Path::new(&inputs.template);
    let template = load_document(store, template_path)?;

    let (owned_crds, copied_crds) = collect_crds(store, inputs, &version_dir)?;
    log::debug!("Collected {} owned CRDs", owned_crds.len());

    let role_path = Path::new(&inputs.cluster_role);
    let role = load_document(store, role_path)?;
    let permission =
        ClusterPermission::from_role(&source_name(role_path), &role, &identity.service_account)?;
    log::debug!("Bound {} rules to {}", permission.rules.len(), permission.service_account_name);

    let operator_path = Path::new(&inputs.operator);
    let operator_source = source_name(operator_path);
    let deployment =
        OperatorDeployment::from_stream(&operator_source, &store.read_file(operator_path)?)?
            .with_image(&operator_source, &request.image)?;

    let descriptor = BundleDescriptor {
        name: version::csv_name(&identity.name, version.as_str()),
        version: version.to_string(),
        replaces: version::csv_name(&identity.name, &request.previous_version),
        created_at: ctx.clock().now(),
        owned_crds,
        cluster_permissions: vec![permission],
        deployment,
    };
    let csv = descriptor.assemble(&source_name(template_path), &template)?;

    let csv_path = version_dir.join(version::csv_file_name(&identity.name, &version));
    store.write_file(&csv_path, &bundle::render(&csv)?)?;
    log::debug!("Wrote {}", csv_path.display());

    Ok(ComposeOutcome { version, version_dir, csv_path, copied_crds })
}

/// Copy every CRD manifest into `version_dir` and summarize it, ordered by file name.
fn collect_crds<S: BundleStore>(
    store: &S,
    inputs: &InputPaths,
    version_dir: &Path,
) -> Result<(Vec<OwnedCrd>, Vec<PathBuf>), AppError> {
    let mut files: Vec<(String, PathBuf)> = store
        .list_files(Path::new(&inputs.crd_dir))?
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_string();
            name.ends_with(&inputs.crd_suffix).then_some((name, path))
        })
        .collect();
    files.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut owned = Vec::with_capacity(files.len());
    let mut copied = Vec::with_capacity(files.len());
    for (file_name, file) in files {
        let destination = version_dir.join(file_name);
        store.copy_file(&file, &destination)?;

        let document = load_document(store, &file)?;
        owned.push(OwnedCrd::from_document(&source_name(&file), &document)?);
        copied.push(destination);
    }

    Ok((owned, copied))
}

fn load_document<S: BundleStore>(store: &S, path: &Path) -> Result<Value, AppError> {
    let content = store.read_file(path)?;
    yaml::parse_document(&source_name(path), &content)
}

fn source_name(path: &Path) -> String {
    path.display().to_string()
}
