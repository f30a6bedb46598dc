//! Shared testing utilities for olm-bundle integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const TEMPLATE_PATH: &str = "config/templates/managed-velero-operator-csv-template.yaml";

pub const CSV_TEMPLATE: &str = r#"apiVersion: operators.coreos.com/v1alpha1
kind: ClusterServiceVersion
metadata:
  name: managed-velero-operator.v0.0.0
  annotations:
    capabilities: Basic Install
spec:
  displayName: Managed Velero Operator
  customresourcedefinitions:
    owned: []
  install:
    strategy: deployment
    spec:
      clusterPermissions: []
      deployments:
        - name: managed-velero-operator
          spec: {}
  version: 0.0.0
  replaces: ""
"#;

pub const CLUSTER_ROLE: &str = r#"apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRole
metadata:
  name: managed-velero-operator
rules:
  - apiGroups:
      - velero.io
    resources:
      - "*"
    verbs:
      - "*"
  - apiGroups:
      - ""
    resources:
      - secrets
    verbs:
      - get
"#;

pub const OPERATOR: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: managed-velero-operator
spec:
  replicas: 1
  template:
    spec:
      containers:
        - name: managed-velero-operator
          image: quay.io/openshift/managed-velero-operator:latest
"#;

/// CustomResourceDefinition manifest declaring `kind` at `version`.
pub fn crd(kind: &str, version: &str) -> String {
    let plural = format!("{}s", kind.to_lowercase());
    format!(
        "apiVersion: apiextensions.k8s.io/v1beta1\n\
         kind: CustomResourceDefinition\n\
         metadata:\n  name: {plural}.example.com\n\
         spec:\n  group: example.com\n\
         \x20 names:\n    kind: {kind}\n    plural: {plural}\n\
         \x20 version: {version}\n"
    )
}

/// Isolated operator repository with an output directory beside it.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a repository seeded with a template, role, deployment and two CRDs.
    pub fn new() -> Self {
        let ctx = Self::empty();
        ctx.write(TEMPLATE_PATH, CSV_TEMPLATE);
        ctx.write("deploy/cluster_role.yaml", CLUSTER_ROLE);
        ctx.write("deploy/operator.yaml", OPERATOR);
        ctx.write("deploy/crds/foo_crd.yaml", &crd("Foo", "v1"));
        ctx.write("deploy/crds/bar_crd.yaml", &crd("Bar", "v2"));
        ctx
    }

    /// Create an empty repository.
    pub fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        root.child("repo").create_dir_all().expect("Failed to create repo directory");
        Self { root }
    }

    /// Repository root used as the working directory.
    pub fn repo(&self) -> PathBuf {
        self.root.path().join("repo")
    }

    /// Output root passed as OUTPUT_DIR.
    pub fn out_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Child of the output root.
    pub fn out(&self, path: &str) -> ChildPath {
        self.root.child("out").child(path)
    }

    /// Write a repository file, creating parent directories.
    pub fn write(&self, path: &str, content: &str) {
        self.root.child("repo").child(path).write_str(content).expect("Failed to write fixture");
    }

    /// Build a command for invoking the `olm-bundle` binary inside the repository.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("olm-bundle").expect("Failed to locate olm-bundle binary");
        cmd.current_dir(self.repo()).env_remove("RUST_LOG");
        cmd
    }

    /// Invoke the binary with the standard five positional arguments.
    pub fn compose_cli(&self, count: &str, hash: &str, image: &str) -> Command {
        let mut cmd = self.cli();
        cmd.arg(self.out_dir()).args(["0.1.40-abc123", count, hash, image]);
        cmd
    }

    /// Parse a YAML file.
    pub fn read_yaml(&self, path: &Path) -> Value {
        let content = fs::read_to_string(path).expect("Failed to read YAML output");
        serde_yaml::from_str(&content).expect("Output is not valid YAML")
    }
}

/// Follow a dotted path with `[n]` indices through a YAML value.
pub fn at<'a>(value: &'a Value, path: &str) -> &'a Value {
    let mut current = value;
    for segment in path.split('.') {
        let (key, index) = match segment.split_once('[') {
            Some((key, rest)) => (key, Some(rest.trim_end_matches(']').parse::<usize>().unwrap())),
            None => (segment, None),
        };
        if !key.is_empty() {
            current = &current[key];
        }
        if let Some(index) = index {
            current = &current[index];
        }
    }
    current
}
