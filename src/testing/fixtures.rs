//! Manifest fixtures shaped like a real operator repository.

pub const CSV_TEMPLATE: &str = r#"apiVersion: operators.coreos.com/v1alpha1
kind: ClusterServiceVersion
metadata:
  name: managed-velero-operator.v0.0.0
  namespace: placeholder
  annotations:
    capabilities: Basic Install
    categories: OpenShift Optional
spec:
  displayName: Managed Velero Operator
  description: Deploys and manages Velero for cluster backups.
  customresourcedefinitions:
    owned:
      - name: stale.example.com
        kind: Stale
        version: v0
  install:
    strategy: deployment
    spec:
      clusterPermissions:
        - serviceAccountName: stale
          rules: []
      deployments:
        - name: managed-velero-operator
          spec:
            placeholder: true
  version: 0.0.0
  replaces: ""
"#;

pub const CLUSTER_ROLE: &str = r#"apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRole
metadata:
  name: managed-velero-operator
rules:
  - apiGroups:
      - ""
    resources:
      - pods
      - services
    verbs:
      - get
      - list
      - watch
  - apiGroups:
      - velero.io
    resources:
      - "*"
    verbs:
      - "*"
"#;

pub const OPERATOR: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: managed-velero-operator
  namespace: openshift-velero
spec:
  replicas: 1
  selector:
    matchLabels:
      name: managed-velero-operator
  template:
    metadata:
      labels:
        name: managed-velero-operator
    spec:
      serviceAccountName: managed-velero-operator
      containers:
        - name: managed-velero-operator
          image: REPLACE_IMAGE
          command:
            - managed-velero-operator
"#;

/// CustomResourceDefinition for `kind` at `version` (v1beta1 single-version shape).
pub fn crd(kind: &str, version: &str) -> String {
    let plural = format!("{}s", kind.to_lowercase());
    format!(
        r#"apiVersion: apiextensions.k8s.io/v1beta1
kind: CustomResourceDefinition
metadata:
  name: {plural}.example.com
spec:
  group: example.com
  names:
    kind: {kind}
    listKind: {kind}List
    plural: {plural}
    singular: {singular}
  scope: Namespaced
  version: {version}
"#,
        plural = plural,
        kind = kind,
        singular = kind.to_lowercase(),
        version = version,
    )
}
