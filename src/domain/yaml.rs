//! YAML document loading and dotted-path navigation.
//!
//! Paths use dotted keys with optional sequence indices, e.g.
//! `spec.install.spec.deployments[0].spec`. Lookups that fail are reported as
//! [`AppError::Structure`] carrying the source file and the full path.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::domain::AppError;

enum Step<'a> {
    Key(&'a str),
    Index(usize),
}

fn steps(path: &str) -> Option<Vec<Step<'_>>> {
    let mut out = Vec::new();
    for segment in path.split('.') {
        let (key, mut rest) = match segment.find('[') {
            Some(pos) => (&segment[..pos], &segment[pos..]),
            None => (segment, ""),
        };
        if !key.is_empty() {
            out.push(Step::Key(key));
        }
        while let Some(stripped) = rest.strip_prefix('[') {
            let end = stripped.find(']')?;
            out.push(Step::Index(stripped[..end].parse().ok()?));
            rest = &stripped[end + 1..];
        }
        if !rest.is_empty() {
            return None;
        }
    }
    Some(out)
}

/// Parse a single YAML document.
pub fn parse_document(source: &str, content: &str) -> Result<Value, AppError> {
    serde_yaml::from_str(content).map_err(|err| AppError::parse(source, err))
}

/// Parse a multi-document YAML stream and return its first document.
///
/// Returns `Ok(None)` when the stream holds no documents or its first
/// document is empty (blank input, comments only, a bare `---`).
pub fn parse_first_document(source: &str, content: &str) -> Result<Option<Value>, AppError> {
    let Some(document) = serde_yaml::Deserializer::from_str(content).next() else {
        return Ok(None);
    };
    let value = Value::deserialize(document).map_err(|err| AppError::parse(source, err))?;
    Ok(Some(value).filter(|value| !value.is_null()))
}

pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    steps(path)?.into_iter().try_fold(root, |value, step| match step {
        Step::Key(key) => value.as_mapping()?.get(key),
        Step::Index(idx) => value.as_sequence()?.get(idx),
    })
}

pub fn lookup_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    steps(path)?.into_iter().try_fold(root, |value, step| match step {
        Step::Key(key) => value.as_mapping_mut()?.get_mut(key),
        Step::Index(idx) => value.as_sequence_mut()?.get_mut(idx),
    })
}

pub fn require<'a>(root: &'a Value, path: &str, source: &str) -> Result<&'a Value, AppError> {
    lookup(root, path).ok_or_else(|| AppError::structure(source, path))
}

pub fn require_mut<'a>(
    root: &'a mut Value,
    path: &str,
    source: &str,
) -> Result<&'a mut Value, AppError> {
    lookup_mut(root, path).ok_or_else(|| AppError::structure(source, path))
}

/// Read a scalar field as text. Numbers and booleans keep their YAML spelling.
///
/// Fails when the field is absent, null, a mapping or a sequence.
pub fn require_scalar(root: &Value, path: &str, source: &str) -> Result<String, AppError> {
    match require(root, path, source)? {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        _ => Err(AppError::structure(source, path)),
    }
}

pub fn require_sequence<'a>(
    root: &'a Value,
    path: &str,
    source: &str,
) -> Result<&'a Vec<Value>, AppError> {
    require(root, path, source)?.as_sequence().ok_or_else(|| AppError::structure(source, path))
}

pub fn require_mapping_mut<'a>(
    root: &'a mut Value,
    path: &str,
    source: &str,
) -> Result<&'a mut Mapping, AppError> {
    require_mut(root, path, source)?
        .as_mapping_mut()
        .ok_or_else(|| AppError::structure(source, path))
}

/// Return the mapping stored under `key`, inserting an empty one when absent.
///
/// Fails when `key` exists but holds something other than a mapping.
pub fn ensure_mapping<'a>(
    parent: &'a mut Mapping,
    key: &str,
    source: &str,
    path: &str,
) -> Result<&'a mut Mapping, AppError> {
    let entry = parent
        .entry(Value::String(key.to_string()))
        .or_insert(Value::Mapping(Mapping::new()));
    if entry.is_null() {
        *entry = Value::Mapping(Mapping::new());
    }
    entry.as_mapping_mut().ok_or_else(|| AppError::structure(source, path))
}

pub fn set(map: &mut Mapping, key: &str, value: Value) {
    map.insert(Value::String(key.to_string()), value);
}
