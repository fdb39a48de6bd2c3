//! Header transforms.
//!
//! A transform maps one header to another. Any `Fn(Mapping) -> Mapping`
//! qualifies; [`EditList`] provides the generic set/remove/rename edits used by
//! the command line and the manifest.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{FmError, Result};

/// A pure header transformation.
pub trait Transform {
    fn apply(&self, header: Mapping) -> Mapping;
}

impl<F> Transform for F
where
    F: Fn(Mapping) -> Mapping,
{
    fn apply(&self, header: Mapping) -> Mapping {
        self(header)
    }
}

/// Returns the header unchanged.
pub fn identity(header: Mapping) -> Mapping {
    header
}

/// Apply `transform` to `header` exactly once.
pub fn apply_transform<T: Transform + ?Sized>(header: Mapping, transform: &T) -> Mapping {
    transform.apply(header)
}

/// A single edit to a top-level header key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOp {
    /// Replace in place if present, append otherwise.
    Set { key: String, value: Value },
    Remove { key: String },
    /// The entry keeps its position under the new name.
    Rename { from: String, to: String },
}

impl EditOp {
    /// Parse `key=value` for `set`. The value is read as YAML.
    pub fn parse_set(arg: &str) -> Result<Self> {
        let (key, raw) = split_pair(arg, "--set", "key=value")?;
        let value = serde_yaml::from_str(raw).map_err(|e| FmError::Config {
            message: format!("invalid value in --set {}: {}", arg, e),
            help: Some("Values are YAML: true, 42, 'text', [a, b]".to_string()),
        })?;
        Ok(EditOp::Set {
            key: key.to_string(),
            value,
        })
    }

    /// Parse `old=new` for `rename`.
    pub fn parse_rename(arg: &str) -> Result<Self> {
        let (from, to) = split_pair(arg, "--rename", "old=new")?;
        Ok(EditOp::Rename {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    fn apply_to(&self, mut header: Mapping) -> Mapping {
        match self {
            EditOp::Set { key, value } => {
                header.insert(Value::from(key.as_str()), value.clone());
                header
            }
            EditOp::Remove { key } => {
                header.shift_remove(key.as_str());
                header
            }
            EditOp::Rename { from, to } => {
                if from == to || !header.contains_key(from.as_str()) {
                    return header;
                }
                header.shift_remove(to.as_str());
                header
                    .into_iter()
                    .map(|(k, v)| {
                        if k.as_str() == Some(from.as_str()) {
                            (Value::from(to.as_str()), v)
                        } else {
                            (k, v)
                        }
                    })
                    .collect()
            }
        }
    }
}

fn split_pair<'a>(arg: &'a str, flag: &str, shape: &str) -> Result<(&'a str, &'a str)> {
    match arg.split_once('=') {
        Some((left, right)) if !left.trim().is_empty() => Ok((left.trim(), right.trim())),
        _ => Err(FmError::Config {
            message: format!("expected {} {}, got {:?}", flag, shape, arg),
            help: None,
        }),
    }
}

/// An ordered list of edits applied one after another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditList {
    ops: Vec<EditOp>,
}

impl EditList {
    pub fn push(&mut self, op: EditOp) {
        self.ops.push(op);
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }
}

impl From<Vec<EditOp>> for EditList {
    fn from(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }
}

impl Extend<EditOp> for EditList {
    fn extend<I: IntoIterator<Item = EditOp>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

impl Transform for EditList {
    fn apply(&self, header: Mapping) -> Mapping {
        self.ops.iter().fold(header, |header, op| op.apply_to(header))
    }
}
