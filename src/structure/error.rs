// Fri Oct 16 2026 - Alex

use crate::reflect::{FieldDecl, TypeRef};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstantiationError {
    #[error("{type_name} cannot be instantiated: {reason}")]
    Unsupported { type_name: String, reason: String },
    #[error("allocating {size} bytes for {type_name} failed")]
    AllocationFailed { type_name: String, size: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error(transparent)]
    Instantiation(#[from] InstantiationError),
    #[error("instance of {actual} passed to probe for {expected}")]
    InstanceMismatch { expected: String, actual: String },
    #[error("probe of {type_name} returned {found} addresses for {expected} fields")]
    ProbeCount { type_name: String, expected: usize, found: usize },
    #[error("{0} has no twin aggregate to measure")]
    Unmeasurable(String),
    #[error("second member of Twin<{0}> is placed before the first")]
    TwinOrder(String),
    #[error("{type_name} measures {measured} bytes but its fields extend to {extent}")]
    Inconsistent { type_name: String, measured: usize, extent: usize },
    #[error("layout of {type_name} violates invariant: {reason}")]
    Invariant { type_name: String, reason: String },
    #[error("field `{field}` of {owner}: {source}")]
    Field {
        owner: String,
        field: String,
        source: Box<LayoutError>,
    },
}

impl LayoutError {
    pub(crate) fn in_field(owner: &TypeRef, field: &FieldDecl, source: LayoutError) -> Self {
        Self::Field {
            owner: owner.name().to_string(),
            field: field.name().to_string(),
            source: Box::new(source),
        }
    }

    /// The error as first detected, with field context peeled off.
    pub fn root_cause(&self) -> &LayoutError {
        match self {
            Self::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
