//! Per-element reprojection warnings.
//!
//! Problems with a single element (a coordinate outside the projection
//! domain, a boundary edge shape the rewriter does not know, a generic field
//! that could not be read or written) never abort a reprojection run.
//! They are collected as [`Warning`] items tagged with the handle of the
//! element they concern, and the caller decides whether a non-empty
//! collection counts as failure.

use crate::types::Handle;
use std::fmt;

/// Category of a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// A coordinate was outside the projection's valid domain; the element
    /// (or, for generic elements, the field) was left unmodified.
    TransformDomain,
    /// A composite sub-structure had a shape the rewriter does not
    /// recognize; it was passed through unchanged.
    UnsupportedElementShape,
    /// A generic field could not be read or written with its declared role.
    FieldAccess,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransformDomain => write!(f, "TransformDomain"),
            Self::UnsupportedElementShape => write!(f, "UnsupportedElementShape"),
            Self::FieldAccess => write!(f, "FieldAccess"),
        }
    }
}

/// A single warning produced while reprojecting one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    /// The category.
    pub kind: WarningKind,
    /// Handle of the element the warning concerns.
    pub handle: Handle,
    /// Field or sub-structure path inside the element, when known.
    pub field: Option<String>,
    /// A human-readable description.
    pub message: String,
}

impl Warning {
    /// Create a warning for a whole element.
    pub fn new(kind: WarningKind, handle: Handle, message: impl Into<String>) -> Self {
        Self {
            kind,
            handle,
            field: None,
            message: message.into(),
        }
    }

    /// Create a warning for one field of an element.
    pub fn for_field(
        kind: WarningKind,
        handle: Handle,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            handle,
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {} {}: {}", self.kind, self.handle, field, self.message),
            None => write!(f, "[{}] {}: {}", self.kind, self.handle, self.message),
        }
    }
}

/// Collects warnings over a reprojection run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarningCollection {
    items: Vec<Warning>,
}

impl WarningCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a warning.
    pub fn push(&mut self, warning: Warning) {
        self.items.push(warning);
    }

    /// Record every warning from an iterator, keeping their order.
    pub fn extend(&mut self, warnings: impl IntoIterator<Item = Warning>) {
        self.items.extend(warnings);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all warnings in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.items.iter()
    }

    /// All warnings of one kind.
    pub fn of_kind(&self, kind: WarningKind) -> Vec<&Warning> {
        self.items.iter().filter(|w| w.kind == kind).collect()
    }

    /// Check whether any warning of the given kind exists.
    pub fn has_kind(&self, kind: WarningKind) -> bool {
        self.items.iter().any(|w| w.kind == kind)
    }

    /// All warnings attached to one element.
    pub fn for_handle(&self, handle: Handle) -> Vec<&Warning> {
        self.items.iter().filter(|w| w.handle == handle).collect()
    }

    pub fn into_vec(self) -> Vec<Warning> {
        self.items
    }
}

impl IntoIterator for WarningCollection {
    type Item = Warning;
    type IntoIter = std::vec::IntoIter<Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a WarningCollection {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
