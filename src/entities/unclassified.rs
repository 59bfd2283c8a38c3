//! Entities without a dedicated rewrite.
//!
//! Any element kind the model has no struct for is captured as an
//! [`Unclassified`] entity: the type name as it appeared in the drawing plus
//! an ordered map of its fields. Each field holds a dynamically typed
//! [`FieldValue`] and may carry a declared [`FieldRole`]; fields without a
//! declared role are classified from their name and value type.

use crate::entities::{Entity, EntityCommon};
use crate::reproject::FieldRole;
use crate::types::{Handle, Vector2, Vector3};
use indexmap::IndexMap;

/// Dynamically typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Point2(Vector2),
    Point3(Vector3),
    Real(f64),
    Integer(i64),
    Text(String),
    Handle(Handle),
}

impl FieldValue {
    /// Name of the value type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Point2(_) => "point2",
            FieldValue::Point3(_) => "point3",
            FieldValue::Real(_) => "real",
            FieldValue::Integer(_) => "integer",
            FieldValue::Text(_) => "text",
            FieldValue::Handle(_) => "handle",
        }
    }

    /// Whether the value is a 2D or 3D coordinate.
    pub fn is_coordinate(&self) -> bool {
        matches!(self, FieldValue::Point2(_) | FieldValue::Point3(_))
    }
}

/// A field of an unclassified entity.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclassifiedField {
    /// Current value.
    pub value: FieldValue,
    /// Role declared by whoever materialized the entity, if any.
    pub role: Option<FieldRole>,
}

/// An entity whose kind has no dedicated struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Unclassified {
    /// Common entity data (handle, layer, color, …).
    pub common: EntityCommon,
    /// The type name as it appeared in the drawing (e.g. `"WIPEOUT"`).
    pub dxf_name: String,
    /// Fields in source order.
    pub fields: IndexMap<String, UnclassifiedField>,
}

impl Unclassified {
    /// Create a new unclassified entity with the given type name.
    pub fn new(dxf_name: impl Into<String>) -> Self {
        Self {
            common: EntityCommon::new(),
            dxf_name: dxf_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field whose role is inferred.
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), UnclassifiedField { value, role: None });
        self
    }

    /// Add a field with a declared role.
    pub fn with_declared_field(
        mut self,
        name: impl Into<String>,
        value: FieldValue,
        role: FieldRole,
    ) -> Self {
        self.fields.insert(name.into(), UnclassifiedField { value, role: Some(role) });
        self
    }

    /// Current value of a field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).map(|f| &f.value)
    }
}

impl Entity for Unclassified {
    fn handle(&self) -> Handle {
        self.common.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.common.handle = handle;
    }

    fn layer(&self) -> &str {
        &self.common.layer
    }

    fn entity_type(&self) -> &'static str {
        "UNCLASSIFIED"
    }
}
