//! Type references
//!
//! Language-agnostic handles for scalar, class and container types. Rendering
//! to a concrete language happens downstream; names here are only used for
//! diagnostics and the CLI summary.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ClassId;

// =============================================================================
// Scalars
// =============================================================================

/// Scalar kinds the rules can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Boolean,
    Int,
    Long,
    BigInteger,
    Float,
    Double,
    BigDecimal,
    String,
}

impl ScalarKind {
    /// Binary floating point kinds subject to the double-precision toggle
    pub fn is_decimal(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Whether an unboxed form exists at all
    pub fn has_primitive_form(&self) -> bool {
        self.primitive_name().is_some()
    }

    pub fn primitive_name(&self) -> Option<&'static str> {
        match self {
            Self::Boolean => Some("boolean"),
            Self::Int => Some("int"),
            Self::Long => Some("long"),
            Self::Float => Some("float"),
            Self::Double => Some("double"),
            Self::BigInteger | Self::BigDecimal | Self::String => None,
        }
    }

    pub fn wrapper_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Int => "Integer",
            Self::Long => "Long",
            Self::BigInteger => "BigInteger",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::BigDecimal => "BigDecimal",
            Self::String => "String",
        }
    }
}

/// A scalar together with its representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScalarType {
    pub kind: ScalarKind,
    /// Unboxed representation. Always false for kinds without a primitive
    /// form.
    pub primitive: bool,
}

impl ScalarType {
    /// Primitive form when one exists, wrapper form otherwise
    pub fn unboxed(kind: ScalarKind) -> Self {
        Self {
            kind,
            primitive: kind.has_primitive_form(),
        }
    }

    pub fn boxed(kind: ScalarKind) -> Self {
        Self {
            kind,
            primitive: false,
        }
    }

    pub fn name(&self) -> &'static str {
        if self.primitive {
            self.kind.primitive_name().unwrap_or(self.kind.wrapper_name())
        } else {
            self.kind.wrapper_name()
        }
    }
}

// =============================================================================
// Containers
// =============================================================================

/// Collection shape derived from `uniqueItems`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Ordered,
    Unique,
}

impl CollectionKind {
    pub fn from_unique_items(unique: bool) -> Self {
        if unique {
            Self::Unique
        } else {
            Self::Ordered
        }
    }
}

/// A parameterized container with exactly one element type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerType {
    pub kind: CollectionKind,
    /// Runtime type backing the container, taken from configuration
    pub implementation: String,
    pub element: TypeRef,
}

// =============================================================================
// Type References
// =============================================================================

/// Handle to a type in the model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeRef {
    Scalar(ScalarType),
    Class { id: ClassId },
    Container(Box<ContainerType>),
    /// Untyped JSON value
    Any,
}

impl TypeRef {
    pub fn scalar(&self) -> Option<&ScalarType> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn container(&self) -> Option<&ContainerType> {
        match self {
            Self::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Element type of a container
    pub fn element(&self) -> Option<&TypeRef> {
        self.container().map(|c| &c.element)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Scalar(ScalarType { primitive: true, .. }))
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_names() {
        assert_eq!(ScalarType::unboxed(ScalarKind::Double).name(), "double");
        assert_eq!(ScalarType::boxed(ScalarKind::Double).name(), "Double");
        assert_eq!(ScalarType::unboxed(ScalarKind::Int).name(), "int");
        assert_eq!(ScalarType::boxed(ScalarKind::Int).name(), "Integer");
    }

    #[test]
    fn test_big_kinds_never_unbox() {
        let big = ScalarType::unboxed(ScalarKind::BigDecimal);
        assert!(!big.primitive);
        assert_eq!(big.name(), "BigDecimal");
        assert!(!ScalarKind::BigDecimal.is_decimal());
    }

    #[test]
    fn test_collection_kind_from_unique_items() {
        assert_eq!(CollectionKind::from_unique_items(true), CollectionKind::Unique);
        assert_eq!(CollectionKind::from_unique_items(false), CollectionKind::Ordered);
    }
}
