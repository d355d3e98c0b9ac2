//! Schema entity definitions.
//!
//! Entities live in a [`SchemaGraph`](crate::graph::SchemaGraph) arena and
//! refer to each other through [`TypeId`]s, so self references and mutual
//! references are plain ids.

use std::fmt;

/// Index of an entity in its schema graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub(crate) usize);

impl TypeId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Schema entity variants.
#[derive(Debug, Clone)]
pub enum Type {
    /// Named model with properties.
    Model(Model),
    /// Named primitive scalar.
    Scalar(Scalar),
    /// Ordered set of variant types.
    Union(Union),
    /// Array of a single element type.
    Array(ArrayType),
    /// Named sentinel type such as `null`.
    Intrinsic(Intrinsic),
}

impl Type {
    /// Returns the entity kind name.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Model(_) => "model",
            Self::Scalar(_) => "scalar",
            Self::Union(_) => "union",
            Self::Array(_) => "array",
            Self::Intrinsic(_) => "intrinsic",
        }
    }

    /// Returns the entity name for named kinds.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Model(m) => Some(&m.name),
            Self::Scalar(s) => Some(&s.name),
            Self::Intrinsic(i) => Some(&i.name),
            Self::Union(_) | Self::Array(_) => None,
        }
    }

    /// Returns the model if this is a model.
    #[must_use]
    pub const fn as_model(&self) -> Option<&Model> {
        match self {
            Self::Model(m) => Some(m),
            _ => None,
        }
    }

    /// Returns true if this is a model.
    #[must_use]
    pub const fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    /// Returns true if this is a scalar.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

/// Model definition.
#[derive(Debug, Clone)]
pub struct Model {
    /// Model name.
    pub name: String,
    /// Properties in declaration order.
    pub properties: Vec<Property>,
    /// Base model this model extends.
    pub base_model: Option<TypeId>,
    /// Value type of additional properties keyed by string.
    pub indexer: Option<TypeId>,
}

impl Model {
    /// Creates a model with no properties.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            base_model: None,
            indexer: None,
        }
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Model property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Property type.
    pub ty: TypeId,
    /// Whether the property may be absent.
    pub optional: bool,
}

impl Property {
    /// Creates a required property.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    /// Creates an optional property.
    #[must_use]
    pub fn optional(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            optional: true,
            ..Self::new(name, ty)
        }
    }
}

/// Scalar definition.
#[derive(Debug, Clone)]
pub struct Scalar {
    /// Scalar name.
    pub name: String,
    /// Scalar this one extends.
    pub base_scalar: Option<TypeId>,
}

/// Union definition.
#[derive(Debug, Clone)]
pub struct Union {
    /// Variant types in declaration order.
    pub variants: Vec<TypeId>,
}

/// Array definition.
#[derive(Debug, Clone)]
pub struct ArrayType {
    /// Element type.
    pub element: TypeId,
}

/// Intrinsic definition.
#[derive(Debug, Clone)]
pub struct Intrinsic {
    /// Intrinsic name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_constructors() {
        let required = Property::new("name", TypeId(0));
        assert!(!required.optional);

        let optional = Property::optional("age", TypeId(1));
        assert!(optional.optional);
        assert_eq!(optional.name, "age");
        assert_eq!(optional.ty, TypeId(1));
    }

    #[test]
    fn test_model_property_lookup() {
        let mut model = Model::new("Person");
        model.properties.push(Property::new("first", TypeId(0)));
        assert!(model.property("first").is_some());
        assert!(model.property("last").is_none());
    }

    #[test]
    fn test_type_kind_names() {
        let model = Type::Model(Model::new("M"));
        assert_eq!(model.kind_name(), "model");
        assert_eq!(model.name(), Some("M"));
        assert!(model.is_model());
        assert!(model.as_model().is_some());

        let array = Type::Array(ArrayType { element: TypeId(0) });
        assert_eq!(array.kind_name(), "array");
        assert_eq!(array.name(), None);
        assert!(!array.is_scalar());
    }

    #[test]
    fn test_type_id_display() {
        assert_eq!(TypeId(12).to_string(), "#12");
        assert_eq!(TypeId(12).index(), 12);
    }
}
