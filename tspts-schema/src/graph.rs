//! Schema graph arena and its builder.

use crate::error::SchemaError;
use crate::types::{ArrayType, Intrinsic, Model, Property, Scalar, Type, TypeId, Union};
use crate::validation::validate_graph;
use std::collections::HashMap;

/// Validated, read-only schema graph.
///
/// Models are yielded in declaration order, properties in insertion order
/// and union variants in the order they were given.
#[derive(Debug, Clone)]
pub struct SchemaGraph {
    pub(crate) types: Vec<Type>,
    pub(crate) models: Vec<TypeId>,
}

impl SchemaGraph {
    /// Gets an entity by id.
    #[must_use]
    pub fn get(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id.0)
    }

    /// Gets an entity by id, failing for ids from another graph.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownType` if the id is out of range.
    pub fn ty(&self, id: TypeId) -> Result<&Type, SchemaError> {
        self.get(id)
            .ok_or_else(|| SchemaError::unknown_type(id.0, "lookup"))
    }

    /// Gets a model by id.
    #[must_use]
    pub fn model(&self, id: TypeId) -> Option<&Model> {
        self.get(id).and_then(Type::as_model)
    }

    /// Iterates models in declaration order.
    pub fn models(&self) -> impl Iterator<Item = (TypeId, &Model)> {
        self.models
            .iter()
            .filter_map(|&id| self.model(id).map(|m| (id, m)))
    }

    /// Finds a model by name.
    #[must_use]
    pub fn model_by_name(&self, name: &str) -> Option<TypeId> {
        self.models().find(|(_, m)| m.name == name).map(|(id, _)| id)
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the graph has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Incremental builder for a [`SchemaGraph`].
///
/// Models can be declared before their properties are known, so forward and
/// circular references are expressed by declaring first and filling later.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    types: Vec<Type>,
    models: Vec<TypeId>,
    scalars: HashMap<String, TypeId>,
    intrinsics: HashMap<String, TypeId>,
}

impl SchemaBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.types.len());
        self.types.push(ty);
        id
    }

    fn model_mut(&mut self, id: TypeId, context: &str) -> Result<&mut Model, SchemaError> {
        match self.types.get_mut(id.0) {
            Some(Type::Model(m)) => Ok(m),
            Some(other) => Err(SchemaError::wrong_kind(
                context,
                "model",
                other.kind_name(),
            )),
            None => Err(SchemaError::unknown_type(id.0, context)),
        }
    }

    /// Declares a model with no properties.
    pub fn model(&mut self, name: impl Into<String>) -> TypeId {
        let id = self.push(Type::Model(Model::new(name)));
        self.models.push(id);
        id
    }

    /// Appends a property to a model.
    ///
    /// # Errors
    /// Returns `SchemaError` if `model` is not a model or already has a
    /// property with the same name.
    pub fn add_property(&mut self, model: TypeId, property: Property) -> Result<(), SchemaError> {
        let target = self.model_mut(model, "add_property")?;
        if target.property(&property.name).is_some() {
            return Err(SchemaError::duplicate(
                "property",
                format!("{}.{}", target.name, property.name),
            ));
        }
        target.properties.push(property);
        Ok(())
    }

    /// Makes `model` extend `base`.
    ///
    /// # Errors
    /// Returns `SchemaError` if `model` is not a model.
    pub fn set_base(&mut self, model: TypeId, base: TypeId) -> Result<(), SchemaError> {
        self.model_mut(model, "set_base")?.base_model = Some(base);
        Ok(())
    }

    /// Lets `model` carry additional string-keyed properties of `value`.
    ///
    /// # Errors
    /// Returns `SchemaError` if `model` is not a model.
    pub fn set_indexer(&mut self, model: TypeId, value: TypeId) -> Result<(), SchemaError> {
        self.model_mut(model, "set_indexer")?.indexer = Some(value);
        Ok(())
    }

    /// Returns the scalar with the given name, creating it on first use.
    pub fn scalar(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.scalars.get(name) {
            return id;
        }
        let id = self.push(Type::Scalar(Scalar {
            name: name.to_string(),
            base_scalar: None,
        }));
        self.scalars.insert(name.to_string(), id);
        id
    }

    /// Declares a scalar that extends `base`.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateDefinition` if a scalar with this name
    /// already exists.
    pub fn scalar_extends(&mut self, name: &str, base: TypeId) -> Result<TypeId, SchemaError> {
        if self.scalars.contains_key(name) {
            return Err(SchemaError::duplicate("scalar", name));
        }
        let id = self.push(Type::Scalar(Scalar {
            name: name.to_string(),
            base_scalar: Some(base),
        }));
        self.scalars.insert(name.to_string(), id);
        Ok(id)
    }

    /// Returns the intrinsic with the given name, creating it on first use.
    pub fn intrinsic(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.intrinsics.get(name) {
            return id;
        }
        let id = self.push(Type::Intrinsic(Intrinsic {
            name: name.to_string(),
        }));
        self.intrinsics.insert(name.to_string(), id);
        id
    }

    /// Returns the `null` intrinsic.
    pub fn null(&mut self) -> TypeId {
        self.intrinsic("null")
    }

    /// Creates a union of `variants`.
    pub fn union(&mut self, variants: impl IntoIterator<Item = TypeId>) -> TypeId {
        self.push(Type::Union(Union {
            variants: variants.into_iter().collect(),
        }))
    }

    /// Creates an array of `element`.
    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.push(Type::Array(ArrayType { element }))
    }

    /// Validates and freezes the graph.
    ///
    /// # Errors
    /// Returns the first `SchemaError` found by validation.
    pub fn build(self) -> Result<SchemaGraph, SchemaError> {
        let graph = SchemaGraph {
            types: self.types,
            models: self.models,
        };
        validate_graph(&graph)?;
        Ok(graph)
    }
}
