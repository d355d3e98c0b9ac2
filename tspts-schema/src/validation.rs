//! Schema graph validation.
//!
//! Runs once when a [`SchemaBuilder`](crate::graph::SchemaBuilder) is built, so
//! emitters can rely on every id resolving and every base being well formed.

use crate::error::SchemaError;
use crate::graph::SchemaGraph;
use crate::types::{Model, Type, TypeId};
use std::collections::HashSet;

/// Validates a schema graph for structural correctness.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_graph(graph: &SchemaGraph) -> Result<(), SchemaError> {
    validate_references(graph)?;
    validate_models(graph)?;
    validate_scalars(graph)?;
    Ok(())
}

/// Returns true if `name` can be used as a declaration name unquoted.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn check_id(
    graph: &SchemaGraph,
    id: TypeId,
    context: impl FnOnce() -> String,
) -> Result<(), SchemaError> {
    if graph.get(id).is_none() {
        return Err(SchemaError::unknown_type(id.0, context()));
    }
    Ok(())
}

/// Validates that every referenced id exists.
fn validate_references(graph: &SchemaGraph) -> Result<(), SchemaError> {
    for ty in &graph.types {
        match ty {
            Type::Model(model) => {
                for prop in &model.properties {
                    check_id(graph, prop.ty, || {
                        format!("property '{}.{}'", model.name, prop.name)
                    })?;
                }
                if let Some(base) = model.base_model {
                    check_id(graph, base, || format!("base of model '{}'", model.name))?;
                }
                if let Some(value) = model.indexer {
                    check_id(graph, value, || format!("indexer of model '{}'", model.name))?;
                }
            }
            Type::Scalar(scalar) => {
                if let Some(base) = scalar.base_scalar {
                    check_id(graph, base, || format!("base of scalar '{}'", scalar.name))?;
                }
            }
            Type::Union(union) => {
                for &variant in &union.variants {
                    check_id(graph, variant, || "union variant".to_string())?;
                }
            }
            Type::Array(array) => {
                check_id(graph, array.element, || "array element".to_string())?;
            }
            Type::Intrinsic(_) => {}
        }
    }
    Ok(())
}

/// Validates model names, property names and inheritance.
fn validate_models(graph: &SchemaGraph) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();

    for (_, model) in graph.models() {
        if !is_identifier(&model.name) {
            return Err(SchemaError::invalid_name("model", &model.name));
        }
        if !seen_names.insert(model.name.as_str()) {
            return Err(SchemaError::duplicate("model", &model.name));
        }
        if let Some(prop) = model.properties.iter().find(|p| p.name.is_empty()) {
            return Err(SchemaError::invalid_name(
                "property",
                format!("{}.{}", model.name, prop.name),
            ));
        }
        validate_inheritance(graph, model)?;
    }

    Ok(())
}

/// Validates that a model's base chain consists of models and terminates.
fn validate_inheritance(graph: &SchemaGraph, model: &Model) -> Result<(), SchemaError> {
    let mut path = vec![model.name.as_str()];
    let mut current = model;

    while let Some(base) = current.base_model {
        let base_ty = graph.ty(base)?;
        let Some(base_model) = base_ty.as_model() else {
            return Err(SchemaError::wrong_kind(
                format!("base of model '{}'", current.name),
                "model",
                base_ty.kind_name(),
            ));
        };

        let cycle = path.contains(&base_model.name.as_str());
        path.push(&base_model.name);
        if cycle {
            return Err(SchemaError::CircularReference {
                path: path.join(" -> "),
            });
        }
        current = base_model;
    }

    Ok(())
}

/// Validates that scalar bases are scalars and derivation terminates.
fn validate_scalars(graph: &SchemaGraph) -> Result<(), SchemaError> {
    for ty in &graph.types {
        let Type::Scalar(scalar) = ty else {
            continue;
        };

        let mut path = vec![scalar.name.as_str()];
        let mut current = scalar;
        while let Some(base) = current.base_scalar {
            let base_ty = graph.ty(base)?;
            let Type::Scalar(base_scalar) = base_ty else {
                return Err(SchemaError::wrong_kind(
                    format!("base of scalar '{}'", current.name),
                    "scalar",
                    base_ty.kind_name(),
                ));
            };

            let cycle = path.contains(&base_scalar.name.as_str());
            path.push(&base_scalar.name);
            if cycle {
                return Err(SchemaError::CircularReference {
                    path: path.join(" -> "),
                });
            }
            current = base_scalar;
        }
    }
    Ok(())
}
