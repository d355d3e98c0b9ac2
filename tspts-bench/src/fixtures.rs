//! Schema graphs and join inputs used by the benches.

use tspts_core::{EmitEntity, Placeholder};
use tspts_schema::{Property, SchemaBuilder, SchemaError, SchemaGraph};

/// Builds `len` models where each one refers to the next.
///
/// Every reference points forward, so each model is discovered while its
/// predecessor is still under construction but no reference is circular.
///
/// # Errors
/// Returns `SchemaError` if the graph fails validation.
pub fn chain(len: usize) -> Result<SchemaGraph, SchemaError> {
    let mut schema = SchemaBuilder::new();
    let string = schema.scalar("string");
    let models: Vec<_> = (0..len).map(|i| schema.model(format!("M{}", i))).collect();

    for (i, &model) in models.iter().enumerate() {
        schema.add_property(model, Property::new("label", string))?;
        if let Some(&next) = models.get(i + 1) {
            schema.add_property(model, Property::new("next", next))?;
        }
    }
    schema.build()
}

/// Builds `len` models arranged in a ring, each also listing itself.
///
/// The last model refers back to the first, so every declaration except the
/// last resolves through a deferred reference.
///
/// # Errors
/// Returns `SchemaError` if the graph fails validation.
pub fn ring(len: usize) -> Result<SchemaGraph, SchemaError> {
    let mut schema = SchemaBuilder::new();
    let int32 = schema.scalar("int32");
    let null = schema.null();
    let models: Vec<_> = (0..len).map(|i| schema.model(format!("R{}", i))).collect();

    for (i, &model) in models.iter().enumerate() {
        let next = models[(i + 1) % len];
        let siblings = schema.array(model);
        let link = schema.union([next, null]);
        schema.add_property(model, Property::new("id", int32))?;
        schema.add_property(model, Property::new("next", link))?;
        schema.add_property(model, Property::optional("siblings", siblings))?;
    }
    schema.build()
}

/// Returns `len` ready children.
#[must_use]
pub fn ready_children(len: usize) -> Vec<EmitEntity<u64>> {
    (0..len as u64).map(EmitEntity::code).collect()
}

/// Returns `len` pending children and the placeholders that resolve them.
#[must_use]
pub fn pending_children(len: usize) -> (Vec<EmitEntity<u64>>, Vec<Placeholder<u64>>) {
    let placeholders: Vec<_> = (0..len).map(|_| Placeholder::new()).collect();
    let children = placeholders
        .iter()
        .map(|ph| EmitEntity::Code(tspts_core::Emitted::Pending(ph.clone())))
        .collect();
    (children, placeholders)
}
