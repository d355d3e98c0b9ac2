//! Mapping rules for models and their members.

use super::factory;
use super::node::{Identifier, Keyword, TsNode};
use super::types::single;
use crate::emitter::Emitter;
use tspts_core::{EmitEntity, EmitError, Emitted, Result, join};
use tspts_schema::{Model, Property};

fn intersection_of_two(args: Vec<TsNode>) -> Result<TsNode> {
    let [base, own]: [TsNode; 2] = args
        .try_into()
        .map_err(|_| EmitError::mismatch("two intersection members", "argument list"))?;
    factory::intersection_type(vec![base, own])
}

impl<'a> Emitter<'a> {
    /// Maps a model to `type Name = Body;`, where the body is the member
    /// literal, intersected with a reference to the base model if any.
    pub(crate) fn model_declaration(
        &mut self,
        model: &'a Model,
        name: &Identifier,
    ) -> Result<Emitted<TsNode>> {
        tracing::trace!("Mapping model {}", model.name);
        let properties = self.emit_model_properties(model)?;

        let body = match model.base_model {
            Some(base) => {
                let base = self.emit_type_reference(base)?;
                join(vec![base, properties.into()], intersection_of_two)?
            }
            None => properties,
        };

        let name = name.clone();
        let exported = self.options.exports();
        join(vec![body.into()], move |args| {
            factory::type_alias_declaration(name, exported, single(args)?)
        })
    }

    /// Maps the declared properties, then the indexer, into one type literal.
    ///
    /// # Errors
    /// Returns `EmitError` if a property type cannot be mapped, or
    /// `EmitError::Unsupported` if the configured index key name is not an
    /// identifier.
    pub fn emit_model_properties(&mut self, model: &'a Model) -> Result<Emitted<TsNode>> {
        let mut members: Vec<EmitEntity<TsNode>> =
            Vec::with_capacity(model.properties.len() + usize::from(model.indexer.is_some()));

        for property in &model.properties {
            members.push(self.model_property(property)?.into());
        }

        if let Some(indexer) = model.indexer {
            let value = self.emit_type_reference(indexer)?;
            let key_name = Identifier::new(self.options.key_name());
            if !key_name.is_valid() {
                return Err(EmitError::unsupported("index key name", key_name.as_str()));
            }
            let signature = join(vec![value], move |args| {
                factory::index_signature(key_name, factory::keyword(Keyword::String), single(args)?)
            })?;
            members.push(signature.into());
        }

        join(members, factory::type_literal)
    }

    pub(crate) fn model_property(&mut self, property: &'a Property) -> Result<Emitted<TsNode>> {
        let name = Identifier::new(property.name.clone());
        let optional = property.optional;
        let ty = self.emit_type_reference(property.ty)?;
        join(vec![ty], move |args| {
            factory::property_signature(name, optional, single(args)?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EmitterOptions;
    use tspts_schema::SchemaBuilder;

    fn node(emitted: Emitted<TsNode>) -> TsNode {
        emitted.extract("member").expect("resolved")
    }

    #[test]
    fn test_intersection_needs_exactly_two() {
        let string = factory::keyword(Keyword::String);
        assert!(intersection_of_two(vec![string.clone(), string.clone()]).is_ok());
        assert_eq!(
            intersection_of_two(vec![string]),
            Err(EmitError::mismatch("two intersection members", "argument list"))
        );
    }

    #[test]
    fn test_property_order_is_declaration_order() {
        let mut b = SchemaBuilder::new();
        let string = b.scalar("string");
        let m = b.model("M");
        b.add_property(m, Property::new("zeta", string)).expect("property");
        b.add_property(m, Property::optional("alpha", string)).expect("property");
        let graph = b.build().expect("graph");
        let model = graph.model(m).expect("model");

        let mut emitter = Emitter::new(&graph, EmitterOptions::default());
        let literal = node(emitter.emit_model_properties(model).expect("properties"));

        let expected = factory::type_literal(vec![
            factory::property_signature(
                Identifier::new("zeta"),
                false,
                factory::keyword(Keyword::String),
            )
            .expect("zeta"),
            factory::property_signature(
                Identifier::new("alpha"),
                true,
                factory::keyword(Keyword::String),
            )
            .expect("alpha"),
        ])
        .expect("literal");
        assert_eq!(literal, expected);
    }

    #[test]
    fn test_indexer_uses_configured_key_name() {
        let mut b = SchemaBuilder::new();
        let boolean = b.scalar("boolean");
        let m = b.model("Flags");
        b.set_indexer(m, boolean).expect("indexer");
        let graph = b.build().expect("graph");
        let model = graph.model(m).expect("model");

        let options = EmitterOptions::new().index_key_name("flag");
        let mut emitter = Emitter::new(&graph, options);
        let literal = node(emitter.emit_model_properties(model).expect("properties"));

        let expected = factory::type_literal(vec![
            factory::index_signature(
                Identifier::new("flag"),
                factory::keyword(Keyword::String),
                factory::keyword(Keyword::Boolean),
            )
            .expect("index"),
        ])
        .expect("literal");
        assert_eq!(literal, expected);
    }

    #[test]
    fn test_indexer_rejects_non_identifier_key_name() {
        let mut b = SchemaBuilder::new();
        let int32 = b.scalar("int32");
        let m = b.model("Counts");
        b.set_indexer(m, int32).expect("indexer");
        let graph = b.build().expect("graph");
        let model = graph.model(m).expect("model");

        let options = EmitterOptions::new().index_key_name("a key");
        let mut emitter = Emitter::new(&graph, options);
        assert_eq!(
            emitter.emit_model_properties(model).expect_err("invalid key name"),
            EmitError::unsupported("index key name", "a key")
        );
    }

    #[test]
    fn test_base_model_is_referenced_not_inlined() {
        let mut b = SchemaBuilder::new();
        let string = b.scalar("string");
        let base = b.model("Base");
        b.add_property(base, Property::new("id", string)).expect("property");
        let child = b.model("Child");
        b.set_base(child, base).expect("base");
        let graph = b.build().expect("graph");
        let model = graph.model(child).expect("model");

        let mut emitter = Emitter::new(&graph, EmitterOptions::default());
        let alias = node(
            emitter
                .model_declaration(model, &Identifier::new("Child"))
                .expect("declaration"),
        );

        let expected = factory::type_alias_declaration(
            Identifier::new("Child"),
            false,
            factory::intersection_type(vec![
                factory::type_reference(Identifier::new("Base")),
                factory::type_literal(Vec::new()).expect("literal"),
            ])
            .expect("intersection"),
        )
        .expect("alias");
        assert_eq!(alias, expected);
    }
}
