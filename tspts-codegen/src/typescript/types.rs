//! Mapping rules for anonymous type expressions: unions, arrays, scalars,
//! intrinsics and named references.

use super::factory;
use super::node::{Identifier, TsNode};
use super::scalars::{intrinsic_node, scalar_keyword};
use crate::emitter::Emitter;
use tspts_core::{EmitError, Emitted, Result, join};
use tspts_schema::{ArrayType, Intrinsic, Scalar, Type, Union};

/// Builds a reference to a declaration from its name alone.
#[must_use]
pub fn reference(name: &Identifier) -> TsNode {
    factory::type_reference(name.clone())
}

/// Takes the only argument of a one-child join.
pub(crate) fn single(args: Vec<TsNode>) -> Result<TsNode> {
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(node), None) => Ok(node),
        (None, _) => Err(EmitError::unresolved("join argument")),
        (Some(_), Some(extra)) => Err(EmitError::mismatch("single argument", extra.kind_name())),
    }
}

impl<'a> Emitter<'a> {
    pub(crate) fn union_literal(&mut self, union: &'a Union) -> Result<Emitted<TsNode>> {
        let mut variants = Vec::with_capacity(union.variants.len());
        for &variant in &union.variants {
            variants.push(self.emit_type_reference(variant)?);
        }
        join(variants, factory::union_type)
    }

    pub(crate) fn array_literal(&mut self, array: &'a ArrayType) -> Result<Emitted<TsNode>> {
        let element = self.emit_type_reference(array.element)?;
        join(vec![element], |args| factory::array_type(single(args)?))
    }

    /// Maps a scalar to its keyword, walking `extends` until a built-in is
    /// found.
    pub(crate) fn scalar_type(&self, scalar: &'a Scalar) -> Result<TsNode> {
        let mut current = scalar;
        loop {
            if let Some(keyword) = scalar_keyword(&current.name) {
                if current.name != scalar.name {
                    tracing::trace!("Scalar {} maps through {}", scalar.name, current.name);
                }
                return Ok(factory::keyword(keyword));
            }
            let Some(base) = current.base_scalar else {
                return Err(EmitError::unsupported("scalar", scalar.name.clone()));
            };
            current = match self.lookup(base)? {
                Type::Scalar(next) => next,
                other => return Err(EmitError::mismatch("scalar", other.kind_name())),
            };
        }
    }

    pub(crate) fn intrinsic(&self, intrinsic: &'a Intrinsic) -> Result<TsNode> {
        intrinsic_node(&intrinsic.name)
            .ok_or_else(|| EmitError::unsupported("intrinsic", intrinsic.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EmitterOptions;
    use crate::typescript::node::Keyword;
    use tspts_schema::{Property, SchemaBuilder};

    #[test]
    fn test_single_argument() {
        let string = factory::keyword(Keyword::String);
        assert_eq!(single(vec![string.clone()]), Ok(string.clone()));
        assert!(single(Vec::new()).is_err());
        assert!(single(vec![string.clone(), string]).is_err());
    }

    #[test]
    fn test_reference_uses_name_only() {
        assert_eq!(
            reference(&Identifier::new("Pet")),
            TsNode::TypeReference(Identifier::new("Pet"))
        );
    }

    #[test]
    fn test_union_keeps_order_and_duplicates() {
        let mut b = SchemaBuilder::new();
        let string = b.scalar("string");
        let int32 = b.scalar("int32");
        let null = b.null();
        let inner = b.union([int32, null]);
        let union = b.union([string, inner, string]);
        let graph = b.build().expect("graph");

        let mut emitter = Emitter::new(&graph, EmitterOptions::default());
        let node = emitter
            .emit_type(union)
            .expect("union")
            .into_code()
            .expect("code")
            .extract("union")
            .expect("ready");

        let expected = factory::union_type(vec![
            factory::keyword(Keyword::String),
            factory::union_type(vec![factory::keyword(Keyword::Number), factory::null_literal()])
                .expect("inner"),
            factory::keyword(Keyword::String),
        ])
        .expect("outer");
        assert_eq!(node, expected);
    }

    #[test]
    fn test_array_of_model_is_reference() {
        let mut b = SchemaBuilder::new();
        let pet = b.model("Pet");
        let pets = b.array(pet);
        let graph = b.build().expect("graph");

        let mut emitter = Emitter::new(&graph, EmitterOptions::default());
        let node = emitter
            .emit_type(pets)
            .expect("array")
            .emitted()
            .value()
            .expect("ready");
        assert_eq!(
            node,
            factory::array_type(reference(&Identifier::new("Pet"))).expect("array")
        );
    }

    #[test]
    fn test_custom_scalar_maps_through_base() {
        let mut b = SchemaBuilder::new();
        let string = b.scalar("string");
        let email = b.scalar_extends("email", string).expect("email");
        let work = b.scalar_extends("workEmail", email).expect("work");
        let orphan = b.scalar("money");
        let derived = b.scalar_extends("cents", orphan).expect("cents");
        let m = b.model("M");
        b.add_property(m, Property::new("x", work)).expect("property");
        let graph = b.build().expect("graph");

        let emitter = Emitter::new(&graph, EmitterOptions::default());
        let Some(Type::Scalar(work)) = graph.get(work) else {
            panic!("expected scalar");
        };
        assert_eq!(
            emitter.scalar_type(work),
            Ok(factory::keyword(Keyword::String))
        );

        let Some(Type::Scalar(derived)) = graph.get(derived) else {
            panic!("expected scalar");
        };
        assert_eq!(
            emitter.scalar_type(derived),
            Err(EmitError::unsupported("scalar", "cents"))
        );
    }

    #[test]
    fn test_intrinsic_table() {
        let mut b = SchemaBuilder::new();
        let null = b.null();
        let never = b.intrinsic("never");
        let graph = b.build().expect("graph");

        let mut emitter = Emitter::new(&graph, EmitterOptions::default());
        let node = emitter.emit_type(null).expect("null").emitted().value();
        assert_eq!(node, Some(factory::null_literal()));

        let err = emitter.emit_type(never).expect_err("never");
        assert_eq!(err, EmitError::unsupported("intrinsic", "never"));
    }
}
