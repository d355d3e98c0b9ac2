//! Checked node constructors.
//!
//! Every composite constructor verifies the kind of its children and fails
//! with `EmitError::TypeMismatch` instead of building a malformed tree.

use super::node::{Identifier, Keyword, Literal, TsNode};
use tspts_core::{EmitError, Result};

fn expect_type(node: TsNode) -> Result<TsNode> {
    if node.is_type_node() {
        Ok(node)
    } else {
        Err(EmitError::mismatch("type node", node.kind_name()))
    }
}

fn expect_types(nodes: Vec<TsNode>) -> Result<Vec<TsNode>> {
    nodes.into_iter().map(expect_type).collect()
}

/// Creates a keyword type.
#[must_use]
pub const fn keyword(keyword: Keyword) -> TsNode {
    TsNode::Keyword(keyword)
}

/// Creates the `null` literal type.
#[must_use]
pub const fn null_literal() -> TsNode {
    TsNode::Literal(Literal::Null)
}

/// Creates a reference to a declaration by name.
#[must_use]
pub fn type_reference(name: Identifier) -> TsNode {
    TsNode::TypeReference(name)
}

/// Creates `type name = ty;`.
///
/// # Errors
/// Returns `EmitError::TypeMismatch` if `ty` is not a type node.
pub fn type_alias_declaration(name: Identifier, exported: bool, ty: TsNode) -> Result<TsNode> {
    Ok(TsNode::TypeAlias {
        name,
        exported,
        ty: Box::new(expect_type(ty)?),
    })
}

/// Creates an object type from members in the given order.
///
/// # Errors
/// Returns `EmitError::TypeMismatch` if a member is not a type element.
pub fn type_literal(members: Vec<TsNode>) -> Result<TsNode> {
    if let Some(bad) = members.iter().find(|m| !m.is_type_element()) {
        return Err(EmitError::mismatch("type element", bad.kind_name()));
    }
    Ok(TsNode::TypeLiteral(members))
}

/// Creates `name?: ty`.
///
/// # Errors
/// Returns `EmitError::TypeMismatch` if `ty` is not a type node.
pub fn property_signature(name: Identifier, optional: bool, ty: TsNode) -> Result<TsNode> {
    Ok(TsNode::PropertySignature {
        name,
        optional,
        ty: Box::new(expect_type(ty)?),
    })
}

/// Creates `[key_name: key_type]: value_type`.
///
/// # Errors
/// Returns `EmitError::TypeMismatch` if either type is not a type node.
pub fn index_signature(
    key_name: Identifier,
    key_type: TsNode,
    value_type: TsNode,
) -> Result<TsNode> {
    Ok(TsNode::IndexSignature {
        key_name,
        key_type: Box::new(expect_type(key_type)?),
        value_type: Box::new(expect_type(value_type)?),
    })
}

/// Creates `element[]`.
///
/// # Errors
/// Returns `EmitError::TypeMismatch` if `element` is not a type node.
pub fn array_type(element: TsNode) -> Result<TsNode> {
    Ok(TsNode::ArrayType(Box::new(expect_type(element)?)))
}

/// Creates a union with members in the given order.
///
/// # Errors
/// Returns `EmitError::TypeMismatch` if a member is not a type node.
pub fn union_type(members: Vec<TsNode>) -> Result<TsNode> {
    Ok(TsNode::UnionType(expect_types(members)?))
}

/// Creates an intersection with members in the given order.
///
/// # Errors
/// Returns `EmitError::TypeMismatch` if a member is not a type node.
pub fn intersection_type(members: Vec<TsNode>) -> Result<TsNode> {
    Ok(TsNode::IntersectionType(expect_types(members)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string() -> TsNode {
        keyword(Keyword::String)
    }

    fn member(name: &str) -> TsNode {
        property_signature(Identifier::new(name), false, string()).expect("member")
    }

    #[test]
    fn test_type_alias_requires_type_node() {
        assert!(type_alias_declaration(Identifier::new("A"), false, string()).is_ok());

        let err = type_alias_declaration(Identifier::new("A"), false, member("x"))
            .expect_err("member is not a type");
        assert_eq!(err, EmitError::mismatch("type node", "property signature"));
    }

    #[test]
    fn test_type_literal_requires_type_elements() {
        let literal = type_literal(vec![member("b"), member("a")]).expect("literal");
        let TsNode::TypeLiteral(members) = literal else {
            panic!("expected type literal");
        };
        assert_eq!(members, vec![member("b"), member("a")]);

        let err = type_literal(vec![member("a"), string()]).expect_err("keyword member");
        assert_eq!(err, EmitError::mismatch("type element", "keyword type"));
    }

    #[test]
    fn test_property_signature_optional_flag() {
        let node = property_signature(Identifier::new("age"), true, keyword(Keyword::Number))
            .expect("member");
        assert!(matches!(node, TsNode::PropertySignature { optional: true, .. }));
    }

    #[test]
    fn test_index_signature() {
        let node = index_signature(Identifier::new("key"), string(), null_literal())
            .expect("index signature");
        assert!(node.is_type_element());

        let alias = type_alias_declaration(Identifier::new("A"), false, string()).expect("alias");
        assert!(index_signature(Identifier::new("key"), string(), alias).is_err());
    }

    #[test]
    fn test_composites_reject_statements() {
        let alias = type_alias_declaration(Identifier::new("A"), false, string()).expect("alias");
        assert!(array_type(alias.clone()).is_err());
        assert!(union_type(vec![string(), alias.clone()]).is_err());
        assert!(intersection_type(vec![alias, string()]).is_err());
    }

    #[test]
    fn test_union_preserves_order_and_duplicates() {
        let node = union_type(vec![string(), null_literal(), string()]).expect("union");
        assert_eq!(
            node,
            TsNode::UnionType(vec![string(), null_literal(), string()])
        );
    }
}
