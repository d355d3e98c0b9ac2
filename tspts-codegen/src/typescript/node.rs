//! TypeScript output node algebra.
//!
//! Nodes are plain immutable data with no links back to schema entities.
//! Use the checked constructors in [`factory`](super::factory) to build
//! composite nodes.

use std::fmt;

/// Primitive keyword types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
}

impl Keyword {
    /// Returns the keyword text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// Literal types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    /// `null`
    Null,
}

impl Literal {
    /// Returns the literal text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
        }
    }
}

/// Identifier used for declaration, member and key names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the name can be printed without quotes.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        tspts_schema::is_identifier(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            f.write_str(&self.0)
        } else {
            write!(f, "\"{}\"", self.0.replace('\\', "\\\\").replace('"', "\\\""))
        }
    }
}

/// TypeScript output node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsNode {
    /// Primitive keyword type.
    Keyword(Keyword),
    /// Literal type.
    Literal(Literal),
    /// Reference to a declaration by name.
    TypeReference(Identifier),
    /// Object type with ordered members.
    TypeLiteral(Vec<TsNode>),
    /// `T[]`
    ArrayType(Box<TsNode>),
    /// `A | B`
    UnionType(Vec<TsNode>),
    /// `A & B`
    IntersectionType(Vec<TsNode>),
    /// Object member `name?: T`.
    PropertySignature {
        /// Member name.
        name: Identifier,
        /// Whether the member carries the `?` marker.
        optional: bool,
        /// Member type.
        ty: Box<TsNode>,
    },
    /// Object member `[key: K]: V`.
    IndexSignature {
        /// Parameter name of the key.
        key_name: Identifier,
        /// Key type.
        key_type: Box<TsNode>,
        /// Value type.
        value_type: Box<TsNode>,
    },
    /// `type Name = T;`
    TypeAlias {
        /// Declared name.
        name: Identifier,
        /// Whether the alias is exported.
        exported: bool,
        /// Aliased type.
        ty: Box<TsNode>,
    },
}

impl TsNode {
    /// Returns the node kind name.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "keyword type",
            Self::Literal(_) => "literal type",
            Self::TypeReference(_) => "type reference",
            Self::TypeLiteral(_) => "type literal",
            Self::ArrayType(_) => "array type",
            Self::UnionType(_) => "union type",
            Self::IntersectionType(_) => "intersection type",
            Self::PropertySignature { .. } => "property signature",
            Self::IndexSignature { .. } => "index signature",
            Self::TypeAlias { .. } => "type alias declaration",
        }
    }

    /// Returns true for nodes usable in type position.
    #[must_use]
    pub const fn is_type_node(&self) -> bool {
        matches!(
            self,
            Self::Keyword(_)
                | Self::Literal(_)
                | Self::TypeReference(_)
                | Self::TypeLiteral(_)
                | Self::ArrayType(_)
                | Self::UnionType(_)
                | Self::IntersectionType(_)
        )
    }

    /// Returns true for members of a type literal.
    #[must_use]
    pub const fn is_type_element(&self) -> bool {
        matches!(
            self,
            Self::PropertySignature { .. } | Self::IndexSignature { .. }
        )
    }

    /// Returns true for top-level statements.
    #[must_use]
    pub const fn is_statement(&self) -> bool {
        matches!(self, Self::TypeAlias { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_validity() {
        assert!(Identifier::new("firstName").is_valid());
        assert!(Identifier::new("_private").is_valid());
        assert!(Identifier::new("$ref").is_valid());
        assert!(Identifier::new("x1").is_valid());
        assert!(!Identifier::new("1x").is_valid());
        assert!(!Identifier::new("first-name").is_valid());
        assert!(!Identifier::new("").is_valid());
    }

    #[test]
    fn test_identifier_display_quotes_invalid_names() {
        assert_eq!(Identifier::new("name").to_string(), "name");
        assert_eq!(Identifier::new("content-type").to_string(), "\"content-type\"");
        assert_eq!(Identifier::new("a\"b").to_string(), "\"a\\\"b\"");
    }

    #[test]
    fn test_node_categories() {
        let keyword = TsNode::Keyword(Keyword::String);
        assert!(keyword.is_type_node());
        assert!(!keyword.is_type_element());
        assert!(!keyword.is_statement());

        let member = TsNode::PropertySignature {
            name: Identifier::new("x"),
            optional: false,
            ty: Box::new(keyword.clone()),
        };
        assert!(member.is_type_element());
        assert!(!member.is_type_node());

        let alias = TsNode::TypeAlias {
            name: Identifier::new("X"),
            exported: false,
            ty: Box::new(keyword),
        };
        assert!(alias.is_statement());
        assert_eq!(alias.kind_name(), "type alias declaration");
    }

    #[test]
    fn test_keyword_and_literal_text() {
        assert_eq!(Keyword::Number.as_str(), "number");
        assert_eq!(Keyword::Boolean.as_str(), "boolean");
        assert_eq!(Literal::Null.as_str(), "null");
    }
}
