//! Renders TypeScript nodes to source text.

use super::node::TsNode;
use tspts_core::{EmitError, Result};

/// Source printer for a list of top-level statements.
#[derive(Debug, Clone)]
pub struct Printer {
    indent: String,
}

impl Printer {
    /// Creates a printer indenting nested members by `indent_width` spaces.
    #[must_use]
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent: " ".repeat(indent_width),
        }
    }

    /// Prints a whole file, one statement per line group.
    ///
    /// An empty statement list prints as the empty string.
    ///
    /// # Errors
    /// Returns `EmitError::TypeMismatch` if a node is misplaced.
    pub fn print_file(&self, statements: &[TsNode]) -> Result<String> {
        let mut output = String::new();
        for statement in statements {
            self.print_statement(statement, &mut output)?;
            output.push('\n');
        }
        Ok(output)
    }

    fn print_statement(&self, node: &TsNode, out: &mut String) -> Result<()> {
        match node {
            TsNode::TypeAlias { name, exported, ty } => {
                if *exported {
                    out.push_str("export ");
                }
                out.push_str(&format!("type {} = ", name.as_str()));
                self.print_type(ty, 0, out)?;
                out.push(';');
                Ok(())
            }
            other => Err(EmitError::mismatch("statement", other.kind_name())),
        }
    }

    fn print_type(&self, node: &TsNode, depth: usize, out: &mut String) -> Result<()> {
        match node {
            TsNode::Keyword(keyword) => out.push_str(keyword.as_str()),
            TsNode::Literal(literal) => out.push_str(literal.as_str()),
            TsNode::TypeReference(name) => out.push_str(name.as_str()),
            TsNode::TypeLiteral(members) => {
                if members.is_empty() {
                    out.push_str("{}");
                    return Ok(());
                }
                out.push_str("{\n");
                for member in members {
                    self.push_indent(depth + 1, out);
                    self.print_member(member, depth + 1, out)?;
                    out.push_str(";\n");
                }
                self.push_indent(depth, out);
                out.push('}');
            }
            TsNode::ArrayType(element) => {
                let wrap = matches!(
                    **element,
                    TsNode::UnionType(ref m) | TsNode::IntersectionType(ref m) if !m.is_empty()
                );
                self.print_wrapped(element, wrap, depth, out)?;
                out.push_str("[]");
            }
            TsNode::UnionType(members) => {
                if members.is_empty() {
                    out.push_str("never");
                }
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" | ");
                    }
                    let wrap = matches!(member, TsNode::UnionType(m) if !m.is_empty());
                    self.print_wrapped(member, wrap, depth, out)?;
                }
            }
            TsNode::IntersectionType(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" & ");
                    }
                    let wrap = matches!(
                        member,
                        TsNode::UnionType(m) | TsNode::IntersectionType(m) if !m.is_empty()
                    );
                    self.print_wrapped(member, wrap, depth, out)?;
                }
            }
            other => return Err(EmitError::mismatch("type node", other.kind_name())),
        }
        Ok(())
    }

    fn print_member(&self, node: &TsNode, depth: usize, out: &mut String) -> Result<()> {
        match node {
            TsNode::PropertySignature { name, optional, ty } => {
                out.push_str(&name.to_string());
                if *optional {
                    out.push('?');
                }
                out.push_str(": ");
                self.print_type(ty, depth, out)
            }
            TsNode::IndexSignature {
                key_name,
                key_type,
                value_type,
            } => {
                out.push_str(&format!("[{}: ", key_name.as_str()));
                self.print_type(key_type, depth, out)?;
                out.push_str("]: ");
                self.print_type(value_type, depth, out)
            }
            other => Err(EmitError::mismatch("type element", other.kind_name())),
        }
    }

    fn print_wrapped(
        &self,
        node: &TsNode,
        wrap: bool,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        if wrap {
            out.push('(');
        }
        self.print_type(node, depth, out)?;
        if wrap {
            out.push(')');
        }
        Ok(())
    }

    fn push_indent(&self, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str(&self.indent);
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typescript::factory::*;
    use crate::typescript::node::{Identifier, Keyword};

    fn alias(name: &str, ty: TsNode) -> TsNode {
        type_alias_declaration(Identifier::new(name), false, ty).expect("alias")
    }

    fn prop(name: &str, optional: bool, ty: TsNode) -> TsNode {
        property_signature(Identifier::new(name), optional, ty).expect("property")
    }

    fn reference(name: &str) -> TsNode {
        type_reference(Identifier::new(name))
    }

    #[test]
    fn test_print_empty_file() {
        assert_eq!(Printer::default().print_file(&[]).expect("print"), "");
    }

    #[test]
    fn test_print_object_alias() {
        let body = type_literal(vec![
            prop("firstName", false, keyword(Keyword::String)),
            prop("age", true, keyword(Keyword::Number)),
        ])
        .expect("literal");

        let text = Printer::default()
            .print_file(&[alias("Person", body)])
            .expect("print");
        assert_eq!(
            text,
            "type Person = {\n    firstName: string;\n    age?: number;\n};\n"
        );
    }

    #[test]
    fn test_print_nested_literal_indentation() {
        let inner = type_literal(vec![prop("x", false, keyword(Keyword::Boolean))]).expect("inner");
        let outer = type_literal(vec![prop("point", false, inner)]).expect("outer");

        let text = Printer::new(2).print_file(&[alias("Shape", outer)]).expect("print");
        assert_eq!(
            text,
            "type Shape = {\n  point: {\n    x: boolean;\n  };\n};\n"
        );
    }

    #[test]
    fn test_print_empty_literal_and_export() {
        let node = type_alias_declaration(
            Identifier::new("Empty"),
            true,
            type_literal(Vec::new()).expect("literal"),
        )
        .expect("alias");
        let text = Printer::default().print_file(&[node]).expect("print");
        assert_eq!(text, "export type Empty = {};\n");
    }

    #[test]
    fn test_print_composites_with_parentheses() {
        let union = union_type(vec![keyword(Keyword::String), null_literal()]).expect("union");
        let array = array_type(union.clone()).expect("array");
        let intersection =
            intersection_type(vec![reference("Base"), union.clone()]).expect("intersection");
        let nested = union_type(vec![reference("A"), union]).expect("nested");

        let printer = Printer::default();
        let text = printer
            .print_file(&[
                alias("A1", array),
                alias("A2", intersection),
                alias("A3", nested),
            ])
            .expect("print");

        assert_eq!(
            text,
            "type A1 = (string | null)[];\n\
             type A2 = Base & (string | null);\n\
             type A3 = A | (string | null);\n"
        );
    }

    #[test]
    fn test_print_index_signature_and_quoted_names() {
        let body = type_literal(vec![
            prop("content-type", false, keyword(Keyword::String)),
            index_signature(
                Identifier::new("key"),
                keyword(Keyword::String),
                array_type(keyword(Keyword::Number)).expect("array"),
            )
            .expect("index"),
        ])
        .expect("literal");

        let text = Printer::default()
            .print_file(&[alias("Headers", body)])
            .expect("print");
        assert_eq!(
            text,
            "type Headers = {\n    \"content-type\": string;\n    [key: string]: number[];\n};\n"
        );
    }

    #[test]
    fn test_print_empty_union_as_never() {
        let empty = union_type(Vec::new()).expect("union");
        let body = type_literal(vec![
            prop("u", false, empty.clone()),
            prop("list", false, array_type(empty).expect("array")),
        ])
        .expect("literal");

        let text = Printer::default()
            .print_file(&[alias("M", body)])
            .expect("print");
        assert_eq!(text, "type M = {\n    u: never;\n    list: never[];\n};\n");
    }

    #[test]
    fn test_print_rejects_non_statement() {
        let err = Printer::default()
            .print_file(&[keyword(Keyword::String)])
            .expect_err("not a statement");
        assert_eq!(err, EmitError::mismatch("statement", "keyword type"));
    }
}
