//! Built-in scalar and intrinsic tables.
//!
//! Both tables are partial. Names missing here are reported as unsupported.

use super::factory;
use super::node::{Keyword, TsNode};

/// Maps a built-in scalar name to its keyword type.
#[must_use]
pub fn scalar_keyword(name: &str) -> Option<Keyword> {
    let keyword = match name {
        "int8" | "int16" | "int32" | "int64" | "uint8" | "uint16" | "uint32" | "uint64"
        | "safeint" | "integer" | "float" | "float32" | "float64" | "numeric" => Keyword::Number,
        "string" | "bytes" | "url" | "decimal" | "decimal128" | "plainDate" | "plainTime"
        | "utcDateTime" | "offsetDateTime" | "duration" => Keyword::String,
        "boolean" => Keyword::Boolean,
        _ => return None,
    };
    Some(keyword)
}

/// Maps an intrinsic name to its literal type.
#[must_use]
pub fn intrinsic_node(name: &str) -> Option<TsNode> {
    match name {
        "null" => Some(factory::null_literal()),
        _ => None,
    }
}
