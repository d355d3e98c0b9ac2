//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use tspts::prelude::*;
//! ```

// Core types
pub use tspts_core::error::{EmitError, Result as EmitResult};
pub use tspts_core::{Declaration, DeclarationRegistry, EmitEntity, Emitted, Placeholder, join};

// Schema types
pub use tspts_schema::{Property, SchemaBuilder, SchemaError, SchemaGraph, Type, TypeId};

// Codegen types
pub use tspts_codegen::typescript::{Identifier, Keyword, Printer, TsNode};
pub use tspts_codegen::{
    CodegenError, EmittedSourceFile, Emitter, EmitterOptions, FsSink, MemorySink, OutputSink,
    generate, generate_from_schema, generate_to_dir,
};
