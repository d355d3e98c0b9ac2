//! # tspts Codegen
//!
//! TypeScript emission for schema graphs.
//!
//! This crate provides:
//! - A TypeScript type node algebra with checked constructors
//! - Mapping rules from schema entities to nodes, with circular references
//!   resolved through deferred construction
//! - Source assembly, printing and output sinks

pub mod emitter;
pub mod error;
pub mod options;
pub mod output;
pub mod typescript;

pub use emitter::Emitter;
pub use error::CodegenError;
pub use options::EmitterOptions;
pub use output::{EmittedSourceFile, FsSink, MemorySink, OutputSink};

use tspts_schema::{SchemaBuilder, SchemaGraph};

/// Emits every model of `graph` and returns the rendered files.
///
/// # Arguments
/// * `graph` - Validated schema graph
/// * `options` - Emitter options
///
/// # Errors
/// Returns `CodegenError` if mapping or finalization fails.
pub fn generate(
    graph: &SchemaGraph,
    options: EmitterOptions,
) -> Result<Vec<EmittedSourceFile>, CodegenError> {
    let mut emitter = Emitter::new(graph, options);
    emitter.emit_program()?;
    Ok(emitter.emit_source_files()?)
}

/// Builds and validates `schema`, then emits every model.
///
/// # Arguments
/// * `schema` - Schema under construction
/// * `options` - Emitter options
///
/// # Errors
/// Returns `CodegenError::Schema` if validation fails, or `CodegenError` if
/// mapping or finalization fails.
pub fn generate_from_schema(
    schema: SchemaBuilder,
    options: EmitterOptions,
) -> Result<Vec<EmittedSourceFile>, CodegenError> {
    let graph = schema.build()?;
    generate(&graph, options)
}

/// Emits every model of `graph` and writes the files below `dir`.
///
/// Nothing is written unless every file finalizes.
///
/// # Errors
/// Returns `CodegenError` if mapping, finalization or writing fails.
pub fn generate_to_dir(
    graph: &SchemaGraph,
    options: EmitterOptions,
    dir: &std::path::Path,
) -> Result<(), CodegenError> {
    let mut emitter = Emitter::new(graph, options);
    emitter.emit_program()?;
    emitter.write_output(&mut FsSink::new(dir))
}
