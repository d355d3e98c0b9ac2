//! # tspts
//!
//! TypeScript type declarations from schema graphs.
//!
//! tspts walks a graph of models, scalars, unions, arrays and intrinsics and
//! emits one `type` alias per model. Models may refer to themselves or to
//! each other in any order: references to a declaration still under
//! construction are deferred and filled in once it completes.
//!
//! ## Features
//!
//! - **Deferred construction** - composite nodes are joined from children that may still be pending
//! - **Single emission** - every schema entity is mapped exactly once
//! - **Inheritance** - derived models become intersections with their base
//! - **Deterministic output** - declarations, members and variants keep schema order
//!
//! ## Quick Start
//!
//! ```ignore
//! use tspts::prelude::*;
//!
//! let mut schema = SchemaBuilder::new();
//! let string = schema.scalar("string");
//! let person = schema.model("Person");
//! schema.add_property(person, Property::new("name", string))?;
//! let graph = schema.build()?;
//!
//! let files = generate(&graph, EmitterOptions::default())?;
//! print!("{}", files[0].contents);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Placeholders, join builder and declaration registry
//! - [`schema`] - Schema graph construction and validation
//! - [`codegen`] - TypeScript mapping, printing and output

pub mod prelude;

/// Deferred construction primitives.
pub mod core {
    pub use tspts_core::*;
}

/// Schema graph construction and validation.
pub mod schema {
    pub use tspts_schema::*;
}

/// TypeScript code generation.
pub mod codegen {
    pub use tspts_codegen::*;
}

// Re-export commonly used items at the crate root
pub use tspts_codegen::{
    CodegenError, EmittedSourceFile, Emitter, EmitterOptions, generate, generate_from_schema,
    generate_to_dir,
};
pub use tspts_core::{EmitError, Emitted, Placeholder, join};
pub use tspts_schema::{SchemaBuilder, SchemaError, SchemaGraph};
