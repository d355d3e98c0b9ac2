//! # tspts Core
//!
//! Primitives for building output nodes whose children may not exist yet.
//!
//! This crate provides:
//! - A single-assignment [`Placeholder`] with synchronous callbacks
//! - The [`join`] combinator that defers construction until every child resolves
//! - Emission results ([`Emitted`], [`EmitEntity`], [`Declaration`]) and value extraction
//! - A per-file [`DeclarationRegistry`] preserving discovery order
//! - The fatal error taxonomy shared by every emitter stage
//!
//! Everything here is single-threaded: "pending" means "not computed yet",
//! and callbacks fire inline on the stack of the `resolve` that triggers them.

pub mod builder;
pub mod entity;
pub mod error;
pub mod placeholder;
pub mod scope;

pub use builder::join;
pub use entity::{Declaration, EmitEntity, Emitted};
pub use error::{EmitError, Result};
pub use placeholder::Placeholder;
pub use scope::{DeclarationRegistry, ScopeId, SourceFile};
