//! # tspts Schema
//!
//! Typed schema graph consumed by the TypeScript emitter.
//!
//! This crate provides:
//! - Entity definitions for models, properties, scalars, unions, arrays and intrinsics
//! - An arena graph addressed by [`TypeId`], where cycles are ordinary references
//! - A [`SchemaBuilder`] for declaring entities before filling them in
//! - Structural validation run when the graph is built

pub mod error;
pub mod graph;
pub mod types;
pub mod validation;

pub use error::SchemaError;
pub use graph::{SchemaBuilder, SchemaGraph};
pub use types::{ArrayType, Intrinsic, Model, Property, Scalar, Type, TypeId, Union};
pub use validation::{is_identifier, validate_graph};
