//! TypeScript node algebra, mapping rules and printer.

pub mod factory;
pub mod models;
pub mod node;
pub mod printer;
pub mod scalars;
pub mod types;

pub use node::{Identifier, Keyword, Literal, TsNode};
pub use printer::Printer;
pub use types::reference;
