//! Shared types for the tidl code generators.
//!
//! This crate defines the AST a Thrift front-end hands to the generators:
//! programs, declarations, the [`Type`] tree and constant literals.
//! Generators treat every value here as read-only.

pub mod ast;
mod ty;
mod value;

pub use ty::{BaseType, Type};
pub use value::ConstValue;
