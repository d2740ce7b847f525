//! tidl compiler: runs a code generator over a program and writes its output
//! files.
//!
//! ```text
//! Program (AST or JSON) → GeneratorRegistry → Generator → <outDir>/gen-<lang>/<program>-{types,vars}.<ext>
//! ```
//!
//! Parsing IDL text is not part of this crate: programs arrive as
//! [`tidl_types::ast::Program`] values, built in code or loaded with
//! [`Program::from_json`](tidl_types::ast::Program::from_json).

pub mod config;
pub mod error;
mod pipeline;
pub mod registry;

pub use config::Config;
pub use error::GenerateError;
pub use pipeline::{generate, generate_with, FileKind, GenerateResult, GeneratedFile};
pub use registry::{GeneratorEntry, GeneratorFactory, GeneratorRegistry};
