//! tidl code generators: turn a typed Thrift IDL program into target-language
//! source.
//!
//! # Architecture
//!
//! A backend implements [`Generator`]. The driver opens two output streams,
//! wraps them in a [`Sink`], and calls [`generate_program`], which runs
//! `init`, one `emit_*` per declaration in source order, then `close`.
//!
//! Backends build output as a [`Doc`] tree and let the printer handle
//! indentation. The only backend today is [`cl::ClGenerator`] (Common Lisp).
//!
//! ## Streams
//!
//! - [`Stream::Types`]: packages, enums, structs, exceptions, services
//! - [`Stream::Vars`]: constants

pub mod cl;
pub mod doc;
pub mod error;
pub mod generator;
pub mod sink;

pub use cl::ClGenerator;
pub use doc::Doc;
pub use error::{CodegenError, CodegenResult};
pub use generator::{generate_program, Generator};
pub use sink::{Sink, Stream};
