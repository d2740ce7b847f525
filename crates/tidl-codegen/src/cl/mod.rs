//! Common Lisp backend.
//!
//! Emits `<program>-types.lisp` (packages, enums, structs, exceptions,
//! services) and `<program>-vars.lisp` (constants) for the Lisp Thrift
//! runtime.

pub mod constant;
pub mod names;
pub mod service;
pub mod structs;
pub mod typespec;

use tidl_types::ast::{Const, EnumDef, Program, Service, StructDef, Typedef};

use crate::doc::Doc;
use crate::error::CodegenResult;
use crate::generator::Generator;
use crate::sink::{Sink, Stream};

use self::constant::render_const;
use self::names::{package_of, symbol};
use self::service::service_form;
use self::structs::{record_form, RecordKind};

/// Target-language tag for `namespace cl ...` annotations.
pub const LANGUAGE: &str = "cl";

/// Package used when a program declares no `cl` namespace.
pub const DEFAULT_PACKAGE: &str = "thrift-generated";

#[derive(Debug, Clone, Copy, Default)]
pub struct ClGenerator;

impl ClGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for ClGenerator {
    fn language(&self) -> &'static str {
        LANGUAGE
    }

    fn file_extension(&self) -> &'static str {
        "lisp"
    }

    fn init(&self, program: &Program, sink: &mut Sink<'_>) -> CodegenResult<()> {
        let package = package_of(&program.info);
        let header = header(package);
        let in_package = Doc::text(format!("(in-package :{package})"));

        sink.write_form(Stream::Types, &header)?;
        sink.write_form(Stream::Types, &package_def(program))?;
        sink.write_form(Stream::Types, &in_package)?;

        sink.write_form(Stream::Vars, &header)?;
        sink.write_form(Stream::Vars, &in_package)?;
        Ok(())
    }

    /// Typedefs are resolved wherever they are used and produce no output.
    fn emit_typedef(&self, _: &Program, _: &Typedef, _: &mut Sink<'_>) -> CodegenResult<()> {
        Ok(())
    }

    fn emit_enum(&self, _: &Program, def: &EnumDef, sink: &mut Sink<'_>) -> CodegenResult<()> {
        sink.write_form(Stream::Types, &enum_form(def))?;
        Ok(())
    }

    fn emit_struct(
        &self,
        program: &Program,
        def: &StructDef,
        sink: &mut Sink<'_>,
    ) -> CodegenResult<()> {
        let doc = record_form(def, RecordKind::Struct, &program.info)?;
        sink.write_form(Stream::Types, &doc)?;
        Ok(())
    }

    fn emit_exception(
        &self,
        program: &Program,
        def: &StructDef,
        sink: &mut Sink<'_>,
    ) -> CodegenResult<()> {
        let doc = record_form(def, RecordKind::Exception, &program.info)?;
        sink.write_form(Stream::Types, &doc)?;
        Ok(())
    }

    fn emit_service(
        &self,
        program: &Program,
        def: &Service,
        sink: &mut Sink<'_>,
    ) -> CodegenResult<()> {
        let doc = service_form(def, &program.info)?;
        sink.write_form(Stream::Types, &doc)?;
        Ok(())
    }

    fn emit_const(&self, program: &Program, def: &Const, sink: &mut Sink<'_>) -> CodegenResult<()> {
        let value = render_const(&def.ty, &def.value, &program.info)?;
        let doc = Doc::concat([
            Doc::text(format!("(thrift:def-constant {} ", symbol(&def.name))),
            value,
            ")".into(),
        ]);
        sink.write_form(Stream::Vars, &doc)?;
        Ok(())
    }
}

fn header(package: &str) -> Doc {
    let lines = [
        format!(";;; -*- Package: {package} -*-"),
        ";;;".to_string(),
        ";;; Autogenerated by Thrift".to_string(),
        ";;; DO NOT EDIT UNLESS YOU ARE SURE THAT YOU KNOW WHAT YOU ARE DOING".to_string(),
    ];
    Doc::join(lines.into_iter().map(Doc::text), Doc::line())
}

/// `(thrift:def-package :<package>)`, with a `:use` clause naming the package
/// of every included program.
///
/// Each package is used once, in include order. The program's own package is
/// never listed.
fn package_def(program: &Program) -> Doc {
    let package = package_of(&program.info);
    let mut used: Vec<&str> = Vec::new();
    for include in &program.includes {
        let other = package_of(include);
        if other != package && !used.contains(&other) {
            used.push(other);
        }
    }
    if used.is_empty() {
        return Doc::text(format!("(thrift:def-package :{package})"));
    }
    let used = used
        .iter()
        .map(|p| format!(":{p}"))
        .collect::<Vec<_>>()
        .join(" ");
    Doc::text(format!("(thrift:def-package :{package} :use ({used}))"))
}

fn enum_form(def: &EnumDef) -> Doc {
    let pairs = def
        .resolved_values()
        .into_iter()
        .map(|(label, value)| Doc::text(format!("({} . {value})", symbol(label))));
    Doc::concat([
        Doc::text(format!("(thrift:def-enum {}", symbol(&def.name))),
        Doc::concat([
            Doc::line(),
            "(".into(),
            Doc::join(pairs, Doc::line()).align(),
            ")".into(),
        ])
        .indent(),
        ")".into(),
    ])
}
