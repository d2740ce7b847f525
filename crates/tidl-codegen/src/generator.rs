//! The capability interface every backend implements.

use tidl_types::ast::{Const, Definition, EnumDef, Program, Service, StructDef, Typedef};
use tracing::debug;

use crate::error::CodegenResult;
use crate::sink::Sink;

/// A code generator backend.
///
/// Every method receives the program being generated and the sink to write
/// to; backends keep no per-run state of their own. The driver calls
/// [`Generator::init`] once, one `emit_*` method per top-level declaration in
/// source order, then [`Generator::close`] once. [`generate_program`] does
/// exactly that.
pub trait Generator {
    /// Target-language tag, as used in `namespace <lang> ...` annotations.
    fn language(&self) -> &'static str;

    /// Extension of the generated files, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Name of the directory the generated files go in.
    fn out_dir_name(&self) -> String {
        format!("gen-{}", self.language())
    }

    /// Write file headers and namespace declarations.
    fn init(&self, program: &Program, sink: &mut Sink<'_>) -> CodegenResult<()>;

    fn emit_typedef(
        &self,
        program: &Program,
        def: &Typedef,
        sink: &mut Sink<'_>,
    ) -> CodegenResult<()>;

    fn emit_enum(&self, program: &Program, def: &EnumDef, sink: &mut Sink<'_>) -> CodegenResult<()>;

    fn emit_struct(
        &self,
        program: &Program,
        def: &StructDef,
        sink: &mut Sink<'_>,
    ) -> CodegenResult<()>;

    fn emit_exception(
        &self,
        program: &Program,
        def: &StructDef,
        sink: &mut Sink<'_>,
    ) -> CodegenResult<()>;

    fn emit_service(
        &self,
        program: &Program,
        def: &Service,
        sink: &mut Sink<'_>,
    ) -> CodegenResult<()>;

    fn emit_const(&self, program: &Program, def: &Const, sink: &mut Sink<'_>) -> CodegenResult<()>;

    /// Finish the run. The default flushes both streams.
    fn close(&self, _program: &Program, sink: &mut Sink<'_>) -> CodegenResult<()> {
        sink.flush()?;
        Ok(())
    }
}

/// Run `generator` over every declaration of `program`, in source order.
///
/// Stops at the first error; whatever was written so far stays in the sink.
pub fn generate_program(
    generator: &dyn Generator,
    program: &Program,
    sink: &mut Sink<'_>,
) -> CodegenResult<()> {
    generator.init(program, sink)?;
    for definition in &program.definitions {
        debug!(
            kind = definition.keyword(),
            name = definition.name(),
            "emitting declaration"
        );
        match definition {
            Definition::Typedef(def) => generator.emit_typedef(program, def, sink)?,
            Definition::Enum(def) => generator.emit_enum(program, def, sink)?,
            Definition::Struct(def) => generator.emit_struct(program, def, sink)?,
            Definition::Exception(def) => generator.emit_exception(program, def, sink)?,
            Definition::Service(def) => generator.emit_service(program, def, sink)?,
            Definition::Const(def) => generator.emit_const(program, def, sink)?,
        }
    }
    generator.close(program, sink)
}
