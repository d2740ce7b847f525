//! Typespecs: the `:type` expressions of fields and method signatures.

use tidl_types::ast::ProgramInfo;
use tidl_types::Type;

use super::names::{record_name, symbol};
use crate::error::{CodegenError, CodegenResult};

/// The type expression for `ty`, with typedefs resolved first.
///
/// Base types become their keyword (`i32`, `string`, ...); containers and
/// user types become `(map k v)`, `(list e)`, `(set e)`, `(struct "name")`
/// and `(enum "Name")`.
pub fn typespec(ty: &Type, current: &ProgramInfo) -> CodegenResult<String> {
    match ty.true_type() {
        Type::Base(base) => Ok(base.name().to_string()),
        Type::Map(key, val) => Ok(format!(
            "(map {} {})",
            typespec(key, current)?,
            typespec(val, current)?
        )),
        Type::Struct(def) | Type::Exception(def) => {
            Ok(format!("(struct {})", symbol(&record_name(def, current))))
        }
        Type::List(elem) => Ok(format!("(list {})", typespec(elem, current)?)),
        Type::Set(elem) => Ok(format!("(set {})", typespec(elem, current)?)),
        Type::Enum(def) => Ok(format!("(enum {})", symbol(&def.name))),
        other => Err(CodegenError::UnsupportedType(other.to_string())),
    }
}
