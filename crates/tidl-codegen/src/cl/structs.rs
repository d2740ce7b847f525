//! Struct and exception declarations, and the field lists they share with
//! service exception clauses.

use tidl_types::ast::{Field, ProgramInfo, StructDef};

use super::constant::render_const;
use super::names::{docstring, record_name, symbol};
use super::typespec::typespec;
use crate::doc::Doc;
use crate::error::CodegenResult;

/// The two record flavours. They differ only in the forms that declare and
/// construct them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Struct,
    Exception,
}

impl RecordKind {
    pub fn define_form(self) -> &'static str {
        match self {
            RecordKind::Struct => "thrift:def-struct",
            RecordKind::Exception => "thrift:def-exception",
        }
    }

    pub fn literal_form(self) -> &'static str {
        match self {
            RecordKind::Struct => "make-instance",
            RecordKind::Exception => "make-exception",
        }
    }
}

/// `(thrift:def-struct "name"` with the docstring, if any, and the field list
/// on the following lines.
pub fn record_form(def: &StructDef, kind: RecordKind, current: &ProgramInfo) -> CodegenResult<Doc> {
    let mut body = Vec::new();
    if let Some(doc) = &def.doc {
        body.push(Doc::line());
        body.push(Doc::text(format!("\"{}\"", docstring(doc))));
    }
    body.push(Doc::line());
    body.push(field_list(&def.fields, current)?);

    Ok(Doc::concat([
        Doc::text(format!(
            "({} {}",
            kind.define_form(),
            symbol(&record_name(def, current))
        )),
        Doc::concat(body).indent(),
        ")".into(),
    ]))
}

/// A parenthesized list of field entries, one per line, aligned under the
/// first.
pub fn field_list(fields: &[Field], current: &ProgramInfo) -> CodegenResult<Doc> {
    let entries = fields
        .iter()
        .map(|field| field_entry(field, current))
        .collect::<CodegenResult<Vec<_>>>()?;
    Ok(Doc::concat([
        "(".into(),
        Doc::join(entries, Doc::line()).align(),
        ")".into(),
    ]))
}

/// `("name" <default|nil> :type <typespec> :id <id>[ :documentation "..."])`
fn field_entry(field: &Field, current: &ProgramInfo) -> CodegenResult<Doc> {
    let default = match &field.default {
        Some(value) => render_const(&field.ty, value, current)?,
        None => Doc::text("nil"),
    };
    let mut parts = vec![
        Doc::text(format!("({} ", symbol(&field.name))),
        default,
        Doc::text(format!(
            " :type {} :id {}",
            typespec(&field.ty, current)?,
            field.id
        )),
    ];
    if let Some(doc) = &field.doc {
        parts.push(Doc::text(format!(" :documentation \"{}\"", docstring(doc))));
    }
    parts.push(")".into());
    Ok(Doc::concat(parts))
}
