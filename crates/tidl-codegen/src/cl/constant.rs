//! Constant literals, rendered against their declared type.

use tidl_types::ast::{ProgramInfo, StructDef};
use tidl_types::{BaseType, ConstValue, Type};
use tracing::trace;

use super::names::record_name;
use super::structs::RecordKind;
use crate::doc::Doc;
use crate::error::{CodegenError, CodegenResult};

/// Render `value` as a literal of type `ty`.
///
/// Containers and records print as a head form with one entry per line,
/// nested one level deeper than the head; nested values nest further.
pub fn render_const(ty: &Type, value: &ConstValue, current: &ProgramInfo) -> CodegenResult<Doc> {
    let ty = ty.true_type();
    trace!(%ty, kind = value.kind_name(), "rendering constant");
    match ty {
        Type::Base(base) => render_base(*base, ty, value).map(Doc::text),
        Type::Enum(_) => match value {
            ConstValue::Integer(i) => Ok(Doc::text(i.to_string())),
            other => Err(shape_error(ty, other)),
        },
        Type::Struct(def) => render_record(def, RecordKind::Struct, ty, value, current),
        Type::Exception(def) => render_record(def, RecordKind::Exception, ty, value, current),
        Type::Map(key_ty, val_ty) => {
            let ConstValue::Map(entries) = value else {
                return Err(shape_error(ty, value));
            };
            let entries = entries
                .iter()
                .map(|(key, val)| -> CodegenResult<Doc> {
                    Ok(Doc::concat([
                        "(cl:cons ".into(),
                        render_const(key_ty, key, current)?,
                        " ".into(),
                        render_const(val_ty, val, current)?,
                        ")".into(),
                    ]))
                })
                .collect::<CodegenResult<Vec<_>>>()?;
            Ok(composite("thrift:map", entries))
        }
        Type::List(elem) => render_sequence("thrift:list", elem, ty, value, current),
        Type::Set(elem) => render_sequence("thrift:set", elem, ty, value, current),
        other => Err(CodegenError::UnsupportedType(other.to_string())),
    }
}

fn render_base(base: BaseType, ty: &Type, value: &ConstValue) -> CodegenResult<String> {
    match (base, value) {
        (BaseType::Void, _) => Err(CodegenError::UnsupportedType(base.to_string())),
        (BaseType::String, ConstValue::Str(s)) => Ok(quote_string(s)),
        (BaseType::Bool, ConstValue::Integer(i)) => {
            Ok(if *i > 0 { "t" } else { "nil" }.to_string())
        }
        (base, ConstValue::Integer(i)) if base.is_integral() => Ok(i.to_string()),
        (BaseType::Double, ConstValue::Integer(i)) => Ok(i.to_string()),
        (BaseType::Double, ConstValue::Double(d)) if d.is_finite() => Ok(double_literal(*d)),
        _ => Err(shape_error(ty, value)),
    }
}

/// A double-float literal: the shortest decimal that reads back as `d`,
/// always carrying a `d` exponent marker (`2.5d0`, `1d100`).
fn double_literal(d: f64) -> String {
    let text = format!("{d:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => format!("{mantissa}d{exponent}"),
        None => format!("{text}d0"),
    }
}

fn render_sequence(
    head: &str,
    elem: &Type,
    ty: &Type,
    value: &ConstValue,
    current: &ProgramInfo,
) -> CodegenResult<Doc> {
    let ConstValue::List(items) = value else {
        return Err(shape_error(ty, value));
    };
    let entries = items
        .iter()
        .map(|item| render_const(elem, item, current))
        .collect::<CodegenResult<Vec<_>>>()?;
    Ok(composite(head, entries))
}

/// Struct literals are maps from field name to field value; the value of
/// each entry is rendered against the type of the field it names.
fn render_record(
    def: &StructDef,
    kind: RecordKind,
    ty: &Type,
    value: &ConstValue,
    current: &ProgramInfo,
) -> CodegenResult<Doc> {
    let ConstValue::Map(entries) = value else {
        return Err(shape_error(ty, value));
    };
    let entries = entries
        .iter()
        .map(|(key, val)| -> CodegenResult<Doc> {
            let Some(name) = key.as_str() else {
                return Err(CodegenError::ConstantShape {
                    expected: "field name".to_string(),
                    found: key.kind_name(),
                });
            };
            let field = def.field_named(name).ok_or_else(|| CodegenError::UnknownField {
                record: def.name.clone(),
                field: name.to_string(),
            })?;
            Ok(Doc::concat([
                Doc::text(format!(":{name} ")),
                render_const(&field.ty, val, current)?,
            ]))
        })
        .collect::<CodegenResult<Vec<_>>>()?;
    let head = format!("{} '{}", kind.literal_form(), record_name(def, current));
    Ok(composite(head, entries))
}

/// `(head` followed by each entry on its own line, one level deeper, then
/// `)`. With no entries this is just `(head)`.
fn composite(head: impl Into<Doc>, entries: Vec<Doc>) -> Doc {
    let body = entries.into_iter().flat_map(|entry| [Doc::line(), entry]);
    Doc::concat([
        "(".into(),
        head.into(),
        Doc::concat(body).indent(),
        ")".into(),
    ])
}

fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn shape_error(ty: &Type, value: &ConstValue) -> CodegenError {
    CodegenError::ConstantShape {
        expected: ty.to_string(),
        found: value.kind_name(),
    }
}
