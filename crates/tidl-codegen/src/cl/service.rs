//! Service declarations.

use tidl_types::ast::{Field, Function, ProgramInfo, Service};

use super::names::{docstring, service_name, symbol};
use super::structs::field_list;
use super::typespec::typespec;
use crate::doc::Doc;
use crate::error::CodegenResult;

/// `(thrift:def-service "Name" <base|nil>` followed by the documentation
/// clause, if any, and one `(:method ...)` clause per function.
pub fn service_form(service: &Service, current: &ProgramInfo) -> CodegenResult<Doc> {
    let base = match &service.extends {
        Some(base) => symbol(&service_name(base, current)),
        None => "nil".to_string(),
    };

    let mut body = Vec::new();
    if let Some(doc) = &service.doc {
        body.push(Doc::line());
        body.push(Doc::text(format!("(:documentation \"{}\")", docstring(doc))));
    }
    for function in &service.functions {
        body.push(Doc::line());
        body.push(method_clause(function, current)?);
    }

    Ok(Doc::concat([
        Doc::text(format!(
            "(thrift:def-service {} {}",
            symbol(&service.name),
            base
        )),
        Doc::concat(body).indent(),
        ")".into(),
    ]))
}

fn method_clause(function: &Function, current: &ProgramInfo) -> CodegenResult<Doc> {
    let signature = format!(
        "(:method {} ({} {})",
        symbol(&function.name),
        argument_list(&function.args, current)?,
        typespec(&function.returns, current)?
    );

    let mut clauses = Vec::new();
    if !function.exceptions.is_empty() {
        clauses.push(Doc::line());
        clauses.push(Doc::text(" :exceptions "));
        clauses.push(field_list(&function.exceptions, current)?);
    }
    if function.oneway {
        clauses.push(Doc::line());
        clauses.push(Doc::text(" :oneway t"));
    }

    Ok(Doc::concat([
        Doc::text(signature),
        Doc::concat(clauses),
        ")".into(),
    ]))
}

/// `(("a" i32 1) ("b" i32 2))`, or `()` for no arguments.
fn argument_list(args: &[Field], current: &ProgramInfo) -> CodegenResult<String> {
    let args = args
        .iter()
        .map(|arg| -> CodegenResult<String> {
            Ok(format!(
                "({} {} {})",
                symbol(&arg.name),
                typespec(&arg.ty, current)?,
                arg.id
            ))
        })
        .collect::<CodegenResult<Vec<_>>>()?;
    Ok(format!("({})", args.join(" ")))
}
