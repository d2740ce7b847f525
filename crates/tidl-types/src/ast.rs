//! AST node types for Thrift IDL programs.
//!
//! Named declarations are shared through [`Arc`]: a struct referenced from
//! many fields, or from another program, is a single node. Every named
//! declaration remembers the [`ProgramInfo`] of the program that declared it
//! so generators can qualify cross-program references.
//! Declaration lists keep source order.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{ConstValue, Type};

// ══════════════════════════════════════════════════════════════════════════════
// Programs
// ══════════════════════════════════════════════════════════════════════════════

/// The identity of a program: its name plus `namespace <lang> <ns>` annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramInfo {
    pub name: String,
    /// Target-language tag → namespace.
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,
}

impl ProgramInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespaces: BTreeMap::new(),
        }
    }

    /// Add a `namespace <lang> <ns>` annotation.
    pub fn with_namespace(mut self, lang: impl Into<String>, ns: impl Into<String>) -> Self {
        self.namespaces.insert(lang.into(), ns.into());
        self
    }

    /// The namespace declared for `lang`. Empty annotations count as absent.
    pub fn namespace(&self, lang: &str) -> Option<&str> {
        self.namespaces
            .get(lang)
            .map(String::as_str)
            .filter(|ns| !ns.is_empty())
    }
}

/// A complete IDL program: identity, included programs, and top-level
/// declarations in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub info: Arc<ProgramInfo>,
    #[serde(default)]
    pub includes: Vec<Arc<ProgramInfo>>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl Program {
    pub fn new(info: ProgramInfo) -> Self {
        Self {
            info: Arc::new(info),
            includes: Vec::new(),
            definitions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Record an `include` of another program.
    pub fn include(mut self, program: Arc<ProgramInfo>) -> Self {
        self.includes.push(program);
        self
    }

    /// Append a top-level declaration.
    pub fn define(mut self, definition: impl Into<Definition>) -> Self {
        self.definitions.push(definition.into());
        self
    }

    /// Decode a program handed over by a front-end as JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Encode this program as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Definition {
    Typedef(Arc<Typedef>),
    Enum(Arc<EnumDef>),
    Struct(Arc<StructDef>),
    Exception(Arc<StructDef>),
    Service(Arc<Service>),
    Const(Const),
}

impl Definition {
    /// The declared name.
    pub fn name(&self) -> &str {
        match self {
            Definition::Typedef(def) => &def.name,
            Definition::Enum(def) => &def.name,
            Definition::Struct(def) | Definition::Exception(def) => &def.name,
            Definition::Service(def) => &def.name,
            Definition::Const(def) => &def.name,
        }
    }

    /// The declaration keyword, for logs and diagnostics.
    pub fn keyword(&self) -> &'static str {
        match self {
            Definition::Typedef(_) => "typedef",
            Definition::Enum(_) => "enum",
            Definition::Struct(_) => "struct",
            Definition::Exception(_) => "exception",
            Definition::Service(_) => "service",
            Definition::Const(_) => "const",
        }
    }
}

impl From<Typedef> for Definition {
    fn from(def: Typedef) -> Self {
        Definition::Typedef(Arc::new(def))
    }
}

impl From<EnumDef> for Definition {
    fn from(def: EnumDef) -> Self {
        Definition::Enum(Arc::new(def))
    }
}

impl From<Service> for Definition {
    fn from(def: Service) -> Self {
        Definition::Service(Arc::new(def))
    }
}

impl From<Const> for Definition {
    fn from(def: Const) -> Self {
        Definition::Const(def)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Typedefs
// ══════════════════════════════════════════════════════════════════════════════

/// `typedef <target> Name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typedef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<Arc<ProgramInfo>>,
    pub target: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Typedef {
    pub fn new(name: impl Into<String>, target: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            program: None,
            target: target.into(),
            doc: None,
        }
    }

    pub fn in_program(mut self, program: Arc<ProgramInfo>) -> Self {
        self.program = Some(program);
        self
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Enums
// ══════════════════════════════════════════════════════════════════════════════

/// `enum Name { LABEL [= value], ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<Arc<ProgramInfo>>,
    #[serde(default)]
    pub values: Vec<EnumValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

/// One enum label with its optional explicit value.
///
/// Explicit values are 32-bit, as on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

impl EnumDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            program: None,
            values: Vec::new(),
            doc: None,
        }
    }

    pub fn in_program(mut self, program: Arc<ProgramInfo>) -> Self {
        self.program = Some(program);
        self
    }

    /// Append a label; `None` continues numbering from the previous label.
    pub fn value(mut self, name: impl Into<String>, value: Option<i32>) -> Self {
        self.values.push(EnumValue {
            name: name.into(),
            value,
        });
        self
    }

    /// Labels paired with their numeric values.
    ///
    /// Numbering starts at 0. An explicit value resets the counter; an
    /// unnumbered label takes the previous value plus one. Counting continues
    /// past `i32::MAX` rather than wrapping.
    pub fn resolved_values(&self) -> Vec<(&str, i64)> {
        let mut next: i64 = -1;
        self.values
            .iter()
            .map(|v| {
                next = v.value.map_or(next + 1, i64::from);
                (v.name.as_str(), next)
            })
            .collect()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Structs & Exceptions
// ══════════════════════════════════════════════════════════════════════════════

/// The body shared by `struct` and `exception` declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<Arc<ProgramInfo>>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl StructDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            program: None,
            fields: Vec::new(),
            doc: None,
        }
    }

    pub fn in_program(mut self, program: Arc<ProgramInfo>) -> Self {
        self.program = Some(program);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Look up a field by its declared name.
    pub fn field_named(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A field of a struct, exception, argument list or throws clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field id, unique within the owning field list.
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ConstValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Field {
    pub fn new(id: i32, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            id,
            name: name.into(),
            ty: ty.into(),
            default: None,
            doc: None,
        }
    }

    pub fn with_default(mut self, value: ConstValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Services
// ══════════════════════════════════════════════════════════════════════════════

/// `service Name [extends Base] { functions... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<Arc<ProgramInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<Arc<Service>>,
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            program: None,
            extends: None,
            functions: Vec::new(),
            doc: None,
        }
    }

    pub fn in_program(mut self, program: Arc<ProgramInfo>) -> Self {
        self.program = Some(program);
        self
    }

    pub fn extends(mut self, base: Arc<Service>) -> Self {
        self.extends = Some(base);
        self
    }

    pub fn function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A remote method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Field>,
    pub returns: Type,
    /// The `throws (...)` clause.
    #[serde(default)]
    pub exceptions: Vec<Field>,
    /// `oneway` methods expect no reply.
    #[serde(default)]
    pub oneway: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Function {
    pub fn new(name: impl Into<String>, returns: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            returns: returns.into(),
            exceptions: Vec::new(),
            oneway: false,
            doc: None,
        }
    }

    pub fn arg(mut self, field: Field) -> Self {
        self.args.push(field);
        self
    }

    pub fn throws(mut self, field: Field) -> Self {
        self.exceptions.push(field);
        self
    }

    pub fn oneway(mut self) -> Self {
        self.oneway = true;
        self
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Constants
// ══════════════════════════════════════════════════════════════════════════════

/// `const <type> NAME = <value>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Const {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub value: ConstValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>, value: ConstValue) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value,
            doc: None,
        }
    }
}
