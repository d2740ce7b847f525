//! End-to-end pipeline tests.
//!
//! Tests verify the full pipeline: program → registry → generator → files on
//! disk, the result report, and error scenarios.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indoc::indoc;
use tidl_codegen::{ClGenerator, CodegenError};
use tidl_compiler::{generate, generate_with, Config, FileKind, GenerateError, GenerateResult};
use tidl_types::ast::{Const, Definition, Field, Program, ProgramInfo, StructDef};
use tidl_types::{BaseType, ConstValue, Type};

// ══════════════════════════════════════════════════════════════════════════════
// Programs
// ══════════════════════════════════════════════════════════════════════════════

const TUTORIAL_JSON: &str = indoc! {r#"
    {
      "info": { "name": "tutorial", "namespaces": { "cl": "tutorial" } },
      "includes": [ { "name": "shared", "namespaces": { "cl": "shared" } } ],
      "definitions": [
        { "typedef": { "name": "MyInteger", "target": { "base": "i32" } } },
        { "const": { "name": "INT32CONSTANT", "type": { "base": "i32" }, "value": { "integer": 9853 } } },
        { "enum": {
            "name": "Operation",
            "values": [
              { "name": "ADD", "value": 1 },
              { "name": "SUBTRACT" }
            ]
        } },
        { "struct": {
            "name": "Work",
            "fields": [
              { "id": 1, "name": "num1", "type": { "base": "i32" }, "default": { "integer": 0 } },
              { "id": 2, "name": "comment", "type": { "base": "string" } }
            ]
        } }
      ]
    }
"#};

fn tutorial() -> Program {
    Program::from_json(TUTORIAL_JSON).unwrap()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()))
}

// ══════════════════════════════════════════════════════════════════════════════
// Files on disk
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_generate_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_out_dir(dir.path());
    let result = generate(&tutorial(), &config).unwrap();

    let gen_dir = dir.path().join("gen-cl");
    assert!(gen_dir.is_dir());
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.files[0].kind, FileKind::Types);
    assert_eq!(result.files[0].path, gen_dir.join("tutorial-types.lisp"));
    assert_eq!(result.files[1].kind, FileKind::Vars);
    assert_eq!(result.files[1].path, gen_dir.join("tutorial-vars.lisp"));
    assert_eq!(result.generator, "cl");
    assert_eq!(result.program, "tutorial");
}

#[test]
fn test_generated_contents() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate(&tutorial(), &Config::default().with_out_dir(dir.path())).unwrap();

    assert_eq!(
        read(&result.files[0].path),
        indoc! {r#"
            ;;; -*- Package: tutorial -*-
            ;;;
            ;;; Autogenerated by Thrift
            ;;; DO NOT EDIT UNLESS YOU ARE SURE THAT YOU KNOW WHAT YOU ARE DOING

            (thrift:def-package :tutorial :use (:shared))

            (in-package :tutorial)

            (thrift:def-enum "Operation"
              (("ADD" . 1)
               ("SUBTRACT" . 2)))

            (thrift:def-struct "work"
              (("num1" 0 :type i32 :id 1)
               ("comment" nil :type string :id 2)))

        "#}
    );
    assert_eq!(
        read(&result.files[1].path),
        indoc! {r#"
            ;;; -*- Package: tutorial -*-
            ;;;
            ;;; Autogenerated by Thrift
            ;;; DO NOT EDIT UNLESS YOU ARE SURE THAT YOU KNOW WHAT YOU ARE DOING

            (in-package :tutorial)

            (thrift:def-constant "INT32CONSTANT" 9853)

        "#}
    );
}

#[test]
fn test_report_sizes_and_digests() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate(&tutorial(), &Config::default().with_out_dir(dir.path())).unwrap();
    for file in &result.files {
        let contents = fs::read(&file.path).unwrap();
        assert_eq!(file.bytes, contents.len() as u64);
        assert_eq!(file.sha256.len(), 64);
        assert!(file.sha256.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
    assert_ne!(result.files[0].sha256, result.files[1].sha256);
}

#[test]
fn test_generate_with_explicit_generator() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate_with(&tutorial(), &ClGenerator::new(), dir.path()).unwrap();
    assert!(dir.path().join("gen-cl/tutorial-types.lisp").is_file());
    assert!(dir.path().join("gen-cl/tutorial-vars.lisp").is_file());
    assert_eq!(result.generator, "cl");
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let gen_dir = dir.path().join("gen-cl");
    fs::create_dir_all(&gen_dir).unwrap();
    fs::write(gen_dir.join("tutorial-vars.lisp"), "stale contents that are longer").unwrap();

    let result = generate(&tutorial(), &Config::default().with_out_dir(dir.path())).unwrap();
    let vars = read(&result.files[1].path);
    assert!(!vars.contains("stale"));
    assert!(vars.starts_with(";;; -*- Package: tutorial -*-"));
}

#[test]
fn test_result_json_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate(&tutorial(), &Config::default().with_out_dir(dir.path())).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains(r#""kind":"types""#));
    let rt: GenerateResult = serde_json::from_str(&json).unwrap();
    assert_eq!(rt, result);
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_repeated_runs_produce_identical_digests() {
    let program = tutorial();
    let first_dir = tempfile::tempdir().unwrap();
    let first = generate(&program, &Config::default().with_out_dir(first_dir.path())).unwrap();
    for i in 0..20 {
        let dir = tempfile::tempdir().unwrap();
        let again = generate(&program, &Config::default().with_out_dir(dir.path())).unwrap();
        for (a, b) in first.files.iter().zip(&again.files) {
            assert_eq!(a.sha256, b.sha256, "Determinism failure at iteration {i}");
            assert_eq!(a.bytes, b.bytes);
        }
    }
}

#[test]
fn test_json_and_built_programs_agree() {
    let info = Arc::new(ProgramInfo::new("tutorial").with_namespace("cl", "tutorial"));
    let work = StructDef::new("Work")
        .in_program(info.clone())
        .field(Field::new(1, "num1", BaseType::I32).with_default(0.into()))
        .field(Field::new(2, "comment", BaseType::String));
    let built = Program {
        info: info.clone(),
        includes: vec![Arc::new(
            ProgramInfo::new("shared").with_namespace("cl", "shared"),
        )],
        definitions: Vec::new(),
    }
    .define(tidl_types::ast::Typedef::new("MyInteger", BaseType::I32))
    .define(Const::new("INT32CONSTANT", BaseType::I32, 9853.into()))
    .define(
        tidl_types::ast::EnumDef::new("Operation")
            .value("ADD", Some(1))
            .value("SUBTRACT", None),
    )
    .define(Definition::Struct(Arc::new(work)));

    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let from_json = generate(&tutorial(), &Config::default().with_out_dir(a.path())).unwrap();
    let from_code = generate(&built, &Config::default().with_out_dir(b.path())).unwrap();
    assert_eq!(from_json.files[0].sha256, from_code.files[0].sha256);
    assert_eq!(from_json.files[1].sha256, from_code.files[1].sha256);
}

// ══════════════════════════════════════════════════════════════════════════════
// Errors
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_unknown_generator_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default()
        .with_out_dir(dir.path())
        .with_generator("cobol");
    let err = generate(&tutorial(), &config).unwrap_err();
    assert!(matches!(err, GenerateError::UnknownGenerator(ref id) if id == "cobol"));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_codegen_error_propagates() {
    let point = Arc::new(StructDef::new("Point").field(Field::new(1, "x", BaseType::I32)));
    let program = Program::new(ProgramInfo::new("broken")).define(Const::new(
        "P",
        Type::Struct(point),
        ConstValue::map([("y".into(), 1.into())]),
    ));
    let dir = tempfile::tempdir().unwrap();
    let err = generate(&program, &Config::default().with_out_dir(dir.path())).unwrap_err();
    assert!(
        matches!(err, GenerateError::Codegen(CodegenError::UnknownField { .. })),
        "{err}"
    );
    assert_eq!(err.to_string(), "type error: Point has no field y");
}

#[test]
fn test_unwritable_output_root_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();
    let err = generate(&tutorial(), &Config::default().with_out_dir(&blocker)).unwrap_err();
    match err {
        GenerateError::Io { path, .. } => assert_eq!(path, blocker.join("gen-cl")),
        other => panic!("expected Io error, got {other}"),
    }
}

#[test]
fn test_config_file_drives_generation() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("tidl.json");
    let out = dir.path().join("out");
    fs::write(
        &config_path,
        serde_json::json!({ "outDir": out, "generator": "cl" }).to_string(),
    )
    .unwrap();
    let config = Config::load(&config_path).unwrap();
    let result = generate(&tutorial(), &config).unwrap();
    assert!(result.files[0].path.starts_with(out.join("gen-cl")));
}
