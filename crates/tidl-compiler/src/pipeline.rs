//! Generation pipeline: resolve the generator, acquire output files, run,
//! report.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tidl_codegen::{generate_program, Generator, Sink};
use tidl_types::ast::Program;
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::GenerateError;
use crate::registry::GeneratorRegistry;

/// Which stream a generated file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Types,
    Vars,
}

impl FileKind {
    fn suffix(self) -> &'static str {
        match self {
            FileKind::Types => "types",
            FileKind::Vars => "vars",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub kind: FileKind,
    /// Size in bytes.
    pub bytes: u64,
    /// Lower-case hex SHA-256 of the file contents.
    pub sha256: String,
}

/// Report of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResult {
    pub generator: String,
    pub program: String,
    pub files: Vec<GeneratedFile>,
}

/// Run the generator named by `config` over `program`.
pub fn generate(program: &Program, config: &Config) -> Result<GenerateResult, GenerateError> {
    let generator = GeneratorRegistry::new().create(&config.generator)?;
    generate_with(program, generator.as_ref(), &config.out_dir)
}

/// Run `generator` over `program`, writing into `<out_root>/<generator dir>/`.
///
/// Output files are closed before this returns, whether or not generation
/// succeeded. Files from a failed run are left in place.
#[instrument(skip_all, fields(program = program.name(), generator = generator.language()))]
pub fn generate_with(
    program: &Program,
    generator: &dyn Generator,
    out_root: &Path,
) -> Result<GenerateResult, GenerateError> {
    let dir = out_root.join(generator.out_dir_name());
    fs::create_dir_all(&dir).map_err(|err| GenerateError::io(&dir, err))?;

    let path_for = |kind: FileKind| {
        dir.join(format!(
            "{}-{}.{}",
            program.name(),
            kind.suffix(),
            generator.file_extension()
        ))
    };
    let types_path = path_for(FileKind::Types);
    let vars_path = path_for(FileKind::Vars);

    {
        let mut sink = Sink::new(create(&types_path)?, create(&vars_path)?);
        generate_program(generator, program, &mut sink)?;
    }

    let files = vec![
        describe(types_path, FileKind::Types)?,
        describe(vars_path, FileKind::Vars)?,
    ];
    info!(
        types = %files[0].path.display(),
        vars = %files[1].path.display(),
        "generation complete"
    );
    Ok(GenerateResult {
        generator: generator.language().to_string(),
        program: program.name().to_string(),
        files,
    })
}

fn create(path: &Path) -> Result<BufWriter<File>, GenerateError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|err| GenerateError::io(path, err))
}

fn describe(path: PathBuf, kind: FileKind) -> Result<GeneratedFile, GenerateError> {
    let contents = fs::read(&path).map_err(|err| GenerateError::io(&path, err))?;
    Ok(GeneratedFile {
        bytes: contents.len() as u64,
        sha256: format!("{:x}", Sha256::digest(&contents)),
        path,
        kind,
    })
}
