//! Validation and file writing for generated code.
//!
//! ## Safety Guarantees
//!
//! - **Validation**: Every generated Rust file is parsed with `syn` before
//!   anything is written
//! - **All or nothing**: [`write_files`] is only reached once every service
//!   has been rendered and validated
//! - **Atomic writes**: Each file is written through a temp file + rename

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use quote::quote;
use tracing::{debug, info};

use crate::errors::GeneratorError;

/// One rendered file, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Validates that a token stream forms a syntactically valid Rust file.
///
/// ## Errors
///
/// Returns `GeneratorError::InvalidGeneratedCode` if the tokens don't parse.
pub fn validate_code(file: &str, tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone()).map_err(|e| GeneratorError::InvalidGeneratedCode {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

/// Validates that rendered source text is a syntactically valid Rust file.
///
/// ## Errors
///
/// Returns `GeneratorError::InvalidGeneratedCode` with the parser's message
/// and location if the source doesn't parse.
pub fn validate_source(file: &str, source: &str) -> Result<(), GeneratorError> {
    syn::parse_file(source)
        .map(|_| ())
        .map_err(|e| {
            let start = e.span().start();
            GeneratorError::InvalidGeneratedCode {
                file: file.to_string(),
                reason: format!("{e} (line {}, column {})", start.line, start.column),
            }
        })
}

/// Formats a parsed file with `prettyplease`, preceded by `banner`.
pub fn format_code(banner: &str, file: &syn::File) -> String {
    format!("{banner}\n\n{}", prettyplease::unparse(file))
}

/// Renders the root module of a service's model crate.
///
/// ## Errors
///
/// Returns `GeneratorError::InvalidGeneratedCode` if the module doesn't parse.
pub fn render_model_lib(banner: &str, base_name: &str) -> Result<String, GeneratorError> {
    let doc = format!(" Model types for the {base_name} service.");
    let tokens = quote! {
        #![doc = #doc]

        mod errors;

        pub use errors::*;
    };
    let file = validate_code("lib.rs", &tokens)?;
    Ok(format_code(banner, &file))
}

/// Writes content to a file atomically using a temp file + rename pattern.
///
/// Creates parent directories if they don't exist.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if directory creation, file writing,
/// or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Writes every file under `root`.
///
/// ## Errors
///
/// Returns the first `GeneratorError::WriteError` encountered.
pub fn write_files(root: &Path, files: &[GeneratedFile]) -> Result<(), GeneratorError> {
    for file in files {
        let path = root.join(&file.path);
        debug!(path = %path.display(), bytes = file.content.len(), "writing file");
        write_atomic(&path, &file.content)?;
    }
    info!(count = files.len(), root = %root.display(), "wrote generated files");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn validate_source_accepts_valid_code() {
        assert!(validate_source("lib.rs", "pub struct Client;\n").is_ok());
    }

    #[test]
    fn validate_source_reports_location() {
        let result = validate_source("lib.rs", "pub struct Client {\n    field: \n}\n");

        match result {
            Err(GeneratorError::InvalidGeneratedCode { file, reason }) => {
                assert_eq!(file, "lib.rs");
                assert!(reason.contains("line"), "reason should carry a location: {reason}");
            }
            other => panic!("expected InvalidGeneratedCode, got {other:?}"),
        }
    }

    #[test]
    fn validate_code_rejects_invalid_tokens() {
        let tokens = quote! { let x = };
        assert!(validate_code("lib.rs", &tokens).is_err());
    }

    #[test]
    fn model_lib_reexports_errors() {
        let lib = render_model_lib("// banner", "SimpleQueue").unwrap();

        assert!(lib.starts_with("// banner\n\n"));
        assert!(lib.contains("//! Model types for the SimpleQueue service."));
        assert!(lib.contains("mod errors;"));
        assert!(lib.contains("pub use errors::*;"));
    }

    #[test]
    fn write_atomic_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/lib.rs");

        write_atomic(&path, "content").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn write_files_places_files_under_root() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            GeneratedFile::new("Cargo.toml", "[workspace]\n"),
            GeneratedFile::new("s3-model/src/lib.rs", "mod errors;\n"),
        ];

        write_files(dir.path(), &files).unwrap();

        assert!(dir.path().join("Cargo.toml").exists());
        assert!(dir.path().join("s3-model/src/lib.rs").exists());
    }
}
