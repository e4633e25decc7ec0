//! Recipe materialization.
//!
//! Emit applies the layout and writes the evaluated recipe into the build
//! folder, where the external build tool picks it up.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::recipe::Recipe;
use crate::generator::BuildSystem;
use crate::ops::evaluate::{evaluate, EvaluatedRecipe};

/// Serialization format for the emitted recipe file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmitFormat {
    /// JSON (default)
    #[default]
    Json,
    /// TOML
    Toml,
}

impl EmitFormat {
    /// Get the format name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmitFormat::Json => "json",
            EmitFormat::Toml => "toml",
        }
    }

    /// File name written into the build folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            EmitFormat::Json => "recipe.json",
            EmitFormat::Toml => "recipe.toml",
        }
    }
}

impl std::fmt::Display for EmitFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EmitFormat {
    type Err = EmitFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(EmitFormat::Json),
            "toml" => Ok(EmitFormat::Toml),
            _ => Err(EmitFormatParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid emit format.
#[derive(Debug, Clone, Error)]
#[error("invalid format '{0}', valid values: json, toml")]
pub struct EmitFormatParseError(pub String);

/// Options for the emit operation.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Project root the folders resolve against
    pub root: PathBuf,

    /// Output format
    pub format: EmitFormat,
}

impl EmitOptions {
    /// Create emit options for a project root.
    pub fn new(root: PathBuf) -> Self {
        EmitOptions {
            root,
            format: EmitFormat::default(),
        }
    }

    /// Set the output format.
    pub fn with_format(mut self, format: EmitFormat) -> Self {
        self.format = format;
        self
    }
}

/// Evaluate a recipe and write it into the build folder.
///
/// Returns the path of the written file.
pub fn emit(recipe: &dyn Recipe, build_system: BuildSystem, opts: &EmitOptions) -> Result<PathBuf> {
    let evaluated = evaluate(recipe, build_system)?;
    emit_evaluated(&evaluated, opts)
}

/// Write an already-evaluated recipe into the build folder.
pub fn emit_evaluated(evaluated: &EvaluatedRecipe, opts: &EmitOptions) -> Result<PathBuf> {
    let build_dir = evaluated.folders.build_dir(&opts.root);
    fs::create_dir_all(&build_dir)
        .with_context(|| format!("failed to create build folder: {}", build_dir.display()))?;

    let contents = match opts.format {
        EmitFormat::Json => serde_json::to_string_pretty(evaluated)
            .context("failed to serialize recipe as JSON")?,
        EmitFormat::Toml => {
            toml::to_string_pretty(evaluated).context("failed to serialize recipe as TOML")?
        }
    };

    let path = build_dir.join(opts.format.file_name());
    fs::write(&path, contents)
        .with_context(|| format!("failed to write recipe file: {}", path.display()))?;

    tracing::debug!(
        "wrote {} recipe for {} to {}",
        opts.format,
        evaluated.build_system,
        path.display()
    );

    Ok(path)
}
