//! Recipe evaluation.
//!
//! Evaluation snapshots a recipe plus the selected build system into one
//! serializable record. The record is what the external build tool
//! consumes, whether printed (`inspect --json`) or written to the build
//! folder (`emit`).

use std::collections::HashMap;

use anyhow::{Context, Result};
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::core::layout::Folders;
use crate::core::recipe::{OptionValue, Recipe, Requirement};
use crate::core::settings::SettingsAxis;
use crate::generator::{BuildSystem, Generator};

/// Snapshot of an evaluated recipe.
///
/// Field order keeps plain values ahead of tables so the record
/// serializes cleanly as TOML as well as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedRecipe {
    /// Package name
    pub name: String,

    /// Package version
    pub version: Version,

    /// Selected build system
    pub build_system: BuildSystem,

    /// Declared settings axes
    pub settings: Vec<SettingsAxis>,

    /// Selected generator pair
    pub generators: [Generator; 2],

    /// Dependency requirements
    pub requires: Vec<Requirement>,

    /// Default option values
    pub default_options: HashMap<String, OptionValue>,

    /// Folder assignment from the layout hook
    pub folders: Folders,
}

/// Evaluate a recipe for the selected build system.
///
/// The only failure path is a version string that does not parse as
/// semver, which cannot happen for the shipped template.
pub fn evaluate(recipe: &dyn Recipe, build_system: BuildSystem) -> Result<EvaluatedRecipe> {
    let version: Version = recipe.version().parse().with_context(|| {
        format!(
            "invalid version `{}` in recipe `{}`",
            recipe.version(),
            recipe.name()
        )
    })?;

    let mut folders = Folders::default();
    recipe.layout(&mut folders);

    Ok(EvaluatedRecipe {
        name: recipe.name().to_string(),
        version,
        build_system,
        settings: recipe.settings().to_vec(),
        generators: recipe.generators(build_system),
        requires: recipe.requires(),
        default_options: recipe.default_options(),
        folders,
    })
}
