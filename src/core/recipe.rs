//! Recipe trait definition and supporting types.
//!
//! A recipe is the package descriptor: identity, settings surface,
//! dependency requirements, generator selection, layout, and build hooks.
//! Only identity and layout are required; everything else defaults to the
//! empty template behavior and exists as an extension point.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use semver::Version;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::layout::Folders;
use crate::core::settings::SettingsAxis;
use crate::generator::{BuildSystem, Generator};

/// A package recipe.
///
/// Implementations declare identity and layout. The remaining methods are
/// extension points with empty defaults: the shipped template has no
/// dependencies, no options, no build requirements, and a build step that
/// performs no action.
pub trait Recipe {
    /// Package name.
    fn name(&self) -> &str;

    /// Package version (semantic-version string).
    fn version(&self) -> &str;

    /// Settings axes consumed by the external packaging tool.
    fn settings(&self) -> &[SettingsAxis] {
        &SettingsAxis::ALL
    }

    /// Dependency requirements. Empty by default.
    fn requires(&self) -> Vec<Requirement> {
        Vec::new()
    }

    /// Default option values. Empty by default.
    fn default_options(&self) -> HashMap<String, OptionValue> {
        HashMap::new()
    }

    /// Generator pair for the selected build system.
    fn generators(&self, build_system: BuildSystem) -> [Generator; 2] {
        build_system.generators()
    }

    /// Assign the source and build folders.
    fn layout(&self, folders: &mut Folders);

    /// Pre-build tool requirements. Empty by default.
    fn build_requirements(&self) -> Vec<Requirement> {
        Vec::new()
    }

    /// The build step. A no-op by default: compilation is driven by the
    /// selected build system outside slipway.
    fn build(&self, _ctx: &BuildContext) -> Result<()> {
        Ok(())
    }
}

/// A dependency requirement: package name plus exact version reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Package name
    pub name: String,

    /// Referenced version
    pub version: Version,
}

impl Requirement {
    /// Create a new requirement.
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Requirement {
            name: name.into(),
            version,
        }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

impl std::str::FromStr for Requirement {
    type Err = RequirementParseError;

    /// Parse a `name/version` reference, e.g. `zlib/1.3.1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, version) = s
            .split_once('/')
            .ok_or_else(|| RequirementParseError::MissingSeparator(s.to_string()))?;

        if name.is_empty() {
            return Err(RequirementParseError::MissingSeparator(s.to_string()));
        }

        let version = version
            .parse()
            .map_err(|_| RequirementParseError::InvalidVersion {
                reference: s.to_string(),
                version: version.to_string(),
            })?;

        Ok(Requirement {
            name: name.to_string(),
            version,
        })
    }
}

/// Error returned when parsing an invalid dependency reference.
#[derive(Debug, Clone, Error)]
pub enum RequirementParseError {
    #[error("invalid requirement '{0}', expected `name/version`")]
    MissingSeparator(String),

    #[error("invalid version `{version}` in requirement '{reference}'")]
    InvalidVersion { reference: String, version: String },
}

/// An option value: boolean toggle or free-form string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Context passed to the build hook.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Project root directory
    pub project_root: PathBuf,

    /// Folder assignment from the layout hook
    pub folders: Folders,

    /// Selected build system
    pub build_system: BuildSystem,

    /// Verbose output
    pub verbose: bool,
}

impl BuildContext {
    /// Create a new build context.
    pub fn new(project_root: PathBuf, folders: Folders, build_system: BuildSystem) -> Self {
        BuildContext {
            project_root,
            folders,
            build_system,
            verbose: false,
        }
    }

    /// Set verbose mode.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Resolve the build output directory against the project root.
    pub fn build_dir(&self) -> PathBuf {
        self.folders.build_dir(&self.project_root)
    }
}
