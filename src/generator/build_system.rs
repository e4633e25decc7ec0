//! Build-system families and the environment toggle.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::plugins::Generator;

/// Environment variable consulted when no explicit build system is given.
pub const BUILD_SYSTEM_ENV: &str = "BUILD_SYSTEM";

/// A build-system family the template can target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    /// CMake-based builds (default)
    #[default]
    CMake,
    /// Bazel-based builds
    Bazel,
}

impl BuildSystem {
    /// Get the build-system name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildSystem::CMake => "cmake",
            BuildSystem::Bazel => "bazel",
        }
    }

    /// Select a build system from the environment toggle.
    ///
    /// Total over the toggle's whole string domain: exactly `bazel`
    /// (case-sensitive) selects Bazel, any other value including `None`
    /// falls through to CMake. Unrecognized values are never rejected.
    pub fn from_toggle(toggle: Option<&str>) -> Self {
        match toggle {
            Some("bazel") => BuildSystem::Bazel,
            _ => BuildSystem::CMake,
        }
    }

    /// Select a build system from `BUILD_SYSTEM`.
    pub fn from_env() -> Self {
        Self::from_toggle(env::var(BUILD_SYSTEM_ENV).ok().as_deref())
    }

    /// The generator pair for this build system, in emit order.
    pub fn generators(self) -> [Generator; 2] {
        match self {
            BuildSystem::CMake => [Generator::CMakeToolchain, Generator::CMakeDeps],
            BuildSystem::Bazel => [Generator::BazelToolchain, Generator::BazelDeps],
        }
    }
}

impl std::fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BuildSystem {
    type Err = BuildSystemParseError;

    /// Strict parse for explicit user input (e.g. a CLI flag). The
    /// environment toggle goes through [`BuildSystem::from_toggle`]
    /// instead, which never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cmake" => Ok(BuildSystem::CMake),
            "bazel" => Ok(BuildSystem::Bazel),
            _ => Err(BuildSystemParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid build system.
#[derive(Debug, Clone, Error)]
#[error("invalid build system '{0}', valid values: cmake, bazel")]
pub struct BuildSystemParseError(pub String);
