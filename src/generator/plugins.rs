//! Generator plugin names.

use serde::{Deserialize, Serialize};

use crate::generator::build_system::BuildSystem;

/// A generator plugin: emits build-system-specific toolchain or dependency
/// files from package metadata. The names match what the external
/// packaging tool expects, so they serialize verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generator {
    /// Emits the CMake toolchain file
    CMakeToolchain,
    /// Emits CMake find-package files for dependencies
    CMakeDeps,
    /// Emits the Bazel toolchain configuration
    BazelToolchain,
    /// Emits Bazel repository rules for dependencies
    BazelDeps,
}

impl Generator {
    /// Get the generator name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Generator::CMakeToolchain => "CMakeToolchain",
            Generator::CMakeDeps => "CMakeDeps",
            Generator::BazelToolchain => "BazelToolchain",
            Generator::BazelDeps => "BazelDeps",
        }
    }

    /// The build-system family this generator belongs to.
    pub fn build_system(&self) -> BuildSystem {
        match self {
            Generator::CMakeToolchain | Generator::CMakeDeps => BuildSystem::CMake,
            Generator::BazelToolchain | Generator::BazelDeps => BuildSystem::Bazel,
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
