//! Command implementations

use anyhow::Result;
use slipway::BuildSystem;

pub mod build;
pub mod completions;
pub mod emit;
pub mod generators;
pub mod inspect;
pub mod layout;

/// Resolve the build system for a command: an explicit flag parses
/// strictly, no flag falls back to the environment toggle.
pub fn resolve_build_system(flag: Option<&str>) -> Result<BuildSystem> {
    match flag {
        Some(s) => s.parse().map_err(|e| anyhow::anyhow!("{}", e)),
        None => Ok(BuildSystem::from_env()),
    }
}
