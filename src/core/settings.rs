//! The settings surface declared by a recipe.
//!
//! Settings axes are declared, not validated: the external packaging tool
//! supplies the values and decides binary compatibility.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A build-configuration dimension whose value affects binary compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsAxis {
    /// Target operating system
    Os,
    /// Compiler family and version
    Compiler,
    /// Build type (debug/release)
    BuildType,
    /// Target architecture
    Arch,
}

impl SettingsAxis {
    /// The fixed four-axis settings surface, in declaration order.
    pub const ALL: [SettingsAxis; 4] = [
        SettingsAxis::Os,
        SettingsAxis::Compiler,
        SettingsAxis::BuildType,
        SettingsAxis::Arch,
    ];

    /// Get the axis name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsAxis::Os => "os",
            SettingsAxis::Compiler => "compiler",
            SettingsAxis::BuildType => "build_type",
            SettingsAxis::Arch => "arch",
        }
    }
}

impl std::fmt::Display for SettingsAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SettingsAxis {
    type Err = SettingsAxisParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "os" => Ok(SettingsAxis::Os),
            "compiler" => Ok(SettingsAxis::Compiler),
            "build_type" => Ok(SettingsAxis::BuildType),
            "arch" => Ok(SettingsAxis::Arch),
            _ => Err(SettingsAxisParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid settings axis.
#[derive(Debug, Clone, Error)]
#[error("invalid settings axis '{0}', valid values: os, compiler, build_type, arch")]
pub struct SettingsAxisParseError(pub String);
