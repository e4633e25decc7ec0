//! Project layout record.
//!
//! The layout maps source files to build outputs. A recipe assigns its
//! folders in the `layout` hook; the record is then consumed by the
//! external build tool.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Source folder literal assigned by the template layout.
pub const SOURCE_FOLDER: &str = ".";

/// Build folder literal assigned by the template layout.
pub const BUILD_FOLDER: &str = "build";

/// Folder assignment shared between a recipe and the external build tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folders {
    /// Source root, relative to the project root
    pub source: PathBuf,

    /// Build output root, relative to the project root
    pub build: PathBuf,
}

impl Folders {
    /// The template's fixed folder assignment.
    pub fn project() -> Self {
        Folders {
            source: PathBuf::from(SOURCE_FOLDER),
            build: PathBuf::from(BUILD_FOLDER),
        }
    }

    /// Resolve the source folder against a project root.
    pub fn source_dir(&self, root: &Path) -> PathBuf {
        resolve(root, &self.source)
    }

    /// Resolve the build folder against a project root.
    pub fn build_dir(&self, root: &Path) -> PathBuf {
        resolve(root, &self.build)
    }
}

fn resolve(root: &Path, folder: &Path) -> PathBuf {
    if folder == Path::new(SOURCE_FOLDER) {
        root.to_path_buf()
    } else {
        root.join(folder)
    }
}
