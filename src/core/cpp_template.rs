//! The shipped C++ project template recipe.

use crate::core::layout::{Folders, BUILD_FOLDER, SOURCE_FOLDER};
use crate::core::recipe::Recipe;

/// Package recipe for the C++ starter template.
///
/// Declares identity and the fixed layout; everything else stays on the
/// trait defaults. Users customizing the template implement [`Recipe`]
/// themselves and override the hooks they need.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppTemplate;

impl Recipe for CppTemplate {
    fn name(&self) -> &str {
        "cpp_template"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn layout(&self, folders: &mut Folders) {
        folders.source = SOURCE_FOLDER.into();
        folders.build = BUILD_FOLDER.into();
    }
}
