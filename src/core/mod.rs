//! Core recipe types.
//!
//! This module contains the package descriptor itself:
//! - The `Recipe` trait and its extension points
//! - The shipped `CppTemplate` recipe
//! - The fixed settings surface
//! - The project layout record

pub mod cpp_template;
pub mod layout;
pub mod recipe;
pub mod settings;

pub use cpp_template::CppTemplate;
pub use layout::{Folders, BUILD_FOLDER, SOURCE_FOLDER};
pub use recipe::{BuildContext, OptionValue, Recipe, Requirement};
pub use settings::SettingsAxis;
