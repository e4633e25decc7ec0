//! Slipway - a package recipe descriptor and build-system selector for C++ projects
//!
//! Slipway models a Conan-style package recipe for a C++ starter template:
//! package identity, the fixed settings surface, generator selection driven
//! by the `BUILD_SYSTEM` environment variable, the project layout, and
//! deliberately empty build hooks. Compilation itself is deferred to the
//! selected build system, invoked outside slipway.

pub mod core;
pub mod generator;
pub mod ops;

pub use crate::core::{
    BuildContext, CppTemplate, Folders, OptionValue, Recipe, Requirement, SettingsAxis,
};
pub use crate::generator::{BuildSystem, Generator, BUILD_SYSTEM_ENV};
pub use crate::ops::{emit, evaluate, EmitFormat, EmitOptions, EvaluatedRecipe};
