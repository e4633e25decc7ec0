//! Generator selection.
//!
//! Maps the `BUILD_SYSTEM` environment toggle to a fixed pair of generator
//! plugins: the CMake pair by default, the Bazel pair when the toggle is
//! exactly `bazel`.

pub mod build_system;
pub mod plugins;

pub use build_system::{BuildSystem, BuildSystemParseError, BUILD_SYSTEM_ENV};
pub use plugins::Generator;
