//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Slipway - package recipe descriptor and build-system selector for C++ projects
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the evaluated package recipe
    Inspect(InspectArgs),

    /// Show the selected generator pair
    Generators(GeneratorsArgs),

    /// Show the source and build folder assignment
    Layout,

    /// Write the evaluated recipe into the build folder
    Emit(EmitArgs),

    /// Run the build hook (a no-op for the shipped template)
    Build(BuildArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,

    /// Build system to evaluate for (defaults to $BUILD_SYSTEM)
    #[arg(long)]
    pub build_system: Option<String>,
}

#[derive(Args)]
pub struct GeneratorsArgs {
    /// Build system to select generators for (defaults to $BUILD_SYSTEM)
    #[arg(long)]
    pub build_system: Option<String>,
}

#[derive(Args)]
pub struct EmitArgs {
    /// Output format (json or toml)
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Project root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Build system to evaluate for (defaults to $BUILD_SYSTEM)
    #[arg(long)]
    pub build_system: Option<String>,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Build system the build is deferred to (defaults to $BUILD_SYSTEM)
    #[arg(long)]
    pub build_system: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
