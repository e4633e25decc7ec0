//! `slipway build` command
//!
//! Run the build requirements and build hooks. For the shipped template
//! both are empty: compilation is driven by the selected build system,
//! invoked outside slipway.

use anyhow::{Context, Result};

use crate::cli::BuildArgs;
use crate::commands::resolve_build_system;
use slipway::{evaluate, BuildContext, CppTemplate, Recipe};

pub fn execute(args: BuildArgs) -> Result<()> {
    let build_system = resolve_build_system(args.build_system.as_deref())?;

    let recipe = CppTemplate;
    let evaluated = evaluate(&recipe, build_system)?;

    let root = std::env::current_dir().context("failed to determine current directory")?;
    let ctx = BuildContext::new(root, evaluated.folders.clone(), build_system);

    let requirements = recipe.build_requirements();
    if requirements.is_empty() {
        tracing::debug!("no build requirements declared");
    } else {
        for req in &requirements {
            println!("Build requirement: {}", req);
        }
    }

    recipe.build(&ctx)?;

    println!(
        "Finished: build step is a no-op, {} drives compilation outside slipway",
        evaluated.build_system
    );

    Ok(())
}
