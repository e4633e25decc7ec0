//! `slipway inspect` command
//!
//! Show the evaluated package recipe, human-readable or as JSON.

use anyhow::{Context, Result};

use crate::cli::InspectArgs;
use crate::commands::resolve_build_system;
use slipway::{evaluate, CppTemplate};

pub fn execute(args: InspectArgs) -> Result<()> {
    let build_system = resolve_build_system(args.build_system.as_deref())?;
    let evaluated = evaluate(&CppTemplate, build_system)?;

    if args.json {
        let json = serde_json::to_string_pretty(&evaluated)
            .context("failed to serialize recipe as JSON")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Recipe: {}", evaluated.name);
    println!();

    println!("Package:");
    println!("  Version:       {}", evaluated.version);
    println!("  Build system:  {}", evaluated.build_system);
    println!();

    println!("Settings:");
    for axis in &evaluated.settings {
        println!("  {}", axis);
    }
    println!();

    println!("Generators:");
    for generator in &evaluated.generators {
        println!("  {}", generator);
    }
    println!();

    println!("Folders:");
    println!("  Source:  {}", evaluated.folders.source.display());
    println!("  Build:   {}", evaluated.folders.build.display());
    println!();

    if evaluated.requires.is_empty() {
        println!("Requires: (none)");
    } else {
        println!("Requires:");
        for req in &evaluated.requires {
            println!("  {}", req);
        }
    }

    if evaluated.default_options.is_empty() {
        println!("Default options: (none)");
    } else {
        println!("Default options:");
        for (name, value) in &evaluated.default_options {
            println!("  {} = {}", name, value);
        }
    }

    Ok(())
}
