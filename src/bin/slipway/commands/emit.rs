//! `slipway emit` command
//!
//! Materialize the evaluated recipe into the build folder.

use anyhow::{Context, Result};

use crate::cli::EmitArgs;
use crate::commands::resolve_build_system;
use slipway::{emit, CppTemplate, EmitFormat, EmitOptions};

pub fn execute(args: EmitArgs) -> Result<()> {
    let build_system = resolve_build_system(args.build_system.as_deref())?;

    let format: EmitFormat = args.format.parse().map_err(|e| anyhow::anyhow!("{}", e))?;

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };

    let opts = EmitOptions::new(root).with_format(format);
    let path = emit(&CppTemplate, build_system, &opts)?;

    println!("Wrote {}", path.display());

    Ok(())
}
