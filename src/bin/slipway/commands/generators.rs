//! `slipway generators` command
//!
//! Print the selected generator pair, one name per line.

use anyhow::Result;

use crate::cli::GeneratorsArgs;
use crate::commands::resolve_build_system;
use slipway::{CppTemplate, Recipe};

pub fn execute(args: GeneratorsArgs) -> Result<()> {
    let build_system = resolve_build_system(args.build_system.as_deref())?;

    for generator in CppTemplate.generators(build_system) {
        println!("{}", generator);
    }

    Ok(())
}
