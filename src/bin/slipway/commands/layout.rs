//! `slipway layout` command
//!
//! Print the folder assignment from the layout hook.

use anyhow::Result;

use slipway::{CppTemplate, Folders, Recipe};

pub fn execute() -> Result<()> {
    let mut folders = Folders::default();
    CppTemplate.layout(&mut folders);

    println!("Source folder: {}", folders.source.display());
    println!("Build folder:  {}", folders.build.display());

    Ok(())
}
