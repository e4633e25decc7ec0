//! High-level operations.
//!
//! This module contains the implementation of slipway commands.

pub mod emit;
pub mod evaluate;

pub use emit::{emit, emit_evaluated, EmitFormat, EmitOptions};
pub use evaluate::{evaluate, EvaluatedRecipe};
