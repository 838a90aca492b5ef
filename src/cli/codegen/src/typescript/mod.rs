/* src/cli/codegen/src/typescript/mod.rs */

mod generator;
mod render;

#[cfg(test)]
mod tests;

pub use generator::{GenerateSummary, generate};
pub use render::{binding_name, render_module};
