/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;


pub use loader::{load_isle_config, resolve_project_dir};
pub use types::IsleConfig;
