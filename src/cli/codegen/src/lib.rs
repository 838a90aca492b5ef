/* src/cli/codegen/src/lib.rs */

mod typescript;

pub mod dev;
pub mod discover;
pub mod format;
pub mod manifest;
pub mod options;
pub mod snapshot;

pub use dev::{DevOutcome, DevReport, RegenReason, regenerate, run_dev};
pub use discover::discover;
pub use format::{CommandFormatter, Formatter, IdentityFormatter};
pub use manifest::{Category, Manifest, has_changed};
pub use options::ProjectOptions;
pub use snapshot::{EnvStore, MemoryStore, StateStore};
pub use typescript::{GenerateSummary, binding_name, generate, render_module};
