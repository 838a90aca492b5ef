/* src/cli/codegen/src/dev.rs */

// Dev pipeline: discover, compare against the previous snapshot,
// regenerate when needed, then record the new snapshot.

use std::path::Path;

use anyhow::Result;

use crate::discover::discover;
use crate::format::Formatter;
use crate::manifest::{Manifest, has_changed};
use crate::options::ProjectOptions;
use crate::snapshot::{DEV_FLAG_KEY, Snapshot, StateStore, read_snapshot, write_snapshot};
use crate::typescript::{GenerateSummary, generate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegenReason {
  /// No snapshot from a previous run.
  FirstRun,
  /// Snapshot present but unreadable.
  CorruptSnapshot(String),
  /// Discovered files differ from the snapshot.
  Changed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DevOutcome {
  Regenerated { summary: GenerateSummary, reason: RegenReason },
  Unchanged,
}

#[derive(Debug, Clone)]
pub struct DevReport {
  pub manifest: Manifest,
  pub outcome: DevOutcome,
}

/// Run the pipeline once. The snapshot is only replaced after a successful
/// generation (or when nothing changed), so a failed run is retried next time.
pub fn run_dev(
  project_dir: &Path,
  options: &ProjectOptions,
  store: &mut dyn StateStore,
  formatter: &dyn Formatter,
) -> Result<DevReport> {
  let current = discover(project_dir, &options.exclude)?;

  let reason = match read_snapshot(store) {
    Snapshot::Missing => Some(RegenReason::FirstRun),
    Snapshot::Corrupt(err) => Some(RegenReason::CorruptSnapshot(err)),
    Snapshot::Found(previous) => has_changed(&previous, &current).then_some(RegenReason::Changed),
  };

  let outcome = match reason {
    Some(reason) => {
      let summary = generate(project_dir, &current, options, formatter)?;
      DevOutcome::Regenerated { summary, reason }
    }
    None => DevOutcome::Unchanged,
  };

  write_snapshot(store, &current)?;
  store.set(DEV_FLAG_KEY, "true".to_string());

  Ok(DevReport { manifest: current, outcome })
}

/// Discover and generate unconditionally, without touching any snapshot.
pub fn regenerate(
  project_dir: &Path,
  options: &ProjectOptions,
  formatter: &dyn Formatter,
) -> Result<(Manifest, GenerateSummary)> {
  let manifest = discover(project_dir, &options.exclude)?;
  let summary = generate(project_dir, &manifest, options, formatter)?;
  Ok((manifest, summary))
}
