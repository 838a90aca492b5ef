/* src/cli/codegen/src/snapshot.rs */

// Process-scoped state channel carrying the previous manifest between
// invocations of the dev pipeline.

use std::collections::BTreeMap;

use crate::manifest::Manifest;

/// Slot holding the JSON-serialized manifest from the previous run.
pub const PREVIOUS_MANIFEST_KEY: &str = "ISLE_DEV_PREVIOUS_MANIFEST";

/// Flag slot set to `"true"` once the regeneration logic has run.
pub const DEV_FLAG_KEY: &str = "ISLE_DEV";

pub trait StateStore {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&mut self, key: &str, value: String);
}

/// Plain in-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
  values: BTreeMap<String, String>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl StateStore for MemoryStore {
  fn get(&self, key: &str) -> Option<String> {
    self.values.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: String) {
    self.values.insert(key.to_string(), value);
  }
}

/// Store backed by the process environment.
///
/// Reads fall through to the environment captured at construction; writes go
/// into an overlay that callers export into child processes via [`EnvStore::exports`].
#[derive(Debug, Clone)]
pub struct EnvStore {
  inherited: BTreeMap<String, String>,
  overlay: BTreeMap<String, String>,
}

impl EnvStore {
  pub fn from_env() -> Self {
    Self::from_vars(std::env::vars())
  }

  pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
    Self { inherited: vars.into_iter().collect(), overlay: BTreeMap::new() }
  }

  /// Values written during this run, to be set on the entrypoint process.
  pub fn exports(&self) -> impl Iterator<Item = (&str, &str)> {
    self.overlay.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

impl StateStore for EnvStore {
  fn get(&self, key: &str) -> Option<String> {
    self.overlay.get(key).or_else(|| self.inherited.get(key)).cloned()
  }

  fn set(&mut self, key: &str, value: String) {
    self.overlay.insert(key.to_string(), value);
  }
}

/// Result of reading the previous manifest from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
  /// No snapshot present; treated as an empty manifest.
  Missing,
  /// Present but unreadable; treated as an empty manifest.
  Corrupt(String),
  Found(Manifest),
}

impl Snapshot {
  pub fn manifest(&self) -> Manifest {
    match self {
      Self::Found(m) => m.clone(),
      Self::Missing | Self::Corrupt(_) => Manifest::default(),
    }
  }
}

pub fn read_snapshot(store: &dyn StateStore) -> Snapshot {
  let Some(raw) = store.get(PREVIOUS_MANIFEST_KEY) else {
    return Snapshot::Missing;
  };
  match serde_json::from_str::<Manifest>(&raw) {
    Ok(m) => Snapshot::Found(m),
    Err(e) => Snapshot::Corrupt(e.to_string()),
  }
}

pub fn write_snapshot(store: &mut dyn StateStore, manifest: &Manifest) -> anyhow::Result<()> {
  let json = serde_json::to_string(manifest)?;
  store.set(PREVIOUS_MANIFEST_KEY, json);
  Ok(())
}
