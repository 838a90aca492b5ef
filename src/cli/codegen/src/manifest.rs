/* src/cli/codegen/src/manifest.rs */

use serde::{Deserialize, Serialize};

/// Sorted route and island identifiers discovered in a project.
///
/// Identifiers are root-relative, percent-encoded, `/`-separated and start
/// with `/`. Both lists are kept in lexicographic order; the generated
/// module's import order and table order follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
  pub routes: Vec<String>,
  pub islands: Vec<String>,
}

impl Manifest {
  /// Build a manifest, sorting both lists.
  pub fn new(mut routes: Vec<String>, mut islands: Vec<String>) -> Self {
    routes.sort();
    islands.sort();
    Self { routes, islands }
  }

  pub fn is_empty(&self) -> bool {
    self.routes.is_empty() && self.islands.is_empty()
  }

  pub fn entries(&self, category: Category) -> &[String] {
    match category {
      Category::Route => &self.routes,
      Category::Island => &self.islands,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
  Route,
  Island,
}

impl std::fmt::Display for Category {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Route => write!(f, "route"),
      Self::Island => write!(f, "island"),
    }
  }
}

/// Order-sensitive comparison: a rename that reorders entries counts as a
/// change because it shifts import bindings.
pub fn has_changed(previous: &Manifest, current: &Manifest) -> bool {
  previous.routes != current.routes || previous.islands != current.islands
}
