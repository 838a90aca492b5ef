/* src/cli/codegen/src/discover/pattern.rs */

use std::sync::OnceLock;

use regex::Regex;

fn route_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    Regex::new(r"^\+(page|middleware|app|layout|404|500)\.(ts|tsx|js|jsx)$")
      .expect("route pattern is valid")
  })
}

fn island_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\.island\.(ts|tsx|js|jsx)$").expect("island pattern is valid"))
}

/// `+page.tsx`, `+404.js`, ... : the whole file name is `+<kind>.<ext>`.
pub(crate) fn is_route_file(name: &str) -> bool {
  route_re().is_match(name)
}

/// Any file name ending in `.island.<ext>`.
pub(crate) fn is_island_file(name: &str) -> bool {
  island_re().is_match(name)
}
