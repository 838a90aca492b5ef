/* src/cli/codegen/src/discover/mod.rs */

// Route and island discovery: walks the project tree and collects
// root-relative identifiers for files matching the naming conventions.

mod pattern;


use std::io::ErrorKind;
use std::path::{Component, Path};

use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use walkdir::{DirEntry, WalkDir};

use crate::manifest::Manifest;

use pattern::{is_island_file, is_route_file};

pub const ROUTES_DIR: &str = "routes";

/// Characters escaped in identifier segments so they survive as URL paths.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
  .add(b' ')
  .add(b'"')
  .add(b'#')
  .add(b'<')
  .add(b'>')
  .add(b'?')
  .add(b'`')
  .add(b'{')
  .add(b'}')
  .add(b'%');

/// Directory names pruned from both walks unless configured otherwise.
pub const DEFAULT_EXCLUDE: &[&str] = &["node_modules", ".git"];

/// Discover routes under `<project>/routes` and islands anywhere under `<project>`.
///
/// A missing root yields an empty list for that category. Any other walk
/// error is returned with the offending root in context.
pub fn discover(project_dir: &Path, exclude: &[String]) -> Result<Manifest> {
  let routes_root = project_dir.join(ROUTES_DIR);
  let routes = collect_matching(&routes_root, exclude, is_route_file)
    .with_context(|| format!("failed to discover routes in {}", routes_root.display()))?;
  let islands = collect_matching(project_dir, exclude, is_island_file)
    .with_context(|| format!("failed to discover islands in {}", project_dir.display()))?;
  Ok(Manifest::new(routes, islands))
}

fn collect_matching(
  root: &Path,
  exclude: &[String],
  matches: fn(&str) -> bool,
) -> Result<Vec<String>> {
  let mut found = Vec::new();
  let walker = WalkDir::new(root).into_iter().filter_entry(|e| !is_excluded(e, exclude));
  for entry in walker {
    let entry = match entry {
      Ok(entry) => entry,
      Err(err) if is_missing_root(&err) => return Ok(Vec::new()),
      Err(err) => return Err(err.into()),
    };
    if !entry.file_type().is_file() {
      continue;
    }
    let Some(name) = entry.file_name().to_str() else {
      continue;
    };
    if matches(name) {
      found.push(relative_id(root, entry.path())?);
    }
  }
  Ok(found)
}

fn is_missing_root(err: &walkdir::Error) -> bool {
  err.depth() == 0 && err.io_error().is_some_and(|e| e.kind() == ErrorKind::NotFound)
}

fn is_excluded(entry: &DirEntry, exclude: &[String]) -> bool {
  entry.depth() > 0
    && entry.file_type().is_dir()
    && entry.file_name().to_str().is_some_and(|name| exclude.iter().any(|e| e == name))
}

/// `<root>/blog/+page.tsx` -> `/blog/+page.tsx`, `<root>/c#/+page.tsx` -> `/c%23/+page.tsx`
pub(crate) fn relative_id(root: &Path, path: &Path) -> Result<String> {
  let rel = path
    .strip_prefix(root)
    .with_context(|| format!("{} is not under {}", path.display(), root.display()))?;
  let mut id = String::new();
  for component in rel.components() {
    let Component::Normal(part) = component else {
      bail!("unexpected path component in {}", path.display());
    };
    let Some(part) = part.to_str() else {
      bail!("path is not valid UTF-8: {}", path.display());
    };
    id.push('/');
    id.extend(utf8_percent_encode(part, PATH_SEGMENT));
  }
  Ok(id)
}
