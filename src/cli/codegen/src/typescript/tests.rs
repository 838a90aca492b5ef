/* src/cli/codegen/src/typescript/tests.rs */

use std::cell::Cell;

use anyhow::{Result, bail};
use tempfile::TempDir;

use super::render::{js_string, strip_extension};
use super::*;
use crate::format::{Formatter, IdentityFormatter};
use crate::manifest::{Category, Manifest};
use crate::options::ProjectOptions;

fn scenario_manifest() -> Manifest {
  Manifest::new(
    vec!["/blog/+page.tsx".into(), "/+page.tsx".into()],
    vec!["/components/Counter.island.tsx".into()],
  )
}

struct FailingFormatter;

impl Formatter for FailingFormatter {
  fn format(&self, _source: &str) -> Result<String> {
    bail!("formatter exploded")
  }
}

struct CountingFormatter {
  calls: Cell<usize>,
}

impl Formatter for CountingFormatter {
  fn format(&self, source: &str) -> Result<String> {
    self.calls.set(self.calls.get() + 1);
    Ok(source.to_uppercase())
  }
}

#[test]
fn binding_names_are_index_derived() {
  assert_eq!(binding_name(Category::Route, 0), "$0");
  assert_eq!(binding_name(Category::Route, 12), "$12");
  assert_eq!(binding_name(Category::Island, 0), "$$0");
  assert_eq!(binding_name(Category::Island, 3), "$$3");
}

#[test]
fn binding_namespaces_never_collide() {
  let routes: Vec<_> = (0..50).map(|i| binding_name(Category::Route, i)).collect();
  for i in 0..50 {
    assert!(!routes.contains(&binding_name(Category::Island, i)));
  }
}

#[test]
fn strip_extension_only_touches_last_segment() {
  assert_eq!(strip_extension("/+page.tsx"), "/+page");
  assert_eq!(strip_extension("/blog/+page.tsx"), "/blog/+page");
  assert_eq!(strip_extension("/v1.2/+middleware.ts"), "/v1.2/+middleware");
  assert_eq!(strip_extension("/no-ext"), "/no-ext");
}

#[test]
fn js_string_escapes() {
  assert_eq!(js_string("/+page"), "\"/+page\"");
  assert_eq!(js_string("/say \"hi\"/+page"), "\"/say \\\"hi\\\"/+page\"");
}

#[test]
fn renders_scenario_module() {
  let code = render_module(&scenario_manifest(), "deno.json");
  let expected = r#"// DO NOT EDIT. This file is generated by isle.
// This file SHOULD be checked into source version control.
// This file is automatically updated during development when running `isle dev`.

import config from "./deno.json" with { type: "json" };
import * as $0 from "./routes/+page.tsx";
import * as $1 from "./routes/blog/+page.tsx";
import * as $$0 from "./components/Counter.island.tsx";

const manifest = {
  routes: {
    "/+page": $0,
    "/blog/+page": $1,
  },
  islands: {
    "./components/Counter.island.tsx": $$0,
  },
  baseUrl: import.meta.url,
  config,
};

export default manifest;
export { config };
"#;
  assert_eq!(code, expected);
}

#[test]
fn renders_empty_tables() {
  let code = render_module(&Manifest::default(), "deno.json");
  assert!(code.contains("  routes: {},\n"));
  assert!(code.contains("  islands: {},\n"));
  assert!(!code.contains("import * as"));
  assert!(code.starts_with("// DO NOT EDIT."));
}

#[test]
fn config_specifier_is_relative() {
  let code = render_module(&Manifest::default(), "config/deno.jsonc");
  assert!(code.contains("import config from \"./config/deno.jsonc\""));
  let code = render_module(&Manifest::default(), "../shared/deno.json");
  assert!(code.contains("import config from \"../shared/deno.json\""));
}

#[test]
fn imports_follow_manifest_order() {
  let manifest = Manifest::new(
    vec!["/b/+page.tsx".into(), "/a/+page.tsx".into()],
    vec!["/z.island.ts".into(), "/m.island.ts".into()],
  );
  let code = render_module(&manifest, "deno.json");
  let a = code.find("import * as $0 from \"./routes/a/+page.tsx\"").unwrap();
  let b = code.find("import * as $1 from \"./routes/b/+page.tsx\"").unwrap();
  let m = code.find("import * as $$0 from \"./m.island.ts\"").unwrap();
  let z = code.find("import * as $$1 from \"./z.island.ts\"").unwrap();
  assert!(a < b && b < m && m < z);
}

#[test]
fn generate_writes_formatted_output() {
  let dir = TempDir::new().unwrap();
  let formatter = CountingFormatter { calls: Cell::new(0) };
  let summary =
    generate(dir.path(), &scenario_manifest(), &ProjectOptions::default(), &formatter).unwrap();

  assert_eq!(formatter.calls.get(), 1);
  assert_eq!(summary.routes, 2);
  assert_eq!(summary.islands, 1);
  assert_eq!(summary.path, dir.path().join("isle.gen.ts"));
  let written = std::fs::read_to_string(&summary.path).unwrap();
  assert!(written.starts_with("// DO NOT EDIT. THIS FILE IS GENERATED BY ISLE."));
}

#[test]
fn generate_is_idempotent() {
  let dir = TempDir::new().unwrap();
  let options = ProjectOptions::default();
  let first = generate(dir.path(), &scenario_manifest(), &options, &IdentityFormatter).unwrap();
  let a = std::fs::read(&first.path).unwrap();
  let second = generate(dir.path(), &scenario_manifest(), &options, &IdentityFormatter).unwrap();
  let b = std::fs::read(&second.path).unwrap();
  assert_eq!(a, b);
}

#[test]
fn formatter_failure_leaves_existing_output() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("isle.gen.ts");
  std::fs::write(&path, "previous").unwrap();

  let options = ProjectOptions::default();
  let err = generate(dir.path(), &scenario_manifest(), &options, &FailingFormatter).unwrap_err();
  assert!(format!("{err:#}").contains("formatter exploded"));
  assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");
}

#[test]
fn write_failure_is_reported() {
  let dir = TempDir::new().unwrap();
  let options = ProjectOptions { out_file: "missing/dir/isle.gen.ts".into(), ..Default::default() };
  let err = generate(dir.path(), &scenario_manifest(), &options, &IdentityFormatter).unwrap_err();
  assert!(err.to_string().contains("failed to write"));
}
