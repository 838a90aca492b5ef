/* src/cli/codegen/src/typescript/render.rs */

use crate::manifest::{Category, Manifest};

pub(super) const HEADER: &str = "\
// DO NOT EDIT. This file is generated by isle.
// This file SHOULD be checked into source version control.
// This file is automatically updated during development when running `isle dev`.
";

/// Import binding for the `index`-th entry of a category.
///
/// Routes get `$0, $1, ...` and islands `$$0, $$1, ...`; the prefixes keep
/// the two sets disjoint inside one module scope.
pub fn binding_name(category: Category, index: usize) -> String {
  match category {
    Category::Route => format!("${index}"),
    Category::Island => format!("$${index}"),
  }
}

/// Drop the extension of the last path segment: `/blog/+page.tsx` -> `/blog/+page`.
pub(super) fn strip_extension(id: &str) -> &str {
  let name_start = id.rfind('/').map_or(0, |i| i + 1);
  match id[name_start..].rfind('.') {
    Some(dot) if dot > 0 => &id[..name_start + dot],
    _ => id,
  }
}

/// JSON string literal, which is also a valid JS string literal.
pub(super) fn js_string(s: &str) -> String {
  serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

/// `deno.json` -> `./deno.json`; already-relative specifiers are left alone.
fn config_specifier(config_file: &str) -> String {
  if config_file.starts_with("./") || config_file.starts_with("../") {
    config_file.to_string()
  } else {
    format!("./{config_file}")
  }
}

fn import_specifier(category: Category, id: &str) -> String {
  match category {
    Category::Route => format!("./routes{id}"),
    Category::Island => format!(".{id}"),
  }
}

fn table_key(category: Category, id: &str) -> String {
  match category {
    Category::Route => strip_extension(id).to_string(),
    Category::Island => format!(".{id}"),
  }
}

fn render_table(out: &mut String, name: &str, manifest: &Manifest, category: Category) {
  let entries = manifest.entries(category);
  if entries.is_empty() {
    out.push_str(&format!("  {name}: {{}},\n"));
    return;
  }
  out.push_str(&format!("  {name}: {{\n"));
  for (i, id) in entries.iter().enumerate() {
    let key = js_string(&table_key(category, id));
    let binding = binding_name(category, i);
    out.push_str(&format!("    {key}: {binding},\n"));
  }
  out.push_str("  },\n");
}

/// Render the manifest module source (unformatted).
pub fn render_module(manifest: &Manifest, config_file: &str) -> String {
  let mut out = String::from(HEADER);
  out.push('\n');

  let config = js_string(&config_specifier(config_file));
  out.push_str(&format!("import config from {config} with {{ type: \"json\" }};\n"));
  for category in [Category::Route, Category::Island] {
    for (i, id) in manifest.entries(category).iter().enumerate() {
      let binding = binding_name(category, i);
      let source = js_string(&import_specifier(category, id));
      out.push_str(&format!("import * as {binding} from {source};\n"));
    }
  }
  out.push('\n');

  out.push_str("const manifest = {\n");
  render_table(&mut out, "routes", manifest, Category::Route);
  render_table(&mut out, "islands", manifest, Category::Island);
  out.push_str("  baseUrl: import.meta.url,\n");
  out.push_str("  config,\n");
  out.push_str("};\n\n");

  out.push_str("export default manifest;\n");
  out.push_str("export { config };\n");
  out
}
