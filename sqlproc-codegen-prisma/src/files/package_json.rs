//! Export registration in existing `package.json` files.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::Serialize;
use serde_json::{Value, json, ser::PrettyFormatter};
use sqlproc_core::{File, WriteResult};

/// Outcome of registering the procedures export in one package manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportRegistration {
    /// The entry was added or replaced.
    Registered,
    /// The manifest already held the same entry.
    Unchanged,
    /// The manifest has no `exports` map and was left untouched.
    NoExports,
    /// There is no manifest at the expected path.
    Missing,
}

/// The `exports` entry pointing at the generated artifacts.
pub fn procedures_export_entry() -> Value {
    json!({
        "require": {
            "types": "./procedures.d.ts",
            "node": "./procedures.js",
            "default": "./procedures.js"
        },
        "import": {
            "types": "./procedures.d.ts",
            "node": "./procedures.mjs",
            "default": "./procedures.mjs"
        },
        "default": "./procedures.js"
    })
}

/// A `package.json` inside a generated package directory.
pub struct PackageJson {
    path: PathBuf,
}

impl PackageJson {
    /// The manifest of the package in `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join("package.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set `exports[export_path]` to the procedures entry.
    ///
    /// Key order and all other content are preserved; the file is rewritten
    /// with 4-space indentation.
    pub fn register_export(&self, export_path: &str) -> Result<ExportRegistration> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ExportRegistration::Missing);
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("failed to read '{}'", self.path.display()));
            }
        };

        let mut manifest: Value = serde_json::from_str(&content)
            .wrap_err_with(|| format!("failed to parse '{}'", self.path.display()))?;

        let Some(exports) = manifest.get_mut("exports").and_then(Value::as_object_mut) else {
            return Ok(ExportRegistration::NoExports);
        };
        exports.insert(export_path.to_string(), procedures_export_entry());

        let rendered = to_string_indented(&manifest)?;
        match File::new(&self.path, rendered).write()? {
            WriteResult::Written => Ok(ExportRegistration::Registered),
            WriteResult::Unchanged => Ok(ExportRegistration::Unchanged),
        }
    }
}

fn to_string_indented(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .wrap_err("failed to serialize package.json")?;
    String::from_utf8(buf).wrap_err("package.json is not valid UTF-8")
}
