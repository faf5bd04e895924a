use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Adds a pinned package to the manifest's `dependencies` table.
///
/// Returns `None` when the package is already listed (any version wins over
/// ours). Otherwise returns the updated manifest text: the `dependencies`
/// table is re-sorted by package name, every other key keeps its position,
/// and the document is emitted with 2-space indentation and a trailing
/// newline.
pub fn add_dependency(manifest: &str, package: &str, version: &str) -> Result<Option<String>> {
    let mut document: Value =
        serde_json::from_str(manifest).context("Failed to parse package manifest")?;
    let Some(root) = document.as_object_mut() else {
        bail!("Package manifest is not a JSON object");
    };

    let dependencies = root
        .entry("dependencies")
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(dependencies) = dependencies.as_object_mut() else {
        bail!("'dependencies' in the package manifest is not a JSON object");
    };

    if dependencies.contains_key(package) {
        return Ok(None);
    }

    let mut entries: Vec<(String, Value)> = std::mem::take(dependencies).into_iter().collect();
    entries.push((package.to_string(), Value::String(version.to_string())));
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    dependencies.extend(entries);

    let rendered =
        serde_json::to_string_pretty(&document).context("Failed to serialize package manifest")?;
    Ok(Some(rendered + "\n"))
}
