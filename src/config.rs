use anyhow::{Context, Result};
use serde::Deserialize;

use crate::project::ProjectTree;

pub const CONFIG_FILE: &str = "themegen.toml";

/// Optional per-project configuration, read from `themegen.toml` in the
/// project root. Every field has a default, so the file can override any
/// subset or be absent entirely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub manifest: ManifestPackage,
    pub theme: Theme,
}

/// Project-relative paths of the files the generation step touches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub palettes: String,
    pub styles: String,
    pub entry: String,
    pub manifest: String,
}

/// The package pinned into the project's dependency manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManifestPackage {
    pub package: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Insert the dark-theme block even without `--dark` on the command line.
    pub dark: bool,
}

impl Config {
    pub fn load(tree: &dyn ProjectTree) -> Result<Config> {
        match tree.read(CONFIG_FILE)? {
            Some(contents) => {
                toml::from_str(&contents).with_context(|| format!("Failed to parse {CONFIG_FILE}"))
            }
            None => Ok(Config::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: Paths::default(),
            manifest: ManifestPackage::default(),
            theme: Theme::default(),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            palettes: "src/themes/_palettes.scss".to_string(),
            styles: "src/styles.scss".to_string(),
            entry: "src/index.html".to_string(),
            manifest: "package.json".to_string(),
        }
    }
}

impl Default for ManifestPackage {
    fn default() -> Self {
        Self {
            package: "material-components-web".to_string(),
            version: "14.0.0".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self { dark: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::MemTree;

    #[test]
    fn test_missing_file_yields_defaults() {
        let tree = MemTree::new();
        let config = Config::load(&tree).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.paths.palettes, "src/themes/_palettes.scss");
        assert!(!config.theme.dark);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let tree = MemTree::new().with_file(
            CONFIG_FILE,
            "[paths]\nstyles = \"styles/global.scss\"\n\n[theme]\ndark = true\n",
        );
        let config = Config::load(&tree).unwrap();
        assert_eq!(config.paths.styles, "styles/global.scss");
        assert_eq!(config.paths.entry, "src/index.html");
        assert!(config.theme.dark);
        assert_eq!(config.manifest.package, "material-components-web");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let tree = MemTree::new().with_file(CONFIG_FILE, "[paths\nbroken");
        assert!(Config::load(&tree).is_err());
    }
}
