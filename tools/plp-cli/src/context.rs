//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use plp_render::{Catalog, ProductList};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    pub config: CliConfig,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(cwd, config_path, output)
    }

    /// Like [`Context::load`], discovering the config upward from `cwd`.
    pub fn load_from(cwd: PathBuf, config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => find_config(&cwd)?.unwrap_or_default(),
        };

        Ok(Self { config, output, cwd })
    }

    /// Context with default config, for commands that replace the config file.
    pub fn without_config(output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self {
            config: CliConfig::default(),
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Renderer configured from the `[render]` section.
    pub fn renderer(&self) -> Result<ProductList<Catalog>> {
        let catalog = match &self.config.render.translations {
            Some(path) => {
                let path = self.resolve_path(path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read translations: {}", path.display()))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("Failed to parse translations: {}", path.display()))?
            }
            None => Catalog::new(),
        };

        Ok(ProductList::with_translator(catalog).with_config(self.config.render.limits.clone()))
    }
}

/// Path of the nearest config file in the directory tree.
pub fn find_config_path(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Nearest config file, parsed. A file that exists but does not parse is an error.
fn find_config(start: &Path) -> Result<Option<CliConfig>> {
    let Some(path) = find_config_path(start) else {
        return Ok(None);
    };
    CliConfig::load(&path.to_string_lossy()).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plp.toml"), "[render]\ntitle_limit = 50\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_path(&nested).unwrap();
        assert_eq!(found, dir.path().join("plp.toml"));

        let config = find_config(&nested).unwrap().unwrap();
        assert_eq!(config.render.limits.title_limit, 50);
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plp.toml"), "[settings\nenabled = maybe\n").unwrap();

        assert!(find_config(dir.path()).is_err());

        let err = Context::load_from(dir.path().to_path_buf(), None, Output::new(false, true))
            .err()
            .unwrap();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
