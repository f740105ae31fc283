use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, PYPROJECT_FILENAME};

/// Options consumed by the fixer for every file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixConfiguration {
    /// Report files missing the declaration without writing them.
    pub check_only: bool,
    /// Process zero-byte files instead of skipping them.
    pub allow_empty: bool,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default, rename = "import-future-annotations")]
    /// The main configuration section.
    pub future_annotations: FutureAnnotationsConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
    /// Config files found on the way up that failed to parse, with the
    /// parser message.
    #[serde(skip)]
    pub rejected_files: Vec<(PathBuf, String)>,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
/// Options that may be set in a configuration file.
pub struct FutureAnnotationsConfig {
    /// Default for `--check-only`.
    pub check_only: Option<bool>,
    /// Default for `--allow-empty`.
    pub allow_empty: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: PyProjectTool,
}

#[derive(Debug, Deserialize, Default)]
struct PyProjectTool {
    #[serde(default, rename = "import-future-annotations")]
    future_annotations: FutureAnnotationsConfig,
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// In each directory `.future-annotations.toml` is tried before
    /// `pyproject.toml`. Unreadable files are ignored; files that fail to
    /// parse are recorded in `rejected_files` and the search continues.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        // Canonical form so relative paths can still walk up past the cwd
        let mut current = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf());
        if current.is_file() {
            current.pop();
        }

        let mut rejected_files = Vec::new();
        loop {
            let dedicated = current.join(CONFIG_FILENAME);
            if let Ok(content) = fs::read_to_string(&dedicated) {
                match toml::from_str::<Config>(&content) {
                    Ok(mut config) => {
                        config.config_file_path = Some(dedicated);
                        config.rejected_files = rejected_files;
                        return config;
                    }
                    Err(err) => rejected_files.push((dedicated, err.message().to_owned())),
                }
            }

            let pyproject_toml = current.join(PYPROJECT_FILENAME);
            if let Ok(content) = fs::read_to_string(&pyproject_toml) {
                match toml::from_str::<PyProject>(&content) {
                    Ok(pyproject) => {
                        return Config {
                            future_annotations: pyproject.tool.future_annotations,
                            config_file_path: Some(pyproject_toml),
                            rejected_files,
                        };
                    }
                    Err(err) => rejected_files.push((pyproject_toml, err.message().to_owned())),
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config {
            rejected_files,
            ..Config::default()
        }
    }

    /// Combines command-line flags with this file configuration.
    ///
    /// Options are switches: either source turning one on enables it.
    #[must_use]
    pub fn resolve(&self, check_only: bool, allow_empty: bool) -> FixConfiguration {
        FixConfiguration {
            check_only: check_only || self.future_annotations.check_only.unwrap_or(false),
            allow_empty: allow_empty || self.future_annotations.allow_empty.unwrap_or(false),
        }
    }
}

/// Configurations already loaded, keyed by the directory of the file.
///
/// Files of one batch may live in different projects, so each file gets the
/// configuration found above its own directory.
#[derive(Debug, Default)]
pub struct ConfigCache {
    by_dir: HashMap<PathBuf, Config>,
}

impl ConfigCache {
    /// Returns the configuration governing `path`, loading it on first use.
    pub fn for_file(&mut self, path: &Path) -> &Config {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        self.by_dir
            .entry(dir)
            .or_insert_with_key(|dir| Config::load_from_path(dir))
    }
}
