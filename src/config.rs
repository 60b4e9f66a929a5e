//! Configuration for complaint-desk
//!
//! Settings are layered: built-in defaults, then an optional user-level
//! config file, then an optional `complaint-desk.toml` in the project
//! directory, then `DESK_*` environment variables. Everything has a default,
//! so running with no configuration at all works.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding ticket and comment records
    pub root: PathBuf,
    /// Directory holding uploaded attachments
    pub uploads_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(".complaint-desk"),
            uploads_dir: PathBuf::from(".complaint-desk/uploads"),
        }
    }
}

/// Listing behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Page size used when the caller does not give one
    pub page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: crate::service::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub storage: StorageConfig,
    pub listing: ListingConfig,
}

impl DeskConfig {
    /// Load configuration for a project directory
    ///
    /// Sources, later ones winning: defaults, the user-level config file (if
    /// any), `<project>/complaint-desk.toml` (if any), `DESK_*` environment
    /// variables (e.g. `DESK_LISTING__PAGE_SIZE=25`).
    pub fn load(project_dir: &Path) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?);

        if let Some(user_file) = Self::user_config_file() {
            builder = builder.add_source(
                config::File::from(user_file).required(false),
            );
        }

        builder = builder
            .add_source(
                config::File::from(project_dir.join("complaint-desk.toml")).required(false),
            )
            .add_source(
                config::Environment::with_prefix("DESK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut loaded: Self = builder.build()?.try_deserialize()?;

        // Relative storage paths are anchored to the project directory.
        if loaded.storage.root.is_relative() {
            loaded.storage.root = project_dir.join(&loaded.storage.root);
        }
        if loaded.storage.uploads_dir.is_relative() {
            loaded.storage.uploads_dir = project_dir.join(&loaded.storage.uploads_dir);
        }

        Ok(loaded)
    }

    /// Per-user config file location, if a home directory exists
    fn user_config_file() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "complaint-desk")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_defaults_without_any_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = DeskConfig::load(temp_dir.path()).unwrap();

        assert_eq!(config.listing.page_size, 10);
        assert_eq!(config.storage.root, temp_dir.path().join(".complaint-desk"));
        assert!(config.storage.uploads_dir.starts_with(temp_dir.path()));
    }

    #[test]
    #[serial]
    fn test_project_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("complaint-desk.toml"),
            "[listing]\npage_size = 25\n\n[storage]\nroot = \"records\"\n",
        )
        .unwrap();

        let config = DeskConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.listing.page_size, 25);
        assert_eq!(config.storage.root, temp_dir.path().join("records"));
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("complaint-desk.toml"),
            "[listing]\npage_size = 25\n",
        )
        .unwrap();

        unsafe { std::env::set_var("DESK_LISTING__PAGE_SIZE", "50") };
        let config = DeskConfig::load(temp_dir.path());
        unsafe { std::env::remove_var("DESK_LISTING__PAGE_SIZE") };

        assert_eq!(config.unwrap().listing.page_size, 50);
    }
}
