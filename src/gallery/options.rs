use crate::config::{GalleryConfig, GalleryStorageMode};
use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

/// Runtime options derived from configuration for the drawing gallery.
#[derive(Debug, Clone)]
pub struct GalleryOptions {
    pub base_dir: PathBuf,
    pub backup_retention: usize,
    pub max_drawings: usize,
}

impl GalleryOptions {
    /// Creates options with defaults for the given directory. Used directly by
    /// tests and by the `--gallery-dir` override.
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            backup_retention: 1,
            max_drawings: 0,
        }
    }

    pub fn gallery_file_path(&self) -> PathBuf {
        self.base_dir.join("gallery.json")
    }

    pub fn backup_file_path(&self) -> PathBuf {
        self.base_dir.join("gallery.json.bak")
    }

    pub fn lock_file_path(&self) -> PathBuf {
        self.base_dir.join("gallery.lock")
    }
}

/// Build runtime gallery options from configuration values.
///
/// `config_dir` is the directory holding `config.toml`; it backs the
/// `config` storage mode and is the fallback when no data directory exists.
pub fn options_from_config(
    gallery_cfg: &GalleryConfig,
    config_dir: &Path,
) -> Result<GalleryOptions> {
    let base_dir = match gallery_cfg.storage {
        GalleryStorageMode::Auto => {
            let root = dirs::data_dir().unwrap_or_else(|| config_dir.to_path_buf());
            root.join("pixelpad")
        }
        GalleryStorageMode::Config => config_dir.to_path_buf(),
        GalleryStorageMode::Custom => {
            let raw = gallery_cfg.custom_directory.as_ref().ok_or_else(|| {
                anyhow!("gallery.custom_directory must be set when storage = \"custom\"")
            })?;
            let expanded = expand_tilde(raw);
            if expanded.as_os_str().is_empty() {
                return Err(anyhow!(
                    "gallery.custom_directory resolved to an empty path"
                ));
            }
            expanded
        }
    };

    let mut options = GalleryOptions::new(base_dir);
    options.backup_retention = gallery_cfg.backup_retention;
    options.max_drawings = gallery_cfg.max_drawings;

    Ok(options)
}

pub(crate) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
