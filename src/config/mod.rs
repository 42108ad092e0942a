//! Configuration file support for pixelpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/pixelpad/config.toml`. Settings include editor defaults,
//! the offered grid sizes, custom palettes and gallery storage.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::GalleryStorageMode;
pub use types::{EditorConfig, GalleryConfig, GridConfig};

use crate::grid::{DEFAULT_PALETTE, MAX_GRID_SIZE, Palette, PaletteSet};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [editor]
/// default_grid_size = 16
/// default_palette = "classic"
/// default_mode = "mirror"
///
/// [grid]
/// allowed_sizes = [8, 16, 24, 32]
///
/// [palettes]
/// sunset = ["#ff6b6b", "#feca57", "#48dbfb"]
///
/// [gallery]
/// storage = "auto"
/// max_drawings = 100
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Startup defaults (grid size, palette, color, drawing mode)
    #[serde(default)]
    pub editor: EditorConfig,

    /// Offered grid sizes
    #[serde(default)]
    pub grid: GridConfig,

    /// Extra palettes as lists of hex colors; a name matching a built-in
    /// palette replaces it
    #[serde(default)]
    pub palettes: BTreeMap<String, Vec<String>>,

    /// Drawing gallery storage
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped or replaced by a default and a warning is
    /// logged.
    ///
    /// Validated values:
    /// - `grid.allowed_sizes`: each 1 - 128, sorted, duplicates removed
    /// - `editor.default_grid_size`: one of the allowed sizes
    /// - `palettes`: unparsable colors dropped, empty palettes removed
    /// - `editor.default_palette`: a known palette
    /// - `editor.default_color_index`: within the default palette
    /// - `gallery.custom_directory`: required for custom storage
    pub(crate) fn validate_and_clamp(&mut self) {
        let sizes = &mut self.grid.allowed_sizes;
        for size in sizes.iter_mut() {
            if !(1..=MAX_GRID_SIZE).contains(size) {
                warn!("Invalid grid size {size}, clamping to 1-{MAX_GRID_SIZE} range");
                *size = (*size).clamp(1, MAX_GRID_SIZE);
            }
        }
        sizes.sort_unstable();
        sizes.dedup();
        if sizes.is_empty() {
            warn!("grid.allowed_sizes is empty, using defaults");
            *sizes = types::default_allowed_sizes();
        }

        if !self
            .grid
            .allowed_sizes
            .contains(&self.editor.default_grid_size)
        {
            let fallback = self
                .grid
                .allowed_sizes
                .iter()
                .copied()
                .min_by_key(|size| size.abs_diff(self.editor.default_grid_size))
                .unwrap_or(crate::grid::DEFAULT_GRID_SIZE);
            warn!(
                "default_grid_size {} is not an allowed size, using {}",
                self.editor.default_grid_size, fallback
            );
            self.editor.default_grid_size = fallback;
        }

        self.palettes.retain(|name, colors| {
            let (palette, rejected) = Palette::from_hex_list(name.as_str(), colors.as_slice());
            for entry in &rejected {
                warn!("Ignoring invalid color '{entry}' in palette '{name}'");
            }
            if palette.is_empty() {
                warn!("Palette '{name}' has no valid colors, ignoring it");
                return false;
            }
            colors.retain(|entry| !rejected.contains(entry));
            true
        });

        let palettes = self.palette_set();
        let palette_len = match palettes.get(&self.editor.default_palette) {
            Some(palette) => palette.len(),
            None => {
                warn!(
                    "Unknown default_palette '{}', falling back to '{}'",
                    self.editor.default_palette, DEFAULT_PALETTE
                );
                self.editor.default_palette = DEFAULT_PALETTE.to_string();
                palettes.get(DEFAULT_PALETTE).map_or(0, Palette::len)
            }
        };

        if self.editor.default_color_index >= palette_len {
            warn!(
                "default_color_index {} is out of range for palette '{}' ({} colors), using 0",
                self.editor.default_color_index, self.editor.default_palette, palette_len
            );
            self.editor.default_color_index = 0;
        }

        if self.gallery.storage == GalleryStorageMode::Custom
            && self
                .gallery
                .custom_directory
                .as_deref()
                .is_none_or(|dir| dir.trim().is_empty())
        {
            warn!("gallery.storage is \"custom\" but custom_directory is not set, using \"auto\"");
            self.gallery.storage = GalleryStorageMode::Auto;
        }
    }

    /// Built-in palettes with the configured ones merged over them.
    pub fn palette_set(&self) -> PaletteSet {
        let mut set = PaletteSet::builtin();
        for (name, colors) in &self.palettes {
            let (palette, _) = Palette::from_hex_list(name.as_str(), colors.as_slice());
            set.insert(palette);
        }
        set
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pixelpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pixelpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if the
    /// file does not exist. Loaded values are validated and clamped.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to `~/.config/pixelpad/config.toml`,
    /// creating the parent directory if needed.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config
    /// directory and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        fs::write(&config_path, Self::example_toml())
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// The documented example configuration shipped with the binary.
    pub fn example_toml() -> &'static str {
        include_str!("../../config.example.toml")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
