//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the drawing gallery is stored on disk.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryStorageMode {
    /// `$XDG_DATA_HOME/pixelpad` (falls back to the config directory)
    #[default]
    Auto,
    /// Next to `config.toml`
    Config,
    /// The directory named by `gallery.custom_directory`
    Custom,
}
