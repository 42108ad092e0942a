//! Drawing mode and stroke mode selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a painted cell is applied to the grid.
///
/// Selected explicitly by the user; painting never changes it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    /// Paint only the cell under the pointer
    #[default]
    Normal,
    /// Also paint the point-symmetric cell `(N-1-row, N-1-col)`
    Mirror,
}

impl DrawingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Mirror => "mirror",
        }
    }
}

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "mirror" => Ok(Self::Mirror),
            other => Err(format!("unknown drawing mode '{other}' (expected normal or mirror)")),
        }
    }
}

/// What a stroke does to every cell it crosses.
///
/// Resolved once when the stroke begins and fixed until it ends, so a drag
/// never flips between painting and erasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeMode {
    /// Write the active color
    Add,
    /// Clear the cell
    Remove,
}
