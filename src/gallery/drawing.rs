use super::GalleryError;
use crate::grid::GridSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest accepted drawing title, in characters.
pub const TITLE_MAX_LEN: usize = 50;

/// A saved drawing as stored in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawing {
    pub id: String,
    pub title: String,
    pub grid_data: Vec<Vec<u32>>,
    pub grid_size: usize,
    pub palette_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_permanent: bool,
}

impl Drawing {
    /// The grid payload, ready for [`crate::input::EditorState::load_grid`].
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            grid_data: self.grid_data.clone(),
            grid_size: self.grid_size,
            palette_name: self.palette_name.clone(),
        }
    }

    /// Number of non-empty cells.
    pub fn painted_count(&self) -> usize {
        self.grid_data.iter().flatten().filter(|&&v| v != 0).count()
    }
}

/// Trims a title and checks it is non-empty and at most [`TITLE_MAX_LEN`]
/// characters.
pub fn validate_title(raw: &str) -> Result<String, GalleryError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(GalleryError::EmptyTitle);
    }
    let len = title.chars().count();
    if len > TITLE_MAX_LEN {
        return Err(GalleryError::TitleTooLong {
            len,
            max: TITLE_MAX_LEN,
        });
    }
    Ok(title.to_string())
}
