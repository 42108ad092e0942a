//! Drawing gallery (save/list/load) support.
//!
//! Stores finished drawings in a single JSON file with locking and backup
//! rotation. Each entry carries the grid snapshot that the editor loads back
//! through [`crate::input::EditorState::load_grid`].

mod drawing;
mod options;
mod store;

pub use drawing::{Drawing, TITLE_MAX_LEN, validate_title};
pub use options::{GalleryOptions, options_from_config};
pub use store::GalleryStore;

use thiserror::Error;

/// Validation failures reported by gallery operations.
///
/// I/O problems are reported separately through `anyhow`; these variants can
/// be recovered with `downcast_ref` to tell user mistakes from disk errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("title is {len} characters long (max {max})")]
    TitleTooLong { len: usize, max: usize },

    #[error("no drawing with id '{0}'")]
    NotFound(String),

    #[error("id prefix '{0}' matches more than one drawing")]
    AmbiguousId(String),

    #[error("drawing '{0}' is permanent and cannot be deleted")]
    PermanentDrawing(String),
}
