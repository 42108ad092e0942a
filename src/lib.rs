//! Library exports for the pixelpad grid painting engine.
//!
//! The engine ([`input::EditorState`]) is independent of any surface: hosts
//! translate pointer input into [`input::PointerEvent`]s and draw from the
//! grid, palette and dirty-cell accessors. Configuration and the drawing
//! gallery are exposed so that other front ends can share them with the
//! bundled command-line tool.

pub mod config;
pub mod error;
pub mod gallery;
pub mod grid;
pub mod input;
pub mod script;
pub mod ui;
pub mod util;

pub use config::Config;
pub use error::EditorError;
pub use input::EditorState;
