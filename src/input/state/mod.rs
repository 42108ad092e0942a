mod actions;
mod core;
mod pointer;
mod render;

pub use self::core::{DragState, EditorState, Observer, StateChange};
