//! Input handling and the grid painting state machine.
//!
//! This module translates pointer events into grid mutations. It owns the
//! grid, the tool state (active color, drawing mode) and the per-gesture drag
//! state, and notifies the presentation layer about every change.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{DragState, EditorState, StateChange};
pub use tool::{DrawingMode, StrokeMode};
