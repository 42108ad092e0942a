use crate::input::{
    DrawingMode,
    events::PointerEvent,
    tool::StrokeMode,
};
use log::debug;

use super::{DragState, EditorState, StateChange};

impl EditorState {
    /// Dispatches a pointer event to the stroke operations.
    ///
    /// Both `Up` and `LeaveDocument` end the current stroke; hosts must forward
    /// them for releases anywhere in the document, not only over the grid.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { row, col } => self.begin_stroke(row, col),
            PointerEvent::Enter { row, col } => self.continue_stroke(row, col),
            PointerEvent::Up | PointerEvent::LeaveDocument => self.end_stroke(),
        }
    }

    /// Starts a stroke at a cell.
    ///
    /// # Behavior
    /// - Cell already holds the active color: the stroke erases
    /// - Anything else (empty, or another color): the stroke paints
    ///
    /// The mode is fixed for the whole stroke and applied to the starting cell
    /// immediately. Off-grid coordinates are ignored and start no stroke.
    pub fn begin_stroke(&mut self, row: usize, col: usize) {
        let Some(current) = self.grid.get(row, col) else {
            debug!("Ignoring stroke start outside the grid at ({row}, {col})");
            return;
        };

        let mode = if current == self.active_cell_value() {
            StrokeMode::Remove
        } else {
            StrokeMode::Add
        };

        if self.drag.is_active() {
            debug!("Stroke started while another was active; replacing it");
        }
        self.drag = DragState::Stroking { mode };
        debug!("Stroke started at ({row}, {col}) in {mode:?} mode");

        self.paint_cell(row, col, mode);
    }

    /// Extends the active stroke onto a cell. No-op while idle.
    ///
    /// Revisiting a cell is harmless: the stroke writes the same value again.
    pub fn continue_stroke(&mut self, row: usize, col: usize) {
        if let DragState::Stroking { mode } = self.drag {
            self.paint_cell(row, col, mode);
        }
    }

    /// Ends the active stroke. Idempotent.
    pub fn end_stroke(&mut self) {
        if self.drag.is_active() {
            debug!("Stroke ended");
        }
        self.drag = DragState::Idle;
    }

    /// Applies a stroke mode to one cell, and to its mirror in mirror mode.
    ///
    /// Off-grid coordinates are ignored. On odd-sized grids the center cell
    /// is its own mirror and is written once.
    fn paint_cell(&mut self, row: usize, col: usize, mode: StrokeMode) {
        let Some(mirrored) = self.grid.mirror_of(row, col) else {
            return;
        };

        let value = match mode {
            StrokeMode::Add => self.active_cell_value(),
            StrokeMode::Remove => 0,
        };

        let mut targets = vec![(row, col)];
        if self.drawing_mode == DrawingMode::Mirror && mirrored != (row, col) {
            targets.push(mirrored);
        }

        let mut changed = Vec::with_capacity(targets.len());
        for (r, c) in targets {
            if self.grid.set(r, c, value) {
                self.dirty_tracker.mark_cell(r, c);
                changed.push((r, c));
            }
        }

        if !changed.is_empty() {
            self.needs_redraw = true;
            self.notify(StateChange::CellsPainted { cells: changed });
        }
    }
}
