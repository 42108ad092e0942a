/// Terminal rendering: grid previews, palette swatches, drawing summaries
use crate::gallery::Drawing;
use crate::grid::{Color, Palette};
use crate::input::EditorState;
use chrono::Local;
use std::fmt::Write as _;

// ============================================================================
// Glyphs (not configurable)
// ============================================================================

/// Empty cell in plain output
const EMPTY_GLYPH: char = '.';
/// Value the palette cannot display
const UNKNOWN_GLYPH: char = '?';
/// Palette index too large for a single base-36 digit
const OVERFLOW_GLYPH: char = '+';
/// Filled block used by the ANSI renderer (two columns per cell)
const BLOCK: &str = "\u{2588}\u{2588}";
/// Empty cell in ANSI output
const ANSI_EMPTY: &str = "\u{00b7} ";
/// Unknown value in ANSI output
const ANSI_UNKNOWN: &str = "??";
const ANSI_RESET: &str = "\x1b[0m";
const ANSI_DIM: &str = "\x1b[2m";

/// How cells are drawn in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// One character per cell: `.` empty, base-36 palette index, `?` unknown
    #[default]
    Plain,
    /// 24-bit colored blocks
    Ansi,
}

/// Renders grid rows, one output line per row.
///
/// `palette` decides which values are displayable; with `None` every painted
/// cell is shown as unknown.
pub fn render_rows(rows: &[Vec<u32>], palette: Option<&Palette>, style: RenderStyle) -> String {
    let mut out = String::new();
    for row in rows {
        for &value in row {
            let color = palette.and_then(|p| p.color_for_cell(value));
            match style {
                RenderStyle::Plain => out.push(plain_glyph(value, color)),
                RenderStyle::Ansi => push_ansi_cell(&mut out, value, color),
            }
        }
        out.push('\n');
    }
    out
}

/// Renders the editor's grid with its active palette.
pub fn render_state(state: &EditorState, style: RenderStyle) -> String {
    render_rows(state.grid().rows(), state.active_palette(), style)
}

/// One line per color: index, hex value and (in ANSI mode) a swatch.
pub fn render_palette(palette: &Palette, style: RenderStyle) -> String {
    let mut out = String::new();
    for (index, color) in palette.colors().iter().enumerate() {
        let _ = write!(out, "  {} {:>2}  {}", index_glyph(index), index, color);
        if style == RenderStyle::Ansi {
            out.push_str("  ");
            push_colored(&mut out, *color, BLOCK);
        }
        out.push('\n');
    }
    out
}

/// One-line gallery listing entry.
pub fn render_drawing_line(drawing: &Drawing) -> String {
    let id_prefix: String = drawing.id.chars().take(8).collect();
    format!(
        "{}  {:<24}  {:>3}x{:<3}  {:<10}  {}{}",
        id_prefix,
        drawing.title,
        drawing.grid_size,
        drawing.grid_size,
        drawing.palette_name,
        format_timestamp(drawing),
        if drawing.is_permanent { "  [permanent]" } else { "" }
    )
}

/// Multi-line header shown above a drawing preview.
pub fn render_drawing_details(drawing: &Drawing) -> String {
    format!(
        "Title:    {}{}\nId:       {}\nGrid:     {}x{} ({} painted)\nPalette:  {}\nCreated:  {}\n",
        drawing.title,
        if drawing.is_permanent { " [permanent]" } else { "" },
        drawing.id,
        drawing.grid_size,
        drawing.grid_size,
        drawing.painted_count(),
        drawing.palette_name,
        format_timestamp(drawing),
    )
}

fn format_timestamp(drawing: &Drawing) -> String {
    drawing
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn plain_glyph(value: u32, color: Option<Color>) -> char {
    if value == 0 {
        return EMPTY_GLYPH;
    }
    match color {
        Some(_) => index_glyph((value - 1) as usize),
        None => UNKNOWN_GLYPH,
    }
}

fn index_glyph(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| char::from_digit(i, 36))
        .unwrap_or(OVERFLOW_GLYPH)
}

fn push_ansi_cell(out: &mut String, value: u32, color: Option<Color>) {
    match (value, color) {
        (0, _) => {
            out.push_str(ANSI_DIM);
            out.push_str(ANSI_EMPTY);
            out.push_str(ANSI_RESET);
        }
        (_, Some(color)) => push_colored(out, color, BLOCK),
        (_, None) => out.push_str(ANSI_UNKNOWN),
    }
}

fn push_colored(out: &mut String, color: Color, text: &str) {
    let _ = write!(
        out,
        "\x1b[38;2;{};{};{}m{}{}",
        color.r, color.g, color.b, text, ANSI_RESET
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PaletteSet;

    fn gameboy() -> Palette {
        PaletteSet::builtin().get("gameboy").unwrap().clone()
    }

    #[test]
    fn plain_render_uses_index_glyphs() {
        let rows = vec![vec![0, 1, 4], vec![5, 0, 2]];
        let text = render_rows(&rows, Some(&gameboy()), RenderStyle::Plain);
        assert_eq!(text, ".03\n?.1\n");
    }

    #[test]
    fn plain_render_without_palette_marks_everything_unknown() {
        let rows = vec![vec![0, 1]];
        assert_eq!(render_rows(&rows, None, RenderStyle::Plain), ".?\n");
    }

    #[test]
    fn index_glyph_is_base36() {
        assert_eq!(index_glyph(9), '9');
        assert_eq!(index_glyph(10), 'a');
        assert_eq!(index_glyph(35), 'z');
        assert_eq!(index_glyph(36), '+');
    }

    #[test]
    fn ansi_render_colors_cells() {
        let rows = vec![vec![1, 0, 9]];
        let text = render_rows(&rows, Some(&gameboy()), RenderStyle::Ansi);
        assert!(text.starts_with("\x1b[38;2;15;56;15m"));
        assert!(text.contains(ANSI_EMPTY));
        assert!(text.contains(ANSI_UNKNOWN));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn render_state_follows_active_palette() {
        let mut state = EditorState::default();
        state.resize_grid(8).unwrap();
        state.set_active_color(7).unwrap();
        state.begin_stroke(0, 0);
        state.end_stroke();

        let text = render_state(&state, RenderStyle::Plain);
        assert!(text.starts_with("7......."));
        assert_eq!(text.lines().count(), 8);

        state.set_palette("gameboy").unwrap();
        assert!(render_state(&state, RenderStyle::Plain).starts_with("?......."));
    }

    #[test]
    fn palette_listing_shows_hex_values() {
        let text = render_palette(&gameboy(), RenderStyle::Plain);
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().next().unwrap().contains("#0f380f"));
    }
}
