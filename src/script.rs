//! Stroke scripts: a line-oriented way to drive the editor without a pointer.
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! # diagonal in the second palette color
//! color 1
//! down 0 0
//! move 1 1
//! move 2 2
//! up
//! ```
//!
//! | Command            | Effect                                  |
//! |--------------------|-----------------------------------------|
//! | `down R C`         | pointer pressed over cell `(R, C)`      |
//! | `move R C`         | pointer entered cell `(R, C)`           |
//! | `up`               | pointer released                        |
//! | `leave`            | pointer left the document               |
//! | `color I`          | select palette index `I` (zero-based)   |
//! | `mode normal\|mirror` | set the drawing mode                 |
//! | `palette NAME`     | switch palette                          |
//! | `resize N`         | replace the grid with an empty `N x N`  |
//! | `clear`            | erase every cell                        |

use crate::error::EditorError;
use crate::input::{DrawingMode, EditorState, PointerEvent};
use log::debug;
use thiserror::Error;

/// A parsed script command.
///
/// Coordinates are signed so that scripts may point off the grid to the
/// left/top; such events are dropped like any other off-grid pointer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Down { row: i64, col: i64 },
    Move { row: i64, col: i64 },
    Up,
    Leave,
    Color(usize),
    Mode(DrawingMode),
    Palette(String),
    Resize(usize),
    Clear,
}

/// A command together with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Editor {
        line: usize,
        #[source]
        source: EditorError,
    },
}

impl ScriptError {
    pub fn line(&self) -> usize {
        match self {
            Self::Parse { line, .. } | Self::Editor { line, .. } => *line,
        }
    }
}

/// Parses a whole script, stopping at the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command =
            parse_command(trimmed).map_err(|message| ScriptError::Parse { line, message })?;
        commands.push(ScriptLine { line, command });
    }
    Ok(commands)
}

fn parse_command(text: &str) -> Result<ScriptCommand, String> {
    let mut words = text.split_whitespace();
    let Some(keyword) = words.next() else {
        return Err("empty command".to_string());
    };
    let args: Vec<&str> = words.collect();

    let expect_args = |count: usize| -> Result<(), String> {
        if args.len() == count {
            Ok(())
        } else {
            Err(format!(
                "'{keyword}' takes {count} argument{}, got {}",
                if count == 1 { "" } else { "s" },
                args.len()
            ))
        }
    };

    match keyword.to_ascii_lowercase().as_str() {
        "down" => {
            expect_args(2)?;
            Ok(ScriptCommand::Down {
                row: parse_coord(args[0], "row")?,
                col: parse_coord(args[1], "column")?,
            })
        }
        "move" | "enter" => {
            expect_args(2)?;
            Ok(ScriptCommand::Move {
                row: parse_coord(args[0], "row")?,
                col: parse_coord(args[1], "column")?,
            })
        }
        "up" => expect_args(0).map(|()| ScriptCommand::Up),
        "leave" => expect_args(0).map(|()| ScriptCommand::Leave),
        "clear" => expect_args(0).map(|()| ScriptCommand::Clear),
        "color" => {
            expect_args(1)?;
            parse_count(args[0], "color index").map(ScriptCommand::Color)
        }
        "mode" => {
            expect_args(1)?;
            args[0].parse::<DrawingMode>().map(ScriptCommand::Mode)
        }
        "palette" => {
            expect_args(1)?;
            Ok(ScriptCommand::Palette(args[0].to_string()))
        }
        "resize" => {
            expect_args(1)?;
            parse_count(args[0], "grid size").map(ScriptCommand::Resize)
        }
        other => Err(format!("unknown command '{other}'")),
    }
}

fn parse_coord(text: &str, what: &str) -> Result<i64, String> {
    text.parse()
        .map_err(|_| format!("invalid {what} '{text}' (expected an integer)"))
}

fn parse_count(text: &str, what: &str) -> Result<usize, String> {
    text.parse()
        .map_err(|_| format!("invalid {what} '{text}' (expected a non-negative integer)"))
}

/// Applies parsed commands to the editor in order.
///
/// Pointer commands never fail. Tool and lifecycle commands report the
/// editor's error with the offending line; commands before it stay applied.
pub fn run_script(state: &mut EditorState, commands: &[ScriptLine]) -> Result<(), ScriptError> {
    for ScriptLine { line, command } in commands {
        let line = *line;
        let editor_err = |source: EditorError| ScriptError::Editor { line, source };
        match command {
            ScriptCommand::Down { row, col } => {
                if let Some((row, col)) = to_cell(*row, *col) {
                    state.handle_pointer(PointerEvent::Down { row, col });
                }
            }
            ScriptCommand::Move { row, col } => {
                if let Some((row, col)) = to_cell(*row, *col) {
                    state.handle_pointer(PointerEvent::Enter { row, col });
                }
            }
            ScriptCommand::Up => state.handle_pointer(PointerEvent::Up),
            ScriptCommand::Leave => state.handle_pointer(PointerEvent::LeaveDocument),
            ScriptCommand::Color(index) => state.set_active_color(*index).map_err(editor_err)?,
            ScriptCommand::Mode(mode) => state.set_drawing_mode(*mode),
            ScriptCommand::Palette(name) => state.set_palette(name).map_err(editor_err)?,
            ScriptCommand::Resize(size) => state.resize_grid(*size).map_err(editor_err)?,
            ScriptCommand::Clear => state.clear_all(),
        }
        debug!("line {line}: applied {command:?}");
    }
    Ok(())
}

fn to_cell(row: i64, col: i64) -> Option<(usize, usize)> {
    Some((usize::try_from(row).ok()?, usize::try_from(col).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_line_numbers() {
        let script = "\
# heart
color 2

down 0 0
move 0 1
  MOVE -1 3
up
leave
mode mirror
palette pastel
resize 8
clear
";
        let commands = parse_script(script).unwrap();
        let lines: Vec<_> = commands.iter().map(|c| c.line).collect();
        assert_eq!(lines, vec![2, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(commands[0].command, ScriptCommand::Color(2));
        assert_eq!(commands[3].command, ScriptCommand::Move { row: -1, col: 3 });
        assert_eq!(commands[6].command, ScriptCommand::Mode(DrawingMode::Mirror));
        assert_eq!(
            commands[7].command,
            ScriptCommand::Palette("pastel".to_string())
        );
    }

    #[test]
    fn parse_errors_report_line() {
        let err = parse_script("down 0 0\nsmudge 1 1\n").unwrap_err();
        assert_eq!(err.line(), 2);
        assert!(err.to_string().contains("unknown command 'smudge'"));

        let err = parse_script("\n\ndown 1\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: 'down' takes 2 arguments, got 1");

        let err = parse_script("color -1").unwrap_err();
        assert!(err.to_string().contains("invalid color index '-1'"));

        let err = parse_script("mode sideways").unwrap_err();
        assert!(err.to_string().contains("unknown drawing mode"));
    }

    #[test]
    fn runs_strokes_against_editor() {
        let mut state = EditorState::default();
        let commands = parse_script(
            "resize 8\nmode mirror\ncolor 2\ndown 0 0\nmove 0 1\nmove -3 9\nup\nmove 4 4\n",
        )
        .unwrap();
        run_script(&mut state, &commands).unwrap();

        let grid = state.grid();
        assert_eq!(grid.size(), 8);
        assert_eq!(grid.get(0, 0), Some(3));
        assert_eq!(grid.get(7, 7), Some(3));
        assert_eq!(grid.get(0, 1), Some(3));
        assert_eq!(grid.get(7, 6), Some(3));
        assert_eq!(grid.get(4, 4), Some(0));
        assert_eq!(grid.painted_count(), 4);
    }

    #[test]
    fn editor_errors_keep_earlier_commands() {
        let mut state = EditorState::default();
        let commands = parse_script("down 1 1\nup\ncolor 40\ndown 2 2\n").unwrap();
        let err = run_script(&mut state, &commands).unwrap_err();

        assert_eq!(err.line(), 3);
        assert!(matches!(
            err,
            ScriptError::Editor {
                source: EditorError::InvalidColorIndex { index: 40, .. },
                ..
            }
        ));
        assert_eq!(state.grid().get(1, 1), Some(1));
        assert_eq!(state.grid().get(2, 2), Some(0));
    }
}
