use crate::direction::MoveHistory;
use crate::game::GameState;
use crate::search::Reporter;
use crate::tile::Tile;
use crossterm::style::{Color, Stylize};
use log::warn;
use std::fmt;
use std::io::Write;
use std::ops::ControlFlow;

fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Bridge => Color::Blue,
        Tile::Monster1 | Tile::Monster2 | Tile::Monster3 => Color::Red,
        Tile::Gold => Color::Yellow,
        Tile::Heart1 | Tile::Heart2 | Tile::Heart3 => Color::Green,
        Tile::Wall => Color::DarkGrey,
        Tile::Exit => Color::Magenta,
        Tile::Player => Color::Cyan,
    }
}

/// Same layout as `GameState`'s `Display`, with each tile coloured.
pub fn styled_board(state: &GameState) -> String {
    let mut out = String::new();
    for row in (0..state.size()).rev() {
        for column in 0..state.size() {
            let tile = state.tile_at(column, row);
            out.push_str(&tile.code().with(tile_color(tile)).to_string());
        }
        out.push('\n');
    }
    out
}

/// Prints search events the way the interactive solver always has.
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
    show_states: bool,
    stop_at_first_win: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: false,
            show_states: false,
            stop_at_first_win: false,
        }
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn show_states(mut self, show_states: bool) -> Self {
        self.show_states = show_states;
        self
    }

    pub fn stop_at_first_win(mut self, stop: bool) -> Self {
        self.stop_at_first_win = stop;
        self
    }

    pub fn board(&mut self, state: &GameState) {
        let board = if self.color {
            styled_board(state)
        } else {
            state.to_string()
        };
        self.emit(format_args!("{}", board));
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = self.out.write_fmt(args) {
            warn!("failed to write report: {}", err);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn explored(&mut self, state: &GameState) {
        if self.show_states {
            self.emit(format_args!("\n"));
            self.board(state);
        }
    }

    fn solved(&mut self, history: &MoveHistory) -> ControlFlow<()> {
        if self.color {
            let line = format!("It is possible :: {}", history);
            self.emit(format_args!("{}\n", line.as_str().green()));
        } else {
            self.emit(format_args!("It is possible :: {}\n", history));
        }

        if self.stop_at_first_win {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn exhausted(&mut self) {
        if self.color {
            self.emit(format_args!("{}\n", "It is NOT possible".red()));
        } else {
            self.emit(format_args!("It is NOT possible\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::game::tests::layout;
    use crate::sequence::TileSequence;
    use crate::tile::TileRange;

    fn output(reporter: ConsoleReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_report_lines() {
        let mut history = MoveHistory::default();
        history.push(Direction::Right);
        history.push(Direction::Up);

        let mut reporter = ConsoleReporter::new(Vec::new());
        assert!(reporter.solved(&history).is_continue());
        reporter.exhausted();

        assert_eq!(
            output(reporter),
            "It is possible :: R U \nIt is NOT possible\n"
        );
    }

    #[test]
    fn test_stop_at_first_win_breaks() {
        let mut reporter = ConsoleReporter::new(Vec::new()).stop_at_first_win(true);
        assert!(reporter.solved(&MoveHistory::default()).is_break());
    }

    #[test]
    fn test_states_printed_only_when_asked() {
        let state = layout(&["AU-2", ":)+1"], TileSequence::new(0, TileRange::WithWalls));

        let mut quiet = ConsoleReporter::new(Vec::new());
        quiet.explored(&state);
        assert_eq!(output(quiet), "");

        let mut verbose = ConsoleReporter::new(Vec::new()).show_states(true);
        verbose.explored(&state);
        assert_eq!(output(verbose), "\nAU-2\n:)+1\n");
    }

    #[test]
    fn test_styled_board_keeps_codes_in_order() {
        let state = layout(&["~~XX", ":)--"], TileSequence::new(0, TileRange::WithWalls));
        let styled = styled_board(&state);
        let lines: Vec<&str> = styled.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].find("~~").unwrap() < lines[0].find("XX").unwrap());
        assert!(lines[1].find(":)").unwrap() < lines[1].find("--").unwrap());
    }
}
