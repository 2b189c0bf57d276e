use crate::direction::{Direction, MoveHistory};
use crate::error::{Error, Result};
use crate::sequence::TileSequence;
use crate::tile::{Effect, Tile};
use std::fmt;

pub const DEFAULT_HEALTH: i32 = 5;

/// One snapshot of the puzzle. States are never updated after they are
/// produced; `make_move` returns a new state and leaves `self` untouched.
#[derive(Clone, Debug)]
pub struct GameState {
    size: usize,
    // column-major: index = column * size + row
    board: Vec<Tile>,
    health: i32,
    gold: u32,
    player: (usize, usize),
    history: MoveHistory,
    won: bool,
    sequence: TileSequence,
    cursor: usize,
}

impl GameState {
    /// Fills the board from the sequence in column-major order, then places
    /// the player at (0, 0) and the exit in the opposite corner.
    pub fn new(size: usize, sequence: TileSequence) -> Self {
        let mut state = Self {
            size,
            board: Vec::with_capacity(size * size),
            health: DEFAULT_HEALTH,
            gold: 0,
            player: (0, 0),
            history: MoveHistory::default(),
            won: false,
            sequence,
            cursor: 0,
        };

        for _column in 0..size {
            for _row in 0..size {
                let tile = state.next_tile();
                state.board.push(tile);
            }
        }
        state.set(0, 0, Tile::Player);
        state.set(size - 1, size - 1, Tile::Exit);

        state
    }

    /// Builds a state from an explicit column-major board. The generation
    /// cursor starts at 0.
    pub fn from_tiles(size: usize, tiles: Vec<Tile>, sequence: TileSequence) -> Result<Self> {
        if size < 2 {
            return Err(Error::BoardTooSmall { size });
        }
        if tiles.len() != size * size {
            return Err(Error::InvalidBoardLength {
                size,
                expected: size * size,
                got: tiles.len(),
            });
        }

        let players: Vec<usize> = tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == Tile::Player)
            .map(|(i, _)| i)
            .collect();
        if players.len() != 1 {
            return Err(Error::InvalidMarkerCount {
                tile: "player",
                count: players.len(),
            });
        }
        let exits = tiles.iter().filter(|&&tile| tile == Tile::Exit).count();
        if exits != 1 {
            return Err(Error::InvalidMarkerCount {
                tile: "exit",
                count: exits,
            });
        }

        let at = players[0];
        Ok(Self {
            size,
            board: tiles,
            health: DEFAULT_HEALTH,
            gold: 0,
            player: (at / size, at % size),
            history: MoveHistory::default(),
            won: false,
            sequence,
            cursor: 0,
        })
    }

    /// Builds a state from rows written top (highest row) to bottom, each row
    /// a run of two-character tile codes as printed by `Display`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], sequence: TileSequence) -> Result<Self> {
        let size = rows.len();
        let mut tiles = vec![Tile::Bridge; size * size];

        for (k, line) in rows.iter().enumerate() {
            let codes: Vec<char> = line.as_ref().chars().collect();
            if codes.len() != size * 2 {
                return Err(Error::InvalidRowWidth {
                    row: k,
                    expected: size * 2,
                    got: codes.len(),
                });
            }
            let row = size - 1 - k;
            for (column, pair) in codes.chunks(2).enumerate() {
                let code: String = pair.iter().collect();
                let tile = Tile::from_code(&code)
                    .ok_or_else(|| Error::UnknownTileCode { code: code.clone(), row: k })?;
                tiles[column * size + row] = tile;
            }
        }

        Self::from_tiles(size, tiles, sequence)
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// (column, row) of the player.
    pub fn player(&self) -> (usize, usize) {
        self.player
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Next sequence index this state will draw from.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn sequence(&self) -> &TileSequence {
        &self.sequence
    }

    pub fn tile_at(&self, column: usize, row: usize) -> Tile {
        self.board[self.index(column, row)]
    }

    pub fn is_win(&self) -> bool {
        self.won
    }

    pub fn is_loss(&self) -> bool {
        self.health <= 0
    }

    pub fn available_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                self.neighbour(direction)
                    .map_or(false, |(column, row)| self.tile_at(column, row) != Tile::Wall)
            })
            .collect()
    }

    pub fn make_move(&self, direction: Direction) -> GameState {
        let mut next = self.clone();
        next.won = false;
        next.apply_move(direction);
        next
    }

    fn apply_move(&mut self, direction: Direction) {
        let (column, row) = self.player;
        let (new_column, new_row) = self.neighbour(direction).unwrap_or_else(|| {
            panic!(
                "move {} from ({}, {}) leaves a board of size {}",
                direction, column, row, self.size
            )
        });

        let target = self.tile_at(new_column, new_row);
        assert_ne!(
            target,
            Tile::Wall,
            "move {} from ({}, {}) lands on a wall",
            direction,
            column,
            row
        );

        match target.effect() {
            Effect::Health(delta) => self.health += delta,
            Effect::Gold => self.gold += 1,
            Effect::Exit => self.won = true,
            Effect::None => {}
        }

        self.set(new_column, new_row, Tile::Player);

        let last = self.size - 1;
        match direction {
            Direction::Left => {
                for x in column..last {
                    self.set(x, row, self.tile_at(x + 1, row));
                }
                let tile = self.next_tile();
                self.set(last, row, tile);
            }
            Direction::Right => {
                for x in (1..=column).rev() {
                    self.set(x, row, self.tile_at(x - 1, row));
                }
                let tile = self.next_tile();
                self.set(0, row, tile);
            }
            Direction::Up => {
                for y in (1..=row).rev() {
                    self.set(column, y, self.tile_at(column, y - 1));
                }
                let tile = self.next_tile();
                self.set(column, 0, tile);
            }
            Direction::Down => {
                for y in row..last {
                    self.set(column, y, self.tile_at(column, y + 1));
                }
                let tile = self.next_tile();
                self.set(column, last, tile);
            }
        }

        self.history.push(direction);
        self.player = (new_column, new_row);
    }

    fn neighbour(&self, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.as_offset();
        let column = self.player.0 as isize + dx;
        let row = self.player.1 as isize + dy;
        let size = self.size as isize;

        if column >= 0 && column < size && row >= 0 && row < size {
            Some((column as usize, row as usize))
        } else {
            None
        }
    }

    fn next_tile(&mut self) -> Tile {
        let tile = self.sequence.tile_at(self.cursor);
        self.cursor += 1;
        tile
    }

    fn index(&self, column: usize, row: usize) -> usize {
        column * self.size + row
    }

    fn set(&mut self, column: usize, row: usize, tile: Tile) {
        let index = self.index(column, row);
        self.board[index] = tile;
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.size).rev() {
            for column in 0..self.size {
                write!(f, "{}", self.tile_at(column, row))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
