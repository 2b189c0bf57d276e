use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Bridge,
    Monster1,
    Monster2,
    Monster3,
    Gold,
    Heart1,
    Heart2,
    Heart3,
    Wall,
    Exit,
    Player,
}

/// What stepping onto a tile does to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Health(i32),
    Gold,
    Exit,
}

impl Tile {
    pub fn from_index(index: u8) -> Option<Self> {
        let tile = match index {
            0 => Tile::Bridge,
            1 => Tile::Monster1,
            2 => Tile::Monster2,
            3 => Tile::Monster3,
            4 => Tile::Gold,
            5 => Tile::Heart1,
            6 => Tile::Heart2,
            7 => Tile::Heart3,
            8 => Tile::Wall,
            9 => Tile::Exit,
            10 => Tile::Player,
            _ => return None,
        };
        Some(tile)
    }

    /// Inverse of `code`.
    pub fn from_code(code: &str) -> Option<Self> {
        (0..=10u8)
            .filter_map(Tile::from_index)
            .find(|tile| tile.code() == code)
    }

    pub fn effect(&self) -> Effect {
        match self {
            Tile::Monster1 => Effect::Health(-1),
            Tile::Monster2 => Effect::Health(-2),
            Tile::Monster3 => Effect::Health(-3),
            Tile::Heart1 => Effect::Health(1),
            Tile::Heart2 => Effect::Health(2),
            Tile::Heart3 => Effect::Health(3),
            Tile::Gold => Effect::Gold,
            Tile::Exit => Effect::Exit,
            Tile::Bridge | Tile::Wall | Tile::Player => Effect::None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Tile::Bridge => "~~",
            Tile::Monster1 => "-1",
            Tile::Monster2 => "-2",
            Tile::Monster3 => "-3",
            Tile::Gold => "AU",
            Tile::Heart1 => "+1",
            Tile::Heart2 => "+2",
            Tile::Heart3 => "+3",
            Tile::Wall => "--",
            Tile::Exit => "XX",
            Tile::Player => ":)",
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The set of tiles the sequence generator draws from. Exit and Player are
/// placed, never generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TileRange {
    /// Bridge through Wall.
    #[default]
    WithWalls,
    /// Bridge through Heart3.
    WithoutWalls,
}

impl TileRange {
    pub fn cardinality(&self) -> u8 {
        match self {
            TileRange::WithWalls => 9,
            TileRange::WithoutWalls => 8,
        }
    }
}
