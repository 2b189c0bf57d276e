use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Order in which legal moves are listed. Search order depends on it.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    /// (column, row) offset.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }

    pub fn code(&self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
        };
        write!(f, "{}", s)
    }
}

/// Directions taken from the root, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory(Vec<Direction>);

impl MoveHistory {
    pub fn push(&mut self, direction: Direction) {
        self.0.push(direction);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in &self.0 {
            write!(f, "{} ", direction.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_renders_codes_with_trailing_space() {
        let mut history = MoveHistory::default();
        assert_eq!(history.to_string(), "");

        history.push(Direction::Left);
        history.push(Direction::Up);
        history.push(Direction::Down);
        history.push(Direction::Right);
        assert_eq!(history.to_string(), "L U D R ");
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_offsets_are_unit_steps() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.as_offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
