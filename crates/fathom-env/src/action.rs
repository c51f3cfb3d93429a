//! The nine discrete moves.

use std::fmt;

use fathom_core::EnvError;

/// A discrete agent action: stay in place or move to one of the eight
/// surrounding cells.
///
/// Codes follow compass order clockwise from north:
///
/// | code | action | Δrow | Δcol |
/// |------|--------|------|------|
/// | 0 | Stay      |  0 |  0 |
/// | 1 | North     | -1 |  0 |
/// | 2 | NorthEast | -1 | +1 |
/// | 3 | East      |  0 | +1 |
/// | 4 | SouthEast | +1 | +1 |
/// | 5 | South     | +1 |  0 |
/// | 6 | SouthWest | +1 | -1 |
/// | 7 | West      |  0 | -1 |
/// | 8 | NorthWest | -1 | -1 |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Action {
    /// Remain on the current cell.
    Stay = 0,
    /// Row - 1.
    North = 1,
    /// Row - 1, col + 1.
    NorthEast = 2,
    /// Col + 1.
    East = 3,
    /// Row + 1, col + 1.
    SouthEast = 4,
    /// Row + 1.
    South = 5,
    /// Row + 1, col - 1.
    SouthWest = 6,
    /// Col - 1.
    West = 7,
    /// Row - 1, col - 1.
    NorthWest = 8,
}

impl Action {
    /// Number of actions.
    pub const COUNT: usize = 9;

    /// All actions in code order.
    pub const ALL: [Action; 9] = [
        Action::Stay,
        Action::North,
        Action::NorthEast,
        Action::East,
        Action::SouthEast,
        Action::South,
        Action::SouthWest,
        Action::West,
        Action::NorthWest,
    ];

    /// The integer code of this action.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// `(Δrow, Δcol)` applied by this action.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Self::Stay => (0, 0),
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = EnvError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(EnvError::InvalidAction { code })
    }
}

impl From<Action> for u8 {
    fn from(a: Action) -> u8 {
        a.code()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stay => "stay",
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        };
        f.write_str(name)
    }
}
