//! A set of pre-made general purpose mazes

use crate::grid::Maze;
use serde::{Deserialize, Serialize};

/// The classic arcade [`Maze`], in the digit encoding
///
/// Out-of-bounds areas are filled with walls; the ghost chamber interior is
/// encoded as empty space
///
/// ```
/// use pacmaze::grid::Maze;
/// use pacmaze::standard_mazes::MAZE_PACMAN;
///
/// let maze: Maze = MAZE_PACMAN.parse().unwrap();
/// assert_eq!(maze.total_dots(), 244);
/// ```
pub const MAZE_PACMAN: &str = "\
00000000000000000000000000000000
02222003222000000000002222232200
02002002002000000000002002000200
02002222002000000000002002000200
02002000002000000000002002000200
02002000002000000000002002000200
02002222222222222222222222222200
02000002002000001000000002000200
02000002002000001000000002000200
02002222002111111111002222000200
02002002002001000001002002000200
02002002002001011101002002000200
02222002222001011101112002222200
02000001000001011111000002000000
02000001000001011111000002000000
02222002222001011101112002222200
02002002002001011101002002000200
02002002002001000001002002000200
02002222002111111111002222000200
02000002002000001000000002000200
02000002002000001000000002000200
02002222222222222222222222222200
02002000002000000000002002000200
02002000002000000000002002000200
02002222002000000000002002000200
02002002002000000000002002000200
02222003222000000000002222232200
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
";

/// A (mostly) blank [`Maze`] - (1, 1) is walkable
///
/// ```
/// use pacmaze::grid::{CellKind, Maze};
/// use pacmaze::standard_mazes::MAZE_BLANK;
///
/// let maze: Maze = MAZE_BLANK.parse().unwrap();
/// assert_eq!(maze.cell(1, 1).unwrap(), CellKind::Empty);
/// ```
pub const MAZE_BLANK: &str = "\
00000000000000000000000000000000
01000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
00000000000000000000000000000000
";

/// Selector for the pre-made mazes
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub enum StandardMaze {
    /// The classic arcade layout
    #[default]
    Pacman,
    /// All walls except (1, 1)
    Blank,
}

impl StandardMaze {
    /// Get a list of all available mazes
    pub fn get_all() -> [Self; 2] {
        [Self::Pacman, Self::Blank]
    }

    /// Get the source text associated with this enum
    pub fn source(&self) -> &'static str {
        match self {
            Self::Pacman => MAZE_PACMAN,
            Self::Blank => MAZE_BLANK,
        }
    }

    /// Get the [`Maze`] associated with this enum
    pub fn build(self) -> Maze {
        self.source()
            .parse()
            .expect("Failed to build a StandardMaze")
    }
}
