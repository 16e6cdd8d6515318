//! Logical maze structs and utilities.

use crate::standard_mazes::StandardMaze;
use array_init::array_init;
use log::debug;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Enum for [`Maze`] cell values.
///
/// The discriminants are the digits used by the source text encoding.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum CellKind {
    /// Wall
    Wall = 0,
    /// Empty space
    Empty = 1,
    /// Normal dot
    Dot = 2,
    /// Power dot
    SuperDot = 3,
    /// Fruit position
    Fruit = 4,
}

impl CellKind {
    /// Returns whether this [`CellKind`] is walkable.
    ///
    /// A [`CellKind`] is walkable if it is not a wall.
    pub fn walkable(self) -> bool {
        self != CellKind::Wall
    }

    /// Returns whether this [`CellKind`] counts towards a level's dot total.
    pub fn is_dot(self) -> bool {
        self == CellKind::Dot || self == CellKind::SuperDot
    }

    /// Parses one character of the digit encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use pacmaze::grid::CellKind;
    ///
    /// assert_eq!(CellKind::from_digit('3'), Some(CellKind::SuperDot));
    /// assert_eq!(CellKind::from_digit('7'), None);
    /// ```
    pub fn from_digit(c: char) -> Option<Self> {
        let digit = c.to_digit(10)?;
        Self::try_from(digit as u8).ok()
    }

    /// Returns the digit character this [`CellKind`] is encoded as.
    pub fn as_char(self) -> char {
        char::from(b'0' + u8::from(self))
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Errors produced when building or accessing a [`Maze`].
#[derive(Debug)]
pub enum MazeError {
    /// Malformed maze source text
    Format(String),
    /// Coordinates outside the maze bounds
    OutOfBounds {
        /// Column that was requested
        x: usize,
        /// Row that was requested
        y: usize,
        /// Width of the maze
        width: usize,
        /// Height of the maze
        height: usize,
    },
    /// The maze file could not be read
    Io(std::io::Error),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::Format(msg) => write!(f, "Malformed maze source: {}", msg),
            MazeError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Invalid maze coordinates ({}, {}) - maze size is {}x{}",
                    x, y, width, height
                )
            }
            MazeError::Io(err) => write!(f, "Failed to read maze file: {}", err),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MazeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        MazeError::Io(err)
    }
}

/// A rectangular maze of [`CellKind`]s loaded from a digit matrix.
///
/// Public coordinates are `(x, y)` where `x` is the column and `y` is the
/// row; row 0 is the first line of the source text. Cells are stored
/// row-major, so both reads and writes go through `[y][x]`.
///
/// The maze keeps no interior locks; callers sharing one across threads must
/// serialize access themselves.
///
/// # Examples
///
/// ```
/// use pacmaze::grid::{CellKind, Maze};
///
/// let maze: Maze = "000\n020\n000\n".parse().unwrap();
/// assert_eq!(maze.cell(1, 1).unwrap(), CellKind::Dot);
/// assert_eq!(maze.total_dots(), 1);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellKind>>,
    total_dots: usize,
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses a maze from its source text.
    ///
    /// The source must be a non-empty rectangular matrix of the digits `0`
    /// (wall), `1` (empty), `2` (dot), `3` (super dot) and `4` (fruit), one
    /// line per row.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = source.lines().collect();
        let width = lines.first().map_or(0, |line| line.chars().count());
        if width == 0 {
            return Err(MazeError::Format("maze source is empty".to_string()));
        }

        let mut cells = Vec::with_capacity(lines.len());
        for (y, line) in lines.iter().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(x, c)| {
                    CellKind::from_digit(c).ok_or_else(|| {
                        MazeError::Format(format!("invalid character {:?} at ({}, {})", c, x, y))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if row.len() != width {
                return Err(MazeError::Format(format!(
                    "line {} has {} cells, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            cells.push(row);
        }

        let total_dots = cells.iter().flatten().filter(|c| c.is_dot()).count();
        Ok(Maze {
            width,
            height: cells.len(),
            cells,
            total_dots,
        })
    }
}

impl Default for Maze {
    fn default() -> Self {
        StandardMaze::Pacman.build()
    }
}

impl Maze {
    /// Loads a maze from a text file.
    ///
    /// The file content follows the same digit encoding as [`Maze::from_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MazeError> {
        let source = fs::read_to_string(path)?;
        let maze: Maze = source.parse()?;
        debug!(
            "loaded {}x{} maze with {} dots",
            maze.width, maze.height, maze.total_dots
        );
        Ok(maze)
    }

    /// Width of the maze in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the maze in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pacmaze::grid::{CellKind, Maze};
    ///
    /// let maze: Maze = "012\n340\n".parse().unwrap();
    /// assert_eq!(maze.cell(2, 0).unwrap(), CellKind::Dot);
    /// assert!(maze.cell(3, 0).is_err());
    /// ```
    pub fn cell(&self, x: usize, y: usize) -> Result<CellKind, MazeError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[y][x])
    }

    /// Returns an independent copy of the full cell matrix, indexed `[y][x]`.
    ///
    /// Mutating the copy does not affect the maze.
    pub fn cells(&self) -> Vec<Vec<CellKind>> {
        self.cells.clone()
    }

    /// Returns the 3x3 neighborhood centered on `(x, y)`.
    ///
    /// The result is indexed by `[dy + 1][dx + 1]` for offsets in
    /// `{-1, 0, 1}`, so the center entry is the cell itself. Positions
    /// outside the maze are reported as [`CellKind::Empty`] rather than
    /// walls, and no coordinate fails here; this makes edge cells easier to
    /// classify as intersections than a walled border would.
    ///
    /// # Examples
    ///
    /// ```
    /// use pacmaze::grid::{CellKind, Maze};
    ///
    /// let maze: Maze = "000\n020\n000\n".parse().unwrap();
    /// let neighbors = maze.neighbors(1, 1);
    /// assert_eq!(neighbors[1][1], CellKind::Dot);
    /// assert_eq!(neighbors[0][1], CellKind::Wall);
    /// ```
    pub fn neighbors(&self, x: usize, y: usize) -> [[CellKind; 3]; 3] {
        array_init(|dy| {
            array_init(|dx| {
                self.cell_or_empty(x as isize + dx as isize - 1, y as isize + dy as isize - 1)
            })
        })
    }

    /// Returns whether `(x, y)` is a junction where movement has a choice of
    /// direction.
    ///
    /// A cell is an intersection if it is walkable and at most 2 of its 8
    /// surrounding neighbors are walls, with cells beyond the maze edge
    /// counting as empty space per [`Maze::neighbors`].
    pub fn is_intersection(&self, x: usize, y: usize) -> Result<bool, MazeError> {
        if !self.cell(x, y)?.walkable() {
            return Ok(false);
        }
        let neighbors = self.neighbors(x, y);
        let mut walls = 0;
        for (dy, row) in neighbors.iter().enumerate() {
            for (dx, &kind) in row.iter().enumerate() {
                if (dx, dy) != (1, 1) && kind == CellKind::Wall {
                    walls += 1;
                }
            }
        }
        Ok(walls <= 2)
    }

    /// The number of dot and super dot cells present when the maze was built.
    ///
    /// This is the level-start total; it never changes, even as dots are
    /// eaten. See [`Maze::remaining_dots`] for the live count.
    pub fn total_dots(&self) -> usize {
        self.total_dots
    }

    /// The number of dot and super dot cells currently in the maze.
    ///
    /// Recomputed by scanning the full grid on each call.
    pub fn remaining_dots(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_dot()).count()
    }

    /// Overwrites the cell at `(x, y)`.
    ///
    /// Does not change [`Maze::total_dots`].
    pub fn set_cell(&mut self, x: usize, y: usize, kind: CellKind) -> Result<(), MazeError> {
        self.check_bounds(x, y)?;
        self.cells[y][x] = kind;
        Ok(())
    }

    fn cell_or_empty(&self, x: isize, y: isize) -> CellKind {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            CellKind::Empty
        } else {
            self.cells[y as usize][x as usize]
        }
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), MazeError> {
        if x >= self.width || y >= self.height {
            return Err(MazeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Maze {
    /// The debug text dump: the digit encoding, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fixed_vector() {
        let maze: Maze = "0000\n0111\n0000\n".parse().unwrap();
        assert_eq!(maze.width(), 4);
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.cell(1, 1).unwrap(), CellKind::Empty);
        assert_eq!(maze.total_dots(), 0);
        // 7 of the 8 neighbors of (1, 1) are walls
        assert!(!maze.is_intersection(1, 1).unwrap());
    }

    #[test]
    fn parse_all_kinds() {
        let maze: Maze = "01234\n43210\n".parse().unwrap();
        assert_eq!(maze.cell(0, 0).unwrap(), CellKind::Wall);
        assert_eq!(maze.cell(1, 0).unwrap(), CellKind::Empty);
        assert_eq!(maze.cell(2, 0).unwrap(), CellKind::Dot);
        assert_eq!(maze.cell(3, 0).unwrap(), CellKind::SuperDot);
        assert_eq!(maze.cell(4, 0).unwrap(), CellKind::Fruit);
        assert_eq!(maze.total_dots(), 4);
    }

    #[test]
    fn parse_empty_source() {
        let v = "".parse::<Maze>();
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Malformed maze source: maze source is empty"
        );
    }

    #[test]
    fn parse_ragged_lines() {
        let v = "0001\n00\n".parse::<Maze>();
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Malformed maze source: line 1 has 2 cells, expected 4"
        );
    }

    #[test]
    fn parse_invalid_character() {
        let v = "012\n092\n".parse::<Maze>();
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Malformed maze source: invalid character '9' at (1, 1)"
        );
    }

    #[test]
    fn cell_out_of_bounds() {
        let maze: Maze = "0000\n0111\n0000\n".parse().unwrap();
        let v = maze.cell(4, 0);
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Invalid maze coordinates (4, 0) - maze size is 4x3"
        );
        assert!(maze.cell(0, 3).is_err());
        assert!(maze.cell(3, 2).is_ok());
    }

    #[test]
    fn display_round_trip() {
        let source = "01234\n43210\n22033\n";
        let maze: Maze = source.parse().unwrap();
        assert_eq!(maze.to_string(), source);
    }

    #[test]
    fn neighbors_center_matches_cell() {
        let maze: Maze = "012\n340\n210\n".parse().unwrap();
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(maze.neighbors(x, y)[1][1], maze.cell(x, y).unwrap());
            }
        }
    }

    #[test]
    fn neighbors_interior() {
        let maze: Maze = "012\n340\n210\n".parse().unwrap();
        assert_eq!(
            maze.neighbors(1, 1),
            [
                [CellKind::Wall, CellKind::Empty, CellKind::Dot],
                [CellKind::SuperDot, CellKind::Fruit, CellKind::Wall],
                [CellKind::Dot, CellKind::Empty, CellKind::Wall],
            ]
        );
    }

    #[test]
    fn neighbors_boundary_is_empty() {
        let maze: Maze = "000\n000\n000\n".parse().unwrap();
        let corner = maze.neighbors(0, 0);
        assert_eq!(
            corner[0],
            [CellKind::Empty, CellKind::Empty, CellKind::Empty]
        );
        assert_eq!(corner[1][0], CellKind::Empty);
        assert_eq!(corner[2][0], CellKind::Empty);
        assert_eq!(corner[1][1], CellKind::Wall);
        assert_eq!(corner[2][2], CellKind::Wall);

        let far = maze.neighbors(2, 2);
        assert_eq!(far[2], [CellKind::Empty, CellKind::Empty, CellKind::Empty]);
        assert_eq!(far[0][2], CellKind::Empty);
        assert_eq!(far[0][0], CellKind::Wall);
    }

    #[test]
    fn intersection_false_on_walls() {
        // every wall is surrounded by walkable cells, still not an intersection
        let maze: Maze = "222\n202\n222\n".parse().unwrap();
        assert!(!maze.is_intersection(1, 1).unwrap());
    }

    #[test]
    fn intersection_open_center() {
        let maze: Maze = "222\n222\n222\n".parse().unwrap();
        assert!(maze.is_intersection(1, 1).unwrap());
    }

    #[test]
    fn intersection_at_corner() {
        // (0, 0) has a single wall neighbor; out-of-bounds cells count as empty
        let maze: Maze = "220\n202\n022\n".parse().unwrap();
        assert!(maze.is_intersection(0, 0).unwrap());
    }

    #[test]
    fn intersection_out_of_bounds() {
        let maze: Maze = "222\n222\n222\n".parse().unwrap();
        assert!(maze.is_intersection(3, 0).is_err());
    }

    #[test]
    fn dot_counts_track_mutation() {
        let maze_src = "0230\n2112\n0420\n";
        let mut maze: Maze = maze_src.parse().unwrap();
        assert_eq!(maze.total_dots(), 5);
        assert_eq!(maze.remaining_dots(), 5);

        // eating a dot lowers the live count only
        maze.set_cell(1, 0, CellKind::Empty).unwrap();
        assert_eq!(maze.total_dots(), 5);
        assert_eq!(maze.remaining_dots(), 4);

        // eating the fruit changes neither count
        maze.set_cell(1, 2, CellKind::Empty).unwrap();
        assert_eq!(maze.total_dots(), 5);
        assert_eq!(maze.remaining_dots(), 4);

        // placing a super dot raises the live count only
        maze.set_cell(1, 1, CellKind::SuperDot).unwrap();
        assert_eq!(maze.total_dots(), 5);
        assert_eq!(maze.remaining_dots(), 5);
    }

    #[test]
    fn set_cell_out_of_bounds() {
        let mut maze: Maze = "22\n22\n".parse().unwrap();
        let v = maze.set_cell(2, 0, CellKind::Wall);
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Invalid maze coordinates (2, 0) - maze size is 2x2"
        );
    }

    #[test]
    fn cells_copy_is_independent() {
        let maze: Maze = "22\n22\n".parse().unwrap();
        let mut copy = maze.cells();
        copy[0][0] = CellKind::Wall;
        assert_eq!(maze.cell(0, 0).unwrap(), CellKind::Dot);
    }

    #[test]
    fn cell_kind_digit_mapping() {
        for kind in [
            CellKind::Wall,
            CellKind::Empty,
            CellKind::Dot,
            CellKind::SuperDot,
            CellKind::Fruit,
        ] {
            assert_eq!(CellKind::from_digit(kind.as_char()), Some(kind));
        }
        assert_eq!(CellKind::from_digit('5'), None);
        assert_eq!(CellKind::from_digit('a'), None);
        assert_eq!(u8::from(CellKind::Fruit), 4);
        assert_eq!(CellKind::try_from(2u8).unwrap(), CellKind::Dot);
    }

    #[test]
    fn serde_round_trip() {
        let maze: Maze = "0230\n2112\n0420\n".parse().unwrap();
        let json = serde_json::to_string(&maze).unwrap();
        let restored: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, maze);
    }

    #[test]
    fn from_file_missing() {
        let v = Maze::from_file("/definitely/not/a/maze.txt");
        assert!(matches!(v, Err(MazeError::Io(_))));
    }
}
