//! Directions and positions on a row-major grid.

use core::fmt;
use core::ops::Neg;

use arrayvec::ArrayVec;

/// One of the four unit directions on a grid where rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// All directions, in the order neighbours are probed.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    /// The `(row, column)` offset of a single step in this direction.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// The direction on the left hand side when travelling in this
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::pos::Dir;
    ///
    /// assert_eq!(Dir::Right.turn_left(), Dir::Up);
    /// assert_eq!(Dir::Up.turn_left(), Dir::Left);
    /// ```
    #[inline]
    pub const fn turn_left(self) -> Self {
        match self {
            Dir::Up => Dir::Left,
            Dir::Left => Dir::Down,
            Dir::Down => Dir::Right,
            Dir::Right => Dir::Up,
        }
    }

    /// The direction on the right hand side when travelling in this
    /// direction.
    #[inline]
    pub const fn turn_right(self) -> Self {
        self.turn_left().opposite()
    }
}

impl Neg for Dir {
    type Output = Dir;

    #[inline]
    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dir::Up => write!(f, "up"),
            Dir::Down => write!(f, "down"),
            Dir::Left => write!(f, "left"),
            Dir::Right => write!(f, "right"),
        }
    }
}

/// A zero-based `(row, column)` position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step once in the given direction.
    ///
    /// Returns `None` if the step would move to a negative coordinate. The
    /// upper bound is checked by whatever grid the position is used with.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::pos::{Dir, Pos};
    ///
    /// assert_eq!(Pos::new(1, 1).step(Dir::Up), Some(Pos::new(0, 1)));
    /// assert_eq!(Pos::new(0, 1).step(Dir::Up), None);
    /// ```
    #[inline]
    pub fn step(self, dir: Dir) -> Option<Self> {
        let (dr, dc) = dir.delta();

        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Construct an iterator over the orthogonal neighbours which don't
    /// underflow, together with the direction leading to them.
    #[inline]
    pub fn neighbours(self) -> impl Iterator<Item = (Dir, Pos)> {
        let mut out = ArrayVec::<_, 4>::new();

        for dir in Dir::ALL {
            out.extend(self.step(dir).map(|pos| (dir, pos)));
        }

        out.into_iter()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row + 1;
        let col = self.col + 1;
        write!(f, "{row}:{col}")
    }
}
