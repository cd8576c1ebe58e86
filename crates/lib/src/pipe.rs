//! The six pipe tiles a loop is made of.

use core::fmt;

use arrayvec::ArrayVec;

use crate::pos::Dir;

/// Sense of a bend relative to the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Offsets from a pipe to the neighbouring cells on either side of the
/// direction of travel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sides {
    pub left: ArrayVec<Dir, 2>,
    pub right: ArrayVec<Dir, 2>,
}

impl Sides {
    /// Iterate over every offset together with the side it falls on.
    pub fn iter(&self) -> impl Iterator<Item = (Side, Dir)> + '_ {
        let left = self.left.iter().map(|&d| (Side::Left, d));
        let right = self.right.iter().map(|&d| (Side::Right, d));
        left.chain(right)
    }
}

/// A pipe tile, defined entirely by the two directions it connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipe {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    UpRight,
    /// `J`
    UpLeft,
    /// `7`
    DownLeft,
    /// `F`
    DownRight,
}

impl Pipe {
    pub const ALL: [Pipe; 6] = [
        Pipe::Vertical,
        Pipe::Horizontal,
        Pipe::UpRight,
        Pipe::UpLeft,
        Pipe::DownLeft,
        Pipe::DownRight,
    ];

    /// Look up the pipe drawn with the given glyph.
    #[inline]
    pub const fn from_byte(b: u8) -> Option<Self> {
        Some(match b {
            b'|' => Pipe::Vertical,
            b'-' => Pipe::Horizontal,
            b'L' => Pipe::UpRight,
            b'J' => Pipe::UpLeft,
            b'7' => Pipe::DownLeft,
            b'F' => Pipe::DownRight,
            _ => return None,
        })
    }

    /// The glyph this pipe is drawn with.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        match self {
            Pipe::Vertical => b'|',
            Pipe::Horizontal => b'-',
            Pipe::UpRight => b'L',
            Pipe::UpLeft => b'J',
            Pipe::DownLeft => b'7',
            Pipe::DownRight => b'F',
        }
    }

    /// The two directions leading out of the pipe.
    #[inline]
    pub const fn exits(self) -> [Dir; 2] {
        match self {
            Pipe::Vertical => [Dir::Up, Dir::Down],
            Pipe::Horizontal => [Dir::Left, Dir::Right],
            Pipe::UpRight => [Dir::Up, Dir::Right],
            Pipe::UpLeft => [Dir::Up, Dir::Left],
            Pipe::DownLeft => [Dir::Down, Dir::Left],
            Pipe::DownRight => [Dir::Down, Dir::Right],
        }
    }

    /// Find the pipe connecting exactly the two given directions, in any
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::pipe::Pipe;
    /// use lib::pos::Dir;
    ///
    /// assert_eq!(Pipe::from_exits(Dir::Right, Dir::Down), Some(Pipe::DownRight));
    /// assert_eq!(Pipe::from_exits(Dir::Down, Dir::Right), Some(Pipe::DownRight));
    /// assert_eq!(Pipe::from_exits(Dir::Down, Dir::Down), None);
    /// ```
    pub fn from_exits(a: Dir, b: Dir) -> Option<Self> {
        Self::ALL.into_iter().find(|pipe| {
            let [x, y] = pipe.exits();
            (x, y) == (a, b) || (x, y) == (b, a)
        })
    }

    /// Test if the pipe is a bend.
    #[inline]
    pub fn is_bend(self) -> bool {
        let [a, b] = self.exits();
        a != -b
    }

    /// Test if the pipe can be entered while moving in `travel`, which is the
    /// case when one of its exits points back where we came from.
    #[inline]
    pub fn accepts(self, travel: Dir) -> bool {
        self.exits().contains(&-travel)
    }

    /// The direction we leave the pipe in when it was entered moving in
    /// `travel`, or `None` if it can't be entered that way.
    #[inline]
    pub fn exit(self, travel: Dir) -> Option<Dir> {
        match self.exits() {
            [a, b] if a == -travel => Some(b),
            [a, b] if b == -travel => Some(a),
            _ => None,
        }
    }

    /// Which way the pipe turns when entered moving in `travel`, or `None`
    /// for straight pipes and unsupported entries.
    #[inline]
    pub fn turn(self, travel: Dir) -> Option<Side> {
        let exit = self.exit(travel)?;

        if exit == travel.turn_left() {
            Some(Side::Left)
        } else if exit == travel.turn_right() {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// The offsets of the cells bordering this pipe on each side when
    /// entered moving in `travel`.
    ///
    /// On a bend the inner side only borders loop cells, so it's empty. The
    /// outer side gets both the sideways cell and the cell straight ahead,
    /// which is the one sitting behind the outer corner.
    pub fn sides(self, travel: Dir) -> Sides {
        let mut sides = Sides::default();

        match self.turn(travel) {
            Some(Side::Right) => {
                sides.left.push(travel.turn_left());
                sides.left.push(travel);
            }
            Some(Side::Left) => {
                sides.right.push(travel.turn_right());
                sides.right.push(travel);
            }
            None if self.accepts(travel) => {
                sides.left.push(travel.turn_left());
                sides.right.push(travel.turn_right());
            }
            None => {}
        }

        sides
    }
}

impl fmt::Display for Pipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(self.as_byte()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Pipe, Side};
    use crate::pos::Dir;

    #[test]
    fn test_glyphs() {
        for pipe in Pipe::ALL {
            assert_eq!(Pipe::from_byte(pipe.as_byte()), Some(pipe));
            let [a, b] = pipe.exits();
            assert_eq!(Pipe::from_exits(b, a), Some(pipe));
        }

        assert_eq!(Pipe::from_byte(b'S'), None);
        assert_eq!(Pipe::from_byte(b'.'), None);
    }

    #[test]
    fn test_entry_and_exit() {
        // Moving right into `J` we come from its left exit and leave upwards.
        assert!(Pipe::UpLeft.accepts(Dir::Right));
        assert_eq!(Pipe::UpLeft.exit(Dir::Right), Some(Dir::Up));
        assert_eq!(Pipe::UpLeft.turn(Dir::Right), Some(Side::Left));

        assert!(!Pipe::UpLeft.accepts(Dir::Left));
        assert_eq!(Pipe::UpLeft.exit(Dir::Left), None);

        assert_eq!(Pipe::Vertical.exit(Dir::Down), Some(Dir::Down));
        assert_eq!(Pipe::Vertical.turn(Dir::Down), None);
        assert!(!Pipe::Vertical.is_bend());
        assert!(Pipe::DownRight.is_bend());
    }

    #[test]
    fn test_sides() {
        let straight = Pipe::Horizontal.sides(Dir::Right);
        assert_eq!(&straight.left[..], &[Dir::Up]);
        assert_eq!(&straight.right[..], &[Dir::Down]);

        // Moving up into `F` turns right; the outside is left and ahead.
        let bend = Pipe::DownRight.sides(Dir::Up);
        assert_eq!(&bend.left[..], &[Dir::Left, Dir::Up]);
        assert!(bend.right.is_empty());

        let bend = Pipe::DownRight.sides(Dir::Left);
        assert_eq!(Pipe::DownRight.turn(Dir::Left), Some(Side::Left));
        assert_eq!(&bend.right[..], &[Dir::Up, Dir::Left]);
        assert!(bend.left.is_empty());

        assert_eq!(Pipe::Vertical.sides(Dir::Left).iter().count(), 0);
    }

    #[test]
    fn test_turns_flip_with_travel() {
        for pipe in Pipe::ALL.into_iter().filter(|p| p.is_bend()) {
            let [a, b] = pipe.exits();
            let there = pipe.turn(-a).map(Side::flip);
            let back = pipe.turn(-b);
            assert_eq!(there, back, "{pipe}");
        }
    }
}
