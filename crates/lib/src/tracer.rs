//! Tracing the loop which passes through the start tile.
//!
//! While walking the loop every cell bordering it is painted with the side
//! of the direction of travel it was seen on. The remaining open cells are
//! then flooded from the painted ones, and the number of left and right
//! turns taken along the way decides which of the two sides is enclosed.

mod error;

#[cfg(test)]
mod tests;

use arrayvec::ArrayVec;

pub use self::error::TraceError;
use crate::grid::{Grid, GridBuf, GridMut};
use crate::pipe::{Pipe, Side};
use crate::pos::{Dir, Pos};

/// Glyph marking the start tile.
pub const START: u8 = b'S';

/// Classification of a single cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Not yet reached.
    #[default]
    Unset,
    /// Part of the loop.
    Loop,
    /// On the given side of the loop.
    Side(Side),
}

/// Number of bends turning either way.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Turns {
    pub left: usize,
    pub right: usize,
}

impl Turns {
    #[inline]
    fn record(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// The side turned towards most often.
    ///
    /// Going once around a simple rectilinear loop turns four more times
    /// towards the interior than away from it, so this is the enclosed side.
    /// Returns `None` on a tie.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::pipe::Side;
    /// use lib::tracer::Turns;
    ///
    /// assert_eq!(Turns { left: 2, right: 6 }.majority(), Some(Side::Right));
    /// assert_eq!(Turns { left: 3, right: 3 }.majority(), None);
    /// ```
    pub fn majority(self) -> Option<Side> {
        match self.left.cmp(&self.right) {
            core::cmp::Ordering::Less => Some(Side::Right),
            core::cmp::Ordering::Greater => Some(Side::Left),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// Traces the loop through the start tile of a grid of pipe glyphs.
pub struct LoopTracer<G> {
    grid: G,
    start: Pos,
}

impl<G> LoopTracer<G>
where
    G: Grid<u8>,
{
    /// Construct a tracer, locating the single start tile in `grid`.
    pub fn new(grid: G) -> Result<Self, TraceError> {
        let mut start = None;

        for (row, data) in grid.rows().enumerate() {
            for col in memchr::memchr_iter(START, data) {
                let pos = Pos::new(row, col);

                if let Some(first) = start {
                    return Err(TraceError::DuplicateStart { first, second: pos });
                }

                start = Some(pos);
            }
        }

        let Some(start) = start else {
            return Err(TraceError::MissingStart);
        };

        Ok(Self { grid, start })
    }

    /// The grid being traced.
    #[inline]
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Position of the start tile.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// The pipe at `pos`, if there is one.
    #[inline]
    fn pipe(&self, pos: Pos) -> Option<Pipe> {
        Pipe::from_byte(*self.grid.at(pos)?)
    }

    /// The directions from the start into neighbours which connect back to
    /// it, probed in the order of [`Dir::ALL`].
    pub fn start_exits(&self) -> Result<[Dir; 2], TraceError> {
        let mut exits = ArrayVec::<Dir, 4>::new();

        for (dir, pos) in self.start.neighbours() {
            if self.pipe(pos).is_some_and(|pipe| pipe.accepts(dir)) {
                exits.push(dir);
            }
        }

        match exits[..] {
            [a, b] => Ok([a, b]),
            _ => Err(TraceError::StartConnections {
                pos: self.start,
                count: exits.len(),
            }),
        }
    }

    /// The pipe hidden under the start tile.
    pub fn start_pipe(&self) -> Result<Pipe, TraceError> {
        let [a, b] = self.start_exits()?;

        let Some(pipe) = Pipe::from_exits(a, b) else {
            return Err(TraceError::StartConnections {
                pos: self.start,
                count: 2,
            });
        };

        log::debug!("{}: start resolves to `{pipe}`", self.start);
        Ok(pipe)
    }

    /// Trace the loop, leaving the start through its first exit.
    pub fn trace(&self) -> Result<Trace, TraceError> {
        let [exit, _] = self.start_exits()?;
        self.trace_from(exit)
    }

    /// Trace the loop, leaving the start in the direction of `exit`.
    ///
    /// Either exit traces the same loop, only in the opposite sense, and
    /// produces the same enclosed count.
    pub fn trace_from(&self, exit: Dir) -> Result<Trace, TraceError> {
        let pipe = self.start_pipe()?;

        // We come back into the start through the exit we didn't leave by.
        let travel = match pipe.exits() {
            [a, b] if a == exit => -b,
            [a, b] if b == exit => -a,
            _ => return Err(TraceError::NotAnExit { dir: exit, pipe }),
        };

        let mut labels = GridBuf::like::<_, u8>(&self.grid, Label::Unset);
        let (len, turns) = self.walk(pipe, travel, &mut labels)?;

        log::debug!(
            "loop of length {len}, {} left and {} right turns",
            turns.left,
            turns.right
        );

        let flooded = flood(&mut labels);
        log::debug!("flooded {flooded} cells from the loop's borders");

        Ok(Trace { len, turns, labels })
    }

    /// Walk once around the loop, painting loop cells and their neighbours
    /// into `labels`.
    fn walk(
        &self,
        start: Pipe,
        mut travel: Dir,
        labels: &mut GridBuf<Label>,
    ) -> Result<(usize, Turns), TraceError> {
        let limit = self.grid.cells_len();

        let mut turns = Turns::default();
        let mut pos = self.start;
        let mut len = 0;

        loop {
            let pipe = if pos == self.start {
                start
            } else {
                let byte = self.grid.at(pos).copied().unwrap_or_default();
                Pipe::from_byte(byte).ok_or(TraceError::UnknownPipe { pos, byte })?
            };

            let Some(exit) = pipe.exit(travel) else {
                return Err(TraceError::Disconnected { pos, pipe, travel });
            };

            if let Some(label) = labels.at_mut(pos) {
                *label = Label::Loop;
            }

            for (side, dir) in pipe.sides(travel).iter() {
                let Some(label) = pos.step(dir).and_then(|n| labels.at_mut(n)) else {
                    continue;
                };

                if *label == Label::Unset {
                    *label = Label::Side(side);
                }
            }

            if let Some(side) = pipe.turn(travel) {
                turns.record(side);
            }

            len += 1;

            let Some(next) = pos.step(exit).filter(|&n| self.grid.at(n).is_some()) else {
                return Err(TraceError::OutOfBounds { pos, dir: exit });
            };

            pos = next;
            travel = exit;

            if pos == self.start {
                return Ok((len, turns));
            }

            if len >= limit {
                return Err(TraceError::Unclosed { steps: len });
            }
        }
    }
}

/// Spread side labels into every unset cell reachable from a painted one,
/// breadth first from all painted cells at once.
///
/// Returns the number of cells painted.
fn flood(labels: &mut GridBuf<Label>) -> usize {
    let mut queue = labels
        .positions()
        .filter(|(_, label)| matches!(label, Label::Side(..)))
        .map(|(pos, _)| pos)
        .collect::<Vec<_>>();

    let seeds = queue.len();
    let mut head = 0;

    while let Some(&pos) = queue.get(head) {
        head += 1;

        let Some(&Label::Side(side)) = labels.at(pos) else {
            continue;
        };

        for (_, n) in pos.neighbours() {
            let Some(label) = labels.at_mut(n) else {
                continue;
            };

            if *label == Label::Unset {
                *label = Label::Side(side);
                queue.push(n);
            }
        }
    }

    queue.len() - seeds
}

/// The outcome of tracing a loop.
#[derive(Debug, Clone)]
pub struct Trace {
    len: usize,
    turns: Turns,
    labels: GridBuf<Label>,
}

impl Trace {
    /// Number of cells making up the loop, the start included.
    #[inline]
    pub fn loop_len(&self) -> usize {
        self.len
    }

    /// Steps along the loop to the cell farthest from the start.
    pub fn farthest(&self) -> Result<usize, TraceError> {
        if self.len % 2 != 0 {
            return Err(TraceError::OddLength { len: self.len });
        }

        Ok(self.len / 2)
    }

    /// Bends taken in either direction.
    #[inline]
    pub fn turns(&self) -> Turns {
        self.turns
    }

    /// The side of the direction of travel the loop encloses.
    pub fn inside(&self) -> Result<Side, TraceError> {
        self.turns.majority().ok_or(TraceError::TiedTurns {
            turns: self.turns.left,
        })
    }

    /// Number of cells enclosed by the loop.
    pub fn enclosed(&self) -> Result<usize, TraceError> {
        let side = self.inside()?;
        Ok(self.count(Label::Side(side)))
    }

    /// Number of cells outside of the loop.
    pub fn exterior(&self) -> Result<usize, TraceError> {
        let side = self.inside()?.flip();
        Ok(self.count(Label::Side(side)))
    }

    /// Number of cells carrying the given label.
    pub fn count(&self, label: Label) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }

    /// The finished labels.
    #[inline]
    pub fn labels(&self) -> &GridBuf<Label> {
        &self.labels
    }
}
