pub mod cli;
pub mod grid;
pub mod input;
pub mod pipe;
pub mod pos;
pub mod tracer;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{Grid, GridBuf, GridMut};
    pub use crate::pipe::{Pipe, Side};
    pub use crate::pos::{Dir, Pos};
    pub use crate::tracer::{Label, LoopTracer, Trace};
    pub use anyhow::{anyhow, bail, Context, Result};
}

use crate::tracer::LoopTracer;

/// Solve both parts of the pipe maze: the number of steps to the point of
/// the loop farthest from the start, and the number of enclosed cells.
///
/// # Examples
///
/// ```
/// let input = b".....\n.S-7.\n.|.|.\n.L-J.\n.....\n";
/// assert_eq!(lib::solve(input)?, (4, 1));
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn solve(data: &[u8]) -> anyhow::Result<(usize, usize)> {
    let grid = input::parse(data)?;
    let tracer = LoopTracer::new(grid)?;
    let trace = tracer.trace()?;
    Ok((trace.farthest()?, trace.enclosed()?))
}
