use crate::input::escape;
use crate::pipe::Pipe;
use crate::pos::{Dir, Pos};

/// Error raised when the grid doesn't hold a single closed loop through the
/// start tile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TraceError {
    #[error("missing start marker `S`")]
    MissingStart,
    #[error("{second}: second start marker, first one at {first}")]
    DuplicateStart { first: Pos, second: Pos },
    #[error("{pos}: start connects to {count} neighbours, expected 2")]
    StartConnections { pos: Pos, count: usize },
    #[error("{dir} is not an exit of the start pipe `{pipe}`")]
    NotAnExit { dir: Dir, pipe: Pipe },
    #[error("{pos}: loop runs into `{}` which is not a pipe", escape(.byte))]
    UnknownPipe { pos: Pos, byte: u8 },
    #[error("{pos}: pipe `{pipe}` can't be entered moving {travel}")]
    Disconnected { pos: Pos, pipe: Pipe, travel: Dir },
    #[error("{pos}: loop leaves the grid moving {dir}")]
    OutOfBounds { pos: Pos, dir: Dir },
    #[error("walk didn't return to start after {steps} steps")]
    Unclosed { steps: usize },
    #[error("loop has odd length {len}")]
    OddLength { len: usize },
    #[error("loop turns left and right the same number of times ({turns})")]
    TiedTurns { turns: usize },
}
