use core::fmt;

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The zero-based line.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The zero-based column.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        let column = self.column + 1;
        write!(f, "{line}:{column}")
    }
}

/// Error raised while reading a grid out of text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InputError {
    #[error("input contains no grid rows")]
    Empty,
    #[error("{pos}: row has {actual} columns, expected {expected}")]
    Ragged {
        pos: LineCol,
        expected: usize,
        actual: usize,
    },
    #[error("{pos}: unsupported byte `{}`", escape(.byte))]
    UnsupportedByte { pos: LineCol, byte: u8 },
}

pub(crate) fn escape(b: &u8) -> core::ascii::EscapeDefault {
    b.escape_ascii()
}

impl InputError {
    /// Where in the input the error was raised, if anywhere.
    pub fn pos(&self) -> Option<LineCol> {
        match self {
            InputError::Empty => None,
            InputError::Ragged { pos, .. } => Some(*pos),
            InputError::UnsupportedByte { pos, .. } => Some(*pos),
        }
    }
}
