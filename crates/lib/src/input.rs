//! Input parser.

mod error;


use bstr::ByteSlice;

pub(crate) use self::error::escape;
pub use self::error::{InputError, LineCol};
use crate::grid::GridBuf;

pub(crate) const NL: u8 = b'\n';

/// Read a grid of glyphs, one row per line.
///
/// Surrounding whitespace is trimmed from every line, which also takes care
/// of `\r\n` line endings, and lines which end up empty are skipped. Every
/// remaining row must be equally wide and only hold printable ASCII.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// let grid = lib::input::parse(b"\n.S-7.\n.L-J.\n\n")?;
/// assert_eq!(grid.rows_len(), 2);
/// assert_eq!(grid.columns_len(), 5);
/// assert_eq!(grid.try_get(1, 1), Some(&b'L'));
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn parse(data: &[u8]) -> Result<GridBuf<u8>, InputError> {
    let mut cells = Vec::with_capacity(data.len());
    let mut columns = None;

    for (line, raw) in lines(data) {
        let row = raw.trim();

        if row.is_empty() {
            continue;
        }

        let offset = raw.len() - raw.trim_start().len();

        if let Some(n) = row.iter().position(|b| !b.is_ascii_graphic()) {
            return Err(InputError::UnsupportedByte {
                pos: LineCol::new(line, offset + n),
                byte: row[n],
            });
        }

        match columns {
            None => {
                columns = Some(row.len());
            }
            Some(expected) if expected != row.len() => {
                return Err(InputError::Ragged {
                    pos: LineCol::new(line, offset),
                    expected,
                    actual: row.len(),
                });
            }
            Some(_) => {}
        }

        cells.extend_from_slice(row);
    }

    let Some(columns) = columns else {
        return Err(InputError::Empty);
    };

    let rows = cells.len() / columns;
    log::debug!("parsed {rows}x{columns} grid");

    GridBuf::new(columns, cells).map_err(|_| InputError::Empty)
}

/// Iterate over lines together with their zero-based line number.
fn lines(mut data: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    let mut done = false;

    let it = core::iter::from_fn(move || {
        if done {
            return None;
        }

        let Some(at) = memchr::memchr(NL, data) else {
            done = true;
            return Some(data);
        };

        let (line, rest) = data.split_at(at);
        data = rest.get(1..).unwrap_or_default();
        Some(line)
    });

    it.enumerate()
}
