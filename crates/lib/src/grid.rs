//! Rectangular grids stored in row-major order.

use core::fmt;
use core::slice;

use crate::pos::Pos;

pub trait Grid<T> {
    /// Construct an iterator over rows in the grid.
    type Rows<'a>: Iterator<Item = &'a [T]>
    where
        Self: 'a,
        T: 'a;

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = GridBuf::new(4, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12])?;
    /// assert!(grid.rows().flatten().copied().eq([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]));
    /// assert_eq!(grid.rows().nth(1), Some(&[5, 6, 7, 8][..]));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    fn rows(&self) -> Self::Rows<'_>;

    /// Access the specified row in the grid.
    fn row(&self, row: usize) -> Option<&[T]>;

    /// Get number of rows in the grid.
    fn rows_len(&self) -> usize;

    /// Get number of columns in the grid.
    fn columns_len(&self) -> usize;

    /// Get the element at the given row and column.
    #[inline]
    #[track_caller]
    fn get(&self, row: usize, column: usize) -> &T {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = GridBuf::new(4, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12])?;
    ///
    /// assert_eq!(grid.try_get(0, 1), Some(&2));
    /// assert_eq!(grid.try_get(2, 0), Some(&9));
    /// assert_eq!(grid.try_get(3, 0), None);
    /// assert_eq!(grid.try_get(0, 4), None);
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[inline]
    fn try_get(&self, row: usize, column: usize) -> Option<&T> {
        self.row(row)?.get(column)
    }

    /// Get the element at the given position.
    #[inline]
    fn at(&self, pos: Pos) -> Option<&T> {
        self.try_get(pos.row, pos.col)
    }

    /// Total number of cells in the grid.
    #[inline]
    fn cells_len(&self) -> usize {
        self.rows_len() * self.columns_len()
    }
}

impl<G, T> Grid<T> for &G
where
    G: ?Sized + Grid<T>,
{
    type Rows<'a> = G::Rows<'a>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        (**self).rows()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        (**self).row(row)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        (**self).rows_len()
    }

    #[inline]
    fn columns_len(&self) -> usize {
        (**self).columns_len()
    }
}

pub trait GridMut<T>: Grid<T> {
    /// Access the specified row in the grid mutably.
    fn row_mut(&mut self, row: usize) -> Option<&mut [T]>;

    /// Get the element at the given row and column.
    #[inline]
    #[track_caller]
    fn get_mut(&mut self, row: usize, column: usize) -> &mut T {
        match self.try_get_mut(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    #[inline]
    fn try_get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.row_mut(row)?.get_mut(column)
    }

    /// Get the element at the given position mutably.
    #[inline]
    fn at_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.try_get_mut(pos.row, pos.col)
    }
}

/// Error raised when constructing a grid whose data doesn't divide into
/// rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{len} elements do not fill rows of {columns} columns")]
pub struct ShapeError {
    len: usize,
    columns: usize,
}

/// An owned grid.
#[derive(Clone, PartialEq, Eq)]
pub struct GridBuf<T> {
    data: Vec<T>,
    columns: usize,
}

impl<T> GridBuf<T> {
    /// Construct a grid out of row-major `data` with rows of `columns`
    /// elements.
    pub fn new(columns: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        let fits = match columns {
            0 => data.is_empty(),
            n => data.len() % n == 0,
        };

        if !fits {
            return Err(ShapeError {
                len: data.len(),
                columns,
            });
        }

        Ok(Self { data, columns })
    }

    /// Construct a grid with the same shape as `grid` filled with `value`.
    pub fn like<G, U>(grid: &G, value: T) -> Self
    where
        G: ?Sized + Grid<U>,
        T: Clone,
    {
        Self {
            data: vec![value; grid.cells_len()],
            columns: grid.columns_len(),
        }
    }

    /// Iterate over every element in row-major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate over every element together with its position.
    pub fn positions(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        let columns = self.columns.max(1);

        self.data
            .iter()
            .enumerate()
            .map(move |(n, value)| (Pos::new(n / columns, n % columns), value))
    }

    /// Access the underlying row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Grid<T> for GridBuf<T> {
    type Rows<'a> = slice::Chunks<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        self.data.chunks(self.columns.max(1))
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        let start = row.checked_mul(self.columns)?;
        self.data.get(start..start.checked_add(self.columns)?)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        match self.columns {
            0 => 0,
            n => self.data.len() / n,
        }
    }

    #[inline]
    fn columns_len(&self) -> usize {
        self.columns
    }
}

impl<T> GridMut<T> for GridBuf<T> {
    #[inline]
    fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        let start = row.checked_mul(self.columns)?;
        self.data.get_mut(start..start.checked_add(self.columns)?)
    }
}

impl<T> fmt::Debug for GridBuf<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}
