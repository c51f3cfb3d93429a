//! Raster channels and channel stacks.
//!
//! A [`Raster`] is a dense, row-major `rows x cols` grid of `f64` values.
//! A [`ChannelStack`] is an ordered list of rasters sharing one shape;
//! channel order is meaningful because weights and transforms are matched
//! to channels by index.

use crate::cell::Cell;
use crate::error::RasterError;

/// A single 2D channel of floating-point values, stored row-major.
///
/// Construction rejects empty shapes and buffers whose length does not
/// match `rows * cols`, so every `Raster` has at least one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Raster {
    /// Wrap a row-major buffer as a `rows x cols` raster.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, RasterError> {
        if rows == 0 || cols == 0 {
            return Err(RasterError::Empty { rows, cols });
        }
        let expected = rows * cols;
        if data.len() != expected {
            return Err(RasterError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// A raster with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, RasterError> {
        Self::new(rows, cols, vec![value; rows * cols])
    }

    /// A raster of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, RasterError> {
        Self::filled(rows, cols, 0.0)
    }

    /// Build a raster by evaluating `f` at every cell in row-major order.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(Cell) -> f64,
    ) -> Result<Self, RasterError> {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(Cell::new(r, c)));
            }
        }
        Self::new(rows, cols, data)
    }

    /// Build a raster from nested rows. All rows must have equal length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, RasterError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::new(n_rows, n_cols, data)
    }

    /// Number of rows (H).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (W).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; construction rejects empty rasters.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `cell` lies inside this raster.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Flat row-major index of `cell`. The cell must be in bounds.
    pub fn index_of(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell));
        cell.row * self.cols + cell.col
    }

    /// Cell at a flat row-major index.
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.cols, index % self.cols)
    }

    /// Value at `cell`, or `None` if out of bounds.
    pub fn get(&self, cell: Cell) -> Option<f64> {
        if self.contains(cell) {
            Some(self.data[self.index_of(cell)])
        } else {
            None
        }
    }

    /// Value at `(row, col)`. Panics if out of bounds.
    pub fn at(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) out of bounds for {}x{} raster",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Overwrite the value at `cell`. Returns `false` if out of bounds.
    pub fn set(&mut self, cell: Cell, value: f64) -> bool {
        if !self.contains(cell) {
            return false;
        }
        let i = self.index_of(cell);
        self.data[i] = value;
        true
    }

    /// Row-major view of the values.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major view of the values.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the raster, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Apply `f` element-wise, producing a raster of the same shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Raster {
        Raster {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Largest non-NaN value, or `None` if every value is NaN.
    pub fn nan_max(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }

    /// Smallest non-NaN value, or `None` if every value is NaN.
    pub fn nan_min(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
    }
}

/// An ordered stack of `C` rasters sharing one `(H, W)` shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelStack {
    channels: Vec<Raster>,
}

impl ChannelStack {
    /// Build a stack, rejecting empty input and mismatched channel shapes.
    pub fn new(channels: Vec<Raster>) -> Result<Self, RasterError> {
        let first = channels.first().ok_or(RasterError::EmptyStack)?;
        let expected = first.shape();
        for (index, ch) in channels.iter().enumerate().skip(1) {
            if ch.shape() != expected {
                return Err(RasterError::ChannelShape {
                    index,
                    expected,
                    actual: ch.shape(),
                });
            }
        }
        Ok(Self { channels })
    }

    /// Build a stack from a flat `(C, H, W)` buffer in channel-major order.
    pub fn from_flat(
        channels: usize,
        rows: usize,
        cols: usize,
        data: Vec<f64>,
    ) -> Result<Self, RasterError> {
        let expected = channels * rows * cols;
        if data.len() != expected {
            return Err(RasterError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        if channels == 0 {
            return Err(RasterError::EmptyStack);
        }
        if rows == 0 || cols == 0 {
            return Err(RasterError::Empty { rows, cols });
        }
        let rasters = data
            .chunks(rows * cols)
            .map(|chunk| Raster::new(rows, cols, chunk.to_vec()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rasters)
    }

    /// Number of channels (C).
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Shared `(rows, cols)` of every channel.
    pub fn shape(&self) -> (usize, usize) {
        self.channels[0].shape()
    }

    /// Channel by index.
    pub fn channel(&self, index: usize) -> Option<&Raster> {
        self.channels.get(index)
    }

    /// Iterate channels in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Raster> {
        self.channels.iter()
    }

    /// Replace one channel. The replacement must match the stack shape.
    pub fn replace(&mut self, index: usize, raster: Raster) -> Result<(), RasterError> {
        let expected = self.shape();
        if raster.shape() != expected {
            return Err(RasterError::ChannelShape {
                index,
                expected,
                actual: raster.shape(),
            });
        }
        if let Some(slot) = self.channels.get_mut(index) {
            *slot = raster;
        }
        Ok(())
    }

    /// Consume the stack, returning its channels.
    pub fn into_channels(self) -> Vec<Raster> {
        self.channels
    }
}

impl<'a> IntoIterator for &'a ChannelStack {
    type Item = &'a Raster;
    type IntoIter = std::slice::Iter<'a, Raster>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_empty_and_bad_length() {
        assert_eq!(
            Raster::new(0, 3, vec![]),
            Err(RasterError::Empty { rows: 0, cols: 3 })
        );
        assert_eq!(
            Raster::new(2, 2, vec![1.0; 3]),
            Err(RasterError::DataLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn indexing_is_row_major() {
        let r = Raster::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(r.shape(), (2, 3));
        assert_eq!(r.at(1, 0), 4.0);
        assert_eq!(r.get(Cell::new(0, 2)), Some(3.0));
        assert_eq!(r.get(Cell::new(2, 0)), None);
        assert_eq!(r.index_of(Cell::new(1, 2)), 5);
        assert_eq!(r.cell_at(4), Cell::new(1, 1));
        assert_eq!(r.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn nan_extrema_skip_nan() {
        let r = Raster::new(1, 4, vec![f64::NAN, 2.0, -1.0, f64::NAN]).unwrap();
        assert_eq!(r.nan_max(), Some(2.0));
        assert_eq!(r.nan_min(), Some(-1.0));
        let all_nan = Raster::filled(2, 2, f64::NAN).unwrap();
        assert_eq!(all_nan.nan_max(), None);
    }

    #[test]
    fn stack_rejects_mismatched_channels() {
        let a = Raster::zeros(3, 3).unwrap();
        let b = Raster::zeros(3, 4).unwrap();
        let err = ChannelStack::new(vec![a, b]).unwrap_err();
        assert_eq!(
            err,
            RasterError::ChannelShape {
                index: 1,
                expected: (3, 3),
                actual: (3, 4)
            }
        );
        assert_eq!(ChannelStack::new(vec![]), Err(RasterError::EmptyStack));
    }

    #[test]
    fn stack_from_flat_splits_channel_major() {
        let data: Vec<f64> = (0..12).map(f64::from).collect();
        let stack = ChannelStack::from_flat(3, 2, 2, data).unwrap();
        assert_eq!(stack.channel_count(), 3);
        assert_eq!(stack.shape(), (2, 2));
        assert_eq!(stack.channel(2).unwrap().as_slice(), &[8.0, 9.0, 10.0, 11.0]);
    }

    #[test]
    fn replace_checks_shape() {
        let mut stack =
            ChannelStack::new(vec![Raster::zeros(2, 2).unwrap(), Raster::zeros(2, 2).unwrap()])
                .unwrap();
        assert!(stack.replace(1, Raster::zeros(3, 2).unwrap()).is_err());
        stack.replace(1, Raster::filled(2, 2, 7.0).unwrap()).unwrap();
        assert_eq!(stack.channel(1).unwrap().at(0, 0), 7.0);
    }

    proptest! {
        #[test]
        fn from_fn_matches_get(rows in 1usize..12, cols in 1usize..12) {
            let r = Raster::from_fn(rows, cols, |c| (c.row * 100 + c.col) as f64).unwrap();
            for row in 0..rows {
                for col in 0..cols {
                    prop_assert_eq!(r.get(Cell::new(row, col)), Some((row * 100 + col) as f64));
                }
            }
        }
    }
}
