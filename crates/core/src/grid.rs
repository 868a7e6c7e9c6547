//! Grid module - rectangular boards passed to slot implementations
//!
//! A [`Grid`] stores `rows x cols` cells in a flat row-major vector, so every
//! row has the same length by construction. Ragged input is rejected when the
//! grid is built, including when it is deserialized from JSON (an array of
//! row arrays).

use std::fmt;
use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Grid construction error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular board of cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from row vectors
    ///
    /// # Examples
    ///
    /// ```
    /// use game_slots_core::grid::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(grid.get(1, 0), Some(&3));
    ///
    /// assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Get cell at `(row, col)`; `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    /// Get cell at signed coordinates; `None` if out of bounds
    pub fn get_signed(&self, row: i32, col: i32) -> Option<&T> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.get(row, col)
    }

    /// Set cell at `(row, col)`. Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Cells of one row, or `None` past the last row
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| {
            let start = row * self.cols;
            &self.cells[start..start + self.cols]
        })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Convert to row vectors
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Clone> Grid<T> {
    /// Create a `rows x cols` grid with every cell set to `fill`
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self.iter_rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct V<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for V<T> {
            type Value = Grid<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an array of equal-length row arrays")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut rows: Vec<Vec<T>> = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(row) = seq.next_element()? {
                    rows.push(row);
                }
                Grid::from_rows(rows).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_seq(V(PhantomData))
    }
}
