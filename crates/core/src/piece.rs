//! One oriented polyomino: a trimmed bit matrix plus derived metrics.

use std::fmt;

use crate::bitmatrix::{BitMatrix, WORD_BITS};
use crate::config::Glyphs;
use crate::error::PieceError;

/// A polyomino silhouette trimmed to its bounding box.
///
/// Every border row and column of the store contains at least one set bit,
/// and the width never exceeds one machine word, which is what lets the
/// placement engine treat each piece row as a single u64.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Piece {
    store: BitMatrix,
    area: usize,
}

impl Piece {
    /// Parse an ASCII silhouette, trim it to its bounding box and validate
    /// the width limit. An all-zero silhouette yields a 0×0 piece.
    pub fn from_ascii(input: &str, glyphs: Glyphs) -> Result<Self, PieceError> {
        let store = BitMatrix::parse(input, glyphs)?.trim_whitespace();
        Self::from_matrix(store)
    }

    /// Wrap an already-trimmed matrix. Trimming is the caller's business.
    pub fn from_matrix(store: BitMatrix) -> Result<Self, PieceError> {
        if store.width() > WORD_BITS {
            return Err(PieceError::TooWide {
                width: store.width(),
            });
        }
        let area = store.count_ones();
        Ok(Self { store, area })
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.store.width()
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.store.height()
    }

    /// Count of filled cells.
    #[inline(always)]
    pub fn area(&self) -> usize {
        self.area
    }

    #[inline(always)]
    pub fn store(&self) -> &BitMatrix {
        &self.store
    }

    /// 90° clockwise rotation. Cell (x, y) moves to (H-1-y, x); dimensions
    /// swap. Pure geometry - the width invariant is re-checked where rotated
    /// pieces enter a rotation set, not here.
    pub fn rotate(&self) -> Self {
        let height = self.height();
        let mut store = BitMatrix::new(height, self.width());
        for (x, y, bit) in self.store.bit_reader() {
            if bit {
                store.set(height - 1 - y, x, true);
            }
        }
        Self {
            store,
            area: self.area,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.store, f)
    }
}
