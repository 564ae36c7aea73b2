//! placement surface - column-major u64 words so a piece insert is one word
//! op per touched row, with eager writes rolled back on conflict

use std::error::Error;
use std::fmt;

use tessel_core::{BitMatrix, Glyphs, MatrixError, Piece, WORD_BITS};

/// Geometry and occupancy signals raised by `insert`/`remove`.
///
/// These drive the solver's state machine rather than report failure; every
/// variant leaves the board exactly as it was before the call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlaceError {
    /// x + piece.width exceeds the board width.
    WidthOverflow,
    /// y + piece.height exceeds the board height.
    HeightOverflow,
    /// Both bounds exceeded at once.
    WidthAndHeightOverflow,
    /// Some cell the piece covers is already occupied.
    InsertCollision,
    /// Some cell the piece claims is not currently occupied.
    RemoveMismatch,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::WidthOverflow => "placement exceeds board width",
            Self::HeightOverflow => "placement exceeds board height",
            Self::WidthAndHeightOverflow => "placement exceeds board width and height",
            Self::InsertCollision => "placement overlaps an occupied cell",
            Self::RemoveMismatch => "removal targets an empty cell",
        };
        f.write_str(text)
    }
}

impl Error for PlaceError {}

/// Mutable W×H placement surface.
///
/// The same occupancy lives in two layouts: `bit_field`, a row-major
/// [`BitMatrix`] for I/O, and `current`, the column-major hot store where
/// `current[c*H + r]` holds cells (c*64+k, r) MSB-first. A piece of height h
/// therefore touches h consecutive words per column word it spans. The store
/// carries WORD_BITS words of trailing zero padding so full-width vector
/// loads at any valid row index stay in bounds.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    row_words: usize,
    bit_field: BitMatrix,
    current: Vec<u64>,
}

impl Board {
    /// Empty board of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        let row_words = width.div_ceil(WORD_BITS);
        Self {
            width,
            height,
            row_words,
            bit_field: BitMatrix::new(width, height),
            current: vec![0; row_words * height + WORD_BITS],
        }
    }

    /// Parse an ASCII board and load it into the column-major store.
    pub fn parse(input: &str, glyphs: Glyphs) -> Result<Self, MatrixError> {
        let bit_field = BitMatrix::parse(input, glyphs)?;
        let mut board = Self::new(bit_field.width(), bit_field.height());
        for y in 0..board.height {
            for word in 0..board.row_words {
                board.current[word * board.height + y] = bit_field.row_word(y, word);
            }
        }
        board.bit_field = bit_field;
        Ok(board)
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        let word = self.current[(x / WORD_BITS) * self.height + y];
        word & (1u64 << (WORD_BITS - 1 - (x % WORD_BITS))) != 0
    }

    /// OR the piece into the board at (x, y).
    ///
    /// Writes are applied row by row before the full collision set is known;
    /// on collision the rows already written are XORed back out, so an error
    /// leaves the board untouched.
    pub fn insert(&mut self, piece: &Piece, x: usize, y: usize) -> Result<(), PlaceError> {
        self.check_bounds(piece, x, y)?;
        self.place(piece, x, y, |board, row| board & row != 0)
            .map_err(|()| PlaceError::InsertCollision)
    }

    /// Inverse of [`insert`]: clear the piece's cells at (x, y), verifying
    /// each claimed cell is set. Mismatch rolls back symmetrically.
    ///
    /// [`insert`]: Board::insert
    pub fn remove(&mut self, piece: &Piece, x: usize, y: usize) -> Result<(), PlaceError> {
        self.check_bounds(piece, x, y)?;
        self.place(piece, x, y, |board, row| (board & row) ^ row != 0)
            .map_err(|()| PlaceError::RemoveMismatch)
    }

    /// Rewrite the row-major view from the column-major store.
    pub fn sync_to_bit_field(&mut self) {
        for y in 0..self.height {
            for word in 0..self.row_words {
                self.bit_field
                    .set_row_word(y, word, self.current[word * self.height + y]);
            }
        }
    }

    /// Row-major view of the board. Only current after `sync_to_bit_field`.
    #[inline(always)]
    pub fn bit_field(&self) -> &BitMatrix {
        &self.bit_field
    }

    #[inline(always)]
    fn check_bounds(&self, piece: &Piece, x: usize, y: usize) -> Result<(), PlaceError> {
        let wide = x + piece.width() > self.width;
        let tall = y + piece.height() > self.height;
        match (wide, tall) {
            (true, true) => Err(PlaceError::WidthAndHeightOverflow),
            (true, false) => Err(PlaceError::WidthOverflow),
            (false, true) => Err(PlaceError::HeightOverflow),
            (false, false) => Ok(()),
        }
    }

    /// Shared word walk under insert and remove.
    ///
    /// Both operations XOR each piece row into the store after `conflict`
    /// clears it; XOR being self-inverse is what makes the rollback exact.
    /// `conflict` sees (board word, shifted piece row) and returns true when
    /// the row must not be applied.
    #[inline(always)]
    fn place(
        &mut self,
        piece: &Piece,
        x: usize,
        y: usize,
        conflict: impl Fn(u64, u64) -> bool,
    ) -> Result<(), ()> {
        let col = x / WORD_BITS;
        let shift = x % WORD_BITS;
        let store = piece.store();
        if shift + piece.width() <= WORD_BITS {
            for r in 0..piece.height() {
                let row = store.row_word(r, 0) >> shift;
                let index = col * self.height + y + r;
                let word = self.current[index];
                if conflict(word, row) {
                    self.unwind(piece, x, y, r);
                    return Err(());
                }
                self.current[index] = word ^ row;
            }
        } else {
            // piece straddles a word boundary: two columns per row
            let spill = WORD_BITS - shift;
            for r in 0..piece.height() {
                let row = store.row_word(r, 0);
                let lo = row >> shift;
                let hi = row << spill;
                let index0 = col * self.height + y + r;
                let index1 = (col + 1) * self.height + y + r;
                let word0 = self.current[index0];
                let word1 = self.current[index1];
                if conflict(word0, lo) || conflict(word1, hi) {
                    self.unwind(piece, x, y, r);
                    return Err(());
                }
                self.current[index0] = word0 ^ lo;
                self.current[index1] = word1 ^ hi;
            }
        }
        Ok(())
    }

    /// XOR back the rows a failed walk already applied.
    fn unwind(&mut self, piece: &Piece, x: usize, y: usize, rows: usize) {
        let col = x / WORD_BITS;
        let shift = x % WORD_BITS;
        let store = piece.store();
        if shift + piece.width() <= WORD_BITS {
            for r in (0..rows).rev() {
                self.current[col * self.height + y + r] ^= store.row_word(r, 0) >> shift;
            }
        } else {
            let spill = WORD_BITS - shift;
            for r in (0..rows).rev() {
                let row = store.row_word(r, 0);
                self.current[col * self.height + y + r] ^= row >> shift;
                self.current[(col + 1) * self.height + y + r] ^= row << spill;
            }
        }
    }
}

/// Equality compares dimensions and the live column-major store; the
/// row-major view is derived state and may be stale.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.current == other.current
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs = Glyphs::default();
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.width {
                write!(f, "{}", if self.get(x, y) { glyphs.one } else { glyphs.zero })?;
            }
        }
        Ok(())
    }
}
