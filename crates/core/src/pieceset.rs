//! Piece types with multiplicities, deduped across 90° rotations.

use crate::bitmatrix::WORD_BITS;
use crate::config::Glyphs;
use crate::error::{PieceError, PieceSetError};
use crate::piece::Piece;

/// One silhouette to include in a puzzle, with its copy count.
#[derive(Clone, Copy, Debug)]
pub struct PieceInput<'a> {
    pub ascii: &'a str,
    pub mult: usize,
}

impl<'a> PieceInput<'a> {
    pub const fn new(ascii: &'a str, mult: usize) -> Self {
        Self { ascii, mult }
    }
}

/// A rotation class bundled with how many copies the puzzle uses.
///
/// `rotations` lists the distinct orientations in the order produced by
/// repeatedly rotating the first; symmetric pieces carry 1 or 2 entries,
/// asymmetric ones 4.
#[derive(Clone, Debug)]
pub struct PieceType {
    rotations: Vec<Piece>,
    mult: usize,
}

impl PieceType {
    #[inline(always)]
    pub fn rotations(&self) -> &[Piece] {
        &self.rotations
    }

    #[inline(always)]
    pub fn rotation(&self, index: usize) -> &Piece {
        &self.rotations[index]
    }

    #[inline(always)]
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// How many copies of this type the puzzle places.
    #[inline(always)]
    pub fn mult(&self) -> usize {
        self.mult
    }

    /// Filled cells of one copy (identical across rotations).
    #[inline(always)]
    pub fn area(&self) -> usize {
        self.rotations[0].area()
    }
}

/// Ordered multiset of piece types. No two types share a rotation.
#[derive(Clone, Debug, Default)]
pub struct PieceSet {
    types: Vec<PieceType>,
}

impl PieceSet {
    /// Build a set from silhouettes, merging inputs whose rotation classes
    /// coincide by summing their multiplicities.
    pub fn build(inputs: &[PieceInput<'_>], glyphs: Glyphs) -> Result<Self, PieceSetError> {
        let mut types: Vec<PieceType> = Vec::new();
        for (index, input) in inputs.iter().enumerate() {
            if input.mult == 0 {
                return Err(PieceSetError::MultiplicityZero { index });
            }
            let piece = Piece::from_ascii(input.ascii, glyphs)?;
            let rotations = rotation_set(piece)?;
            // same polyomino up to rotation -> same type
            let merged = types.iter_mut().find(|existing| {
                existing
                    .rotations
                    .iter()
                    .any(|r| rotations.contains(r))
            });
            match merged {
                Some(existing) => existing.mult += input.mult,
                None => types.push(PieceType {
                    rotations,
                    mult: input.mult,
                }),
            }
        }
        Ok(Self { types })
    }

    #[inline(always)]
    pub fn types(&self) -> &[PieceType] {
        &self.types
    }

    pub fn into_types(self) -> Vec<PieceType> {
        self.types
    }

    /// Total piece count N = Σ mult.
    pub fn total_pieces(&self) -> usize {
        self.types.iter().map(PieceType::mult).sum()
    }

    /// Cells covered when every copy is placed.
    pub fn total_area(&self) -> usize {
        self.types.iter().map(|t| t.mult * t.area()).sum()
    }
}

/// Rotate up to three times past the original, halting on the first repeat.
/// The width invariant is re-checked here because rotation swaps dimensions.
fn rotation_set(piece: Piece) -> Result<Vec<Piece>, PieceSetError> {
    let mut rotations = Vec::with_capacity(4);
    rotations.push(piece);
    while rotations.len() < 4 {
        let next = rotations[rotations.len() - 1].rotate();
        if next == rotations[0] {
            break;
        }
        if next.width() > WORD_BITS {
            return Err(PieceError::TooWide {
                width: next.width(),
            }
            .into());
        }
        rotations.push(next);
    }
    Ok(rotations)
}
