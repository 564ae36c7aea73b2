//! Puzzle file parsing.
//!
//! A puzzle is a board dimension header followed by piece blocks:
//!
//! ```text
//! 4 4
//!
//! x4
//! 11
//! 11
//! ```
//!
//! Blocks are separated by blank lines. A block may open with `xN` to set
//! the piece's multiplicity (default 1); the remaining lines are the
//! silhouette in the configured glyphs.

use std::error::Error;
use std::fmt;

use tessel_core::PieceInput;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PuzzleError {
    /// No non-blank line to read dimensions from.
    MissingHeader,
    /// The header line is not two integers.
    BadHeader { line: String },
    /// An `xN` prefix did not parse as a positive count.
    BadMultiplicity { line: String },
    /// A block declared a multiplicity but no silhouette.
    EmptyPiece { index: usize },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => f.write_str("puzzle is empty, expected a `W H` header"),
            Self::BadHeader { line } => {
                write!(f, "expected `W H` board dimensions, found {line:?}")
            }
            Self::BadMultiplicity { line } => {
                write!(f, "expected `xN` multiplicity, found {line:?}")
            }
            Self::EmptyPiece { index } => {
                write!(f, "piece block {index} has no silhouette lines")
            }
        }
    }
}

impl Error for PuzzleError {}

#[derive(Clone, Debug)]
pub struct PuzzlePiece {
    pub ascii: String,
    pub mult: usize,
}

/// A parsed puzzle file: board dimensions plus the piece list.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub width: usize,
    pub height: usize,
    pub pieces: Vec<PuzzlePiece>,
}

impl Puzzle {
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let mut lines = text.lines();
        let header = lines
            .by_ref()
            .find(|line| !line.trim().is_empty())
            .ok_or(PuzzleError::MissingHeader)?;

        let mut dims = header.split_whitespace();
        let (width, height) = match (dims.next(), dims.next(), dims.next()) {
            (Some(w), Some(h), None) => match (w.parse(), h.parse()) {
                (Ok(w), Ok(h)) => (w, h),
                _ => {
                    return Err(PuzzleError::BadHeader {
                        line: header.to_string(),
                    })
                }
            },
            _ => {
                return Err(PuzzleError::BadHeader {
                    line: header.to_string(),
                })
            }
        };

        let mut pieces = Vec::new();
        let mut block: Vec<&str> = Vec::new();
        for line in lines.chain(std::iter::once("")) {
            if line.trim().is_empty() {
                if !block.is_empty() {
                    pieces.push(Self::parse_block(&block, pieces.len())?);
                    block.clear();
                }
            } else {
                block.push(line);
            }
        }

        Ok(Self {
            width,
            height,
            pieces,
        })
    }

    fn parse_block(block: &[&str], index: usize) -> Result<PuzzlePiece, PuzzleError> {
        let (mult, silhouette) = match block[0].strip_prefix('x') {
            Some(count) => {
                let mult = count.trim().parse::<usize>().map_err(|_| {
                    PuzzleError::BadMultiplicity {
                        line: block[0].to_string(),
                    }
                })?;
                (mult, &block[1..])
            }
            None => (1, block),
        };
        if silhouette.is_empty() {
            return Err(PuzzleError::EmptyPiece { index });
        }
        Ok(PuzzlePiece {
            ascii: silhouette.join("\n"),
            mult,
        })
    }

    /// Borrow the pieces as solver inputs.
    pub fn inputs(&self) -> Vec<PieceInput<'_>> {
        self.pieces
            .iter()
            .map(|p| PieceInput::new(&p.ascii, p.mult))
            .collect()
    }
}
