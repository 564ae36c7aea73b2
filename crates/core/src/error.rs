//! Input-validation errors surfaced at construction time.

use std::error::Error;
use std::fmt;

/// ASCII grid parsing and trimming failures.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MatrixError {
    /// A non-blank line's length differs from the first line's.
    InconsistentLineLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character is neither of the configured glyphs.
    UnexpectedCharacter {
        line: usize,
        column: usize,
        found: char,
    },
    /// A trim request removes more rows or columns than exist.
    TrimTooLarge {
        rows: usize,
        cols: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentLineLength {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line} is {found} characters long, expected {expected}"
            ),
            Self::UnexpectedCharacter {
                line,
                column,
                found,
            } => write!(f, "unexpected character {found:?} at line {line}, column {column}"),
            Self::TrimTooLarge {
                rows,
                cols,
                width,
                height,
            } => write!(
                f,
                "cannot trim {rows} rows and {cols} columns from a {width}x{height} matrix"
            ),
        }
    }
}

impl Error for MatrixError {}

/// Piece construction failures.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceError {
    Matrix(MatrixError),
    /// The trimmed silhouette is wider than one machine word.
    TooWide { width: usize },
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix(err) => err.fmt(f),
            Self::TooWide { width } => {
                write!(
                    f,
                    "piece is {width} cells wide, the limit is {}",
                    crate::WORD_BITS
                )
            }
        }
    }
}

impl Error for PieceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Matrix(err) => Some(err),
            Self::TooWide { .. } => None,
        }
    }
}

impl From<MatrixError> for PieceError {
    fn from(err: MatrixError) -> Self {
        Self::Matrix(err)
    }
}

/// Piece set construction failures.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceSetError {
    /// An input declared zero copies of its piece.
    MultiplicityZero { index: usize },
    Piece(PieceError),
}

impl fmt::Display for PieceSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultiplicityZero { index } => {
                write!(f, "piece input {index} has multiplicity zero")
            }
            Self::Piece(err) => err.fmt(f),
        }
    }
}

impl Error for PieceSetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MultiplicityZero { .. } => None,
            Self::Piece(err) => Some(err),
        }
    }
}

impl From<PieceError> for PieceSetError {
    fn from(err: PieceError) -> Self {
        Self::Piece(err)
    }
}
