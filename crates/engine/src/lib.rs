//! tessel-engine - the bit-packed placement surface.
//!
//! Provides collision-checked piece insertion and removal over a
//! column-major word layout, at one word op per touched row.

mod board;

pub use board::{Board, PlaceError};
