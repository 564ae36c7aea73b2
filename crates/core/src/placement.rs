//! Placement and solution records emitted by the solver.

use serde::{Deserialize, Serialize};

/// One placed piece: which type, which rotation, which copy, and where.
///
/// `copy` is the number of same-type copies already on the stack when this
/// one was pushed; display surfaces render it 1-based via [`ordinal`].
///
/// [`ordinal`]: Placement::ordinal
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Placement {
    pub type_index: usize,
    pub rotation: usize,
    pub copy: usize,
    pub x: usize,
    pub y: usize,
}

impl Placement {
    pub const fn new(type_index: usize, rotation: usize, copy: usize, x: usize, y: usize) -> Self {
        Self {
            type_index,
            rotation,
            copy,
            x,
            y,
        }
    }

    /// 1-based position of this copy among placements of its type.
    pub const fn ordinal(&self) -> usize {
        self.copy + 1
    }
}

/// A complete tiling: every piece of the set placed once, in placement order.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Solution {
    placements: Vec<Placement>,
}

impl Solution {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    #[inline(always)]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}
