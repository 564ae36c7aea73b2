//! tessel-search - exhaustive tiling enumeration over a placement board.

mod solver;

pub use solver::Solver;
