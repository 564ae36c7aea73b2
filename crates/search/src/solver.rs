//! Iterative depth-first tiling enumeration.
//!
//! Recursion is replaced by an explicit state enum and a preallocated
//! placement stack, so a backtrack step is O(1) and the hot loop never
//! allocates; the only allocation per search is the copy made of the stack
//! each time a full tiling is found.

use tessel_core::{PieceSet, PieceType, Placement, Solution};
use tessel_engine::{Board, PlaceError};

/// Where the search loop resumes after each action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    TryPlacement,
    AcceptPiece,
    SaveSolution,
    MoveX,
    MoveNextRow,
    NextRotation,
    Backtrack,
    End,
}

/// Exhaustive tiling enumerator over one board.
///
/// Piece types are scanned in order; copies of the same type are forced to
/// start strictly after the previous copy in row-major order, which is the
/// canonical tie-break that keeps permutations of identical pieces from
/// being emitted as distinct tilings.
pub struct Solver {
    types: Vec<PieceType>,
    board: Board,
    stack: Vec<Placement>,
    total: usize,
    next_type: usize,
    next_rotation: usize,
    placed_of_type: usize,
    next_x: usize,
    next_y: usize,
}

impl Solver {
    /// Build a solver over an empty width×height board. The placement stack
    /// is preallocated to the set's total piece count.
    pub fn new(pieces: PieceSet, width: usize, height: usize) -> Self {
        let total = pieces.total_pieces();
        Self {
            types: pieces.into_types(),
            board: Board::new(width, height),
            stack: Vec::with_capacity(total),
            total,
            next_type: 0,
            next_rotation: 0,
            placed_of_type: 0,
            next_x: 0,
            next_y: 0,
        }
    }

    /// Total pieces a solution must place.
    pub fn total_pieces(&self) -> usize {
        self.total
    }

    /// Run the search to completion and return every distinct tiling, in
    /// discovery order. The list is empty when no tiling exists.
    pub fn solve(&mut self) -> Vec<Solution> {
        let mut solutions = Vec::new();
        if self.types.is_empty() {
            return solutions;
        }
        self.reset();

        let mut state = State::TryPlacement;
        loop {
            state = match state {
                State::TryPlacement => self.try_placement(),
                State::AcceptPiece => self.accept_piece(),
                State::SaveSolution => {
                    solutions.push(Solution::new(self.stack.clone()));
                    State::Backtrack
                }
                State::MoveX => {
                    self.next_x += 1;
                    State::TryPlacement
                }
                State::MoveNextRow => {
                    self.next_x = 0;
                    self.next_y += 1;
                    State::TryPlacement
                }
                State::NextRotation => self.advance_rotation(),
                State::Backtrack => self.backtrack(),
                State::End => return solutions,
            };
        }
    }

    fn reset(&mut self) {
        self.board = Board::new(self.board.width(), self.board.height());
        self.stack.clear();
        self.next_type = 0;
        self.next_rotation = 0;
        self.placed_of_type = 0;
        self.next_x = 0;
        self.next_y = 0;
    }

    fn try_placement(&mut self) -> State {
        let piece = self.types[self.next_type].rotation(self.next_rotation);
        match self.board.insert(piece, self.next_x, self.next_y) {
            Ok(()) => State::AcceptPiece,
            Err(PlaceError::InsertCollision) => State::MoveX,
            Err(PlaceError::WidthOverflow) => State::MoveNextRow,
            // height exhausted: further scanning at this y or below cannot
            // help, so the rotation is spent
            Err(_) => State::NextRotation,
        }
    }

    fn accept_piece(&mut self) -> State {
        let placement = Placement::new(
            self.next_type,
            self.next_rotation,
            self.placed_of_type,
            self.next_x,
            self.next_y,
        );
        self.stack.push(placement);
        self.placed_of_type += 1;
        self.load_next_piece(placement)
    }

    fn load_next_piece(&mut self, prev: Placement) -> State {
        if self.placed_of_type < self.types[self.next_type].mult() {
            // another copy of the same type: force it strictly after the
            // previous copy in row-major order
            self.next_rotation = 0;
            self.next_x = prev.x + 1;
            self.next_y = prev.y;
            State::TryPlacement
        } else if self.stack.len() == self.total {
            State::SaveSolution
        } else {
            self.next_type += 1;
            self.next_rotation = 0;
            self.placed_of_type = 0;
            self.next_x = 0;
            self.next_y = 0;
            State::TryPlacement
        }
    }

    fn advance_rotation(&mut self) -> State {
        self.next_rotation += 1;
        if self.next_rotation < self.types[self.next_type].rotation_count() {
            // the scan position is deliberately not rewound
            State::TryPlacement
        } else {
            State::Backtrack
        }
    }

    fn backtrack(&mut self) -> State {
        let Some(placement) = self.stack.pop() else {
            return State::End;
        };
        self.next_type = placement.type_index;
        self.next_rotation = placement.rotation;
        self.placed_of_type = placement.copy;
        self.next_x = placement.x;
        self.next_y = placement.y;
        let _removed = self.board.remove(
            self.types[placement.type_index].rotation(placement.rotation),
            placement.x,
            placement.y,
        );
        debug_assert!(
            _removed.is_ok(),
            "backtracked placement was not on the board"
        );
        State::MoveX
    }
}
