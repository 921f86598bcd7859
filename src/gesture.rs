// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Mapping a continuous pointer drag onto at most one discrete move.
//!
//! A [`Gesture`] lives from pointer-down to pointer-up. It is created over the piece under the
//! pointer, follows the pointer's offset (projected onto the piece's axis and clamped to how far
//! the piece can actually slide) for live feedback, and on release commits the move closest to
//! where the pointer was let go.

use crate::{Board, BoardValue, Move, MoveStack, Piece};
use num_traits::float::FloatCore;
use tracing::debug;

/// One pointer-down to pointer-up interaction with a single piece.
#[derive(Copy, Clone, Debug)]
pub struct Gesture<V> {
    index: usize,
    piece: Piece<V>,
    min: isize,
    max: isize,
    anchor: (f64, f64),
    offset: f64,
}

impl<V> Gesture<V> {
    /// The index of the piece being dragged.
    pub fn piece_index(&self) -> usize {
        self.index
    }

    /// The piece being dragged, as it was when the gesture started.
    pub fn piece(&self) -> &Piece<V> {
        &self.piece
    }

    /// The furthest the piece may move in each direction, in steps.
    pub fn range(&self) -> (isize, isize) {
        (self.min, self.max)
    }

    /// The current offset of the piece along its axis, clamped to [`Gesture::range`]. This is
    /// display state only; the board is untouched until [`Gesture::end`].
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The number of steps that would be committed if the gesture ended now.
    pub fn steps(&self) -> isize {
        // halves round up
        let rounded = FloatCore::floor(self.offset + 0.5) as isize;
        rounded.clamp(self.min, self.max)
    }
}

impl<V> Gesture<V>
where
    V: BoardValue,
{
    /// Start a gesture on the piece covering `cell`. [`None`] if the cell is empty or covered by
    /// a wall, in which case the interaction should be ignored.
    pub fn start(board: &Board<V>, cell: V) -> Option<Self> {
        Self::begin(board, cell, (0.0, 0.0))
    }

    /// Start a gesture at a point in board space (see [`Board::cell_at`]). Later positions are
    /// given with [`Gesture::drag_to`] and measured from this one.
    pub fn press(board: &Board<V>, x: f64, y: f64) -> Option<Self> {
        Self::begin(board, board.cell_at(x, y)?, (x, y))
    }

    fn begin(board: &Board<V>, cell: V, anchor: (f64, f64)) -> Option<Self> {
        let Some(index) = board.piece_at(cell) else {
            debug!(%cell, "no piece under the pointer");
            return None;
        };
        let piece = *board.piece(index)?;
        if piece.is_fixed() {
            debug!(%cell, index, "walls can't be dragged");
            return None;
        }
        let (min, max) = board
            .legal_moves_of(index)
            .iter()
            .fold((0, 0), |(min, max), mv| {
                (min.min(mv.steps()), max.max(mv.steps()))
            });
        debug!(index, min, max, "gesture started");
        Some(Self {
            index,
            piece,
            min,
            max,
            anchor,
            offset: 0.0,
        })
    }

    /// Follow the pointer: `dx` and `dy` are its offset from where the gesture started, in cells.
    /// Returns the new clamped offset along the piece's axis.
    pub fn update(&mut self, dx: f64, dy: f64) -> f64 {
        let along = self.piece.project_onto_axis(dx, dy);
        self.offset = along.clamp(self.min as f64, self.max as f64);
        self.offset
    }

    /// Follow the pointer to an absolute point in board space.
    pub fn drag_to(&mut self, x: f64, y: f64) -> f64 {
        self.update(x - self.anchor.0, y - self.anchor.1)
    }

    /// Finish the gesture, committing the move nearest to the current offset to `board` and
    /// `history`. Returns the committed move, or [`None`] if the piece ends where it started.
    pub fn end(self, board: &mut Board<V>, history: &mut MoveStack) -> Option<Move> {
        let steps = self.steps();
        if steps == 0 {
            debug!(index = self.index, "gesture released in place");
            return None;
        }
        let Some(mv) = board
            .legal_moves_of(self.index)
            .into_iter()
            .find(|mv| mv.steps() == steps)
        else {
            debug!(index = self.index, steps, "gesture no longer matches a legal move");
            return None;
        };
        board.do_move(mv);
        history.commit(mv);
        debug!(%mv, moves = history.len(), solved = board.is_solved(), "gesture committed");
        Some(mv)
    }
}
