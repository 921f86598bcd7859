// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! A puzzle being played: the board, its undo history and the move target.

use crate::{Board, BoardValue, Gesture, Move, MoveStack, Puzzle};
use core::num::NonZeroU32;
use tracing::debug;

/// A board being played, along with the moves committed to it.
#[derive(Clone, Debug)]
pub struct Game<V> {
    board: Board<V>,
    history: MoveStack,
    required_moves: Option<NonZeroU32>,
}

impl<V> Game<V> {
    /// The board in its current state.
    pub fn board(&self) -> &Board<V> {
        &self.board
    }

    /// The moves committed since the board was loaded.
    pub fn history(&self) -> &MoveStack {
        &self.history
    }

    /// How many moves have been made.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// How many moves the puzzle needs, if known.
    pub fn required_moves(&self) -> Option<NonZeroU32> {
        self.required_moves
    }
}

impl<V> Game<V>
where
    V: BoardValue,
{
    /// Start playing a puzzle.
    pub fn new(puzzle: Puzzle<V>) -> Self {
        let (board, required_moves) = puzzle.into_parts();
        Self {
            board,
            history: MoveStack::new(),
            required_moves,
        }
    }

    /// Swap in another puzzle. The history of the old board is dropped.
    pub fn replace(&mut self, puzzle: Puzzle<V>) {
        let (board, required_moves) = puzzle.into_parts();
        debug!(
            dropped = self.history.len(),
            pieces = board.pieces().len(),
            "replacing board"
        );
        self.board = board;
        self.required_moves = required_moves;
        self.history.clear();
    }

    /// Whether the primary piece has reached the exit.
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Begin dragging the piece covering `cell`.
    pub fn grab(&self, cell: V) -> Option<Gesture<V>> {
        Gesture::start(&self.board, cell)
    }

    /// Begin dragging the piece under a point in board space.
    pub fn press(&self, x: f64, y: f64) -> Option<Gesture<V>> {
        Gesture::press(&self.board, x, y)
    }

    /// Finish a drag, committing its move if it has one.
    pub fn release(&mut self, gesture: Gesture<V>) -> Option<Move> {
        gesture.end(&mut self.board, &mut self.history)
    }

    /// Take back the last move.
    pub fn undo(&mut self) -> Option<Move> {
        self.history.undo(&mut self.board)
    }

    /// Take back every move, returning the board to how it was loaded.
    pub fn reset(&mut self) -> usize {
        let undone = self.history.reset_all(&mut self.board);
        debug!(undone, "reset board");
        undone
    }
}
