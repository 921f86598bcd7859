// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Linear undo history over committed moves.

use crate::{Board, BoardValue, Move};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The moves committed to a board, oldest first.
///
/// Undoing relies on every move being the exact inverse of its undo, so only moves drawn from
/// [`Board::legal_moves`] should be committed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct MoveStack {
    moves: Vec<Move>,
}

impl MoveStack {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of committed moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether no moves have been committed.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The committed moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Record a move which was just applied with [`Board::do_move`].
    pub fn commit(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Forget every committed move without touching any board. Used when the board is replaced.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Revert the most recent move on `board`. Does nothing when the history is empty.
    pub fn undo<V>(&mut self, board: &mut Board<V>) -> Option<Move>
    where
        V: BoardValue,
    {
        let mv = self.moves.pop()?;
        board.undo_move(mv);
        debug!(%mv, remaining = self.moves.len(), "undid move");
        Some(mv)
    }

    /// Revert every committed move, restoring `board` to the state it had when the history was
    /// started. Returns how many moves were undone.
    pub fn reset_all<V>(&mut self, board: &mut Board<V>) -> usize
    where
        V: BoardValue,
    {
        let mut undone = 0;
        while self.undo(board).is_some() {
            undone += 1;
        }
        undone
    }
}
