// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! parking-puzzle: the board model behind a Rush Hour style sliding-block puzzle.
//!
//! A puzzle is a square grid holding rectangular pieces. Each piece is a straight run of cells
//! that may only slide along its own long axis until it is stopped by the edge of the grid or by
//! another piece; single-cell pieces are walls and never move. The first piece is the _primary_
//! piece, and the puzzle is solved once it reaches the far edge along its axis.
//!
//! This crate covers the parts of the game with real rules: parsing the textual board
//! [descriptor], the [`Board`] itself (occupancy, legal-move enumeration, move application and
//! undo), a linear undo [`MoveStack`], and the [`Gesture`] session which quantizes a continuous
//! pointer drag into at most one committed move. Drawing the board is left to the user.
//!
//! ```
//! use parking_puzzle::{Board, Gesture, MoveStack};
//!
//! let mut board: Board<u8> = "AA.oBB..........".parse()?;
//! let mut history = MoveStack::new();
//! assert!(!board.is_solved());
//!
//! let mut gesture = Gesture::start(&board, 0).expect("piece A lies under cell 0");
//! gesture.update(1.6, 0.4);
//! gesture.end(&mut board, &mut history);
//! assert!(board.is_solved());
//! # Ok::<(), parking_puzzle::DescriptorError>(())
//! ```

#![no_std]

use core::fmt::{Debug, Display};
use core::hash::Hash;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, Unsigned, Zero};
use serde::de::DeserializeOwned;
use serde::Serialize;

extern crate alloc;

pub mod board;
pub mod descriptor;
pub mod game;
pub mod gesture;
pub mod history;
pub mod piece;
pub mod presets;
pub mod puzzle;

pub use board::{
    Board, DimensionError, InvalidStateError, InvalidStateType, Move, ValidationError,
};
pub use descriptor::DescriptorError;
pub use game::Game;
pub use gesture::Gesture;
pub use history::MoveStack;
pub use piece::{Orientation, Piece, Tag};
pub use presets::Preset;
pub use puzzle::{LoaderConfig, Puzzle, ReferenceError};

/// Marker trait: specifies that a value may be used for board definitions.
///
/// Cell indices, piece sizes and strides are all stored as a `BoardValue`; the whole board
/// (`N * N` cells) must be addressable in it.
pub trait BoardValue:
    One
    + Ord
    + Hash
    + CheckedAdd
    + CheckedSub
    + Copy
    + Into<usize>
    + TryFrom<usize>
    + Zero
    + CheckedMul
    + Debug
    + Display
    + Unsigned
    + DeserializeOwned
    + Serialize
    + 'static
{
}

impl<V> BoardValue for V where
    V: One
        + Ord
        + Hash
        + CheckedAdd
        + CheckedSub
        + Copy
        + Into<usize>
        + TryFrom<usize>
        + Zero
        + CheckedMul
        + Debug
        + Display
        + Unsigned
        + DeserializeOwned
        + Serialize
        + 'static
{
}

#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
