// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Puzzle references: a descriptor, optionally followed by `/` and the number of moves the puzzle
//! needs, e.g. `IBBxooIooLDDJAALooJoKEEMFFKooMGGHHHM/60`.

use crate::descriptor::{self, DescriptorError};
use crate::{Board, BoardValue};
use alloc::string::String;
use core::error::Error;
use core::fmt::{Display, Formatter};
use core::num::{NonZeroU32, ParseIntError};
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The board loaded when a reference can't be used.
pub const DEFAULT_DESCRIPTOR: &str = "IBBxooIooLDDJAALooJoKEEMFFKooMGGHHHM";
/// The number of moves [`DEFAULT_DESCRIPTOR`] needs.
pub const DEFAULT_REQUIRED_MOVES: u32 = 60;

/// How references are loaded.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// The descriptor of the board to fall back to.
    pub default_descriptor: String,
    /// The required move count shown with the fallback board.
    pub default_required_moves: Option<u32>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            default_descriptor: String::from(DEFAULT_DESCRIPTOR),
            default_required_moves: Some(DEFAULT_REQUIRED_MOVES),
        }
    }
}

/// An error raised while reading a puzzle reference.
#[derive(Debug)]
pub enum ReferenceError {
    /// The descriptor part was rejected.
    Descriptor(DescriptorError),
    /// The move count wasn't a non-negative integer.
    MoveCount(ParseIntError),
}

impl Display for ReferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ReferenceError::Descriptor(_) => {
                f.write_str("the puzzle's board descriptor is invalid")
            }
            ReferenceError::MoveCount(_) => {
                f.write_str("the puzzle's move count is not an integer")
            }
        }
    }
}

impl Error for ReferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReferenceError::Descriptor(e) => Some(e),
            ReferenceError::MoveCount(e) => Some(e),
        }
    }
}

impl From<DescriptorError> for ReferenceError {
    fn from(value: DescriptorError) -> Self {
        ReferenceError::Descriptor(value)
    }
}

/// A board together with the number of moves its best solution takes, if known.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Puzzle<V> {
    board: Board<V>,
    required_moves: Option<NonZeroU32>,
}

impl<V> Puzzle<V> {
    /// Wrap a board. A required move count of zero is treated as unknown.
    pub fn new(board: Board<V>, required_moves: Option<u32>) -> Self {
        Self {
            board,
            required_moves: required_moves.and_then(NonZeroU32::new),
        }
    }

    /// The puzzle's board in its initial state.
    pub fn board(&self) -> &Board<V> {
        &self.board
    }

    /// The number of moves the puzzle needs, if known.
    pub fn required_moves(&self) -> Option<NonZeroU32> {
        self.required_moves
    }

    /// Split the puzzle into its parts.
    pub fn into_parts(self) -> (Board<V>, Option<NonZeroU32>) {
        (self.board, self.required_moves)
    }
}

impl<V> Puzzle<V>
where
    V: BoardValue,
{
    /// Load a reference, falling back to the configured default board if it can't be read. Only
    /// fails if the configured default is itself invalid.
    pub fn load(reference: &str, config: &LoaderConfig) -> Result<Self, DescriptorError> {
        match reference.parse::<Self>() {
            Ok(puzzle) => Ok(puzzle),
            Err(e) => {
                warn!(reference, error = %e, "falling back to the default puzzle");
                let board = descriptor::parse(&config.default_descriptor)?;
                Ok(Self::new(board, config.default_required_moves))
            }
        }
    }
}

impl<V> FromStr for Puzzle<V>
where
    V: BoardValue,
{
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (descriptor, required_moves) = match s.split_once('/') {
            None => (s, None),
            Some((descriptor, count)) => (
                descriptor,
                Some(count.parse::<u32>().map_err(ReferenceError::MoveCount)?),
            ),
        };
        let board = descriptor::parse(descriptor)?;
        debug!(descriptor, ?required_moves, "loaded puzzle reference");
        Ok(Self::new(board, required_moves))
    }
}
