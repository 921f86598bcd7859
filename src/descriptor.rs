// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! The textual board descriptor.
//!
//! A descriptor is a row-major string of `N * N` characters describing an `N x N` board. `.` and
//! `o` are empty cells, every `x` is a single-cell wall, and any other character labels the cells
//! of one movable piece. A piece's cells must form a straight horizontal or vertical run of at
//! least two cells. Labels are case-sensitive and otherwise free-form; pieces are numbered in
//! ascending label order, so the smallest label is the primary piece. Walls come after all movable
//! pieces, in the order they appear.
//!
//! ```
//! use parking_puzzle::Board;
//!
//! let board: Board<u8> = "IBBxooIooLDDJAALooJoKEEMFFKooMGGHHHM".parse()?;
//! assert_eq!(6, *board.size());
//! assert_eq!(13, *board.primary().unwrap().position());
//! # Ok::<(), parking_puzzle::DescriptorError>(())
//! ```

use crate::{Board, BoardValue, Piece, Tag};
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::error::Error;
use core::fmt::{Display, Formatter};
use tracing::debug;

/// The label written for empty cells.
pub const EMPTY: char = '.';
/// The alternative label for empty cells accepted when parsing.
pub const EMPTY_ALT: char = 'o';
/// The label of single-cell walls.
pub const WALL: char = 'x';
/// Labels used when encoding movable pieces, in ascending order.
pub const LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnpqrstuvwyz";

/// An error raised while parsing a descriptor.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DescriptorError {
    /// The descriptor was empty.
    Empty,
    /// The descriptor's length (given) is not a perfect square.
    NotSquare(usize),
    /// A board with the given side length can't be indexed by the chosen value type.
    TooLarge(usize),
    /// The piece with the given label covers fewer than two cells.
    PieceTooSmall(char),
    /// The cells of the piece with the given label don't form a horizontal or vertical run.
    InvalidShape(char),
}

impl Display for DescriptorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            DescriptorError::Empty => f.write_str("board cannot be empty"),
            DescriptorError::NotSquare(len) => f.write_fmt(format_args!(
                "boards must be square, but the descriptor has {len} cells"
            )),
            DescriptorError::TooLarge(side) => f.write_fmt(format_args!(
                "a board of side {side} is too large for its value type"
            )),
            DescriptorError::PieceTooSmall(label) => f.write_fmt(format_args!(
                "piece {label:?} must cover at least two cells"
            )),
            DescriptorError::InvalidShape(label) => {
                f.write_fmt(format_args!("piece {label:?} has an invalid shape"))
            }
        }
    }
}

impl Error for DescriptorError {}

/// Parse a descriptor, tagging every movable piece other than the primary one as
/// [`Tag::Trigger`].
pub fn parse<V>(descriptor: &str) -> Result<Board<V>, DescriptorError>
where
    V: BoardValue,
{
    parse_with(descriptor, |_| Tag::Trigger)
}

/// Parse a descriptor, asking `classify` for the tag of every movable piece other than the
/// primary one.
pub fn parse_with<V, F>(descriptor: &str, mut classify: F) -> Result<Board<V>, DescriptorError>
where
    V: BoardValue,
    F: FnMut(char) -> Tag,
{
    let len = descriptor.chars().count();
    if len == 0 {
        return Err(DescriptorError::Empty);
    }
    let side = len.isqrt();
    if side * side != len {
        return Err(DescriptorError::NotSquare(len));
    }

    let mut groups: BTreeMap<char, Vec<usize>> = BTreeMap::new();
    for (idx, label) in descriptor.chars().enumerate() {
        groups.entry(label).or_default().push(idx);
    }
    let walls = groups.remove(&WALL).unwrap_or_default();
    groups.remove(&EMPTY);
    groups.remove(&EMPTY_ALT);

    let mut board = V::try_from(side)
        .ok()
        .and_then(|size| Board::empty(size).ok())
        .ok_or(DescriptorError::TooLarge(side))?;

    for (ordinal, (label, cells)) in groups.into_iter().enumerate() {
        let &[first, second, ..] = cells.as_slice() else {
            return Err(DescriptorError::PieceTooSmall(label));
        };
        let stride = second - first;
        if stride != 1 && stride != side {
            return Err(DescriptorError::InvalidShape(label));
        }
        if cells.windows(2).any(|pair| pair[1] - pair[0] != stride) {
            return Err(DescriptorError::InvalidShape(label));
        }
        let tag = if ordinal == 0 {
            Tag::Primary
        } else {
            classify(label)
        };
        let piece = match (
            V::try_from(first),
            V::try_from(cells.len()),
            V::try_from(stride),
        ) {
            (Ok(position), Ok(size), Ok(stride)) => Piece::new(position, size, stride, tag),
            _ => None,
        }
        .ok_or(DescriptorError::TooLarge(side))?;
        // the only placement failure left is a horizontal run crossing a row end
        board
            .add_piece(piece)
            .map_err(|_| DescriptorError::InvalidShape(label))?;
    }

    for cell in walls {
        let position = V::try_from(cell).map_err(|_| DescriptorError::TooLarge(side))?;
        board
            .add_piece(Piece::wall(position))
            .map_err(|_| DescriptorError::InvalidShape(WALL))?;
    }

    debug!(
        side,
        pieces = board.pieces().len(),
        solved = board.is_solved(),
        "parsed board descriptor"
    );
    Ok(board)
}
