// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Pieces: straight runs of cells that slide along their own axis.

use crate::BoardValue;
use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// An orientation for a piece, derived from its stride.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Orientation {
    /// The piece may only move up and down.
    UpDown,
    /// The piece may only move left and right.
    LeftRight,
}

/// How a piece should be presented. The board never looks at the tag; it is only carried
/// through for renderers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Tag {
    /// The piece which must reach the exit.
    Primary,
    /// A "cell" piece of a logic-gate construction.
    Cell,
    /// A filler piece.
    Filler,
    /// An ordinary movable piece.
    #[default]
    Trigger,
    /// A fixed single-cell wall.
    Wall,
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Tag::Primary => "primary",
            Tag::Cell => "cell",
            Tag::Filler => "filler",
            Tag::Trigger => "trigger",
            Tag::Wall => "wall",
        })
    }
}

/// A piece, generic over the numeric type which backs it.
///
/// The piece covers the cells `position + k * stride` for `0 <= k < size`, where `position` is a
/// row-major index into the board. A stride of one is a horizontal run; a stride equal to the
/// board's side length is a vertical one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Piece<V> {
    position: V,
    size: V,
    stride: V,
    tag: Tag,
}

impl<V> Piece<V> {
    /// The index of the piece's first (lowest) cell.
    pub fn position(&self) -> &V {
        &self.position
    }

    /// The number of cells the piece covers.
    pub fn size(&self) -> &V {
        &self.size
    }

    /// The distance, in flat indices, between neighbouring cells of the piece.
    pub fn stride(&self) -> &V {
        &self.stride
    }

    /// The presentation tag of the piece.
    pub fn tag(&self) -> Tag {
        self.tag
    }
}

impl<V> Piece<V>
where
    V: BoardValue,
{
    /// Create a new piece, or `None` if its size or stride is zero.
    pub fn new(position: V, size: V, stride: V, tag: Tag) -> Option<Self> {
        if size.is_zero() || stride.is_zero() {
            None
        } else {
            Some(Self {
                position,
                size,
                stride,
                tag,
            })
        }
    }

    /// Create a fixed single-cell wall.
    pub fn wall(position: V) -> Self {
        Self {
            position,
            size: V::one(),
            stride: V::one(),
            tag: Tag::Wall,
        }
    }

    /// Walls (pieces of size one) never move.
    pub fn is_fixed(&self) -> bool {
        self.size.is_one()
    }

    /// The orientation of the piece.
    pub fn orientation(&self) -> Orientation {
        if self.stride.is_one() {
            Orientation::LeftRight
        } else {
            Orientation::UpDown
        }
    }

    /// The flat indices of every cell the piece covers, lowest first.
    pub fn cells(&self) -> impl Iterator<Item = usize> + use<V> {
        let position: usize = self.position.into();
        let stride: usize = self.stride.into();
        let size: usize = self.size.into();
        (0..size).map(move |k| position + k * stride)
    }

    /// Whether the piece covers the provided cell.
    pub fn contains(&self, cell: usize) -> bool {
        self.cells().any(|c| c == cell)
    }

    /// The coordinate along the piece's own axis on a board with the provided side length: the
    /// column of a horizontal piece, the row of a vertical one.
    pub fn axis_coordinate(&self, side: usize) -> usize {
        let position: usize = self.position.into();
        match self.orientation() {
            Orientation::LeftRight => position % side,
            Orientation::UpDown => position / side,
        }
    }

    /// The coordinate across the piece's axis, which never changes as it slides: the row of a
    /// horizontal piece, the column of a vertical one.
    pub fn cross_coordinate(&self, side: usize) -> usize {
        let position: usize = self.position.into();
        match self.orientation() {
            Orientation::LeftRight => position / side,
            Orientation::UpDown => position % side,
        }
    }

    /// Interpret a two-dimensional offset along the piece's single degree of freedom.
    pub fn project_onto_axis<T>(&self, dx: T, dy: T) -> T {
        match self.orientation() {
            Orientation::LeftRight => dx,
            Orientation::UpDown => dy,
        }
    }

    /// Slide the piece `steps` cells along its axis and return its new position.
    ///
    /// No bounds or intersection checks are made; only moves produced by
    /// [`Board::legal_moves`](crate::Board::legal_moves) (or their inverses) keep the board
    /// valid. `None` is returned, and the piece left untouched, if the new position is not
    /// representable at all.
    pub fn shift(&mut self, steps: isize) -> Option<V> {
        let stride: usize = self.stride.into();
        let position: usize = self.position.into();
        let delta = steps.checked_mul(isize::try_from(stride).ok()?)?;
        let position = position.checked_add_signed(delta)?;
        self.position = V::try_from(position).ok()?;
        Some(self.position)
    }
}
