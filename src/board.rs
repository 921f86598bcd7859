// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! The board: a square grid of pieces, its occupancy, and the moves available on it.

use crate::descriptor::{self, DescriptorError};
use crate::{BoardValue, Orientation, Piece};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::error::Error;
use core::fmt::{Display, Formatter};
use core::num::IntErrorKind;
use core::ops::Neg;
use core::str::FromStr;
use num_traits::float::FloatCore;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// A move: slide piece `piece` by `steps` cells along its axis. Negative steps move towards lower
/// indices (left or up). A move may be inverted with [`Neg`] (i.e. `-`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Move {
    piece: usize,
    steps: isize,
}

impl Move {
    /// Create a new move.
    pub fn new(piece: usize, steps: isize) -> Self {
        Self { piece, steps }
    }

    /// The index of the piece to move.
    pub fn piece(&self) -> usize {
        self.piece
    }

    /// The signed number of cells to move by.
    pub fn steps(&self) -> isize {
        self.steps
    }
}

impl Neg for Move {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            piece: self.piece,
            steps: -self.steps,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "piece {} by {:+}", self.piece, self.steps)
    }
}

/// An error associated with the creation of a board of a given side length.
#[derive(Debug)]
pub struct DimensionError(IntErrorKind);

impl Display for DimensionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let reason = match self.0 {
            IntErrorKind::PosOverflow => "the board has more cells than its value type can index",
            IntErrorKind::Zero => "the board has zero area",
            _ => "the side length is unusable",
        };
        f.write_fmt(format_args!("board size could not be used: {reason}"))
    }
}

impl Error for DimensionError {}

fn check_side<V>(size: V) -> Result<(), DimensionError>
where
    V: BoardValue,
{
    match size.checked_mul(&size) {
        Some(cells) if cells.is_zero() => Err(DimensionError(IntErrorKind::Zero)),
        Some(_) => Ok(()),
        None => Err(DimensionError(IntErrorKind::PosOverflow)),
    }
}

/// A type of invalid state, associated with an [`InvalidStateError`].
#[derive(Debug, Eq, PartialEq)]
pub enum InvalidStateType {
    /// The piece with the provided index has a stride which is neither one nor the side length.
    InvalidStride(usize),
    /// The piece with the provided index leaves the board or wraps around a row end.
    InvalidPosition(usize),
    /// The pieces with the provided indices overlap.
    Overlap(usize, usize),
    /// The piece with the provided index covers no cells.
    EmptyPiece(usize),
}

/// An error which denotes that an invalid state was encountered.
#[derive(Debug)]
pub struct InvalidStateError {
    cell: usize,
    variant: InvalidStateType,
}

impl InvalidStateError {
    /// The cell at which the problem was detected.
    pub fn cell(&self) -> usize {
        self.cell
    }

    /// What was wrong.
    pub fn variant(&self) -> &InvalidStateType {
        &self.variant
    }
}

impl Display for InvalidStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.variant {
            InvalidStateType::InvalidStride(idx) => f.write_fmt(format_args!(
                "piece {idx} at cell {} has a stride that is neither horizontal nor vertical",
                self.cell
            )),
            InvalidStateType::InvalidPosition(idx) => f.write_fmt(format_args!(
                "piece {idx} was located at an invalid cell {}",
                self.cell
            )),
            InvalidStateType::Overlap(idx1, idx2) => f.write_fmt(format_args!(
                "piece {idx1} and piece {idx2} overlapped at cell {}",
                self.cell
            )),
            InvalidStateType::EmptyPiece(idx) => f.write_fmt(format_args!(
                "piece {idx} at cell {} covers no cells",
                self.cell
            )),
        }
    }
}

impl Error for InvalidStateError {}

/// An error raised when a whole board is checked, e.g. after deserialization.
#[derive(Debug)]
pub enum ValidationError {
    /// The side length is unusable.
    Dimension(DimensionError),
    /// A piece is misplaced.
    InvalidState(InvalidStateError),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::Dimension(e) => Display::fmt(e, f),
            ValidationError::InvalidState(e) => Display::fmt(e, f),
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ValidationError::Dimension(e) => Some(e),
            ValidationError::InvalidState(e) => Some(e),
        }
    }
}

impl From<DimensionError> for ValidationError {
    fn from(value: DimensionError) -> Self {
        ValidationError::Dimension(value)
    }
}

impl From<InvalidStateError> for ValidationError {
    fn from(value: InvalidStateError) -> Self {
        ValidationError::InvalidState(value)
    }
}

fn place_piece<V>(
    grid: &mut [Option<usize>],
    idx: usize,
    side: usize,
    piece: &Piece<V>,
) -> Result<(), InvalidStateError>
where
    V: BoardValue,
{
    let position: usize = (*piece.position()).into();
    let stride: usize = (*piece.stride()).into();
    if stride != 1 && stride != side {
        return Err(InvalidStateError {
            cell: position,
            variant: InvalidStateType::InvalidStride(idx),
        });
    }
    if piece.size().is_zero() {
        return Err(InvalidStateError {
            cell: position,
            variant: InvalidStateType::EmptyPiece(idx),
        });
    }
    let row = position / side;
    for cell in piece.cells() {
        if stride == 1 && cell / side != row {
            return Err(InvalidStateError {
                cell,
                variant: InvalidStateType::InvalidPosition(idx),
            });
        }
        match grid.get(cell) {
            None => {
                return Err(InvalidStateError {
                    cell,
                    variant: InvalidStateType::InvalidPosition(idx),
                });
            }
            Some(Some(existing)) => {
                return Err(InvalidStateError {
                    cell,
                    variant: InvalidStateType::Overlap(*existing, idx),
                });
            }
            Some(None) => {}
        }
    }
    for cell in piece.cells() {
        grid[cell] = Some(idx);
    }
    Ok(())
}

/// A square board of `size * size` cells and the pieces on it.
///
/// The board is guaranteed to be valid (no overlapping pieces, nothing outside the grid) as long as
/// it is built with [`Board::empty`] and [`Board::add_piece`], parsed from a descriptor or
/// deserialized, and only ever manipulated with moves drawn from [`Board::legal_moves`] and their
/// inverses. Piece 0 is the primary piece.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(try_from = "BoardData<V>", bound(deserialize = "V: BoardValue"))]
pub struct Board<V> {
    size: V,
    pieces: Vec<Piece<V>>,
}

/// A board as it arrives from a deserializer, before it has been checked.
#[derive(Deserialize)]
struct BoardData<V> {
    size: V,
    pieces: Vec<Piece<V>>,
}

impl<V> TryFrom<BoardData<V>> for Board<V>
where
    V: BoardValue,
{
    type Error = ValidationError;

    fn try_from(data: BoardData<V>) -> Result<Self, Self::Error> {
        let board = Self {
            size: data.size,
            pieces: data.pieces,
        };
        board.validate()?;
        Ok(board)
    }
}

impl<V> Board<V> {
    /// The side length of the board.
    pub fn size(&self) -> &V {
        &self.size
    }

    /// The pieces on the board, primary piece first.
    pub fn pieces(&self) -> &[Piece<V>] {
        &self.pieces
    }

    /// The piece with the provided index, if there is one.
    pub fn piece(&self, idx: usize) -> Option<&Piece<V>> {
        self.pieces.get(idx)
    }

    /// The primary piece, i.e. the one which must reach the exit.
    pub fn primary(&self) -> Option<&Piece<V>> {
        self.pieces.first()
    }
}

impl<V> Board<V>
where
    V: BoardValue,
{
    /// Produce an empty board (i.e., one with no pieces) with the provided side length.
    pub fn empty(size: V) -> Result<Self, DimensionError> {
        check_side(size)?;
        Ok(Self {
            size,
            pieces: Vec::new(),
        })
    }

    fn side(&self) -> usize {
        self.size.into()
    }

    /// The number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.side() * self.side()
    }

    /// Add a piece to the board, returning its index.
    pub fn add_piece(&mut self, piece: Piece<V>) -> Result<usize, InvalidStateError> {
        let idx = self.pieces.len();
        let mut grid = self.grid();
        place_piece(&mut grid, idx, self.side(), &piece)?;
        self.pieces.push(piece);
        Ok(idx)
    }

    /// Check that the side length is usable and that every piece covers at least one cell, lies
    /// within the board, has a usable stride, and overlaps no other piece.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_side(self.size)?;
        let side = self.side();
        let mut grid = vec![None; self.cell_count()];
        for (idx, piece) in self.pieces.iter().enumerate() {
            place_piece(&mut grid, idx, side, piece)?;
        }
        Ok(())
    }

    /// A literal representation of the board: for every cell, the index of the piece occupying it.
    pub fn grid(&self) -> Vec<Option<usize>> {
        let mut grid = vec![None; self.cell_count()];
        for (idx, piece) in self.pieces.iter().enumerate() {
            for cell in piece.cells() {
                if let Some(entry) = grid.get_mut(cell) {
                    *entry = Some(idx);
                }
            }
        }
        grid
    }

    fn occupant(&self, cell: usize) -> Option<usize> {
        self.pieces.iter().position(|piece| piece.contains(cell))
    }

    /// The index of the first piece covering the provided cell, if any.
    pub fn piece_at(&self, cell: V) -> Option<usize> {
        self.occupant(cell.into())
    }

    /// Whether any piece covers the provided cell.
    pub fn is_occupied(&self, cell: V) -> bool {
        self.piece_at(cell).is_some()
    }

    /// The cell under a point in board space, where one unit is one cell and the origin is the
    /// top-left corner of the board. [`None`] if the point is outside the board.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<V> {
        let side = self.side() as f64;
        if !(x >= 0.0 && x < side && y >= 0.0 && y < side) {
            return None;
        }
        let column = FloatCore::floor(x) as usize;
        let row = FloatCore::floor(y) as usize;
        V::try_from(row * self.side() + column).ok()
    }

    /// The row (for a horizontal primary piece) or column (for a vertical one) the exit lies on.
    /// This never changes as pieces move.
    pub fn primary_axis_coord(&self) -> Option<usize> {
        self.primary()
            .map(|primary| primary.cross_coordinate(self.side()))
    }

    /// Whether the primary piece has reached the far edge of the board along its axis.
    pub fn is_solved(&self) -> bool {
        match self.primary() {
            None => false,
            Some(primary) => {
                let size: usize = (*primary.size()).into();
                primary.axis_coordinate(self.side()) + size == self.side()
            }
        }
    }

    /// Count the free cells in one direction from a piece, up to `limit`.
    fn reach(&self, piece: &Piece<V>, forward: bool, limit: usize) -> usize {
        let stride: usize = (*piece.stride()).into();
        let position: usize = (*piece.position()).into();
        let size: usize = (*piece.size()).into();
        (1..=limit)
            .take_while(|&k| {
                let cell = if forward {
                    Some(position + (size - 1 + k) * stride)
                } else {
                    position.checked_sub(k * stride)
                };
                cell.is_some_and(|cell| self.occupant(cell).is_none())
            })
            .count()
    }

    fn push_moves(&self, idx: usize, moves: &mut Vec<Move>) {
        let Some(piece) = self.pieces.get(idx) else {
            return;
        };
        if piece.is_fixed() {
            return;
        }
        let side = self.side();
        let size: usize = (*piece.size()).into();
        let coordinate = piece.axis_coordinate(side);
        let reverse = self.reach(piece, false, coordinate) as isize;
        let forward = self.reach(piece, true, side.saturating_sub(size + coordinate)) as isize;
        moves.extend((-reverse..0).map(|steps| Move::new(idx, steps)));
        moves.extend((1..=forward).map(|steps| Move::new(idx, steps)));
    }

    /// Every legal move on the board, ordered by piece index and then by ascending steps (the
    /// furthest move towards lower indices first). Zero-step moves are never produced.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for idx in 0..self.pieces.len() {
            self.push_moves(idx, &mut moves);
        }
        moves
    }

    /// The legal moves of a single piece, in the same order as [`Board::legal_moves`].
    pub fn legal_moves_of(&self, idx: usize) -> Vec<Move> {
        let mut moves = Vec::new();
        self.push_moves(idx, &mut moves);
        moves
    }

    /// Apply a move. No checks are made: the move must come from [`Board::legal_moves`] or be the
    /// inverse of one just applied.
    pub fn do_move(&mut self, mv: Move) {
        match self.pieces.get_mut(mv.piece) {
            Some(piece) => match piece.shift(mv.steps) {
                Some(position) => trace!(%mv, position = %position, "applied move"),
                None => warn!(%mv, "move leaves the addressable board; ignored"),
            },
            None => warn!(%mv, "move refers to a piece that doesn't exist; ignored"),
        }
    }

    /// Revert a move previously applied with [`Board::do_move`].
    pub fn undo_move(&mut self, mv: Move) {
        self.do_move(-mv);
    }

    /// Encode the current layout as a descriptor. Movable pieces are labelled in board order, so
    /// parsing the result yields the same pieces (walls last). [`None`] if there are more movable
    /// pieces than available labels.
    pub fn descriptor(&self) -> Option<String> {
        let labels = self.labels()?;
        Some(
            self.grid()
                .into_iter()
                .map(|entry| entry.map_or(descriptor::EMPTY, |idx| labels[idx]))
                .collect(),
        )
    }

    fn labels(&self) -> Option<Vec<char>> {
        let mut movable = descriptor::LABELS.chars();
        self.pieces
            .iter()
            .map(|piece| {
                if piece.is_fixed() {
                    Some(descriptor::WALL)
                } else {
                    movable.next()
                }
            })
            .collect()
    }
}

impl<V> FromStr for Board<V>
where
    V: BoardValue,
{
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        descriptor::parse(s)
    }
}

impl<V> Display for Board<V>
where
    V: BoardValue,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let labels = self.labels();
        let side = self.side();
        for (cell, entry) in self.grid().into_iter().enumerate() {
            let label = match (entry, &labels) {
                (None, _) => descriptor::EMPTY,
                (Some(idx), Some(labels)) => labels[idx],
                (Some(idx), None) if self.pieces[idx].is_fixed() => descriptor::WALL,
                (Some(_), None) => '?',
            };
            write!(f, "{label}")?;
            if cell % side == side - 1 {
                writeln!(f)?;
            }
        }
        if let (Some(primary), Some(coord)) = (self.primary(), self.primary_axis_coord()) {
            match primary.orientation() {
                Orientation::LeftRight => write!(f, "exit: right of row {coord}")?,
                Orientation::UpDown => write!(f, "exit: below column {coord}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use crate::{
        Board, InvalidStateError, InvalidStateType, Move, Orientation, Piece, Tag, ValidationError,
    };
    use alloc::boxed::Box;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::error::Error;
    use std::println;

    const DEFAULT: &str = "IBBxooIooLDDJAALooJoKEEMFFKooMGGHHHM";

    fn assert_valid(board: &Board<u8>) {
        board.validate().expect("board should stay valid");
    }

    #[test]
    fn programmatic_board() -> Result<(), Box<dyn Error>> {
        crate::init_tracing();
        let mut board = Board::empty(4u8)?;
        let primary = board.add_piece(Piece::new(4, 2, 1, Tag::Primary).unwrap())?;
        assert_eq!(0, primary);
        let blocker = board.add_piece(Piece::new(2, 2, 4, Tag::Trigger).unwrap())?;
        assert_eq!(1, blocker);
        board.add_piece(Piece::wall(15))?;
        println!("{board}");

        assert_eq!(Some(0), board.piece_at(5));
        assert_eq!(Some(1), board.piece_at(6));
        assert_eq!(Some(2), board.piece_at(15));
        assert!(!board.is_occupied(0));
        assert_eq!(Some(1), board.primary_axis_coord());

        match board.add_piece(Piece::new(3, 2, 1, Tag::Trigger).unwrap()) {
            Err(InvalidStateError {
                cell,
                variant: InvalidStateType::InvalidPosition(idx),
            }) => {
                assert_eq!(4, cell);
                assert_eq!(3, idx);
            }
            s => unreachable!("Expected a wrapping error, got {s:?}"),
        }

        match board.add_piece(Piece::new(0, 2, 4, Tag::Trigger).unwrap()) {
            Err(InvalidStateError {
                cell,
                variant: InvalidStateType::Overlap(idx1, idx2),
            }) => {
                assert_eq!(4, cell);
                assert_eq!(0, idx1);
                assert_eq!(3, idx2);
            }
            s => unreachable!("Expected an overlap, got {s:?}"),
        }

        match board.add_piece(Piece::new(12, 2, 4, Tag::Trigger).unwrap()) {
            Err(InvalidStateError {
                variant: InvalidStateType::InvalidPosition(3),
                ..
            }) => {}
            s => unreachable!("Expected an out of bounds error, got {s:?}"),
        }

        match board.add_piece(Piece::new(0, 2, 2, Tag::Trigger).unwrap()) {
            Err(InvalidStateError {
                variant: InvalidStateType::InvalidStride(3),
                ..
            }) => {}
            s => unreachable!("Expected a stride error, got {s:?}"),
        }

        assert_eq!(3, board.pieces().len());
        Ok(())
    }

    #[test]
    fn dimensions() {
        assert!(Board::empty(0u8).is_err());
        assert!(Board::empty(16u8).is_err());
        assert!(Board::empty(15u8).is_ok());
        assert!(Board::empty(255u16).is_ok());
    }

    #[test]
    fn default_board_moves() -> Result<(), Box<dyn Error>> {
        crate::init_tracing();
        let board: Board<u8> = DEFAULT.parse()?;
        println!("{board}");
        let moves = board.legal_moves();
        // only the vertical M piece below the exit row has room to move
        let expected = [Move::new(11, -1)];
        assert_eq!(&expected[..], &moves[..]);
        assert_eq!(moves, board.legal_moves());
        Ok(())
    }

    #[test]
    fn moves_are_sorted_and_never_zero() -> Result<(), Box<dyn Error>> {
        let board: Board<u8> = ".AA.....B...Bxx.".parse()?;
        let moves = board.legal_moves();
        assert!(moves.iter().all(|mv| mv.steps() != 0));
        assert!(
            moves
                .windows(2)
                .all(|w| (w[0].piece(), w[0].steps()) < (w[1].piece(), w[1].steps()))
        );
        assert_eq!(
            &[
                Move::new(0, -1),
                Move::new(0, 1),
                Move::new(1, -2),
                Move::new(1, -1),
            ][..],
            &moves[..]
        );
        Ok(())
    }

    #[test]
    fn moves_are_invertible_and_keep_the_board_valid() -> Result<(), Box<dyn Error>> {
        crate::init_tracing();
        let mut board: Board<u8> = DEFAULT.parse()?;
        for mv in board.legal_moves() {
            let before = board.clone();
            board.do_move(mv);
            assert_valid(&board);
            board.undo_move(mv);
            assert_eq!(before, board);
        }
        Ok(())
    }

    #[test]
    fn walking_the_board_never_overlaps() -> Result<(), Box<dyn Error>> {
        let mut board: Board<u8> = DEFAULT.parse()?;
        let initial = board.clone();
        let mut applied = Vec::new();
        // a deterministic walk: always take the move in the middle of the list
        for _ in 0..200 {
            let moves = board.legal_moves();
            let mv = moves[moves.len() / 2];
            board.do_move(mv);
            assert_valid(&board);
            applied.push(mv);
        }
        for mv in applied.into_iter().rev() {
            board.undo_move(mv);
        }
        assert_eq!(initial, board);
        Ok(())
    }

    #[test]
    fn solved_state() -> Result<(), Box<dyn Error>> {
        let blocked: Board<u8> = "A...A...x.......".parse()?;
        assert_eq!(Orientation::UpDown, blocked.primary().unwrap().orientation());
        assert_eq!(Some(0), blocked.primary_axis_coord());
        assert!(blocked.legal_moves().is_empty());
        assert!(!blocked.is_solved());

        let mut board: Board<u8> = "A...A...........".parse()?;
        assert_eq!(
            &[Move::new(0, 1), Move::new(0, 2)][..],
            &board.legal_moves()[..]
        );
        board.do_move(Move::new(0, 1));
        assert!(!board.is_solved());
        board.do_move(Move::new(0, 1));
        assert!(board.is_solved());
        // solving doesn't lock the board
        assert_eq!(
            &[Move::new(0, -2), Move::new(0, -1)][..],
            &board.legal_moves()[..]
        );

        let empty = Board::<u8>::empty(3)?;
        assert!(!empty.is_solved());
        assert_eq!(None, empty.primary_axis_coord());
        Ok(())
    }

    #[test]
    fn cell_at_floors_points() -> Result<(), Box<dyn Error>> {
        let board = Board::<u8>::empty(6)?;
        assert_eq!(Some(0), board.cell_at(0.0, 0.0));
        assert_eq!(Some(14), board.cell_at(2.99, 2.01));
        assert_eq!(Some(35), board.cell_at(5.5, 5.5));
        assert_eq!(None, board.cell_at(6.0, 0.0));
        assert_eq!(None, board.cell_at(-0.1, 1.0));
        assert_eq!(None, board.cell_at(f64::NAN, 1.0));
        Ok(())
    }

    #[test]
    fn descriptor_round_trip() -> Result<(), Box<dyn Error>> {
        let board: Board<u8> = DEFAULT.parse()?;
        let encoded = board.descriptor().unwrap();
        assert_eq!("HBBx..H..KCCIAAK..I.JDDLEEJ..LFFGGGL", encoded);

        let reparsed: Board<u8> = encoded.parse()?;
        assert_eq!(board.pieces().len(), reparsed.pieces().len());
        for (original, parsed) in board.pieces().iter().zip(reparsed.pieces()) {
            assert_eq!(original.position(), parsed.position());
            assert_eq!(original.size(), parsed.size());
            assert_eq!(original.stride(), parsed.stride());
        }
        Ok(())
    }

    #[test]
    fn serde_round_trip_is_validated() -> Result<(), Box<dyn Error>> {
        let board: Board<u8> = DEFAULT.parse()?;
        let json = serde_json::to_string(&board)?;
        let restored: Board<u8> = serde_json::from_str(&json)?;
        restored.validate()?;
        assert_eq!(board, restored);

        let overlapping = r#"{"size":2,"pieces":[
            {"position":0,"size":2,"stride":1,"tag":"Primary"},
            {"position":1,"size":2,"stride":2,"tag":"Trigger"}]}"#;
        let err = serde_json::from_str::<Board<u8>>(overlapping).unwrap_err();
        assert!(err.to_string().contains("overlapped at cell 1"));
        Ok(())
    }

    #[test]
    fn unusable_boards_never_deserialize() {
        for broken in [
            // zero area
            r#"{"size":0,"pieces":[{"position":0,"size":2,"stride":1,"tag":"Primary"}]}"#,
            // more cells than a u8 can index
            r#"{"size":16,"pieces":[]}"#,
            // a stride that is neither horizontal nor vertical
            r#"{"size":3,"pieces":[{"position":4,"size":2,"stride":5,"tag":"Trigger"}]}"#,
            // a piece with no cells
            r#"{"size":3,"pieces":[{"position":4,"size":0,"stride":1,"tag":"Trigger"}]}"#,
            // off the bottom edge
            r#"{"size":3,"pieces":[{"position":7,"size":2,"stride":3,"tag":"Trigger"}]}"#,
        ] {
            assert!(
                serde_json::from_str::<Board<u8>>(broken).is_err(),
                "{broken} should be rejected"
            );
        }
    }

    #[test]
    fn validation_reports_dimensions_and_pieces() {
        let zero = Board {
            size: 0u8,
            pieces: vec![Piece::new(0, 2, 1, Tag::Primary).unwrap()],
        };
        match zero.validate() {
            Err(ValidationError::Dimension(_)) => {}
            s => unreachable!("Expected a dimension error, got {s:?}"),
        }

        let walls = Board {
            size: 3u8,
            pieces: vec![Piece::wall(0), Piece::wall(4)],
        };
        assert!(walls.validate().is_ok());

        let stacked = Board {
            size: 3u8,
            pieces: vec![Piece::wall(4), Piece::wall(4)],
        };
        match stacked.validate() {
            Err(ValidationError::InvalidState(e)) => {
                assert_eq!(&InvalidStateType::Overlap(0, 1), e.variant());
                assert_eq!(4, e.cell());
            }
            s => unreachable!("Expected an overlap, got {s:?}"),
        }
    }
}
