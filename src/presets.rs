// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Built-in demonstration boards: 9x9 constructions showing how sliding pieces can compute logic
//! gates. Their primary piece is vertical and exits at the bottom.

use crate::descriptor::{self, DescriptorError};
use crate::{Board, BoardValue, Puzzle, Tag};
use serde::{Deserialize, Serialize};

/// A built-in board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Preset {
    /// An AND gate.
    And,
    /// An OR gate.
    Or,
    /// The final, combined construction.
    Final,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Preset; 3] = [Preset::And, Preset::Or, Preset::Final];

    /// The preset's descriptor.
    pub fn descriptor(self) -> &'static str {
        match self {
            Preset::And => {
                "....A..E.BBCCADDE..KVUXXNF..KVUPPNF..WWUQQNG..LTTS.OG..LRRS.OG..MHHSIIJJ.M......."
            }
            Preset::Or => {
                "....A..E.BBCCADDE..KS.WWUF..KSRRRUF..TTP.NVV..LQP.NOG..LQP.NOG..MHHHIIJJ.M......."
            }
            Preset::Final => {
                ".......E.BBCCDDDE.AKNNNOOF.AKTPQ..F.SSTPQVVV..LUUUYRG..LWWXYRG..MHHXIIJJ.M......."
            }
        }
    }

    fn classify(label: char) -> Tag {
        match label {
            'B'..='M' => Tag::Cell,
            'N'..='R' => Tag::Filler,
            _ => Tag::Trigger,
        }
    }

    /// Build the preset's board.
    pub fn board<V>(self) -> Result<Board<V>, DescriptorError>
    where
        V: BoardValue,
    {
        descriptor::parse_with(self.descriptor(), Self::classify)
    }

    /// The preset as a puzzle with no known move count.
    pub fn puzzle<V>(self) -> Result<Puzzle<V>, DescriptorError>
    where
        V: BoardValue,
    {
        Ok(Puzzle::new(self.board()?, None))
    }
}
