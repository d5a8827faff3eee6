//! Orientations of a grid, i.e., the 8 elements of the
//! [dihedral group _D_<sub>8</sub>](https://en.wikipedia.org/wiki/Examples_of_groups#dihedral_group_of_order_8).
//!
//! Every orientation is a combination of three independent choices:
//! whether to swap the axes, whether to reverse the x-axis,
//! and whether to reverse the y-axis.

use crate::traits::Grid;
use bitflags::bitflags;
use std::{
    collections::HashSet,
    fmt::{self, Display, Formatter},
    hash::Hash,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// A rotation or reflection of a grid.
    ///
    /// The index of an orientation is `swap * 4 + reverse_x * 2 + reverse_y`,
    /// which is just its bits.
    ///
    /// When displayed, the orientations use the same names as the
    /// transformations in rlifesrc:
    ///
    /// | Index | Name   | Meaning                                 |
    /// |-------|--------|-----------------------------------------|
    /// | 0     | `Id`   | Identity.                               |
    /// | 1     | `F-`   | Reflection across the middle row.       |
    /// | 2     | `F\|`  | Reflection across the middle column.    |
    /// | 3     | `R180` | 180° rotation.                          |
    /// | 4     | `F\`   | Reflection across the diagonal.         |
    /// | 5     | `R90`  | 90° rotation counterclockwise.          |
    /// | 6     | `R270` | 270° rotation counterclockwise.         |
    /// | 7     | `F/`   | Reflection across the antidiagonal.     |
    #[derive(Default)]
    #[cfg_attr(
        feature = "serde",
        derive(Serialize, Deserialize),
        serde(into = "u8", try_from = "u8")
    )]
    pub struct Orientation: u8 {
        /// Reverses the y-axis.
        const REVERSE_Y = 0b001;
        /// Reverses the x-axis.
        const REVERSE_X = 0b010;
        /// Swaps the x-axis and the y-axis.
        ///
        /// It is applied after the reversals.
        const SWAP_XY = 0b100;
    }
}

impl Orientation {
    /// `Id`.
    pub const IDENTITY: Self = Self::from_bits_truncate(0);
    /// `F-`.
    pub const FLIP_ROW: Self = Self::from_bits_truncate(1);
    /// `F|`.
    pub const FLIP_COL: Self = Self::from_bits_truncate(2);
    /// `R180`.
    pub const ROTATE_180: Self = Self::from_bits_truncate(3);
    /// `F\`.
    pub const FLIP_DIAG: Self = Self::from_bits_truncate(4);
    /// `R90`.
    pub const ROTATE_90: Self = Self::from_bits_truncate(5);
    /// `R270`.
    pub const ROTATE_270: Self = Self::from_bits_truncate(6);
    /// `F/`.
    pub const FLIP_ANTIDIAG: Self = Self::from_bits_truncate(7);

    /// The index of the orientation, from `0` to `7`.
    #[inline]
    pub fn index(self) -> u8 {
        self.bits()
    }

    /// All 8 orientations, in the order of their indices.
    pub fn all_orientations() -> impl Iterator<Item = Self> {
        (0..8).map(Self::from_bits_truncate)
    }

    /// The size of a `width` × `height` grid after the transformation.
    #[inline]
    pub fn dimensions(self, width: usize, height: usize) -> (usize, usize) {
        if self.contains(Self::SWAP_XY) {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Maps a coordinate in the transformed grid back to the original grid.
    ///
    /// `width` and `height` are the size of the transformed grid.
    #[inline]
    pub fn source(self, x: usize, y: usize, width: usize, height: usize) -> (usize, usize) {
        let x = if self.contains(Self::REVERSE_X) {
            width - 1 - x
        } else {
            x
        };
        let y = if self.contains(Self::REVERSE_Y) {
            height - 1 - y
        } else {
            y
        };
        if self.contains(Self::SWAP_XY) {
            (y, x)
        } else {
            (x, y)
        }
    }

    /// The name of the orientation, as shown in the table above.
    pub fn name(self) -> &'static str {
        match self.bits() {
            0 => "Id",
            1 => "F-",
            2 => "F|",
            3 => "R180",
            4 => "F\\",
            5 => "R90",
            6 => "R270",
            _ => "F/",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())?;
        Ok(())
    }
}

/// Parses either a name (e.g. `R90`) or an index (e.g. `5`).
impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(orientation) = Self::all_orientations().find(|o| o.name() == s) {
            return Ok(orientation);
        }
        s.parse::<u8>()
            .ok()
            .and_then(|i| Self::try_from(i).ok())
            .ok_or_else(|| String::from("invalid orientation"))
    }
}

impl From<Orientation> for u8 {
    #[inline]
    fn from(orientation: Orientation) -> Self {
        orientation.bits()
    }
}

impl TryFrom<u8> for Orientation {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_bits(index).ok_or_else(|| format!("invalid orientation index: {}", index))
    }
}

/// All geometrically distinct orientations of a grid.
///
/// The 8 transformations are tried in the order of their indices.
/// A transformed grid that equals an earlier one is skipped, so that
/// a symmetric grid only appears once, with the lowest index.
pub fn distinct_orientations<G>(grid: &G) -> Vec<(Orientation, G)>
where
    G: Grid + Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(8);
    let mut orientations = Vec::with_capacity(8);
    for orientation in Orientation::all_orientations() {
        let transformed = grid.transformed(orientation);
        if seen.insert(transformed.clone()) {
            orientations.push((orientation, transformed));
        }
    }
    orientations
}
