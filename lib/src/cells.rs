//! Cell states of template grids.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A state of a cell in a [`Template`](crate::Template).
///
/// States are written in RLE as `.` for `0` and `A` to `Z` for `1` to `26`.
/// Only a few of them mean something during matching,
/// see [`requirement`](State::requirement).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(pub u8);

/// The target cell must be dead.
pub const DEAD: State = State(0);
/// The target cell must be alive.
pub const ALIVE: State = State(1);
/// Also requires the target cell to be alive.
///
/// History-style templates use it for cells of the starting pattern.
pub const ALIVE_START: State = State(5);

impl State {
    /// What the state demands of the target cell.
    ///
    /// `Some(true)` means the cell must be alive, `Some(false)` means it
    /// must be dead, and `None` means that it can be anything.
    #[inline]
    pub fn requirement(self) -> Option<bool> {
        match self {
            DEAD => Some(false),
            ALIVE | ALIVE_START => Some(true),
            _ => None,
        }
    }

    /// Whether a target cell with the given state is accepted.
    #[inline]
    pub fn accepts(self, alive: bool) -> bool {
        self.requirement().map_or(true, |r| r == alive)
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }
}
