//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid RLE header: {0:?}.
    InvalidHeader(String),
    /// RLE data appears before the header line.
    MissingHeader,
    /// The RLE contains more than one header line.
    DuplicateHeader,
    /// Width / height should be positive.
    NonPositiveError,
    /// A {0}x{1} grid is too large.
    TooLarge(usize, usize),
    /// Rectangle of size {width}x{height} at ({x}, {y}) does not fit in the grid.
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// A {0}x{1} template does not fit in a {2}x{3} search area.
    TemplateTooLarge(usize, usize, usize, usize),
    /// The number of ticks should be positive.
    NonPositiveTicks,
    /// Glider absorption needs a margin of at least {0} cells.
    MarginTooSmall(usize),
}
