//! Templates: multi-state patterns with wildcards, used to describe
//! the objects to look for.

use crate::{
    cells::{State, DEAD},
    error::Error,
    pattern::Pattern,
    rle,
    traits::Grid,
};
use std::str::FromStr;

/// A multi-state grid describing an object.
///
/// Templates are only matched against [`Pattern`]s, never simulated.
/// The meaning of each state is given by [`State::requirement`]:
/// `0` must be dead, `1` and `5` must be alive, other states match anything.
/// So a template can describe an object together with a halo of cells
/// that must stay dead, and don't-care cells around it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Template {
    width: usize,
    height: usize,
    cells: Vec<State>,
}

impl Template {
    /// Creates a template where every cell must be dead.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[track_caller]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0, "width must be positive");
        assert!(height > 0, "height must be positive");
        Template {
            width,
            height,
            cells: vec![DEAD; width * height],
        }
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the state at `(x, y)`, wrapping around the edges.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> State {
        self.cells[(y % self.height) * self.width + x % self.width]
    }

    /// Sets the state at `(x, y)`, wrapping around the edges.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, state: State) {
        self.cells[(y % self.height) * self.width + x % self.width] = state;
    }

    /// Whether the template matches `target` with its top left corner
    /// at `(x, y)`.
    ///
    /// A placement that sticks out of the target never matches.
    pub fn matches_at(&self, target: &Pattern, x: usize, y: usize) -> bool {
        if x + self.width > target.width() || y + self.height > target.height() {
            return false;
        }
        (0..self.height).all(|ty| {
            (0..self.width).all(|tx| self.get(tx, ty).accepts(target.get(x + tx, y + ty)))
        })
    }

    /// Finds the first placement of the template inside a rectangle of
    /// `target`, scanning row by row.
    pub fn find_in(
        &self,
        target: &Pattern,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<Option<(usize, usize)>, Error> {
        target.check_rect(x, y, width, height)?;
        if self.width > width || self.height > height {
            return Err(Error::TemplateTooLarge(
                self.width,
                self.height,
                width,
                height,
            ));
        }
        for oy in y..=y + height - self.height {
            for ox in x..=x + width - self.width {
                if self.matches_at(target, ox, oy) {
                    return Ok(Some((ox, oy)));
                }
            }
        }
        Ok(None)
    }
}

/// Living cells must be alive, dead cells must be dead.
impl From<&Pattern> for Template {
    fn from(pattern: &Pattern) -> Self {
        let mut template = Template::new(pattern.width(), pattern.height());
        for y in 0..pattern.height() {
            for x in 0..pattern.width() {
                template.set(x, y, State::from(pattern.get(x, y)));
            }
        }
        template
    }
}

impl Grid for Template {
    type Cell = State;

    fn blank(width: usize, height: usize) -> Self {
        Template::new(width, height)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell(&self, x: usize, y: usize) -> State {
        self.get(x, y)
    }

    fn set_cell(&mut self, x: usize, y: usize, cell: State) {
        self.set(x, y, cell)
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        rle::read_rle(s.lines())
    }
}
