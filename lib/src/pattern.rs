//! Bit-packed toroidal Life patterns.

use crate::{error::Error, rle, traits::Grid};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Number of cells in a word.
const WORD_BITS: usize = u64::BITS as usize;

/// Sum and carry of three bits, on every bit lane of the words.
#[inline(always)]
fn full_add(a: u64, b: u64, c: u64) -> (u64, u64) {
    let sum = a ^ b ^ c;
    let carry = (a & b) | (b & c) | (a & c);
    (sum, carry)
}

/// Sum and carry of two bits, on every bit lane of the words.
#[inline(always)]
fn half_add(a: u64, b: u64) -> (u64, u64) {
    (a ^ b, a & b)
}

/// A two-state pattern of Conway's Game of Life (`B3/S23`) on a torus.
///
/// The cells are packed into `u64` words, `ceil(width / 64)` words per row.
/// Cell `(x, y)` is bit `x % 64` of word `x / 64` of row `y`.
///
/// The unused high bits of the last word of each row are always zero,
/// so that the derived equality and hash only depend on the cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    width: usize,
    height: usize,
    words_per_row: usize,
    words: Vec<u64>,
}

impl Pattern {
    /// Creates an empty pattern.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[track_caller]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0, "width must be positive");
        assert!(height > 0, "height must be positive");
        let words_per_row = (width - 1) / WORD_BITS + 1;
        Pattern {
            width,
            height,
            words_per_row,
            words: vec![0; words_per_row * height],
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

    /// Mask of the valid bits in the last word of a row.
    #[inline]
    fn last_word_mask(&self) -> u64 {
        match self.width % WORD_BITS {
            0 => !0,
            n => (1 << n) - 1,
        }
    }

    #[inline]
    fn row(&self, y: usize) -> &[u64] {
        &self.words[y * self.words_per_row..(y + 1) * self.words_per_row]
    }

    /// Whether the cell at `(x, y)` is alive, wrapping around the edges.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        let (x, y) = (x % self.width, y % self.height);
        self.words[y * self.words_per_row + x / WORD_BITS] >> (x % WORD_BITS) & 1 != 0
    }

    /// Sets the cell at `(x, y)`, wrapping around the edges.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let (x, y) = (x % self.width, y % self.height);
        let word = &mut self.words[y * self.words_per_row + x / WORD_BITS];
        let bit = 1 << (x % WORD_BITS);
        if alive {
            *word |= bit;
        } else {
            *word &= !bit;
        }
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Whether there is no living cell.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Checks that a rectangle lies inside the pattern.
    pub(crate) fn check_rect(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<(), Error> {
        let fits = |start: usize, len: usize, bound: usize| {
            start.checked_add(len).map_or(false, |end| end <= bound)
        };
        if fits(x, width, self.width) && fits(y, height, self.height) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// For every word, the number of living cells among the left and right
    /// neighbors of each cell in the same row, as two bit planes
    /// `(ones, twos)`.
    ///
    /// The neighbors wrap around the row, so the bit carried into the first
    /// word comes from the last valid column, and the bit carried into the
    /// last valid column comes from the first word.
    fn side_sums(&self) -> Vec<(u64, u64)> {
        let n = self.words_per_row;
        let last_bit = (self.width - 1) % WORD_BITS;
        let mut sums = Vec::with_capacity(self.words.len());
        for y in 0..self.height {
            let row = self.row(y);
            let first_col = row[0] & 1;
            let last_col = row[n - 1] >> last_bit & 1;
            for k in 0..n {
                let word = row[k];
                let west_carry = if k == 0 {
                    last_col
                } else {
                    row[k - 1] >> (WORD_BITS - 1)
                };
                let west = word << 1 | west_carry;
                let east = if k == n - 1 {
                    word >> 1 | first_col << last_bit
                } else {
                    word >> 1 | (row[k + 1] & 1) << (WORD_BITS - 1)
                };
                sums.push(half_add(west, east));
            }
        }
        sums
    }

    /// The next generation under the rule `B3/S23`.
    ///
    /// The neighbor counts of all cells in a word are computed at once
    /// with bit-sliced adders.
    pub fn advance(&self) -> Pattern {
        let n = self.words_per_row;
        let sides = self.side_sums();
        let mask = self.last_word_mask();
        let mut next = Pattern::new(self.width, self.height);

        for y in 0..self.height {
            let north = (y + self.height - 1) % self.height;
            let south = (y + 1) % self.height;
            for k in 0..n {
                let center = self.words[y * n + k];

                // Three cells wide sums of the rows above and below.
                let three_wide = |row: usize| {
                    let (ones, twos) = sides[row * n + k];
                    let (ones, carry) = half_add(ones, self.words[row * n + k]);
                    (ones, twos | carry)
                };
                let (n0, n1) = three_wide(north);
                let (s0, s1) = three_wide(south);
                let (c0, c1) = sides[y * n + k];

                let (t0, carry0) = full_add(n0, s0, c0);
                let (u0, u1) = full_add(n1, s1, c1);
                let (t1, carry1) = half_add(u0, carry0);
                let t2 = u1 ^ carry1;

                // Exactly 2 or 3 neighbors: the eights bit is lost, but a
                // count of 8 then reads as 0, which is also dead.
                let two_or_three = !t2 & t1;
                let mut word = two_or_three & (t0 | center);
                if k == n - 1 {
                    word &= mask;
                }
                next.words[y * n + k] = word;
            }
        }
        next
    }

    /// Advances the pattern by `gens` generations.
    pub fn advance_by(&self, gens: usize) -> Pattern {
        let mut pattern = self.clone();
        for _ in 0..gens {
            pattern = pattern.advance();
        }
        pattern
    }

    /// Kills every cell in a rectangle.
    ///
    /// The rectangle does not wrap around the edges.
    pub fn clear(&mut self, x: usize, y: usize, width: usize, height: usize) -> Result<(), Error> {
        self.check_rect(x, y, width, height)?;
        for row in y..y + height {
            for col in x..x + width {
                self.set(col, row, false);
            }
        }
        Ok(())
    }

    /// Whether `template` equals the part of this pattern at `(x, y)`.
    ///
    /// The caller makes sure that the template fits.
    fn equals_at(&self, template: &Pattern, x: usize, y: usize) -> bool {
        (0..template.height)
            .all(|ty| (0..template.width).all(|tx| template.get(tx, ty) == self.get(x + tx, y + ty)))
    }

    /// Finds an exact copy of `template` inside a rectangle of this pattern.
    ///
    /// Every position where the template lies entirely inside the rectangle
    /// is tried, row by row. Returns the position of the first match.
    pub fn search(
        &self,
        template: &Pattern,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<Option<(usize, usize)>, Error> {
        self.check_rect(x, y, width, height)?;
        if template.width > width || template.height > height {
            return Err(Error::TemplateTooLarge(
                template.width,
                template.height,
                width,
                height,
            ));
        }
        for oy in y..=y + height - template.height {
            for ox in x..=x + width - template.width {
                if self.equals_at(template, ox, oy) {
                    return Ok(Some((ox, oy)));
                }
            }
        }
        Ok(None)
    }

    /// Copies the living cells of `source` into this pattern, with the
    /// top left corner of `source` at `(x, y)`.
    ///
    /// Cells that are already alive stay alive. The source does not wrap
    /// around the edges.
    pub fn stamp(&mut self, source: &Pattern, x: usize, y: usize) -> Result<(), Error> {
        self.check_rect(x, y, source.width, source.height)?;
        for sy in 0..source.height {
            for sx in 0..source.width {
                if source.get(sx, sy) {
                    self.set(x + sx, y + sy, true);
                }
            }
        }
        Ok(())
    }

    /// The pattern in RLE, with an optional comment line.
    pub fn to_rle(&self, comment: Option<&str>) -> String {
        rle::write_rle(self, comment)
    }
}

impl Grid for Pattern {
    type Cell = bool;

    fn blank(width: usize, height: usize) -> Self {
        Pattern::new(width, height)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell(&self, x: usize, y: usize) -> bool {
        self.get(x, y)
    }

    fn set_cell(&mut self, x: usize, y: usize, cell: bool) {
        self.set(x, y, cell)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        rle::read_rle(s.lines())
    }
}

/// Displays the pattern in RLE.
impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_rle(None))?;
        Ok(())
    }
}
