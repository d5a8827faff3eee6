//! Reading and writing patterns in the
//! [RLE](https://conwaylife.com/wiki/Run_Length_Encoded) format.
//!
//! The same reader is used for binary patterns (`o` / `b` tags)
//! and for templates (`.` / `A`-`Z` tags).

use crate::{
    cells::{State, DEAD},
    error::Error,
    pattern::Pattern,
    traits::{check_size, Grid},
};
use std::fmt::Write;

/// Maximal length of a line of RLE data when writing.
pub const MAX_LINE_LENGTH: usize = 70;

/// A cell type that can be read from RLE tags.
pub trait RleCell: Copy {
    /// The cell that a tag stands for.
    ///
    /// Returns `None` for characters that are not tags of this cell type;
    /// the reader skips them.
    fn from_tag(tag: char) -> Option<Self>;
}

impl RleCell for bool {
    fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'o' => Some(true),
            'b' => Some(false),
            _ => None,
        }
    }
}

impl RleCell for State {
    fn from_tag(tag: char) -> Option<Self> {
        match tag {
            '.' => Some(DEAD),
            'A'..='Z' => Some(State(tag as u8 - b'A' + 1)),
            _ => None,
        }
    }
}

/// Parses a header line of the form `x = <width>, y = <height>`.
///
/// Anything after the second field (usually `rule = ...`) is ignored.
/// Sizes with more than [`MAX_CELLS`](crate::MAX_CELLS) cells are rejected.
pub fn parse_header(line: &str) -> Result<(usize, usize), Error> {
    let invalid = || Error::InvalidHeader(line.to_string());
    let mut parts = line.split(',');
    let mut field = |key: &str| -> Result<usize, Error> {
        let mut items = parts.next().ok_or_else(invalid)?.split('=');
        if items.next().map(str::trim) != Some(key) {
            return Err(invalid());
        }
        let value = items.next().ok_or_else(invalid)?.trim();
        if items.next().is_some() || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        value.parse().map_err(|_| invalid())
    };
    let width = field("x")?;
    let height = field("y")?;
    check_size(width, height)?;
    Ok((width, height))
}

/// Reads a grid from the lines of an RLE file.
///
/// Coordinates wrap around the edges of the grid,
/// so runs that are too long continue on the other side of the same row.
pub fn read_rle<G, I, S>(lines: I) -> Result<G, Error>
where
    G: Grid,
    G::Cell: RleCell,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grid: Option<G> = None;
    let (mut x, mut y) = (0, 0);
    let mut count: Option<usize> = None;

    'lines: for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('x') {
            if grid.is_some() {
                return Err(Error::DuplicateHeader);
            }
            let (width, height) = parse_header(line)?;
            grid = Some(G::blank(width, height));
            continue;
        }
        let grid = grid.as_mut().ok_or(Error::MissingHeader)?;
        let (width, height) = (grid.width(), grid.height());

        for c in line.chars() {
            match c {
                '0'..='9' => {
                    let digit = c as usize - '0' as usize;
                    count = Some(count.unwrap_or(0).saturating_mul(10).saturating_add(digit));
                }
                '$' => {
                    x = 0;
                    y = (y + count.take().unwrap_or(1) % height) % height;
                }
                '!' => break 'lines,
                _ => {
                    if let Some(cell) = G::Cell::from_tag(c) {
                        let run = count.take().unwrap_or(1);
                        // Runs longer than a row only overwrite the same row again.
                        for i in 0..run.min(width) {
                            grid.set_cell(x + i, y, cell);
                        }
                        x = (x + run % width) % width;
                    }
                }
            }
        }
    }

    grid.ok_or(Error::MissingHeader)
}

/// Writes RLE tokens, breaking lines before they get too long.
#[derive(Default)]
struct RunWriter {
    out: String,
    line_length: usize,
}

impl RunWriter {
    fn push(&mut self, run: usize, tag: char) {
        let token = if run > 1 {
            format!("{}{}", run, tag)
        } else {
            tag.to_string()
        };
        if self.line_length > 0 && self.line_length + token.len() > MAX_LINE_LENGTH {
            self.out.push('\n');
            self.line_length = 0;
        }
        self.line_length += token.len();
        self.out.push_str(&token);
    }
}

/// Writes a pattern in RLE, with an optional comment.
///
/// Dead cells at the end of a row are omitted, and empty rows are merged
/// into the row separators, as most RLE writers do.
pub fn write_rle(pattern: &Pattern, comment: Option<&str>) -> String {
    let mut str = String::new();
    if let Some(comment) = comment {
        for line in comment.lines() {
            writeln!(str, "#C {}", line).unwrap();
        }
    }
    writeln!(
        str,
        "x = {}, y = {}, rule = B3/S23",
        pattern.width(),
        pattern.height()
    )
    .unwrap();

    let mut writer = RunWriter::default();
    let mut last_row = 0;
    for y in 0..pattern.height() {
        let mut runs = Vec::new();
        let mut x = 0;
        while x < pattern.width() {
            let alive = pattern.get(x, y);
            let start = x;
            while x < pattern.width() && pattern.get(x, y) == alive {
                x += 1;
            }
            runs.push((x - start, alive));
        }
        if let Some(&(_, false)) = runs.last() {
            runs.pop();
        }
        if runs.is_empty() {
            continue;
        }
        if y > last_row {
            writer.push(y - last_row, '$');
        }
        for (run, alive) in runs {
            writer.push(run, if alive { 'o' } else { 'b' });
        }
        last_row = y;
    }
    writer.push(1, '!');

    str.push_str(&writer.out);
    str.push('\n');
    str
}
