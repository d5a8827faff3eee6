//! Finds known objects in evolving patterns of Conway's Game of Life.
//!
//! An object is described by a [`Template`]. A [`Finder`] looks for every
//! orientation of the template in a background [`Pattern`], generation by
//! generation, up to a given number of ticks.
//!
//! ```
//! use rlifefind_lib::{Config, Pattern, Status, Template};
//!
//! let block: Template = "x = 4, y = 4\n....$.AA.$.AA.$....!".parse()?;
//! let background: Pattern = "x = 4, y = 4\n$b2o$bo!".parse()?;
//! let finder = Config::new(8).finder(&block)?;
//! assert!(matches!(finder.find(&background)?, Status::Found(m) if m.tick == 1));
//! # Ok::<(), rlifefind_lib::Error>(())
//! ```

mod cells;
mod config;
mod error;
mod orientation;
mod pattern;
pub mod rle;
mod search;
mod template;
mod traits;

pub use cells::{State, ALIVE, ALIVE_START, DEAD};
pub use config::Config;
pub use error::Error;
pub use orientation::{distinct_orientations, Orientation};
pub use pattern::Pattern;
pub use search::{Finder, Match, Status, MIN_ABSORB_MARGIN};
pub use template::Template;
pub use traits::{Grid, MAX_CELLS};
