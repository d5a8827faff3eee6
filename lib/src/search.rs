//! The search process.
//!
//! The background is put on a slightly larger torus and simulated
//! generation by generation. In each generation, every distinct
//! orientation of the template is looked for. Gliders that fly into the
//! border are deleted, so that they never wrap around and hit the
//! background from the other side.

use crate::{
    config::Config,
    error::Error,
    orientation::{distinct_orientations, Orientation},
    pattern::Pattern,
    template::Template,
    traits::check_size,
};
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The glider that is looked for in the border.
///
/// All 8 orientations of this phase are used, which are two of the four
/// phases of a glider for each direction. This one moves towards the
/// bottom right; reversing an axis reverses that component of the
/// direction, and swapping the axes gives the other phase.
const GLIDER: &str = "x = 3, y = 3\nbo$2bo$3o!";

/// The smallest margin that can hold a glider signature: the border strips
/// are one cell wider than the margin.
pub const MIN_ABSORB_MARGIN: usize = 2;

/// Where and when the template is found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    /// Horizontal position of the top left corner of the template,
    /// relative to the background.
    ///
    /// Can be negative when the object is found in the margin.
    pub x: isize,

    /// Vertical position of the top left corner of the template,
    /// relative to the background.
    pub y: isize,

    /// `x` as a percentage of the free horizontal space,
    /// i.e., `100 * x / (background width - template width)`.
    ///
    /// `0` when there is no free space.
    pub percent_x: isize,

    /// `y` as a percentage of the free vertical space.
    pub percent_y: isize,

    /// The generation in which the template is found.
    pub tick: usize,

    /// The orientation of the template.
    pub orientation: Orientation,
}

/// Search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The template is found.
    Found(Match),
    /// The template does not appear within the given number of ticks.
    NotFound,
}

impl Status {
    /// The match, if any.
    pub fn found(&self) -> Option<&Match> {
        match self {
            Status::Found(m) => Some(m),
            Status::NotFound => None,
        }
    }
}

/// Position as a percentage of the free space.
fn percent(offset: isize, background: usize, template: usize) -> isize {
    let slack = background as isize - template as isize;
    if slack > 0 {
        100 * offset / slack
    } else {
        0
    }
}

/// Looks for a template in backgrounds.
///
/// It can be reused for any number of backgrounds. Different backgrounds
/// share nothing but the precomputed orientations.
#[derive(Clone, Debug)]
pub struct Finder {
    config: Config,

    /// Distinct orientations of the template.
    orientations: Vec<(Orientation, Template)>,

    /// Distinct orientations of the glider.
    gliders: Vec<(Orientation, Pattern)>,
}

impl Finder {
    /// Creates a new finder. Use [`Config::finder`] instead, which also
    /// checks the configuration.
    pub(crate) fn new(template: &Template, config: Config) -> Self {
        let orientations = distinct_orientations(template);
        debug!(
            "{}x{} template with {} distinct orientations",
            template.width(),
            template.height(),
            orientations.len()
        );
        let glider: Pattern = GLIDER.parse().unwrap();
        let gliders = distinct_orientations(&glider);
        Finder {
            config,
            orientations,
            gliders,
        }
    }

    /// Search configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Distinct orientations of the template, in the order they are tried.
    pub fn orientations(&self) -> &[(Orientation, Template)] {
        &self.orientations
    }

    /// Looks for the template in the background and its descendants.
    ///
    /// Returns an error if no orientation of the template fits in the
    /// background plus the margin, or if that is too large to simulate.
    pub fn find(&self, background: &Pattern) -> Result<Status, Error> {
        let margin = self.config.margin;
        let width = background.width().saturating_add(margin.saturating_mul(2));
        let height = background.height().saturating_add(margin.saturating_mul(2));
        check_size(width, height)?;

        let orientations = self
            .orientations
            .iter()
            .filter(|(_, t)| t.width() <= width && t.height() <= height)
            .collect::<Vec<_>>();
        if orientations.is_empty() {
            let template = &self.orientations[0].1;
            return Err(Error::TemplateTooLarge(
                template.width(),
                template.height(),
                width,
                height,
            ));
        }

        let mut world = Pattern::new(width, height);
        world.stamp(background, margin, margin)?;

        for tick in 0..self.config.max_ticks {
            trace!("tick {}: {} living cells", tick, world.population());
            for (orientation, template) in &orientations {
                if let Some((x, y)) = template.find_in(&world, 0, 0, width, height)? {
                    let x = x as isize - margin as isize;
                    let y = y as isize - margin as isize;
                    let found = Match {
                        x,
                        y,
                        percent_x: percent(x, background.width(), template.width()),
                        percent_y: percent(y, background.height(), template.height()),
                        tick,
                        orientation: *orientation,
                    };
                    debug!(
                        "found {} at ({}, {}) in generation {}",
                        found.orientation, found.x, found.y, tick
                    );
                    return Ok(Status::Found(found));
                }
            }
            if self.config.absorb_gliders && self.absorb_gliders(&mut world)? {
                debug!("tick {}: absorbed gliders at the border", tick);
            }
            world = world.advance();
        }

        Ok(Status::NotFound)
    }

    /// Runs [`find`](Self::find) on every background, keeping the order.
    pub fn find_all<'a, N, I>(&self, backgrounds: I) -> Vec<(N, Result<Status, Error>)>
    where
        I: IntoIterator<Item = (N, &'a Pattern)>,
    {
        backgrounds
            .into_iter()
            .map(|(name, background)| {
                let status = self.find(background);
                (name, status)
            })
            .collect()
    }

    /// Deletes gliders that are about to leave a working grid through its
    /// margin.
    ///
    /// Each of the four border strips, one cell wider than the margin,
    /// is searched for gliders moving towards that edge. Gliders moving
    /// inwards are left alone. If any is found, the margin is cleared on
    /// all four sides.
    ///
    /// Returns whether anything is cleared.
    pub fn absorb_gliders(&self, world: &mut Pattern) -> Result<bool, Error> {
        let margin = self.config.margin;
        let strip = margin.saturating_add(1);
        let (width, height) = (world.width(), world.height());
        // Each strip with the direction of the gliders leaving through it.
        let strips = [
            ((0, 0, width, strip), Orientation::REVERSE_Y, true),
            (
                (0, height.saturating_sub(strip), width, strip),
                Orientation::REVERSE_Y,
                false,
            ),
            ((0, 0, strip, height), Orientation::REVERSE_X, true),
            (
                (width.saturating_sub(strip), 0, strip, height),
                Orientation::REVERSE_X,
                false,
            ),
        ];

        let mut found = false;
        'strips: for &((x, y, w, h), axis, reversed) in &strips {
            for (orientation, glider) in &self.gliders {
                if orientation.contains(axis) == reversed
                    && world.search(glider, x, y, w, h)?.is_some()
                {
                    trace!("{} glider at the border", orientation);
                    found = true;
                    break 'strips;
                }
            }
        }
        if !found {
            return Ok(false);
        }

        world.clear(0, 0, width, margin)?;
        world.clear(0, height.saturating_sub(margin), width, margin)?;
        world.clear(0, 0, margin, height)?;
        world.clear(width.saturating_sub(margin), 0, margin, height)?;
        Ok(true)
    }
}
