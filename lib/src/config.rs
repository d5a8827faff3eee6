//! Search configuration.

use crate::{
    error::Error,
    search::{Finder, MIN_ABSORB_MARGIN},
    template::Template,
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Search configuration.
///
/// A [`Finder`] will be generated from this configuration and a template.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Number of generations to look at.
    ///
    /// Generation `0` is the background itself, so the last generation
    /// examined is `max_ticks - 1`.
    #[educe(Default = 64)]
    pub max_ticks: usize,

    /// Width of the dead border added around the background.
    ///
    /// The background is simulated on a torus, so things that leave it
    /// would come back from the other side. Gliders that reach the border
    /// are removed before that happens.
    ///
    /// The default is just enough for gliders.
    #[educe(Default = 3)]
    pub margin: usize,

    /// Whether to remove gliders that reach the border.
    #[educe(Default = true)]
    pub absorb_gliders: bool,
}

impl Config {
    /// Sets up a new configuration with the given number of ticks.
    pub fn new(max_ticks: usize) -> Self {
        Config {
            max_ticks,
            ..Config::default()
        }
    }

    /// Sets the number of ticks.
    pub fn set_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Sets the margin.
    pub fn set_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Sets whether to remove gliders that reach the border.
    pub fn set_absorb_gliders(mut self, absorb_gliders: bool) -> Self {
        self.absorb_gliders = absorb_gliders;
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_ticks == 0 {
            return Err(Error::NonPositiveTicks);
        }
        if self.absorb_gliders && self.margin < MIN_ABSORB_MARGIN {
            return Err(Error::MarginTooSmall(MIN_ABSORB_MARGIN));
        }
        Ok(())
    }

    /// Creates a new finder for the template from the configuration.
    /// Returns an error if the configuration is invalid.
    pub fn finder(&self, template: &Template) -> Result<Finder, Error> {
        self.validate()?;
        Ok(Finder::new(template, self.clone()))
    }
}
