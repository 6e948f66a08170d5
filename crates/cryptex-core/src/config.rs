//! Pattern configuration.
//!
//! ## Example
//!
//! ```
//! use cryptex_core::PatternConfig;
//!
//! let config = PatternConfig::builder()
//!     .length(9)
//!     .sets(["ABC", "def", "123"])
//!     .build();
//! assert_eq!(config.create().unwrap(), "Ad1Ad2Ad3");
//! ```

use serde::Serialize;

use crate::assembly::WheelAssembly;
use crate::charset::Charset;
use crate::error::Result;
use crate::generator::pattern_create;

/// What to generate: how many characters, and from which wheels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternConfig {
    /// Number of characters to emit
    pub length: usize,
    /// Character set per wheel, most significant first
    pub sets: Vec<String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            length: 0,
            sets: Charset::default_sets(),
        }
    }
}

impl PatternConfig {
    /// Create a new configuration builder
    pub fn builder() -> PatternConfigBuilder {
        PatternConfigBuilder::default()
    }

    /// Build a fresh assembly for this configuration.
    ///
    /// Every call starts from the all-zero state, so repeated calls never
    /// share progress.
    pub fn assembly(&self) -> Result<WheelAssembly> {
        WheelAssembly::build(&self.sets)
    }

    /// Generate the configured pattern
    pub fn create(&self) -> Result<String> {
        Ok(pattern_create(self.length, self.assembly()?))
    }

    pub fn uses_default_sets(&self) -> bool {
        self.sets == Charset::default_sets()
    }
}

/// Builder for PatternConfig
#[derive(Debug, Clone, Default)]
pub struct PatternConfigBuilder {
    length: Option<usize>,
    sets: Option<Vec<String>>,
}

impl PatternConfigBuilder {
    /// Set the pattern length
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Replace the character sets
    pub fn sets<I, S>(mut self, sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets = Some(sets.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the character sets with built-in presets
    pub fn charsets(mut self, charsets: &[Charset]) -> Self {
        self.sets = Some(charsets.iter().map(|c| c.symbols().to_string()).collect());
        self
    }

    /// Build the configuration
    pub fn build(self) -> PatternConfig {
        let default = PatternConfig::default();
        PatternConfig {
            length: self.length.unwrap_or(default.length),
            sets: self.sets.unwrap_or(default.sets),
        }
    }
}
