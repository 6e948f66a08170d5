//! A single ring of the mixed-radix counter.

use crate::charset::Charset;
use crate::error::{Error, Result};

/// One wheel of the assembly.
///
/// A wheel cycles through its symbols in order. When it runs past the last
/// symbol it wraps back to the first and reports its carry target, which the
/// owning assembly then advances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    symbols: Vec<char>,
    cursor: usize,
    /// Index of the next more significant wheel in the assembly
    carry_target: Option<usize>,
}

impl Wheel {
    /// Create a wheel at its first symbol.
    ///
    /// Fails with `InvalidConfiguration` if `symbols` is empty.
    pub fn new(symbols: &str, carry_target: Option<usize>) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(Error::InvalidConfiguration(
                "wheel symbol set is empty".to_string(),
            ));
        }

        Ok(Self {
            symbols,
            cursor: 0,
            carry_target,
        })
    }

    /// Create a wheel over a built-in preset, which is never empty
    pub(crate) fn from_charset(charset: Charset, carry_target: Option<usize>) -> Self {
        Self {
            symbols: charset.symbols().chars().collect(),
            cursor: 0,
            carry_target,
        }
    }

    /// Symbol under the cursor
    pub fn current(&self) -> char {
        self.symbols[self.cursor]
    }

    /// Step to the next symbol.
    ///
    /// Returns the carry target when the wheel wrapped around and has one.
    /// A wrap on the most significant wheel returns `None` and is silent.
    pub fn advance(&mut self) -> Option<usize> {
        self.cursor += 1;
        if self.cursor < self.symbols.len() {
            return None;
        }

        self.cursor = 0;
        self.carry_target
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn carry_target(&self) -> Option<usize> {
        self.carry_target
    }

    /// Number of symbols (the radix of this position)
    pub(crate) fn len(&self) -> usize {
        self.symbols.len()
    }
}
