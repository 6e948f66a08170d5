//! The wheel assembly: an odometer built from one wheel per character set.
//!
//! Wheels are kept in construction order, most significant first. Only the
//! last wheel is advanced from outside; each wrap carries into the wheel
//! before it, and a wrap of the first wheel silently returns the whole
//! assembly to its all-zero state.

use tracing::debug;

use crate::charset::Charset;
use crate::error::{Error, Result};
use crate::wheel::Wheel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelAssembly {
    wheels: Vec<Wheel>,
}

impl WheelAssembly {
    /// Build an assembly with one wheel per character set.
    ///
    /// Wheel `i` carries into wheel `i - 1`; the first wheel has no carry
    /// target. Fails with `InvalidConfiguration` if no sets are given or any
    /// set is empty.
    pub fn build<I, S>(character_sets: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut wheels = Vec::new();

        for (index, set) in character_sets.into_iter().enumerate() {
            let set = set.as_ref();
            if set.is_empty() {
                return Err(Error::InvalidConfiguration(format!(
                    "character set {} is empty",
                    index + 1
                )));
            }
            let carry_target = index.checked_sub(1);
            wheels.push(Wheel::new(set, carry_target)?);
        }

        if wheels.is_empty() {
            return Err(Error::InvalidConfiguration(
                "no character sets given".to_string(),
            ));
        }

        let assembly = Self { wheels };
        debug!(
            "Built wheel assembly: wheels={}, period={:?}",
            assembly.wheel_count(),
            assembly.period()
        );
        Ok(assembly)
    }

    /// Build the default `Aa0` assembly: uppercase, lowercase, digits.
    pub fn aa0() -> Self {
        let wheels = Charset::DEFAULT_ORDER
            .iter()
            .enumerate()
            .map(|(index, &charset)| Wheel::from_charset(charset, index.checked_sub(1)))
            .collect();
        Self { wheels }
    }

    /// Advance the least significant wheel `steps` times, cascading carries.
    pub fn advance(&mut self, steps: usize) {
        let last = self.wheels.len() - 1;
        for _ in 0..steps {
            let mut next = Some(last);
            while let Some(index) = next {
                next = self.wheels[index].advance();
            }
        }
    }

    /// Current symbol of every wheel, most significant first
    pub fn current_symbols(&self) -> Vec<char> {
        self.wheels.iter().map(Wheel::current).collect()
    }

    /// Current window as a string
    pub fn window(&self) -> String {
        self.wheels.iter().map(Wheel::current).collect()
    }

    /// Cursor of every wheel, most significant first
    pub fn cursors(&self) -> Vec<usize> {
        self.wheels.iter().map(Wheel::cursor).collect()
    }

    /// Whether every wheel is back at its first symbol
    pub fn is_at_origin(&self) -> bool {
        self.wheels.iter().all(|w| w.cursor() == 0)
    }

    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    pub fn wheel_count(&self) -> usize {
        self.wheels.len()
    }

    /// Number of distinct windows before the sequence repeats.
    ///
    /// Returns `None` if the product does not fit in a `u128`.
    pub fn period(&self) -> Option<u128> {
        self.wheels
            .iter()
            .try_fold(1u128, |acc, w| acc.checked_mul(w.len() as u128))
    }

    /// Number of characters that can be emitted before the pattern repeats
    pub fn max_unique_length(&self) -> Option<u128> {
        self.period()?.checked_mul(self.wheel_count() as u128)
    }
}

impl Default for WheelAssembly {
    fn default() -> Self {
        Self::aa0()
    }
}
