//! Built-in character set presets.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::{Error, Result};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Charset {
    /// Uppercase Latin letters (A-Z)
    Upper,
    /// Lowercase Latin letters (a-z)
    Lower,
    /// Decimal digits (0-9)
    Digits,
}

impl Charset {
    /// Wheel order of the default `Aa0` pattern, most significant first
    pub const DEFAULT_ORDER: [Charset; 3] = [Charset::Upper, Charset::Lower, Charset::Digits];

    pub fn symbols(&self) -> &'static str {
        match self {
            Self::Upper => UPPERCASE,
            Self::Lower => LOWERCASE,
            Self::Digits => DIGITS,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols().len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols().is_empty()
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Look up a preset by name (`upper`, `lower`, `digits`)
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| {
            let known: Vec<&str> = Self::iter().map(|c| c.name()).collect();
            Error::InvalidConfiguration(format!(
                "unknown character set preset '{}', expected one of: {}",
                name,
                known.join(", ")
            ))
        })
    }

    /// Symbol strings of the default wheel order
    pub fn default_sets() -> Vec<String> {
        Self::DEFAULT_ORDER
            .iter()
            .map(|c| c.symbols().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_sizes() {
        assert!(Charset::iter().all(|c| !c.is_empty()));
        assert_eq!(Charset::Upper.len(), 26);
        assert_eq!(Charset::Lower.len(), 26);
        assert_eq!(Charset::Digits.len(), 10);
    }

    #[test]
    fn test_charset_symbols_are_ordered() {
        for charset in Charset::iter() {
            let symbols: Vec<char> = charset.symbols().chars().collect();
            assert!(symbols.windows(2).all(|w| w[0] < w[1]), "{}", charset);
        }
    }

    #[test]
    fn test_charset_from_str() {
        assert_eq!(Charset::from_str("upper").unwrap(), Charset::Upper);
        assert_eq!(Charset::from_str("lower").unwrap(), Charset::Lower);
        assert_eq!(Charset::from_str("digits").unwrap(), Charset::Digits);
        assert!(Charset::from_str("hex").is_err());
    }

    #[test]
    fn test_charset_parse() {
        assert_eq!(Charset::parse("digits").unwrap(), Charset::Digits);

        let err = Charset::parse("hex").unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("'hex'"));
        assert!(err.to_string().contains("upper, lower, digits"));
    }

    #[test]
    fn test_charset_name() {
        assert_eq!(Charset::Upper.name(), "upper");
        assert_eq!(Charset::Digits.to_string(), "digits");
    }

    #[test]
    fn test_default_sets_order() {
        let sets = Charset::default_sets();
        assert_eq!(sets.len(), 3);
        assert!(sets[0].starts_with("ABC"));
        assert!(sets[1].starts_with("abc"));
        assert_eq!(sets[2], "0123456789");
    }
}
