//! Lazy pattern generation over a wheel assembly.

use crate::assembly::WheelAssembly;

/// Infinite iterator over the characters of a pattern.
///
/// Emits the current window one character at a time and steps the assembly
/// only when the next window is requested. The sequence never ends; after
/// the assembly's period it repeats from the start.
#[derive(Debug, Clone)]
pub struct Pattern {
    assembly: WheelAssembly,
    /// Index of the next wheel to read within the current window
    position: usize,
}

impl Pattern {
    pub fn new(assembly: WheelAssembly) -> Self {
        Self {
            assembly,
            position: 0,
        }
    }

    /// Assembly state the next window will be read from
    pub fn assembly(&self) -> &WheelAssembly {
        &self.assembly
    }
}

impl Iterator for Pattern {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let wheels = self.assembly.wheel_count();
        if self.position == wheels {
            self.assembly.advance(1);
            self.position = 0;
        }

        let symbol = self.assembly.wheels()[self.position].current();
        self.position += 1;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Start an infinite pattern over `assembly`
pub fn generate(assembly: WheelAssembly) -> Pattern {
    Pattern::new(assembly)
}

/// Take the first `length` characters of the pattern over `assembly`.
///
/// Lengths beyond the assembly's unique maximum are not an error; the output
/// simply starts repeating.
pub fn pattern_create(length: usize, assembly: WheelAssembly) -> String {
    generate(assembly).take(length).collect()
}

/// Same as [`pattern_create`] with a fresh default `Aa0` assembly
pub fn pattern_create_default(length: usize) -> String {
    pattern_create(length, WheelAssembly::aa0())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn abc_def_123() -> WheelAssembly {
        WheelAssembly::build(["ABC", "def", "123"]).unwrap()
    }

    #[test]
    fn test_pattern_create_custom_sets() {
        assert_eq!(pattern_create(9, abc_def_123()), "Ad1Ad2Ad3");
    }

    #[test]
    fn test_pattern_create_custom_sets_partial_window() {
        assert_eq!(
            pattern_create(50, abc_def_123()),
            "Ad1Ad2Ad3Ae1Ae2Ae3Af1Af2Af3Bd1Bd2Bd3Be1Be2Be3Bf1Bf"
        );
    }

    #[test]
    fn test_pattern_create_default_prefix() {
        assert_eq!(
            pattern_create_default(36),
            "Aa0Aa1Aa2Aa3Aa4Aa5Aa6Aa7Aa8Aa9Ab0Ab1"
        );
    }

    #[test]
    fn test_pattern_create_zero_length() {
        assert_eq!(pattern_create_default(0), "");
        assert_eq!(pattern_create(0, abc_def_123()), "");
    }

    #[test]
    fn test_pattern_create_length() {
        for length in [1, 2, 3, 4, 100, 20280, 20281] {
            assert_eq!(pattern_create_default(length).chars().count(), length);
        }
    }

    #[test]
    fn test_pattern_create_is_deterministic() {
        assert_eq!(pattern_create_default(5000), pattern_create_default(5000));
        assert_eq!(pattern_create(77, abc_def_123()), pattern_create(77, abc_def_123()));
    }

    #[test]
    fn test_default_calls_do_not_share_state() {
        let first = pattern_create_default(12);
        let second = pattern_create_default(12);
        assert_eq!(first, "Aa0Aa1Aa2Aa3");
        assert_eq!(first, second);
    }

    #[test]
    fn test_windows_unique_until_period() {
        let assembly = WheelAssembly::aa0();
        let max = assembly.max_unique_length().unwrap() as usize;
        let chars: Vec<char> = pattern_create(max, assembly).chars().collect();

        let windows: HashSet<&[char]> = chars.chunks(3).collect();
        assert_eq!(windows.len(), 6760);
    }

    #[test]
    fn test_pattern_repeats_after_period() {
        let assembly = WheelAssembly::aa0();
        let max = assembly.max_unique_length().unwrap() as usize;
        let chars: Vec<char> = pattern_create(2 * max + 7, assembly).chars().collect();

        for (k, c) in chars.iter().enumerate() {
            assert_eq!(*c, chars[k % max], "mismatch at index {}", k);
        }
    }

    #[test]
    fn test_wraparound_custom_sets() {
        // 27 windows of 3 characters
        let pattern = pattern_create(82, abc_def_123());
        assert!(pattern[..81].ends_with("Cf2Cf3"));
        assert_eq!(&pattern[81..], "A");
    }

    #[test]
    fn test_generate_steps_lazily() {
        let mut pattern = generate(abc_def_123());
        let window: String = pattern.by_ref().take(3).collect();
        assert_eq!(window, "Ad1");
        assert!(pattern.assembly().is_at_origin());

        assert_eq!(pattern.next(), Some('A'));
        assert_eq!(pattern.assembly().window(), "Ad2");
    }

    #[test]
    fn test_generate_single_wheel() {
        let pattern: String = generate(WheelAssembly::build(["xyz"]).unwrap())
            .take(7)
            .collect();
        assert_eq!(pattern, "xyzxyzx");
    }

    #[test]
    fn test_generate_multibyte_symbols() {
        let assembly = WheelAssembly::build(["αβ", "01"]).unwrap();
        assert_eq!(pattern_create(10, assembly), "α0α1β0β1α0");
    }
}
