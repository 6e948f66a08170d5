//! # cryptex-core
//!
//! Core library for the cryptex cyclic pattern generator.
//!
//! This crate provides:
//! - Wheels and the mixed-radix wheel assembly (an odometer of character sets)
//! - A lazy, infinite pattern iterator over an assembly
//! - Built-in character set presets (`A-Z`, `a-z`, `0-9`)
//! - Pattern configuration with a builder
//!
//! A pattern is made of windows, one symbol per wheel, emitted before the
//! assembly steps forward. Every window is unique until the assembly has
//! gone through its whole period, after which the sequence repeats.
//!
//! ```
//! use cryptex_core::{WheelAssembly, pattern_create};
//!
//! let assembly = WheelAssembly::build(["ABC", "def", "123"]).unwrap();
//! assert_eq!(pattern_create(9, assembly), "Ad1Ad2Ad3");
//! ```

pub mod assembly;
pub mod charset;
pub mod config;
pub mod error;
pub mod generator;
pub mod prelude;
pub mod wheel;

pub use assembly::WheelAssembly;
pub use charset::Charset;
pub use config::{PatternConfig, PatternConfigBuilder};
pub use error::{Error, Result};
pub use generator::{Pattern, generate, pattern_create, pattern_create_default};
pub use wheel::Wheel;
