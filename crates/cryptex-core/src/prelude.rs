//! Prelude module for convenient imports
//!
//! ```
//! use cryptex_core::prelude::*;
//!
//! let pattern = pattern_create_default(6);
//! assert_eq!(pattern, "Aa0Aa1");
//! ```

pub use crate::assembly::WheelAssembly;
pub use crate::charset::Charset;
pub use crate::config::{PatternConfig, PatternConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::generator::{Pattern, generate, pattern_create, pattern_create_default};
pub use crate::wheel::Wheel;
