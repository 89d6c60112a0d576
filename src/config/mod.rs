//! Configuration module for static content enums and runtime settings

mod age;
mod multiplier;
mod settings;

pub use age::*;
pub use multiplier::*;
pub use settings::*;
