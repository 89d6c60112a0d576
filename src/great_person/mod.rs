//! Great person catalog module

mod catalog;
mod definition;
mod definitions;
mod text;
mod tick;


pub use catalog::*;
pub use definition::*;
pub use definitions::*;
pub use text::*;
pub use tick::*;
