//! Reborn progression module

mod flow;
mod progress;
mod roller;
mod state;
mod store;


pub use flow::*;
pub use progress::*;
pub use roller::*;
pub use state::*;
pub use store::*;
