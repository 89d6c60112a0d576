//! Publish/subscribe notifications

mod bus;

pub use bus::*;
