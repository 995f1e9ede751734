//! Creation events and their in-process broadcast.

pub mod channel;

pub use channel::*;
