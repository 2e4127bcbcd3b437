//! Utility functions

pub mod atomic;
pub mod time;

pub use atomic::atomic_write;
pub use time::{iso_now, parse_iso};
