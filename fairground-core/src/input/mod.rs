//! Switch input filtering

pub mod debounce;

pub use debounce::{DebouncedLine, DEFAULT_DEBOUNCE_TICKS};
