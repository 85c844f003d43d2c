//! Visual theme for Serenade.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
