//! Color constants for the love-letter palette.
//!
//! Mirrors the custom properties in [`GLOBAL_STYLES`](super::GLOBAL_STYLES) for
//! places that style elements inline.

// === ROSE (Accents, Hearts) ===
pub const ROSE_GOLD: &str = "#e8b4b8";
pub const DEEP_ROSE: &str = "#c2185b";
pub const SOFT_PINK: &str = "#f8d7de";

// === GOLD (Titles, Highlights) ===
pub const ROMANTIC_GOLD: &str = "#d4a056";

/// Colors the floating hearts cycle through
pub const HEART_COLORS: [&str; 4] = [DEEP_ROSE, ROSE_GOLD, ROMANTIC_GOLD, SOFT_PINK];
