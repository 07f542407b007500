//! Presentational components for the transport portal.
//!
//! Every component links its own stylesheet, so pulling one in is enough
//! to style it. Colours come from the CSS variables in `theme`.

pub mod components;
pub mod theme;

pub use components::*;
