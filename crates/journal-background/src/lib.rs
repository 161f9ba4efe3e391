//! Backdrop rendering for the journal app.
//!
//! This crate paints the pastel page behind the cards (a gradient wash with
//! an optional dotted paper pattern) and the short-lived sparkles spawned by
//! the sparkle button.

mod animations;
mod chars;
mod color;
mod state;

pub use animations::sparkles::render_sparkles;
pub use color::{lerp_rgb, title_gradient};
pub use state::BackgroundState;
