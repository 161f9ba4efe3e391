//! Character constants for backdrop and sparkle rendering.

/// Dot used for the paper pattern.
pub const PAPER_DOT: char = '·';

/// Accent dots near the page corners, smallest to largest.
pub const ACCENT_DOTS: &[char] = &['·', '•', '●'];

/// Sparkle frames, cycled to make a sparkle pulse while it is visible.
pub const SPARKLE_FRAMES: &[char] = &['✦', '✧', '*', '·', '✧'];
