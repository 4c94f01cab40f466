//! Time-based animation primitives shared by transitions and diagrams.
//!
//! Everything here is a pure function of elapsed seconds so a frame can be
//! reproduced from a timestamp alone.

pub mod easing;
pub mod playback;
pub mod tween;

pub use easing::{Ease, SLIDE_CURVE};
pub use playback::{Playback, PlaybackState, Sequence, StageTimer};
pub use tween::{blink, fade_in, keyframes, lerp, progress, pulse, tween};
