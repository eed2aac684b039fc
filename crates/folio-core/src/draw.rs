//! Visual-side command types consumed by the frontend.
//!
//! The field owns all state and physics; the presentation layer only reads a
//! snapshot of these commands after each step. Nothing here references
//! platform APIs, so the frontend can interpret the list on any surface.

use glam::Vec2;
use smallvec::SmallVec;

/// Points in one ribbon polyline (`WAVE_SEGMENTS` + 1).
pub type RibbonPoints = SmallVec<[Vec2; 6]>;

/// One draw primitive, in back-to-front emit order.
#[derive(Clone, Debug)]
pub enum DrawCommand {
    /// Solid white circle with a soft halo; `alpha` is the particle's glow.
    Glow {
        center: Vec2,
        radius: f32,
        alpha: f32,
    },
    /// Short wavy stroke along a wave particle's recent trajectory, rounded
    /// caps, alpha fading to zero at end of life.
    Ribbon {
        points: RibbonPoints,
        color: &'static str,
        alpha: f32,
        width: f32,
    },
}
