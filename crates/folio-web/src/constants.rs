// Presentation-side constants: element ids and canvas glow styling.

pub const CANVAS_ID: &str = "scene-canvas";

// Ambient particle halo
pub const GLOW_BLUR_PX: f64 = 10.0;
pub const GLOW_SHADOW: &str = "rgba(255, 255, 255, 0.8)";
pub const GLOW_FILL: &str = "#ffffff";
