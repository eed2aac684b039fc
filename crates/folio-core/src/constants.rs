use std::time::Duration;

// Tuning constants shared by the particle field and section navigation.

// Ambient starfield
pub const AMBIENT_COUNT: usize = 150;
pub const AMBIENT_DRIFT_SPAN: f32 = 0.2; // initial velocity component in +-span/2
pub const AMBIENT_RADIUS_MIN: f32 = 1.5;
pub const AMBIENT_RADIUS_SPAN: f32 = 3.0;
pub const AMBIENT_GLOW_MIN: f32 = 0.5;
pub const AMBIENT_GLOW_SPAN: f32 = 0.5;
pub const AMBIENT_DAMPING: f32 = 0.98; // applied every frame, repulsed or not

// Pointer repulsion
pub const REPULSION_RADIUS: f32 = 100.0;
pub const REPULSION_STRENGTH: f32 = 0.5;

// Wave trail population
pub const WAVE_SPAWN_PER_MOVE: usize = 3; // spawned along each pointer-move delta
pub const WAVE_LAUNCH_SPEED: f32 = 0.5;
pub const WAVE_MAX_LIFE: u32 = 30; // frames
pub const WAVE_DAMPING: f32 = 0.95;
pub const WAVE_PHASE_STEP: f32 = 0.2; // radians per frame

// Wave ribbon geometry
pub const WAVE_SEGMENTS: usize = 5;
pub const WAVE_TRAIL_STRETCH: f32 = 15.0; // how far back along the velocity the ribbon reaches
pub const WAVE_WOBBLE_AMPLITUDE: f32 = 5.0;
pub const WAVE_WOBBLE_FREQUENCY: f32 = 4.0;
pub const WAVE_STROKE_WIDTH: f32 = 2.5;

// Trail palette, light pink to near-white
pub const WAVE_PALETTE: [&str; 6] = [
    "#fbcdf1", "#fbd5f3", "#fcddf5", "#fce5f7", "#fdedf9", "#fef2fb",
];

// Section paging: transition duration plus margin
pub const SCROLL_LOCK: Duration = Duration::from_millis(500);
