use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

use crate::constants::{
    AMBIENT_DAMPING, AMBIENT_DRIFT_SPAN, AMBIENT_GLOW_MIN, AMBIENT_GLOW_SPAN, AMBIENT_RADIUS_MIN,
    AMBIENT_RADIUS_SPAN, REPULSION_RADIUS, REPULSION_STRENGTH, WAVE_DAMPING, WAVE_LAUNCH_SPEED,
    WAVE_MAX_LIFE, WAVE_PALETTE, WAVE_PHASE_STEP, WAVE_SEGMENTS, WAVE_SPAWN_PER_MOVE,
    WAVE_STROKE_WIDTH, WAVE_TRAIL_STRETCH, WAVE_WOBBLE_AMPLITUDE, WAVE_WOBBLE_FREQUENCY,
};
use crate::draw::{DrawCommand, RibbonPoints};

/// One persistent background point light. The population is fixed for the
/// lifetime of the field; only position and velocity mutate per frame.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub glow: f32,
}

/// One transient trail segment spawned by pointer movement. Removed from the
/// active set once `life` exceeds `max_life`.
#[derive(Clone, Copy, Debug)]
pub struct WaveParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub color: &'static str,
    pub phase: f32,
}

/// Ambient starfield plus pointer-driven wave trails.
///
/// The host feeds pointer events and calls [`ParticleField::step`] once per
/// render tick; [`ParticleField::draw_list`] then yields the frame's draw
/// primitives. All randomness flows through one seeded RNG so identical
/// seeds reproduce identical fields.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub waves: Vec<WaveParticle>,
    pointer: Option<Vec2>,
    prev_pointer: Option<Vec2>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(count: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * AMBIENT_DRIFT_SPAN,
                    (rng.gen::<f32>() - 0.5) * AMBIENT_DRIFT_SPAN,
                ),
                radius: AMBIENT_RADIUS_MIN + rng.gen::<f32>() * AMBIENT_RADIUS_SPAN,
                glow: AMBIENT_GLOW_MIN + rng.gen::<f32>() * AMBIENT_GLOW_SPAN,
            })
            .collect::<Vec<_>>();
        Self {
            particles,
            waves: Vec::new(),
            pointer: None,
            prev_pointer: None,
            width,
            height,
            rng,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Record a pointer position and spawn a trail batch along the movement
    /// delta. The first move after construction or after a leave records the
    /// position without spawning.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let next = Vec2::new(x, y);
        if let Some(prev) = self.prev_pointer {
            let delta = next - prev;
            let dist = delta.length();
            if dist > 0.0 {
                for i in 0..WAVE_SPAWN_PER_MOVE {
                    let frac = i as f32 / WAVE_SPAWN_PER_MOVE as f32;
                    self.waves.push(WaveParticle {
                        pos: prev + delta * frac,
                        vel: delta / dist * WAVE_LAUNCH_SPEED,
                        life: 0,
                        max_life: WAVE_MAX_LIFE,
                        color: WAVE_PALETTE
                            .choose(&mut self.rng)
                            .copied()
                            .unwrap_or(WAVE_PALETTE[0]),
                        phase: self.rng.gen::<f32>() * std::f32::consts::TAU,
                    });
                }
            }
        }
        self.prev_pointer = Some(next);
        self.pointer = Some(next);
    }

    /// Forget the pointer entirely, suppressing repulsion and trail spawning
    /// until the next move.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
        self.prev_pointer = None;
    }

    /// Apply new viewport dimensions before the next step. Zero or negative
    /// area is ignored; surviving particles are re-wrapped into the new
    /// bounds so wrap and repulsion keep matching the visible area.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        log::debug!(
            "[field] resize {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        self.width = width;
        self.height = height;
        for p in &mut self.particles {
            p.pos.x = p.pos.x.rem_euclid(width);
            p.pos.y = p.pos.y.rem_euclid(height);
        }
    }

    /// Advance one frame: drift, pointer repulsion and damping for the
    /// ambient set; aging, damping and expiry for the wave set. Ambient and
    /// wave updates are independent of each other.
    pub fn step(&mut self) {
        let pointer = self.pointer;
        for p in &mut self.particles {
            p.pos += p.vel;
            if let Some(m) = pointer {
                let away = p.pos - m;
                let dist = away.length();
                if dist < REPULSION_RADIUS && dist > 0.0 {
                    let force = (REPULSION_RADIUS - dist) / REPULSION_RADIUS;
                    p.vel += away / dist * force * REPULSION_STRENGTH;
                }
            }
            p.vel *= AMBIENT_DAMPING;
            if self.width > 0.0 && self.height > 0.0 {
                p.pos.x = p.pos.x.rem_euclid(self.width);
                p.pos.y = p.pos.y.rem_euclid(self.height);
            }
        }

        for w in &mut self.waves {
            w.life += 1;
            w.pos += w.vel;
            w.vel *= WAVE_DAMPING;
            w.phase += WAVE_PHASE_STEP;
        }
        // Expiry is steady-state pruning, not an error path.
        self.waves.retain(|w| w.life <= w.max_life);
    }

    /// Snapshot the current frame as draw primitives. Does not mutate.
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        let mut out = Vec::with_capacity(self.particles.len() + self.waves.len());
        for p in &self.particles {
            out.push(DrawCommand::Glow {
                center: p.pos,
                radius: p.radius,
                alpha: p.glow,
            });
        }
        for w in &self.waves {
            let alpha = 1.0 - w.life as f32 / w.max_life as f32;
            let perp = w.vel.perp().normalize_or_zero();
            let mut points: RibbonPoints = SmallVec::new();
            for i in 0..=WAVE_SEGMENTS {
                let t = i as f32 / WAVE_SEGMENTS as f32;
                let wobble = (w.phase + t * WAVE_WOBBLE_FREQUENCY).sin() * WAVE_WOBBLE_AMPLITUDE;
                points.push(w.pos - w.vel * (t * WAVE_TRAIL_STRETCH) + perp * wobble);
            }
            out.push(DrawCommand::Ribbon {
                points,
                color: w.color,
                alpha,
                width: WAVE_STROKE_WIDTH,
            });
        }
        out
    }
}
