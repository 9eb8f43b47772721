//! Confetti particle burst
//!
//! Frame-stepped simulation, independent of board state. Rendering lives in
//! `renderer::confetti`.

use glam::Vec2;
use rand::Rng;

use crate::consts::{CONFETTI_GRAVITY, CONFETTI_LIFE, CONFETTI_PARTICLES, CONFETTI_SPREAD};

/// Confetti palette
pub const CONFETTI_COLORS: [&str; 5] = ["#2c3e50", "#e74c3c", "#f1c40f", "#2ecc71", "#ffffff"];

/// A single confetti piece
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Rectangle width/height in pixels
    pub size: Vec2,
    pub color: &'static str,
    /// Frames remaining
    pub life: u32,
}

/// The active burst
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    pub particles: Vec<Particle>,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any running burst with a fresh one from `origin`
    pub fn burst<R: Rng + ?Sized>(&mut self, origin: Vec2, rng: &mut R) {
        self.particles.clear();
        self.particles.extend((0..CONFETTI_PARTICLES).map(|_| Particle {
            pos: origin,
            vel: Vec2::new(
                rng.random_range(-CONFETTI_SPREAD..CONFETTI_SPREAD),
                rng.random_range(-CONFETTI_SPREAD..CONFETTI_SPREAD),
            ),
            size: Vec2::new(rng.random_range(4.0..10.0), rng.random_range(6.0..16.0)),
            color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            life: CONFETTI_LIFE,
        }));
    }

    /// Advance one frame and drop expired particles
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel.y += CONFETTI_GRAVITY;
            p.life = p.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);
    }

    /// True when nothing is left to draw
    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }
}
