//! Short-lived particle bursts confirming a pick.
//!
//! Effects are plain data advanced once per tick and dropped when their time
//! is up; nothing reschedules itself.

use crate::config::EffectParams;
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Scatter offset from the spawn point, fixed at spawn.
    pub offset: Vec3,
    pub position: Vec3,
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Clone, Debug)]
pub struct ClickEffect {
    pub origin: Vec3,
    /// Seconds since spawn.
    pub elapsed: f32,
    pub duration: f32,
    pub particles: SmallVec<[Particle; 16]>,
}

impl ClickEffect {
    #[inline]
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    fn refresh(&mut self, params: &EffectParams) {
        let p = self.progress().clamp(0.0, 1.0);
        let rise = Vec3::Y * params.rise_per_sec * self.elapsed;
        for part in &mut self.particles {
            part.opacity = 1.0 - p;
            part.scale = 1.0 + p * params.scale_growth;
            part.position = self.origin + part.offset + rise;
        }
    }
}

pub struct ClickEffectSystem {
    params: EffectParams,
    effects: Vec<ClickEffect>,
    rng: StdRng,
}

impl ClickEffectSystem {
    pub fn new(params: EffectParams, seed: u64) -> Self {
        Self {
            params,
            effects: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Scatter a burst of particles around `position`.
    pub fn spawn(&mut self, position: Vec3) {
        let spread = self.params.spread;
        let particles = (0..self.params.particle_count)
            .map(|_| {
                let offset = Vec3::new(
                    (self.rng.gen::<f32>() - 0.5) * spread,
                    (self.rng.gen::<f32>() - 0.5) * spread,
                    (self.rng.gen::<f32>() - 0.5) * spread,
                );
                Particle {
                    offset,
                    position: position + offset,
                    opacity: 1.0,
                    scale: 1.0,
                }
            })
            .collect();
        self.effects.push(ClickEffect {
            origin: position,
            elapsed: 0.0,
            duration: self.params.duration_sec,
            particles,
        });
    }

    /// Age every effect by `dt` and drop the ones that have run their course.
    pub fn advance(&mut self, dt: f32) {
        let params = self.params;
        for fx in &mut self.effects {
            fx.elapsed += dt;
            fx.refresh(&params);
        }
        self.effects.retain(|fx| !fx.is_finished());
    }

    #[inline]
    pub fn effects(&self) -> &[ClickEffect] {
        &self.effects
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.effects.iter().flat_map(|fx| fx.particles.iter())
    }

    #[inline]
    pub fn live_particle_count(&self) -> usize {
        self.effects.iter().map(|fx| fx.particles.len()).sum()
    }
}
