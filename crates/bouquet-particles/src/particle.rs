//! Particle state and the fixed-capacity pool that owns it

use bouquet_core::{Color, Vec3};

/// One ephemeral cuboid
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    /// Displacement per tick
    pub velocity: Vec3,
    pub color: Color,
    /// Cube edge length
    pub size: f32,
    /// Seconds
    pub lifetime: f32,
    /// Scene time at which this particle was emitted
    pub spawn_time: f64,
    pub opacity: f32,
}

impl Particle {
    /// An unused pool slot
    pub fn dead() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            color: Color::WHITE,
            size: 0.0,
            lifetime: 0.0,
            spawn_time: 0.0,
            opacity: 0.0,
        }
    }

    /// Seconds since spawn
    pub fn elapsed(&self, now: f64) -> f32 {
        (now - self.spawn_time) as f32
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.elapsed(now) > self.lifetime
    }
}

/// Swap-remove pool for O(1) particle kill and contiguous alive iteration.
///
/// The first `alive_count` slots are the live particles; the rest are free.
///
/// All slots are allocated up front, so memory per emitter never grows past
/// `capacity`.
pub struct ParticlePool {
    particles: Vec<Particle>,
    alive_count: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: vec![Particle::dead(); capacity],
            alive_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    pub fn is_full(&self) -> bool {
        self.alive_count >= self.particles.len()
    }

    /// Claim one slot, returning a mutable ref to initialize it.
    /// Returns None if the pool is full.
    pub fn spawn(&mut self) -> Option<&mut Particle> {
        if self.is_full() {
            return None;
        }
        let idx = self.alive_count;
        self.particles[idx] = Particle::dead();
        self.alive_count += 1;
        Some(&mut self.particles[idx])
    }

    /// Kill expired particles via swap-remove.
    pub fn compact(&mut self, now: f64) {
        let mut i = 0;
        while i < self.alive_count {
            if self.particles[i].is_expired(now) {
                self.alive_count -= 1;
                if i < self.alive_count {
                    self.particles.swap(i, self.alive_count);
                }
                // Don't increment i, the swapped-in particle needs checking
            } else {
                i += 1;
            }
        }
    }

    /// Kill everything without releasing the slots
    pub fn clear(&mut self) {
        self.alive_count = 0;
    }

    /// Access alive particles slice for reading (first `alive_count` elements)
    pub fn alive_slice(&self) -> &[Particle] {
        &self.particles[..self.alive_count]
    }

    /// Access alive particles mutably
    pub fn alive_slice_mut(&mut self) -> &mut [Particle] {
        &mut self.particles[..self.alive_count]
    }
}
