//! One emission point and the particles it owns

use crate::curves::fade_opacity;
use crate::emitter::EmitterConfig;
use crate::particle::ParticlePool;
use bouquet_core::{BlockSpec, Color, Finish, SceneNode, Transform, Vec3};
use rand::Rng;
use tracing::debug;

/// Spawns cuboid particles at a fixed anchor and expires them after their lifetime
pub struct ParticleSystem {
    pub anchor: Vec3,
    pub color: Color,
    config: EmitterConfig,
    pool: ParticlePool,
    /// Spawns rejected because the pool was full
    dropped_spawns: u64,
    /// Set on the first rejected spawn, cleared only by `reset`
    saturated: bool,
}

impl ParticleSystem {
    pub fn new(anchor: Vec3, color: Color, config: EmitterConfig) -> Self {
        let pool = ParticlePool::new(config.max_particles);
        Self {
            anchor,
            color,
            config,
            pool,
            dropped_spawns: 0,
            saturated: false,
        }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn alive_count(&self) -> usize {
        self.pool.alive_count()
    }

    pub fn dropped_spawns(&self) -> u64 {
        self.dropped_spawns
    }

    /// Whether this emitter has hit its cap since the last reset
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    /// Run one frame: maybe spawn, integrate survivors, expire the old.
    ///
    /// `now` is scene time in seconds and must not decrease between calls.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) {
        if rng.random::<f32>() < self.config.spawn_chance {
            self.spawn(now, rng);
        }

        let gravity = self.config.gravity;
        for p in self.pool.alive_slice_mut() {
            let elapsed = p.elapsed(now);
            if elapsed > p.lifetime {
                continue;
            }
            p.position += p.velocity;
            p.velocity.y -= gravity;
            p.opacity = fade_opacity(elapsed, p.lifetime);
        }

        self.pool.compact(now);
    }

    fn spawn<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) {
        let h = self.config.horizontal_speed;
        let velocity = Vec3::new(
            rng.random_range(-h..=h),
            rng.random_range(0.0..=self.config.vertical_speed),
            rng.random_range(-h..=h),
        );

        if self.pool.is_full() {
            self.dropped_spawns += 1;
            if !self.saturated {
                self.saturated = true;
                debug!(
                    target: "particles",
                    capacity = self.pool.capacity(),
                    anchor = ?self.anchor,
                    "emitter saturated, dropping spawns"
                );
            }
            return;
        }
        let Some(p) = self.pool.spawn() else {
            return;
        };

        p.position = self.anchor;
        p.velocity = velocity;
        p.color = self.color;
        p.size = self.config.size;
        p.lifetime = self.config.lifetime;
        p.spawn_time = now;
        p.opacity = 1.0;
    }

    /// Drop every live particle
    pub fn reset(&mut self) {
        self.pool.clear();
        self.saturated = false;
    }

    /// Live particles as translucent cubes, in the emitter's parent space
    pub fn node(&self) -> SceneNode {
        let blocks = self
            .pool
            .alive_slice()
            .iter()
            .map(|p| {
                BlockSpec::cube(p.position, p.size, p.color)
                    .with_finish(Finish::GLOSSY)
                    .with_opacity(p.opacity.clamp(0.0, 1.0))
            })
            .collect();
        SceneNode::new("particles", Transform::IDENTITY).with_blocks(blocks)
    }
}
