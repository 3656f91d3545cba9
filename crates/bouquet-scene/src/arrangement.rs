//! The composed bouquet: placement generated once, animated per frame

use crate::config::ArrangementConfig;
use crate::flower::{generate_flowers, FlowerKind, FlowerSpec};
use crate::heart::{generate_hearts, HeartSpec};
use crate::palette::WATER_BLUE;
use crate::water::WaterSurface;
use bouquet_core::{BlockSpec, Result, SceneNode, Transform, Vec3};
use bouquet_particles::ParticleSystem;
use bouquet_runtime::{FrameSystem, SceneClock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

/// Vase, water, flowers, emitters and hearts under one swaying group
pub struct FlowerArrangement {
    config: ArrangementConfig,
    flowers: Vec<FlowerSpec>,
    hearts: Vec<HeartSpec>,
    vase: Vec<BlockSpec>,
    water: WaterSurface,
    /// Water emitter first, then one per flower in flower order
    emitters: Vec<ParticleSystem>,
    rng: StdRng,
}

/// Counts describing a generated arrangement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrangementSummary {
    pub flowers: usize,
    pub roses: usize,
    pub daisies: usize,
    pub tulips: usize,
    pub hearts: usize,
    pub vase_blocks: usize,
    pub water_blocks: usize,
    pub emitters: usize,
    pub live_particles: usize,
    pub dropped_spawns: u64,
}

impl FlowerArrangement {
    /// Build from config, seeding from `config.seed` or the OS when absent
    pub fn new(config: ArrangementConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    /// Build with an explicit random source.
    ///
    /// Layout sampling happens here, in a fixed order; the same generator then
    /// drives particle emission.
    pub fn with_rng(config: ArrangementConfig, mut rng: StdRng) -> Self {
        let flowers = generate_flowers(&config.flowers, &mut rng);
        let hearts = generate_hearts(&config.hearts, &mut rng);
        let vase = config.vase.blocks();
        let water = WaterSurface::new(&config.water, config.vase.block_size);

        let mut emitters = Vec::with_capacity(flowers.len() + 1);
        emitters.push(ParticleSystem::new(
            Vec3::new(0.0, config.water.level, 0.0),
            WATER_BLUE,
            config.particles.clone(),
        ));
        for flower in &flowers {
            emitters.push(ParticleSystem::new(
                flower.position,
                flower.color,
                config.particles.clone(),
            ));
        }

        debug!(
            target: "scene",
            flowers = flowers.len(),
            hearts = hearts.len(),
            vase_blocks = vase.len(),
            water_blocks = water.blocks.len(),
            "arrangement generated"
        );

        Self {
            config,
            flowers,
            hearts,
            vase,
            water,
            emitters,
            rng,
        }
    }

    pub fn config(&self) -> &ArrangementConfig {
        &self.config
    }

    pub fn flowers(&self) -> &[FlowerSpec] {
        &self.flowers
    }

    pub fn hearts(&self) -> &[HeartSpec] {
        &self.hearts
    }

    pub fn vase_blocks(&self) -> &[BlockSpec] {
        &self.vase
    }

    pub fn water(&self) -> &WaterSurface {
        &self.water
    }

    pub fn emitters(&self) -> &[ParticleSystem] {
        &self.emitters
    }

    pub fn live_particles(&self) -> usize {
        self.emitters.iter().map(|e| e.alive_count()).sum()
    }

    pub fn dropped_spawns(&self) -> u64 {
        self.emitters.iter().map(|e| e.dropped_spawns()).sum()
    }

    pub fn summary(&self) -> ArrangementSummary {
        let count = |kind: FlowerKind| self.flowers.iter().filter(|f| f.kind == kind).count();
        ArrangementSummary {
            flowers: self.flowers.len(),
            roses: count(FlowerKind::Rose),
            daisies: count(FlowerKind::Daisy),
            tulips: count(FlowerKind::Tulip),
            hearts: self.hearts.len(),
            vase_blocks: self.vase.len(),
            water_blocks: self.water.blocks.len(),
            emitters: self.emitters.len(),
            live_particles: self.live_particles(),
            dropped_spawns: self.dropped_spawns(),
        }
    }

    /// Group sway at scene time `t`
    pub fn transform_at(t: f32) -> Transform {
        Transform::IDENTITY.with_rotation(Vec3::new(0.0, (t * 0.1).sin() * 0.1, 0.0))
    }

    /// Advance every emitter to scene time `now`
    pub fn tick(&mut self, now: f64) {
        for emitter in &mut self.emitters {
            emitter.tick(now, &mut self.rng);
        }
    }

    /// The full scene graph at scene time `t`
    pub fn frame(&self, t: f32) -> SceneNode {
        let mut root = SceneNode::new("arrangement", Self::transform_at(t));

        let mut flowers = SceneNode::new("flowers", Transform::IDENTITY);
        flowers.children = self.flowers.iter().map(|f| f.node_at(t)).collect();
        root.push_child(flowers);

        root.push_child(SceneNode::new("vase", Transform::IDENTITY).with_blocks(self.vase.clone()));
        root.push_child(self.water.node_at(t));

        let mut particles = SceneNode::new("particles", Transform::IDENTITY);
        particles.children = self.emitters.iter().map(|e| e.node()).collect();
        root.push_child(particles);

        let mut hearts = SceneNode::new("hearts", Transform::IDENTITY);
        hearts.children = self.hearts.iter().map(|h| h.node_at(t)).collect();
        root.push_child(hearts);

        root
    }
}

impl FrameSystem for FlowerArrangement {
    fn initialize(&mut self) -> Result<()> {
        let s = self.summary();
        info!(
            target: "scene",
            flowers = s.flowers,
            roses = s.roses,
            daisies = s.daisies,
            tulips = s.tulips,
            hearts = s.hearts,
            emitters = s.emitters,
            "arrangement ready"
        );
        Ok(())
    }

    fn update(&mut self, clock: &SceneClock) -> Result<()> {
        self.tick(clock.elapsed());
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        let dropped = self.dropped_spawns();
        if dropped > 0 {
            info!(target: "scene", dropped, "particle spawns dropped at capacity");
        }
        for emitter in &mut self.emitters {
            emitter.reset();
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "arrangement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::in_palette;
    use bouquet_runtime::FrameLoop;

    fn seeded(seed: u64) -> FlowerArrangement {
        FlowerArrangement::new(ArrangementConfig {
            seed: Some(seed),
            ..Default::default()
        })
    }

    #[test]
    fn default_arrangement_counts() {
        let arrangement = seeded(25);
        let s = arrangement.summary();
        assert_eq!(s.flowers, 25);
        assert_eq!(s.roses + s.daisies + s.tulips, 25);
        assert_eq!(s.hearts, 8);
        assert_eq!(s.vase_blocks, 60 + 21);
        assert_eq!(s.water_blocks, 13);
        assert_eq!(s.emitters, 26);
        assert_eq!(s.live_particles, 0);
        assert!(arrangement.flowers().iter().all(|f| in_palette(&f.color)));
    }

    #[test]
    fn seed_makes_layout_reproducible() {
        let a = seeded(1234);
        let b = seeded(1234);
        let c = seeded(4321);
        assert_eq!(a.flowers(), b.flowers());
        assert_eq!(a.hearts(), b.hearts());
        assert_ne!(a.flowers(), c.flowers());
    }

    #[test]
    fn emitters_anchor_on_water_and_flowers() {
        let arrangement = seeded(3);
        let emitters = arrangement.emitters();
        assert_eq!(emitters[0].anchor, Vec3::new(0.0, -2.5, 0.0));
        assert_eq!(emitters[0].color, WATER_BLUE);
        for (emitter, flower) in emitters[1..].iter().zip(arrangement.flowers()) {
            assert_eq!(emitter.anchor, flower.position);
            assert_eq!(emitter.color, flower.color);
        }
    }

    #[test]
    fn animation_never_mutates_placement() {
        let mut arrangement = seeded(8);
        let before = arrangement.flowers().to_vec();
        let mut frame_loop = FrameLoop::new();
        frame_loop.run_fixed(&mut arrangement, 60.0, 180, |_, _| Ok(())).unwrap();
        assert_eq!(arrangement.flowers(), before.as_slice());
        assert!(arrangement.live_particles() > 0);
    }

    #[test]
    fn frame_contains_every_block() {
        let mut arrangement = seeded(5);
        for frame in 0..30 {
            arrangement.tick(frame as f64 / 60.0);
        }
        let root = arrangement.frame(0.5);
        let flower_blocks: usize = arrangement.flowers().iter().map(|f| f.blocks().len()).sum();
        let expected = flower_blocks
            + 81
            + 13
            + arrangement.live_particles()
            + arrangement.hearts().len() * 9;
        assert_eq!(root.block_count(), expected);
        assert_eq!(root.flatten().len(), expected);
        assert_eq!(root.child("flowers").unwrap().children.len(), 25);
        assert_eq!(root.child("particles").unwrap().children.len(), 26);
    }

    #[test]
    fn frame_is_a_pure_function_of_time() {
        let arrangement = seeded(6);
        let a = arrangement.frame(3.25).flatten();
        let b = arrangement.frame(3.25).flatten();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.model, y.model);
        }
    }

    #[test]
    fn group_sway_is_bounded() {
        for step in 0..300 {
            let r = FlowerArrangement::transform_at(step as f32 * 0.7).rotation;
            assert!(r.y.abs() <= 0.1 + 1e-6);
            assert_eq!(r.x, 0.0);
            assert_eq!(r.z, 0.0);
        }
    }

    #[test]
    fn shutdown_clears_particles() {
        let mut arrangement = seeded(10);
        let mut frame_loop = FrameLoop::new();
        frame_loop.run_fixed(&mut arrangement, 60.0, 120, |_, _| Ok(())).unwrap();
        frame_loop.finish(&mut arrangement).unwrap();
        assert_eq!(arrangement.live_particles(), 0);
    }
}
