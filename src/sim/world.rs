//! Decorative world generation
//!
//! Scenery along the ground plus cloud and star layers for parallax. None of
//! it collides with anything; it is generated once and only read afterwards.

use glam::Vec2;
use rand::Rng;

use crate::tuning::Tuning;

/// Number of ground scenery objects
pub const SCENERY_COUNT: usize = 500;
/// Number of clouds (altitude variant)
pub const CLOUD_COUNT: usize = 200;
/// Number of stars (altitude variant)
pub const STAR_COUNT: usize = 500;

/// Chance that a scenery slot holds a mountain rather than a house
pub const MOUNTAIN_CHANCE: f32 = 0.7;

/// Parallax scroll factors relative to the main world
pub const STAR_PARALLAX: f32 = 0.2;
pub const CLOUD_PARALLAX: f32 = 0.5;

/// Ground decoration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scenery {
    /// Triangle centered on `x`, standing on `ground`
    Mountain {
        x: f32,
        ground: f32,
        base: f32,
        height: f32,
    },
    /// Rectangle with a roof; `top` is the wall's upper edge
    House {
        x: f32,
        top: f32,
        width: f32,
        height: f32,
        /// Wall hue in degrees (drawn at 50% saturation, 60% lightness)
        hue: f32,
    },
}

impl Scenery {
    pub fn x(&self) -> f32 {
        match *self {
            Scenery::Mountain { x, .. } | Scenery::House { x, .. } => x,
        }
    }
}

/// Background cloud (ellipse)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: f32,
}

/// Background star (dot)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
}

/// Everything static in the world
#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    pub scenery: Vec<Scenery>,
    pub clouds: Vec<Cloud>,
    pub stars: Vec<Star>,
}

impl World {
    /// Generate a fresh world
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Self {
        let ground = tuning.ground_level;
        let scenery = generate_scenery(rng, ground);
        let (clouds, stars) = if tuning.parallax {
            (
                generate_clouds(rng, ground, tuning.altitude_space_start),
                generate_stars(rng, ground, tuning.altitude_space_start),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        log::info!(
            "World generated: {} scenery, {} clouds, {} stars",
            scenery.len(),
            clouds.len(),
            stars.len()
        );

        Self {
            scenery,
            clouds,
            stars,
        }
    }
}

fn generate_scenery<R: Rng + ?Sized>(rng: &mut R, ground: f32) -> Vec<Scenery> {
    (0..SCENERY_COUNT)
        .map(|i| {
            // Slot spacing is re-rolled per object, so later objects spread further apart
            let x = i as f32 * (rng.random::<f32>() * 200.0 + 250.0);
            if rng.random::<f32>() < MOUNTAIN_CHANCE {
                Scenery::Mountain {
                    x,
                    ground,
                    base: rng.random::<f32>() * 200.0 + 100.0,
                    height: rng.random::<f32>() * 400.0 + 150.0,
                }
            } else {
                Scenery::House {
                    x,
                    top: ground - (rng.random::<f32>() * 30.0 + 40.0),
                    width: 60.0,
                    height: rng.random::<f32>() * 30.0 + 50.0,
                    hue: rng.random::<f32>() * 60.0 + 200.0,
                }
            }
        })
        .collect()
}

fn generate_clouds<R: Rng + ?Sized>(rng: &mut R, ground: f32, space_start: f32) -> Vec<Cloud> {
    (0..CLOUD_COUNT)
        .map(|_| Cloud {
            pos: Vec2::new(
                rng.random::<f32>() * 40000.0 - 10000.0,
                ground - (rng.random::<f32>() * space_start * 1.5 + 500.0),
            ),
            size: rng.random::<f32>() * 50.0 + 50.0,
        })
        .collect()
}

fn generate_stars<R: Rng + ?Sized>(rng: &mut R, ground: f32, space_start: f32) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random::<f32>() * 50000.0 - 15000.0,
                ground - (rng.random::<f32>() * 20000.0 + space_start),
            ),
            size: rng.random::<f32>() * 2.0 + 0.5,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::WorldVariant;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_sideral_world_has_sky_layers() {
        let t = Tuning::for_variant(WorldVariant::Sideral);
        let world = World::generate(&mut Pcg32::seed_from_u64(3), &t);
        assert_eq!(world.scenery.len(), SCENERY_COUNT);
        assert_eq!(world.clouds.len(), CLOUD_COUNT);
        assert_eq!(world.stars.len(), STAR_COUNT);
        for star in &world.stars {
            assert!(star.pos.y <= t.ground_level - t.altitude_space_start);
        }
        for cloud in &world.clouds {
            assert!(cloud.pos.y <= t.ground_level - 500.0);
            assert!(cloud.size >= 50.0 && cloud.size < 100.0);
        }
    }

    #[test]
    fn test_classic_world_is_ground_only() {
        let t = Tuning::for_variant(WorldVariant::Classic);
        let world = World::generate(&mut Pcg32::seed_from_u64(3), &t);
        assert_eq!(world.scenery.len(), SCENERY_COUNT);
        assert!(world.clouds.is_empty());
        assert!(world.stars.is_empty());
    }

    #[test]
    fn test_scenery_mix_and_ranges() {
        let t = Tuning::default();
        let world = World::generate(&mut Pcg32::seed_from_u64(11), &t);
        let mountains = world
            .scenery
            .iter()
            .filter(|s| matches!(s, Scenery::Mountain { .. }))
            .count();
        // ~70% mountains
        assert!((250..450).contains(&mountains), "mountains: {}", mountains);

        assert_eq!(world.scenery[0].x(), 0.0);
        for s in &world.scenery {
            match *s {
                Scenery::Mountain { base, height, ground, .. } => {
                    assert!((100.0..300.0).contains(&base));
                    assert!((150.0..550.0).contains(&height));
                    assert_eq!(ground, t.ground_level);
                }
                Scenery::House { top, width, height, hue, .. } => {
                    assert_eq!(width, 60.0);
                    assert!((50.0..80.0).contains(&height));
                    assert!((200.0..260.0).contains(&hue));
                    assert!(top < t.ground_level);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let t = Tuning::default();
        let a = World::generate(&mut Pcg32::seed_from_u64(5), &t);
        let b = World::generate(&mut Pcg32::seed_from_u64(5), &t);
        assert_eq!(a, b);
    }
}
