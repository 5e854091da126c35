//! Per-frame scene composition
//!
//! Layers back to front: sky, parallax stars and clouds, the camera-space
//! world (scenery, launch pad, ground, sparks, ship), then screen-space wind
//! lines and the power dial.

use glam::Vec2;

use super::meter::draw_power_meter;
use super::ship::draw_ship;
use super::{Color, DrawSurface};
use crate::lerp;
use crate::sim::world::{CLOUD_PARALLAX, STAR_PARALLAX};
use crate::sim::{GamePhase, GameState, Scenery};

const SKY: (f32, f32, f32) = (135.0, 206.0, 235.0);
const SPACE: (f32, f32, f32) = (0.0, 0.0, 16.0);

const MOUNTAIN: Color = Color::hex(0x2c3e50);
const ROOF: Color = Color::hex(0xa0522d);
const PAD_TOP: Color = Color::hex(0x555555);
const PAD_BASE: Color = Color::hex(0x777777);
const GRASS: Color = Color::hex(0x27ae60);
const GROUND_DEPTH: f32 = 500.0;

/// Scenery wider than this past the viewport edge is skipped
const CULL_MARGIN: f32 = 400.0;

/// Sky fill for the current altitude
pub fn sky_color(state: &GameState) -> Color {
    if !state.tuning.altitude_sky {
        return Color::rgb(SKY.0 as u8, SKY.1 as u8, SKY.2 as u8);
    }
    let t = state.altitude_ratio();
    let channel = |a: f32, b: f32| lerp(a, b, t).round() as u8;
    Color::rgb(
        channel(SKY.0, SPACE.0),
        channel(SKY.1, SPACE.1),
        channel(SKY.2, SPACE.2),
    )
}

/// Draw one complete frame
pub fn render_frame(surface: &mut dyn DrawSurface, state: &GameState) {
    let viewport = state.tuning.viewport;
    surface.clear(viewport);
    surface.fill_rect(Vec2::ZERO, viewport, sky_color(state));

    draw_parallax(surface, state);

    surface.save();
    surface.translate(-state.camera.pos);
    draw_scenery(surface, state);
    draw_launch_pad(surface, state);
    draw_ground(surface, state);
    draw_sparks(surface, state);
    draw_ship(surface, state);
    surface.restore();

    draw_wind_lines(surface, state);
    if state.phase == GamePhase::Charging {
        draw_power_meter(surface, &state.power, viewport);
    }
}

fn draw_parallax(surface: &mut dyn DrawSurface, state: &GameState) {
    let world = &state.world;
    if !world.stars.is_empty() {
        surface.save();
        surface.translate(-state.camera.pos * STAR_PARALLAX);
        for star in &world.stars {
            surface.fill_circle(star.pos, star.size, Color::WHITE);
        }
        surface.restore();
    }

    if !world.clouds.is_empty() {
        let color = Color::WHITE.with_alpha(0.8);
        surface.save();
        surface.translate(-state.camera.pos * CLOUD_PARALLAX);
        for cloud in &world.clouds {
            surface.fill_ellipse(cloud.pos, Vec2::new(cloud.size, cloud.size * 0.6), color);
        }
        surface.restore();
    }
}

fn draw_scenery(surface: &mut dyn DrawSurface, state: &GameState) {
    let left = state.camera.pos.x - CULL_MARGIN;
    let right = state.camera.pos.x + state.tuning.viewport.x + CULL_MARGIN;

    for obj in state.world.scenery.iter().filter(|s| (left..=right).contains(&s.x())) {
        match *obj {
            Scenery::Mountain {
                x,
                ground,
                base,
                height,
            } => {
                surface.fill_polygon(
                    &[
                        Vec2::new(x - base / 2.0, ground),
                        Vec2::new(x, ground - height),
                        Vec2::new(x + base / 2.0, ground),
                    ],
                    MOUNTAIN,
                );
            }
            Scenery::House {
                x,
                top,
                width,
                height,
                hue,
            } => {
                surface.fill_rect(Vec2::new(x, top), Vec2::new(width, height), Color::hsl(hue, 0.5, 0.6));
                surface.fill_polygon(
                    &[
                        Vec2::new(x - 5.0, top),
                        Vec2::new(x + width / 2.0, top - height / 3.0),
                        Vec2::new(x + width + 5.0, top),
                    ],
                    ROOF,
                );
            }
        }
    }
}

fn draw_launch_pad(surface: &mut dyn DrawSurface, state: &GameState) {
    let ground = state.tuning.ground_level;
    let x = state.tuning.launch_x;
    surface.fill_rect(Vec2::new(x - 100.0, ground), Vec2::new(200.0, 20.0), PAD_TOP);
    surface.fill_rect(Vec2::new(x - 110.0, ground + 20.0), Vec2::new(220.0, 10.0), PAD_BASE);
}

fn draw_ground(surface: &mut dyn DrawSurface, state: &GameState) {
    // One viewport of slack on each side of the camera
    let width = state.tuning.viewport.x;
    surface.fill_rect(
        Vec2::new(state.camera.pos.x - width, state.tuning.ground_level),
        Vec2::new(width * 3.0, GROUND_DEPTH),
        GRASS,
    );
}

fn draw_sparks(surface: &mut dyn DrawSurface, state: &GameState) {
    if state.sparks.is_empty() {
        return;
    }
    for spark in &state.sparks {
        let (r, g, b) = spark.color.rgb();
        surface.set_alpha(spark.alpha());
        surface.fill_circle(spark.pos, spark.size, Color::rgb(r, g, b));
    }
    surface.set_alpha(1.0);
}

fn draw_wind_lines(surface: &mut dyn DrawSurface, state: &GameState) {
    for line in &state.wind_lines {
        surface.stroke_line(
            line.pos,
            line.pos + Vec2::new(line.length, 0.0),
            Color::WHITE.with_alpha(line.alpha),
            2.0,
        );
    }
}
