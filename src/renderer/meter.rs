//! Power meter dial
//!
//! A 270° gauge: 0 at the lower left, 100 at the lower right, sweeping
//! clockwise over the top.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use super::{Color, DrawSurface, TextAlign};
use crate::consts::POWER_MAX;
use crate::sim::PowerMeter;

const RADIUS: f32 = 100.0;
/// Dial center distance above the bottom of the viewport
const BOTTOM_OFFSET: f32 = 130.0;
const START_ANGLE: f32 = PI * 0.75;
const SWEEP: f32 = PI * 1.5;

const BEZEL: Color = Color::hex(0xb3b3b3);
const NEEDLE: Color = Color::hex(0xff3333);
const HUB: Color = Color::hex(0x1a1a1a);
const HUB_RIM: Color = Color::hex(0x333333);

pub const CAPTION: &str = "POWER";

/// Needle angle (radians, canvas convention) for a power value
pub fn needle_angle(value: f32) -> f32 {
    START_ANGLE + SWEEP * (value / POWER_MAX).clamp(0.0, 1.0)
}

/// Dial center for a viewport
pub fn dial_center(viewport: Vec2) -> Vec2 {
    Vec2::new(viewport.x / 2.0, viewport.y - BOTTOM_OFFSET)
}

fn polar(center: Vec2, angle: f32, r: f32) -> Vec2 {
    center + Vec2::from_angle(angle) * r
}

pub fn draw_power_meter(surface: &mut dyn DrawSurface, meter: &PowerMeter, viewport: Vec2) {
    let center = dial_center(viewport);

    surface.fill_circle(center, RADIUS + 10.0, BEZEL);
    surface.fill_circle(center, RADIUS, Color::BLACK);

    for i in (0..=100).step_by(5) {
        let angle = START_ANGLE + SWEEP * (i as f32 / 100.0);
        let major = i % 20 == 0;
        let (len, width) = if major { (15.0, 3.0) } else { (8.0, 1.5) };
        surface.stroke_line(
            polar(center, angle, RADIUS - 5.0),
            polar(center, angle, RADIUS - 5.0 - len),
            Color::WHITE,
            width,
        );
        if major {
            let at = polar(center, angle, RADIUS - 35.0) + Vec2::new(0.0, 7.0);
            surface.fill_text(&i.to_string(), at, 20.0, false, TextAlign::Center, Color::WHITE);
        }
    }

    surface.save();
    surface.translate(center);
    surface.rotate(needle_angle(meter.value).rem_euclid(TAU));
    surface.stroke_line(Vec2::ZERO, Vec2::new(RADIUS - 15.0, 0.0), NEEDLE, 3.0);
    surface.restore();

    surface.fill_circle(center, 15.0, HUB);
    surface.stroke_polygon(&hub_outline(center), HUB_RIM, 2.0);
    surface.fill_text(
        CAPTION,
        center + Vec2::new(0.0, 40.0),
        22.0,
        true,
        TextAlign::Center,
        Color::WHITE,
    );
}

fn hub_outline(center: Vec2) -> Vec<Vec2> {
    (0..24)
        .map(|i| polar(center, TAU * i as f32 / 24.0, 15.0))
        .collect()
}
