//! Ship sprite: hull, fins, nose cone and engine flame

use glam::Vec2;

use super::{Color, DrawSurface};
use crate::sim::GameState;

const HULL: Color = Color::hex(0xb0c4de);
const TRIM: Color = Color::hex(0x778899);
const NOSE: Color = Color::hex(0xdc143c);
const FLAME_OUTER: Color = Color::hex(0xffa500);
const FLAME_INNER: Color = Color::hex(0xffff00);

/// Hangar preview tilt (radians)
const PREVIEW_ANGLE: f32 = -15.0 * std::f32::consts::PI / 180.0;
const PREVIEW_SCALE: f32 = 1.5;

/// Draw the ship at its world position (surface already in world space)
pub fn draw_ship(surface: &mut dyn DrawSurface, state: &GameState) {
    let ship = &state.ship;
    surface.save();
    surface.translate(ship.pos);
    surface.rotate(ship.render_angle(state.phase));
    draw_body(surface, ship.size, 2.0);
    if ship.flame_lit(state.phase, state.tuning.ground_level) {
        draw_flame(surface, ship.size);
    }
    surface.restore();
}

/// Draw the static ship preview centered on `center`
pub fn draw_ship_preview(surface: &mut dyn DrawSurface, center: Vec2, ship_size: Vec2) {
    surface.save();
    surface.translate(center);
    surface.rotate(PREVIEW_ANGLE);
    surface.scale(Vec2::splat(PREVIEW_SCALE));
    // Half length, full height
    draw_body(surface, Vec2::new(ship_size.x * 0.5, ship_size.y), 1.0);
    surface.restore();
}

/// Hull, fins and nose in ship-local coordinates (nose along +x)
fn draw_body(surface: &mut dyn DrawSurface, size: Vec2, outline: f32) {
    let (w, h) = (size.x, size.y / 2.0);

    let hull = [
        Vec2::new(-w * 0.8, 0.0),
        Vec2::new(w * 0.5, -h),
        Vec2::new(w * 0.8, 0.0),
        Vec2::new(w * 0.5, h),
    ];
    surface.fill_polygon(&hull, HULL);
    surface.stroke_polygon(&hull, TRIM, outline);

    for side in [-1.0, 1.0] {
        surface.fill_polygon(
            &[
                Vec2::new(w * 0.7, side * h),
                Vec2::new(w * 1.1, side * h * 2.0),
                Vec2::new(w * 0.8, 0.0),
            ],
            TRIM,
        );
    }

    surface.fill_polygon(
        &[
            Vec2::new(w * 0.5, -h),
            Vec2::new(w * 0.8, 0.0),
            Vec2::new(w * 0.5, h),
        ],
        NOSE,
    );
}

fn draw_flame(surface: &mut dyn DrawSurface, size: Vec2) {
    let (w, h) = (size.x, size.y);
    surface.fill_polygon(
        &[
            Vec2::new(-w * 0.8, 0.0),
            Vec2::new(-w * 1.2, -h / 4.0),
            Vec2::new(-w * 1.5, 0.0),
            Vec2::new(-w * 1.2, h / 4.0),
        ],
        FLAME_OUTER,
    );
    surface.fill_polygon(
        &[
            Vec2::new(-w * 0.9, 0.0),
            Vec2::new(-w * 1.3, -h / 8.0),
            Vec2::new(-w * 1.4, 0.0),
            Vec2::new(-w * 1.3, h / 8.0),
        ],
        FLAME_INNER,
    );
}
