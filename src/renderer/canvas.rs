//! Canvas 2D backend

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{Color, DrawSurface, TextAlign};

/// [`DrawSurface`] over a browser 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn path(&self, points: &[Vec2]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        true
    }
}

fn check(result: Result<(), JsValue>, op: &str) {
    if let Err(e) = result {
        log::warn!("canvas {} failed: {:?}", op, e);
    }
}

impl DrawSurface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        check(self.ctx.translate(offset.x as f64, offset.y as f64), "translate");
    }

    fn rotate(&mut self, radians: f32) {
        check(self.ctx.rotate(radians as f64), "rotate");
    }

    fn scale(&mut self, factor: Vec2) {
        check(self.ctx.scale(factor.x as f64, factor.y as f64), "scale");
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if self.path(points) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill();
        }
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32) {
        if self.path(points) {
            self.ctx.set_stroke_style_str(&color.to_css());
            self.ctx.set_line_width(width as f64);
            self.ctx.stroke();
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        check(
            self.ctx
                .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU),
            "arc",
        );
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.ctx.begin_path();
        check(
            self.ctx.ellipse(
                center.x as f64,
                center.y as f64,
                radii.x as f64,
                radii.y as f64,
                0.0,
                0.0,
                TAU,
            ),
            "ellipse",
        );
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.set_line_cap("round");
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, px: f32, bold: bool, align: TextAlign, color: Color) {
        let weight = if bold { "bold " } else { "" };
        self.ctx.set_font(&format!("{}{}px Arial", weight, px));
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.set_fill_style_str(&color.to_css());
        check(self.ctx.fill_text(text, at.x as f64, at.y as f64), "fill_text");
    }
}
