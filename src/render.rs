use glam::Vec2;
use portfolio_core::{BlendMode, GradientStop, Rgba, Surface2d};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

mod layers;
pub use layers::{NebulaLayer, ParticleLayer, StarfieldLayer};

/// `Surface2d` over a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// None when the canvas has no 2D context (or one of another kind was taken).
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl Surface2d for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_glow_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32, blur: f32) {
        let css = color.to_string();
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(&css);
        if blur > 0.0 {
            self.ctx.set_shadow_blur(blur as f64);
            self.ctx.set_shadow_color(&css);
        }
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
        self.ctx.restore();
    }

    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
        blend: BlendMode,
    ) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[render] radial gradient: {:?}", e);
                return;
            }
        };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset, &stop.color.to_css_rgba());
        }
        self.ctx.save();
        _ = self.ctx.set_global_composite_operation(blend.as_css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, r, 0.0, TAU);
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, alpha: f32, width: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        self.ctx.restore();
    }
}
