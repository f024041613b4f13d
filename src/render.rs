use crate::dom;
use folio_core::{FieldConfig, ParticleField, Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `Surface` over a 2D canvas context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasPainter {
    /// `None` when the canvas has no 2D context; callers skip rendering.
    pub fn new(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            size: Vec2::new(canvas.width() as f32, canvas.height() as f32),
        })
    }

    pub fn set_size(&mut self, w: u32, h: u32) {
        self.size = Vec2::new(w as f32, h as f32);
    }

    #[allow(deprecated)]
    fn circle(&self, center: Vec2, radius: f32, fill: &JsValue) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
        self.ctx.set_fill_style(fill);
        self.ctx.fill();
    }
}

impl Surface for CanvasPainter {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle(center, radius, &JsValue::from_str(&color.to_css()));
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius.max(0.0) as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            self.fill_circle(center, radius, color);
            return;
        };
        _ = gradient.add_color_stop(0.0, &color.to_css());
        _ = gradient.add_color_stop(1.0, &color.with_alpha(0.0).to_css());
        self.circle(center, radius, &gradient);
    }
}

/// One canvas element exclusively owned by one particle field.
pub struct CanvasLayer {
    pub canvas: web::HtmlCanvasElement,
    pub painter: CanvasPainter,
    pub field: ParticleField,
}

impl CanvasLayer {
    /// Returns `Ok(None)` when the canvas is missing or has no 2D context.
    pub fn mount(
        document: &web::Document,
        id: &str,
        config: FieldConfig,
        seed: u64,
    ) -> anyhow::Result<Option<Self>> {
        let Some(canvas) = dom::by_id::<web::HtmlCanvasElement>(document, id) else {
            log::debug!("[render] no #{} canvas, layer skipped", id);
            return Ok(None);
        };
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        let Some(painter) = CanvasPainter::new(&canvas) else {
            log::debug!("[render] #{} has no 2d context, layer skipped", id);
            return Ok(None);
        };
        let config = match canvas.get_attribute(crate::constants::COUNT_ATTR) {
            Some(attr) => {
                let count = crate::layout::parse_count(
                    Some(&attr),
                    config.count,
                    crate::constants::MAX_PARTICLE_OVERRIDE,
                );
                config.with_count(count)
            }
            None => config,
        };
        let field = ParticleField::new(config, w as f32, h as f32, seed)
            .map_err(|e| anyhow::anyhow!("#{}: {}", id, e))?;
        log::info!("[render] #{} mounted with {} particles", id, field.len());
        Ok(Some(Self {
            canvas,
            painter,
            field,
        }))
    }

    pub fn resize(&mut self) {
        let (w, h) = dom::sync_canvas_to_viewport(&self.canvas);
        self.painter.set_size(w, h);
        self.field.resize(w as f32, h as f32);
    }

    pub fn step_and_paint(&mut self, dt_sec: f32) {
        self.field.step(dt_sec);
        self.field.paint(&mut self.painter);
    }

    pub fn paint(&mut self) {
        self.field.paint(&mut self.painter);
    }
}
