//! `Surface` over a canvas 2D context

use game_core::Surface;
use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::error::ClientError;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    type Error = ClientError;

    fn set_fill_color(&mut self, color: &str) -> Result<(), Self::Error> {
        self.ctx.set_fill_style_str(color);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> Result<(), Self::Error> {
        self.ctx.set_stroke_style_str(color);
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) -> Result<(), Self::Error> {
        self.ctx.set_line_width(width as f64);
        Ok(())
    }

    fn set_font(&mut self, font: &str) -> Result<(), Self::Error> {
        self.ctx.set_font(font);
        Ok(())
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2) -> Result<(), Self::Error> {
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2) -> Result<(), Self::Error> {
        self.ctx
            .stroke_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) -> Result<(), Self::Error> {
        self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
        Ok(())
    }

    fn set_line_dash(&mut self, pattern: &[f32]) -> Result<(), Self::Error> {
        let segments = js_sys::Array::new();
        for len in pattern {
            segments.push(&JsValue::from_f64(*len as f64));
        }
        self.ctx.set_line_dash(&segments)?;
        Ok(())
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) -> Result<(), Self::Error> {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) -> Result<(), Self::Error> {
        self.ctx.begin_path();
        self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.stroke();
        self.ctx.fill();
        Ok(())
    }
}
