//! Canvas 2D drawing surface (WASM only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{Color, DrawSurface, TextAlign, Texture};
use crate::sim::geometry::Rect;

/// Brick texture path, relative to the page
pub const BRICK_IMAGE_SRC: &str = "brick.jpg";

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    brick_image: Option<HtmlImageElement>,
}

impl CanvasSurface {
    /// Wrap a 2D context and start loading the brick image in the background
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        let brick_image = match HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(BRICK_IMAGE_SRC);
                Some(img)
            }
            Err(e) => {
                log::warn!("Cannot create brick image: {:?}", e);
                None
            }
        };
        Self {
            ctx,
            width,
            height,
            brick_image,
        }
    }

    fn log_err(what: &str, result: Result<(), JsValue>) {
        if let Err(e) = result {
            log::warn!("Canvas {} failed: {:?}", what, e);
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        Self::log_err(
            "arc",
            self.ctx
                .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU),
        );
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size_px: u32, align: TextAlign, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{}px Arial", size_px));
        self.ctx.set_text_align(align.as_str());
        Self::log_err("text", self.ctx.fill_text(text, pos.x as f64, pos.y as f64));
    }

    fn texture_ready(&self, texture: Texture) -> bool {
        match texture {
            Texture::Brick => self
                .brick_image
                .as_ref()
                .is_some_and(|img| img.complete() && img.natural_width() > 0),
        }
    }

    fn draw_texture(&mut self, texture: Texture, rect: Rect) {
        let image = match texture {
            Texture::Brick => self.brick_image.as_ref(),
        };
        if let Some(image) = image {
            Self::log_err(
                "image",
                self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    image,
                    rect.pos.x as f64,
                    rect.pos.y as f64,
                    rect.size.x as f64,
                    rect.size.y as f64,
                ),
            );
        }
    }
}
