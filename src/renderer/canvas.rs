//! 2D canvas painter for the browser build

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::draw_list::{DrawCommand, DrawList, css_color};
use crate::assets::AssetRegistry;
use crate::consts::{VIRTUAL_HEIGHT, VIRTUAL_WIDTH};

/// Sky behind everything
const BACKGROUND_COLOR: u32 = 0x0b1026;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    /// Image elements keyed by texture path
    images: HashMap<String, HtmlImageElement>,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            images: HashMap::new(),
        })
    }

    /// Start fetching every texture the registry knows
    pub fn load_images(&mut self, registry: &AssetRegistry) {
        for handle in registry.handles() {
            if self.images.contains_key(&handle.path) {
                continue;
            }
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(&handle.path);
                    self.images.insert(handle.path.clone(), img);
                }
                Err(e) => log::warn!("Could not create image for {}: {:?}", handle.name, e),
            }
        }
    }

    pub fn paint(&self, list: &DrawList) {
        let ctx = &self.ctx;
        let _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(&css_color(BACKGROUND_COLOR));
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        // Draw lists are in virtual game units
        let sx = self.width / VIRTUAL_WIDTH as f64;
        let sy = self.height / VIRTUAL_HEIGHT as f64;
        let _ = ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0);

        for cmd in list.commands() {
            match cmd {
                DrawCommand::Polyline {
                    points,
                    color,
                    width,
                } => {
                    ctx.set_global_alpha(1.0);
                    ctx.set_stroke_style_str(&css_color(*color));
                    ctx.set_line_width(*width as f64);
                    ctx.begin_path();
                    for (i, p) in points.iter().enumerate() {
                        if i == 0 {
                            ctx.move_to(p.x as f64, p.y as f64);
                        } else {
                            ctx.line_to(p.x as f64, p.y as f64);
                        }
                    }
                    ctx.stroke();
                }
                DrawCommand::Rect { rect, color, alpha } => {
                    ctx.set_global_alpha(*alpha as f64);
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.fill_rect(
                        rect.x as f64,
                        rect.y as f64,
                        rect.width as f64,
                        rect.height as f64,
                    );
                }
                DrawCommand::Outline { rect, color } => {
                    ctx.set_global_alpha(1.0);
                    ctx.set_line_width(1.0);
                    ctx.set_stroke_style_str(&css_color(*color));
                    ctx.stroke_rect(
                        rect.x as f64,
                        rect.y as f64,
                        rect.width as f64,
                        rect.height as f64,
                    );
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_global_alpha(1.0);
                    ctx.set_line_width(1.0);
                    ctx.set_stroke_style_str(&css_color(*color));
                    ctx.begin_path();
                    let _ = ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    ctx.stroke();
                }
                DrawCommand::Text {
                    text,
                    position,
                    color,
                    size,
                } => {
                    ctx.set_global_alpha(1.0);
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.set_font(&format!("bold {}px sans-serif", size.round()));
                    ctx.set_text_align("center");
                    let _ = ctx.fill_text(text, position.x as f64, position.y as f64);
                }
                DrawCommand::Sprite {
                    path,
                    source,
                    dest,
                    alpha,
                } => {
                    // Not fetched yet (or failed): skip rather than stall the frame
                    let Some(img) = self.images.get(path).filter(|img| img.complete()) else {
                        continue;
                    };
                    ctx.set_global_alpha(*alpha as f64);
                    let (sx, sy, sw, sh) = *source;
                    let _ = ctx
                        .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                            img,
                            sx as f64,
                            sy as f64,
                            sw as f64,
                            sh as f64,
                            dest.x as f64,
                            dest.y as f64,
                            dest.width as f64,
                            dest.height as f64,
                        );
                }
            }
        }
        ctx.set_global_alpha(1.0);
    }
}
