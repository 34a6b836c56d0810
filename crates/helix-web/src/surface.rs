//! Canvas 2D surface: backing-store sizing with a capped device pixel
//! ratio, the DPR transform, and execution of core draw commands.

use helix_core::constants::DPR_CAP;
use helix_core::{DrawCmd, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;
        Ok(Self { canvas, ctx })
    }

    /// Viewport extent in device-independent (CSS) pixels.
    pub fn viewport(&self) -> Viewport {
        let rect = self.canvas.get_bounding_client_rect();
        Viewport {
            width: (rect.width() as f32).max(1.0),
            height: (rect.height() as f32).max(1.0),
        }
    }

    /// Resize the backing store to CSS size x capped DPR and reinstall
    /// the DPR transform. Setting the width resets all context state, so
    /// the round cap/join the capsule strokes rely on is reapplied here.
    pub fn reset_transform(&self) {
        let dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .min(DPR_CAP);
        let rect = self.canvas.get_bounding_client_rect();
        self.canvas.set_width(((rect.width() * dpr) as u32).max(1));
        self.canvas
            .set_height(((rect.height() * dpr) as u32).max(1));
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }

    /// Execute a frame's command list.
    pub fn apply(&self, cmds: &[DrawCmd]) {
        let vp = self.viewport();
        for cmd in cmds {
            match *cmd {
                DrawCmd::Fill { color } => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx
                        .fill_rect(0.0, 0.0, f64::from(vp.width), f64::from(vp.height));
                }
                DrawCmd::Line {
                    from,
                    to,
                    width,
                    color,
                }
                | DrawCmd::Capsule {
                    from,
                    to,
                    width,
                    color,
                } => {
                    self.ctx.set_line_width(f64::from(width));
                    self.ctx.set_stroke_style_str(&color.to_css());
                    self.ctx.begin_path();
                    self.ctx.move_to(f64::from(from.x), f64::from(from.y));
                    self.ctx.line_to(f64::from(to.x), f64::from(to.y));
                    self.ctx.stroke();
                }
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx.begin_path();
                    let _ = self.ctx.arc(
                        f64::from(center.x),
                        f64::from(center.y),
                        f64::from(radius),
                        0.0,
                        std::f64::consts::TAU,
                    );
                    self.ctx.fill();
                }
            }
        }
    }
}
