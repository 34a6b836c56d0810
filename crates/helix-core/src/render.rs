//! Per-frame draw-command synthesis.
//!
//! `render_frame` is the whole tick body as a pure function of
//! `(time, layout, viewport)`, so ordering and styling can be asserted
//! against the command list without a real drawing surface.

use glam::Vec2;
use smallvec::SmallVec;
use std::f64::consts::{PI, TAU};

use crate::constants::{
    BEAD_T, BEND_PIXEL_SCALE, BEND_TIME_RATE, DEPTH_ALPHA_FAR, DEPTH_WIDTH_FAR, DEPTH_WIDTH_NEAR,
    DRIFT_MAG_FAR, DRIFT_MAG_NEAR, FLOW_DEPTH_FAR, FLOW_MAGNITUDE, FLOW_SPEED, MAX_HEIGHT_FRAC,
    SPEED_BIAS, TRAIL_FACTOR, TWIST, WOBBLE,
};
use crate::helix::Helix;
use crate::layout::{Layout, Viewport};
use crate::lerp;
use crate::palette::{Color, BACKBONE, BACKGROUND, HIGHLIGHT, NODE, PAIR, PALETTE};

/// One primitive operation against the drawing surface. Coordinates are
/// device-independent pixels; the surface transform handles DPR.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DrawCmd {
    /// Full-surface fill: the opaque mount clear and the per-frame trail wash.
    Fill { color: Color },
    /// Thin stroke, used for backbone segments.
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    /// Round-capped stroke, used for the rung connector.
    Capsule {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    /// Filled circle.
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Scene-level render toggles. Depth layering is not a toggle: the
/// local-depth x global-depth styling products hold unconditionally.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RenderOptions {
    /// Connect consecutive rungs with thin strand strokes.
    pub backbone: bool,
    /// Apply the shared scene-wide flow field to helix centers.
    pub flow: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            backbone: true,
            flow: true,
        }
    }
}

/// Local depth at a rung: which strand reads nearer at this crossing.
/// Drives stroke width, node radius and opacity at finer grain than the
/// per-helix global depth.
#[inline]
pub fn local_depth(phase: f64) -> f64 {
    (phase.sin() + 1.0) / 2.0
}

/// Shared flow field sampled with a per-helix phase offset so helices do
/// not move in lockstep. Returns a pixel offset at depth 1.
pub fn flow_offset(now: f64, seed: f32) -> (f64, f64) {
    let seed = f64::from(seed) * 0.001;
    let t = now * FLOW_SPEED;
    let x = ((t + seed).sin() * 0.65 + (t * 0.73 + seed * 1.7).sin() * 0.35) * FLOW_MAGNITUDE;
    let y = ((t * 0.92 + seed).cos() * 0.65 + (t * 0.61 + seed * 1.4).cos() * 0.35) * FLOW_MAGNITUDE;
    (x, y)
}

/// Emit one full frame: trail wash, then every helix ascending by global
/// depth so nearer helices overdraw farther ones.
pub fn render_frame(
    now: f64,
    layout: &Layout,
    viewport: Viewport,
    options: &RenderOptions,
    out: &mut Vec<DrawCmd>,
) {
    out.push(DrawCmd::Fill {
        color: BACKGROUND.with_alpha(1.0 - TRAIL_FACTOR),
    });

    let mut order: SmallVec<[usize; 32]> = (0..layout.helices.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        layout.helices[a]
            .depth
            .total_cmp(&layout.helices[b].depth)
    });

    for idx in order {
        draw_helix(now, &layout.helices[idx], viewport, options, out);
    }
}

/// Emit the draw commands for a single helix at time `now` (ms).
pub fn draw_helix(
    now: f64,
    cfg: &Helix,
    viewport: Viewport,
    options: &RenderOptions,
    out: &mut Vec<DrawCmd>,
) {
    let depth = cfg.depth;

    // Global-depth styling terms; every alpha and width below is a
    // product of one of these and a local-depth term.
    let opacity_mult = lerp(DEPTH_ALPHA_FAR, 1.0, depth);
    let width_mult = lerp(DEPTH_WIDTH_FAR, DEPTH_WIDTH_NEAR, depth);

    // Slow per-helix orbit, deeper helices swing wider.
    let drift_mag = f64::from(lerp(DRIFT_MAG_FAR, DRIFT_MAG_NEAR, depth) * cfg.scale);
    let drift = (now * f64::from(cfg.drift.speed) + f64::from(cfg.drift.phase)).sin() * drift_mag;
    let drift_x = f64::from(cfg.drift.angle).cos() * drift;
    let drift_y = f64::from(cfg.drift.angle).sin() * drift;

    // Scene-wide current, attenuated for background helices so the
    // foreground reads calmer relative motion.
    let (flow_x, flow_y) = if options.flow {
        flow_offset(now, cfg.bend.seed)
    } else {
        (0.0, 0.0)
    };
    let flow_depth_mult = f64::from(lerp(FLOW_DEPTH_FAR, 1.0, depth));

    let cx = f64::from(viewport.width * cfg.pos.x) + drift_x + flow_x * flow_depth_mult;
    let cy = f64::from(viewport.height * cfg.pos.y) + drift_y + flow_y * flow_depth_mult;

    let helix_height = f64::from((viewport.height * MAX_HEIGHT_FRAC).min(cfg.height) * cfg.scale);
    let top_y = cy - helix_height / 2.0;

    let amp = f64::from(cfg.amplitude * cfg.scale);
    let time = now * (f64::from(cfg.speed) + SPEED_BIAS);
    let phase_base = f64::from(cfg.phase.start) + now * f64::from(cfg.phase.drift);

    let (sin_r, cos_r) = f64::from(cfg.rotation).sin_cos();

    let mut prev: Option<(Vec2, Vec2)> = None;
    let last = f64::from(cfg.rungs - 1);

    for i in 0..cfg.rungs {
        let p = f64::from(i) / last;
        let y = top_y + p * helix_height;

        let phase = phase_base + time + p * TWIST * WOBBLE;
        let lx1 = phase.cos() * amp;
        let lx2 = (phase + PI).cos() * amp;
        let local = local_depth(phase) as f32;

        let dy = y - cy;

        // Nonlinear bend envelope: peaks mid-strand, vanishes at the ends.
        let envelope = (PI * p).sin().powf(f64::from(cfg.bend.power));
        let bend_phase = p * TAU * f64::from(cfg.bend.frequency) + time * BEND_TIME_RATE;
        let mix = f64::from(cfg.bend.mix);
        let signal = (1.0 - mix) * bend_phase.sin()
            + mix * (2.0 * bend_phase + f64::from(cfg.bend.seed)).sin();
        let bend_offset =
            signal * f64::from(cfg.bend.amount) * BEND_PIXEL_SCALE * f64::from(cfg.scale) * envelope;

        // Rotate the combined lateral+bend and vertical offsets into place.
        let place = |lx: f64| {
            let ox = lx + bend_offset;
            Vec2::new(
                (cx + ox * cos_r - dy * sin_r) as f32,
                (cy + ox * sin_r + dy * cos_r) as f32,
            )
        };
        let a = place(lx1);
        let b = place(lx2);

        if options.backbone {
            let alpha = lerp(0.10, 0.34, local) * opacity_mult;
            let width = lerp(0.7, 1.5, local) * cfg.scale * width_mult;
            if let Some((pa, pb)) = prev {
                out.push(DrawCmd::Line {
                    from: pa,
                    to: a,
                    width,
                    color: BACKBONE.with_alpha(alpha),
                });
                out.push(DrawCmd::Line {
                    from: pb,
                    to: b,
                    width,
                    color: BACKBONE.with_alpha(alpha),
                });
            }
            prev = Some((a, b));
        }

        let rung_color = PALETTE[(i as usize + cfg.color_shift) % PALETTE.len()];
        let line_alpha = lerp(0.18, 0.62, local) * opacity_mult;
        let node_alpha = lerp(0.16, 0.75, local) * opacity_mult;

        // Dark strand nodes, slightly larger than the beads.
        let node_r = lerp(1.1, 2.7, local) * cfg.scale * width_mult;
        out.push(DrawCmd::Circle {
            center: a,
            radius: node_r,
            color: NODE.with_alpha(node_alpha),
        });
        out.push(DrawCmd::Circle {
            center: b,
            radius: node_r,
            color: NODE.with_alpha(node_alpha),
        });

        // Capsule connector plus two colored base beads with highlights.
        let pair_width = lerp(0.9, 2.2, local) * cfg.scale * width_mult;
        out.push(DrawCmd::Capsule {
            from: a,
            to: b,
            width: pair_width,
            color: PAIR.with_alpha(line_alpha * 0.55),
        });

        let base_alpha = lerp(0.35, 0.95, local) * opacity_mult;
        let base_r = lerp(0.9, 2.0, local) * cfg.scale * width_mult;
        let bead_a = a.lerp(b, BEAD_T);
        let bead_b = b.lerp(a, BEAD_T);
        out.push(DrawCmd::Circle {
            center: bead_a,
            radius: base_r,
            color: rung_color.with_alpha(base_alpha),
        });
        out.push(DrawCmd::Circle {
            center: bead_b,
            radius: base_r,
            color: rung_color.with_alpha(base_alpha),
        });

        for bead in [bead_a, bead_b] {
            out.push(DrawCmd::Circle {
                center: bead - Vec2::splat(base_r * 0.25),
                radius: base_r * 0.35,
                color: HIGHLIGHT.with_alpha(base_alpha * 0.18),
            });
        }
    }
}

/// Commands emitted per helix, used for buffer pre-sizing.
pub fn commands_per_helix(cfg: &Helix, options: &RenderOptions) -> usize {
    let rungs = cfg.rungs as usize;
    let backbone = if options.backbone {
        2 * rungs.saturating_sub(1)
    } else {
        0
    };
    rungs * 7 + backbone
}
