//! Scene state: the helix layout, the frame-rate cap, and the wholesale
//! rebuild path. Construction is the mount; dropping the scene is the
//! teardown. Before a `Scene` exists the background is simply idle.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::FRAME_INTERVAL_MS;
use crate::layout::{build_default_layout, Layout, Viewport};
use crate::palette::BACKGROUND;
use crate::render::{commands_per_helix, render_frame, DrawCmd, RenderOptions};

pub struct Scene {
    layout: Layout,
    viewport: Viewport,
    options: RenderOptions,
    rng: StdRng,
    last_frame_ms: f64,
}

impl Scene {
    /// Build the initial layout and return it together with the opaque
    /// background paint that precedes the first frame.
    pub fn mount(viewport: Viewport, seed: u64) -> (Self, Vec<DrawCmd>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let layout = build_default_layout(viewport, &mut rng);
        log::info!(
            "helix scene mounted: {} helices at {:.0}x{:.0}",
            layout.helices.len(),
            viewport.width,
            viewport.height
        );
        let scene = Self {
            layout,
            viewport,
            options: RenderOptions::default(),
            rng,
            last_frame_ms: 0.0,
        };
        let first_paint = vec![DrawCmd::Fill {
            color: BACKGROUND.with_alpha(1.0),
        }];
        (scene, first_paint)
    }

    /// Rebuild the layout wholesale for a new viewport. Must run before
    /// the next tick so helix coordinates and the surface transform agree.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.layout = build_default_layout(viewport, &mut self.rng);
        log::debug!(
            "helix layout rebuilt for {:.0}x{:.0}",
            viewport.width,
            viewport.height
        );
    }

    /// One scheduled tick. Returns `None` when the elapsed time since the
    /// last accepted frame is under the capped frame interval; the caller
    /// just reschedules. Otherwise returns the full frame command list.
    pub fn tick(&mut self, now_ms: f64) -> Option<Vec<DrawCmd>> {
        if now_ms - self.last_frame_ms < FRAME_INTERVAL_MS {
            return None;
        }
        self.last_frame_ms = now_ms;

        let capacity = 1 + self
            .layout
            .helices
            .iter()
            .map(|h| commands_per_helix(h, &self.options))
            .sum::<usize>();
        let mut cmds = Vec::with_capacity(capacity);
        render_frame(now_ms, &self.layout, self.viewport, &self.options, &mut cmds);
        Some(cmds)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }
}
