//! Platform-free model for the animated double-helix background.
//!
//! Everything here is pure data and pure functions of (config, time):
//! layout generation, per-frame draw-command synthesis, and the scene
//! state that paces frames. The web frontend executes the resulting
//! command lists against a canvas; tests execute them against nothing.

pub mod constants;
pub mod helix;
pub mod layout;
pub mod palette;
pub mod render;
pub mod scene;

pub use helix::{BendParams, DriftParams, Helix, HelixKind, PhaseState};
pub use layout::{build_default_layout, build_layout, spacing_ok, Layout, Viewport};
pub use palette::{Color, Rgb};
pub use render::{draw_helix, local_depth, render_frame, DrawCmd, RenderOptions};
pub use scene::Scene;

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
