//! Per-helix configuration. Instances are immutable after layout build;
//! all motion is a pure function of these fields and the current time.

use glam::Vec2;

/// Placement variant. Only the hero's placement logic differs: it is
/// pinned to a designated position at depth 1 and bypasses the spacing
/// invariant, so it gets a tag rather than a flag.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HelixKind {
    Regular,
    Hero,
}

/// Base oscillation phase and its slow drift rate (rad/ms).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PhaseState {
    pub start: f32,
    pub drift: f32,
}

/// Centerline curvature controls. `seed` doubles as the helix's phase
/// offset into the shared flow field.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BendParams {
    pub amount: f32,
    pub frequency: f32,
    pub power: f32,
    pub mix: f32,
    pub seed: f32,
}

/// Slow sinusoidal orbit of the whole helix center along a fixed angle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DriftParams {
    pub angle: f32,
    pub speed: f32,
    pub phase: f32,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Helix {
    pub kind: HelixKind,
    /// Center in normalized [0,1] viewport coordinates.
    pub pos: Vec2,
    /// Scene-distance scalar in [0,1]; biases opacity, width, drift and
    /// flow sensitivity.
    pub depth: f32,
    pub scale: f32,
    /// Fixed tilt angle, radians.
    pub rotation: f32,
    /// Strand phase speed, rad/ms.
    pub speed: f32,
    /// Lateral strand amplitude, px (before scale).
    pub amplitude: f32,
    /// Strand length, px; capped to a viewport fraction when drawn.
    pub height: f32,
    /// Rung sample count. Must be >= 2: the rung parameterization divides
    /// by `rungs - 1`. Generation keeps this >= 46.
    pub rungs: u32,
    /// Offset into the fixed palette.
    pub color_shift: usize,
    pub phase: PhaseState,
    pub bend: BendParams,
    pub drift: DriftParams,
}

impl Helix {
    pub fn is_hero(&self) -> bool {
        self.kind == HelixKind::Hero
    }
}
