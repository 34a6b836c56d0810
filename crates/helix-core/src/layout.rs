//! Layout generation: anchor seeding plus rejection-sampled fill.
//!
//! Anchors guarantee even coverage regardless of how aggressive the
//! spacing constraint gets; rejection sampling adds organic irregularity
//! on top; the hero anchor guarantees a consistent focal point no matter
//! what the random stream does.

use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

use crate::constants::{
    ANCHORS, GLOBAL_TILT, HELIX_TARGET, HERO_POS, MAX_PLACEMENT_TRIES, MIN_DIST,
};
use crate::helix::{BendParams, DriftParams, Helix, HelixKind, PhaseState};
use crate::lerp;
use crate::palette::PALETTE;

/// Viewport extent in device-independent pixels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// One full helix collection, ordered as placed: anchors, then fills,
/// then the hero last.
#[derive(Clone, PartialEq, Debug)]
pub struct Layout {
    pub helices: Vec<Helix>,
    /// Regular count requested at build time. The realized count can be
    /// lower when the placement attempt budget runs out.
    pub target: usize,
}

impl Layout {
    /// Number of regular (non-hero) helices actually placed.
    pub fn regular_count(&self) -> usize {
        self.helices.iter().filter(|h| !h.is_hero()).count()
    }

    /// True when rejection sampling exhausted its budget before reaching
    /// the target. Not an error; the layout is just sparser.
    pub fn is_underfilled(&self) -> bool {
        self.regular_count() < self.target
    }

    pub fn hero(&self) -> Option<&Helix> {
        self.helices.iter().find(|h| h.is_hero())
    }
}

// Anchor-seeded and rejection-filled helices draw from slightly
// different ranges; fills run a touch smaller and more varied.
struct ParamRanges {
    scale_base: f32,
    scale_span: f32,
    amp_base: f32,
    amp_span: f32,
    height_base: f32,
    height_span: f32,
}

const ANCHOR_RANGES: ParamRanges = ParamRanges {
    scale_base: 0.55,
    scale_span: 0.22,
    amp_base: 78.0,
    amp_span: 34.0,
    height_base: 0.95,
    height_span: 0.55,
};

const FILL_RANGES: ParamRanges = ParamRanges {
    scale_base: 0.52,
    scale_span: 0.26,
    amp_base: 74.0,
    amp_span: 42.0,
    height_base: 0.90,
    height_span: 0.70,
};

/// Build a full layout for the given viewport. Deterministic for a fixed
/// RNG state and viewport.
pub fn build_layout(viewport: Viewport, rng: &mut impl Rng, target: usize) -> Layout {
    let mut helices: Vec<Helix> = Vec::with_capacity(target + 1);

    // Phase 1: seed the composed anchor list.
    for anchor in ANCHORS.iter().take(target.min(ANCHORS.len())) {
        let depth = sample_depth(rng);
        let pos = Vec2::new(anchor[0], anchor[1]);
        helices.push(synth_helix(rng, viewport, pos, depth, &ANCHOR_RANGES));
    }

    // Phase 2: rejection-sampled fill. On budget exhaustion we stop
    // silently and keep whatever count was reached.
    let mut tries = 0u32;
    while helices.len() < target && tries < MAX_PLACEMENT_TRIES {
        tries += 1;

        let depth = sample_depth(rng);
        let pos = Vec2::new(0.06 + rng.gen::<f32>() * 0.88, 0.10 + rng.gen::<f32>() * 0.80);
        let candidate = synth_helix(rng, viewport, pos, depth, &FILL_RANGES);

        if helices.iter().all(|h| spacing_ok(h, &candidate)) {
            helices.push(candidate);
        }
    }
    if helices.len() < target {
        log::info!(
            "helix layout under-filled: {} of {} after {} tries",
            helices.len(),
            target,
            tries
        );
    }

    // Phase 3: exactly one hero, pinned and spacing-exempt.
    helices.push(synth_hero(rng, viewport));

    Layout { helices, target }
}

/// Spacing invariant between two placed helices: centers at least
/// `MIN_DIST * (0.85 + 0.9 * max(scale))` apart in normalized units.
pub fn spacing_ok(a: &Helix, b: &Helix) -> bool {
    let threshold = MIN_DIST * (0.85 + 0.9 * a.scale.max(b.scale));
    a.pos.distance(b.pos) >= threshold
}

// Bias depth toward the far end so the background stays busy and the
// foreground stays sparse.
fn sample_depth(rng: &mut impl Rng) -> f32 {
    rng.gen::<f32>().powf(1.2)
}

fn synth_helix(
    rng: &mut impl Rng,
    viewport: Viewport,
    pos: Vec2,
    depth: f32,
    ranges: &ParamRanges,
) -> Helix {
    Helix {
        kind: HelixKind::Regular,
        pos,
        depth,
        scale: (ranges.scale_base + rng.gen::<f32>() * ranges.scale_span)
            * lerp(0.75, 1.10, depth),
        rotation: GLOBAL_TILT + (-0.6 + rng.gen::<f32>() * 1.2),
        speed: (0.000_85 + rng.gen::<f32>() * 0.000_65) * lerp(0.80, 1.15, depth),
        amplitude: ranges.amp_base + rng.gen::<f32>() * ranges.amp_span,
        height: viewport.height * (ranges.height_base + rng.gen::<f32>() * ranges.height_span),
        rungs: 46 + (rng.gen::<f32>() * 18.0) as u32,
        color_shift: (rng.gen::<f32>() * PALETTE.len() as f32) as usize,
        phase: PhaseState {
            start: rng.gen::<f32>() * TAU,
            drift: (rng.gen::<f32>() - 0.5) * 0.0012,
        },
        bend: BendParams {
            amount: 0.22 + rng.gen::<f32>() * 0.28,
            frequency: 1.2 + rng.gen::<f32>() * 1.6,
            power: 2.0 + rng.gen::<f32>() * 1.0,
            mix: 0.35 + rng.gen::<f32>() * 0.35,
            seed: rng.gen::<f32>() * 1000.0,
        },
        drift: DriftParams {
            angle: rng.gen::<f32>() * TAU,
            speed: (0.000_6 + rng.gen::<f32>() * 0.001_2) * lerp(0.7, 1.2, depth),
            phase: rng.gen::<f32>() * TAU,
        },
    }
}

fn synth_hero(rng: &mut impl Rng, viewport: Viewport) -> Helix {
    Helix {
        kind: HelixKind::Hero,
        pos: Vec2::new(HERO_POS[0], HERO_POS[1]),
        depth: 1.0,
        scale: 0.78,
        rotation: -0.55,
        speed: 0.001_05,
        amplitude: 86.0,
        height: viewport.height * 1.05,
        rungs: 52,
        color_shift: (rng.gen::<f32>() * PALETTE.len() as f32) as usize,
        phase: PhaseState {
            start: rng.gen::<f32>() * TAU,
            drift: (rng.gen::<f32>() - 0.5) * 0.0008,
        },
        bend: BendParams {
            amount: 0.34,
            frequency: 1.35,
            power: 2.3,
            mix: 0.50,
            seed: rng.gen::<f32>() * 1000.0,
        },
        drift: DriftParams {
            angle: rng.gen::<f32>() * TAU,
            speed: 0.000_55,
            phase: rng.gen::<f32>() * TAU,
        },
    }
}

/// Convenience wrapper used by the scene and by tests: a layout with the
/// default target count.
pub fn build_default_layout(viewport: Viewport, rng: &mut impl Rng) -> Layout {
    build_layout(viewport, rng, HELIX_TARGET)
}
