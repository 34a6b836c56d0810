// Renderer properties: local-depth formula, depth-ordered command
// emission, command counts, and the depth-layering styling products.

use glam::Vec2;
use helix_core::constants::{FRAME_INTERVAL_MS, SPEED_BIAS, TRAIL_FACTOR, TWIST, WOBBLE};
use helix_core::palette::BACKGROUND;
use helix_core::render::commands_per_helix;
use helix_core::{
    draw_helix, local_depth, render_frame, BendParams, DrawCmd, DriftParams, Helix, HelixKind,
    Layout, PhaseState, RenderOptions, Viewport,
};

const VIEWPORT: Viewport = Viewport {
    width: 1000.0,
    height: 600.0,
};

/// Helix with no drift, no bend displacement and a tiny amplitude, so
/// every emitted coordinate stays within a fraction of a pixel of the
/// center. Flow is disabled through the options in these tests.
fn pinned_helix(x: f32, y: f32, depth: f32, rungs: u32) -> Helix {
    Helix {
        kind: HelixKind::Regular,
        pos: Vec2::new(x, y),
        depth,
        scale: 0.1,
        rotation: 0.0,
        speed: 0.001,
        amplitude: 1.0,
        height: 300.0,
        rungs,
        color_shift: 0,
        phase: PhaseState {
            start: 0.4,
            drift: 0.0001,
        },
        bend: BendParams {
            amount: 0.0,
            frequency: 1.0,
            power: 2.0,
            mix: 0.5,
            seed: 10.0,
        },
        drift: DriftParams {
            angle: 0.0,
            speed: 0.0,
            phase: 0.0,
        },
    }
}

const STILL: RenderOptions = RenderOptions {
    backbone: false,
    flow: false,
};

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[test]
fn local_depth_matches_reference_formula() {
    use std::f64::consts::{FRAC_PI_2, PI};
    assert_eq!(local_depth(0.0), 0.5);
    assert!((local_depth(FRAC_PI_2) - 1.0).abs() < 1e-12);
    assert!(local_depth(-FRAC_PI_2).abs() < 1e-12);
    for i in 0..100 {
        let phase = -3.0 * PI + (i as f64) * 0.2;
        assert_eq!(local_depth(phase), (phase.sin() + 1.0) / 2.0);
    }
}

#[test]
fn first_rung_node_alpha_regresses_to_local_depth_formula() {
    let cfg = pinned_helix(0.5, 0.5, 0.7, 8);
    let now = 12_345.0_f64;
    let mut cmds = Vec::new();
    draw_helix(now, &cfg, VIEWPORT, &STILL, &mut cmds);

    // Rung 0 phase, reproduced from the documented model: no twist term
    // at p = 0, just phase start + drift + strand time.
    let time = now * (f64::from(cfg.speed) + SPEED_BIAS);
    let phase0 = f64::from(cfg.phase.start) + now * f64::from(cfg.phase.drift) + time;
    let local = local_depth(phase0) as f32;
    let opacity_mult = lerp(0.22, 1.0, cfg.depth);
    let expected_alpha = lerp(0.16, 0.75, local) * opacity_mult;

    match cmds[0] {
        DrawCmd::Circle { color, .. } => {
            assert!(
                (color.alpha - expected_alpha).abs() < 1e-6,
                "node alpha {} vs expected {}",
                color.alpha,
                expected_alpha
            );
        }
        ref other => panic!("expected a node circle first, got {other:?}"),
    }

    // Last rung (p = 1) picks up the full 6*pi*wobble twist sweep; its
    // node alpha must regress the same way. Seven commands per rung with
    // the backbone off.
    let phase_last = phase0 + TWIST * WOBBLE;
    let local_last = local_depth(phase_last) as f32;
    let expected_last = lerp(0.16, 0.75, local_last) * opacity_mult;
    match cmds[7 * 7] {
        DrawCmd::Circle { color, .. } => {
            assert!((color.alpha - expected_last).abs() < 1e-6);
        }
        ref other => panic!("expected the last rung's node circle, got {other:?}"),
    }
}

#[test]
fn frame_commands_are_ordered_far_to_near() {
    let near = pinned_helix(0.75, 0.5, 0.9, 4);
    let far = pinned_helix(0.25, 0.5, 0.1, 6);
    // Stored order is near-first; the frame must still draw far-first.
    let layout = Layout {
        helices: vec![near.clone(), far.clone()],
        target: 2,
    };

    let mut cmds = Vec::new();
    render_frame(1000.0, &layout, VIEWPORT, &STILL, &mut cmds);

    let far_block = commands_per_helix(&far, &STILL);
    let near_block = commands_per_helix(&near, &STILL);
    assert_eq!(cmds.len(), 1 + far_block + near_block);

    match cmds[0] {
        DrawCmd::Fill { color } => {
            assert_eq!(color.rgb, BACKGROUND);
            assert!((color.alpha - (1.0 - TRAIL_FACTOR)).abs() < 1e-6);
        }
        ref other => panic!("frame must start with the trail wash, got {other:?}"),
    }

    // All of the far helix's commands come first (left half of the
    // viewport), then all of the near helix's (right half).
    for (i, cmd) in cmds[1..].iter().enumerate() {
        let x = match *cmd {
            DrawCmd::Circle { center, .. } => center.x,
            DrawCmd::Line { from, .. } | DrawCmd::Capsule { from, .. } => from.x,
            DrawCmd::Fill { .. } => panic!("unexpected fill mid-frame"),
        };
        if i < far_block {
            assert!(x < VIEWPORT.width / 2.0, "command {i} at x={x} not far-first");
        } else {
            assert!(x > VIEWPORT.width / 2.0, "command {i} at x={x} not near-last");
        }
    }
}

#[test]
fn command_count_matches_prediction_with_and_without_backbone() {
    let cfg = pinned_helix(0.5, 0.5, 0.5, 12);

    let mut plain = Vec::new();
    draw_helix(0.0, &cfg, VIEWPORT, &STILL, &mut plain);
    assert_eq!(plain.len(), commands_per_helix(&cfg, &STILL));
    assert_eq!(plain.len(), 12 * 7);

    let with_backbone = RenderOptions {
        backbone: true,
        flow: false,
    };
    let mut full = Vec::new();
    draw_helix(0.0, &cfg, VIEWPORT, &with_backbone, &mut full);
    assert_eq!(full.len(), commands_per_helix(&cfg, &with_backbone));
    assert_eq!(full.len(), 12 * 7 + 2 * 11);
}

#[test]
fn depth_layering_scales_alpha_and_width_for_every_rung() {
    let far = pinned_helix(0.5, 0.5, 0.0, 10);
    let mut near = far.clone();
    near.depth = 1.0;

    let mut far_cmds = Vec::new();
    let mut near_cmds = Vec::new();
    draw_helix(500.0, &far, VIEWPORT, &STILL, &mut far_cmds);
    draw_helix(500.0, &near, VIEWPORT, &STILL, &mut near_cmds);
    assert_eq!(far_cmds.len(), near_cmds.len());

    let far_alpha_mult = lerp(0.22, 1.0, 0.0);
    for (f, n) in far_cmds.iter().zip(near_cmds.iter()) {
        let (fa, na) = match (f, n) {
            (DrawCmd::Circle { color: cf, .. }, DrawCmd::Circle { color: cn, .. })
            | (DrawCmd::Capsule { color: cf, .. }, DrawCmd::Capsule { color: cn, .. }) => {
                (cf.alpha, cn.alpha)
            }
            _ => panic!("command kinds diverged between depths"),
        };
        // Same rung, same local depth: the ratio is exactly the
        // global-depth opacity multiplier.
        assert!(
            (fa / na - far_alpha_mult).abs() < 1e-5,
            "alpha ratio {} vs {}",
            fa / na,
            far_alpha_mult
        );
        assert!(fa <= na, "far helix must never render bolder than near");
    }
}

#[test]
fn flow_field_offsets_centers_and_respects_toggle() {
    let cfg = pinned_helix(0.5, 0.5, 1.0, 2);
    let flowing = RenderOptions {
        backbone: false,
        flow: true,
    };

    let mut still_cmds = Vec::new();
    let mut flow_cmds = Vec::new();
    draw_helix(50_000.0, &cfg, VIEWPORT, &STILL, &mut still_cmds);
    draw_helix(50_000.0, &cfg, VIEWPORT, &flowing, &mut flow_cmds);

    let center_of = |cmds: &[DrawCmd]| match cmds[0] {
        DrawCmd::Circle { center, .. } => center,
        ref other => panic!("expected a circle, got {other:?}"),
    };
    let still_c = center_of(&still_cmds);
    let flow_c = center_of(&flow_cmds);
    assert!(
        still_c.distance(flow_c) > 0.01,
        "flow field should displace the helix center"
    );
    // Flow magnitude is bounded by the field's configured pixel strength.
    assert!(still_c.distance(flow_c) < 30.0);
}

#[test]
fn frame_interval_matches_capped_rate() {
    assert!((FRAME_INTERVAL_MS - 1000.0 / 30.0).abs() < 1e-9);
}
