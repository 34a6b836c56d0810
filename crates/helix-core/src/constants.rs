// Layout and animation tuning constants shared by the core and the web frontend.

// Frame pacing
pub const FRAME_RATE_CAP: f64 = 30.0; // accepted frames per second
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / FRAME_RATE_CAP;

// Trail blending: each accepted frame washes the surface with the
// background color at alpha (1 - TRAIL_FACTOR)
pub const TRAIL_FACTOR: f32 = 0.18;

// Layout
pub const HELIX_TARGET: usize = 18; // regular helices per layout (hero excluded)
pub const MIN_DIST: f32 = 0.10; // base spacing in normalized units
pub const MAX_PLACEMENT_TRIES: u32 = 25_000;
pub const DEFAULT_SEED: u64 = 42;

// Geometry
pub const GLOBAL_TILT: f32 = -0.15; // radians, applied to every rotation draw
pub const MAX_HEIGHT_FRAC: f32 = 0.9; // helix pixel height is capped at this viewport fraction
pub const TWIST: f64 = std::f64::consts::PI * 6.0; // strand rotation over the full length
pub const WOBBLE: f64 = 1.05; // twist stretch factor
pub const SPEED_BIAS: f64 = 0.000225; // added to each helix's phase speed (rad/ms)
pub const BEND_PIXEL_SCALE: f64 = 240.0; // px of centerline displacement at bend amount 1, scale 1
pub const BEND_TIME_RATE: f64 = 0.35; // bend phase advance relative to strand time
pub const BEAD_T: f32 = 0.22; // base beads sit this far along the rung connector

// Drift: slow orbit of the whole helix center, px at scale 1
pub const DRIFT_MAG_FAR: f32 = 6.0;
pub const DRIFT_MAG_NEAR: f32 = 16.0;

// Shared flow field (gentle scene-wide current)
pub const FLOW_MAGNITUDE: f64 = 10.0; // px at depth 1
pub const FLOW_SPEED: f64 = 0.000_12; // field time scale, per ms
pub const FLOW_DEPTH_FAR: f32 = 0.35; // flow attenuation for depth-0 helices

// Depth layering: far helices render faint and thin, near ones bold
pub const DEPTH_ALPHA_FAR: f32 = 0.22;
pub const DEPTH_WIDTH_FAR: f32 = 0.65;
pub const DEPTH_WIDTH_NEAR: f32 = 1.25;

// Device-pixel-ratio cap, bounds raster cost on hidpi displays
pub const DPR_CAP: f64 = 1.5;

// Composed anchor points, ordered for even coverage: corners and edge
// midpoints first, then an inner ring, then mid-edge infill.
pub const ANCHORS: [[f32; 2]; 16] = [
    [0.10, 0.14],
    [0.50, 0.10],
    [0.90, 0.16],
    [0.08, 0.52],
    [0.92, 0.52],
    [0.12, 0.90],
    [0.50, 0.92],
    [0.88, 0.88],
    [0.26, 0.28],
    [0.74, 0.30],
    [0.30, 0.72],
    [0.70, 0.70],
    [0.18, 0.38],
    [0.82, 0.40],
    [0.20, 0.62],
    [0.80, 0.60],
];

// The hero helix is pinned bottom-right at full depth
pub const HERO_POS: [f32; 2] = [0.86, 0.83];
