//! Scalar function models for the halting metaphor
//!
//! Every model is a pure function of up to four parameters `(x, y, a, b)`:
//! `x` and `y` are inputs, `a` and `b` are scaling constants. The `h_*`
//! family maps the whole extended real line into a bounded interval (the
//! "decider"), while the `qn_*` family models the recursive call of
//! Q into itself with trigonometric cycles that swing between 0 and ±∞.
//! All results pass through [`clamp_to_limits`] so near-zero noise reads
//! as 0 and overflow reads as ±∞.

use std::f64::consts::PI;

pub mod registry;

pub use registry::Model;

/// Values below this magnitude are treated as exactly zero.
const ZERO_THRESHOLD: f64 = 1e-10;

/// Values beyond this magnitude are treated as ±∞.
const INFINITY_THRESHOLD: f64 = 1e10;

/// Arguments to a model function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Args {
    /// Initial state (starting point or recursive depth of Qn).
    pub x: f64,
    /// Phase shift driving progression through recursive states.
    pub y: f64,
    /// Frequency scaling constant for `x`.
    pub a: f64,
    /// Frequency scaling constant for `y`.
    pub b: f64,
}

impl Args {
    pub fn new(x: f64, y: f64, a: f64, b: f64) -> Self {
        Self { x, y, a, b }
    }
}

/// Collapse a raw result onto the representable range: values within
/// `1e-10` of zero become 0, values past `±1e10` become ±∞, everything
/// else is rounded to two decimal places. NaN passes through unchanged.
pub fn clamp_to_limits(value: f64) -> f64 {
    if value.abs() < ZERO_THRESHOLD {
        0.0
    } else if value > INFINITY_THRESHOLD {
        f64::INFINITY
    } else if value < -INFINITY_THRESHOLD {
        f64::NEG_INFINITY
    } else {
        (value * 100.0).round() / 100.0
    }
}

/// The rotation angle θ = xπ/a − yπ/b shared by the `qn_*` models.
fn theta(args: Args) -> f64 {
    (args.x * PI) / args.a - (args.y * PI) / args.b
}

/// A program that always halts: 0·((x·a) + (y·b)).
pub fn halt(args: Args) -> f64 {
    clamp_to_limits(0.0 * (args.x * args.a + args.y * args.b))
}

/// A program that always loops: ((x·a) + (y·b))/0, modeled as +∞ for a
/// positive sum and −∞ for a negative one. A zero sum yields 1, the
/// l'Hôpital limit of sin(x)/x at 0.
pub fn loop_forever(args: Args) -> f64 {
    let sum = args.x * args.a + args.y * args.b;
    if sum > 0.0 {
        f64::INFINITY
    } else if sum < 0.0 {
        f64::NEG_INFINITY
    } else {
        1.0
    }
}

/// The function Q: 1/((x·a) + (y·b)). Returns +∞ on zero input (Q loops
/// on a halting input) and 0 on infinite input (Q halts on a looping
/// input).
pub fn q_inverse(args: Args) -> f64 {
    if args.x + args.y == 0.0 {
        f64::INFINITY
    } else if args.x.is_infinite() || args.y.is_infinite() {
        0.0
    } else {
        clamp_to_limits(1.0 / (args.x * args.a + args.y * args.b))
    }
}

/// H as normalized arctangent: atan(x/a − y/b)·(2/π), range (−1, 1).
pub fn h_arctan(args: Args) -> f64 {
    clamp_to_limits((args.x / args.a - args.y / args.b).atan() * (2.0 / PI))
}

/// H as sigmoid: 1/(1 + e^(−((x·a) + (y·b)))), range (0, 1).
pub fn h_sigmoid(args: Args) -> f64 {
    clamp_to_limits(1.0 / (1.0 + (-(args.x * args.a + args.y * args.b)).exp()))
}

/// Qn as tan²θ. Starts at 0; +∞ where cos θ vanishes.
pub fn qn_tan2(args: Args) -> f64 {
    let t = theta(args);
    if t.cos() == 0.0 {
        return f64::INFINITY;
    }
    clamp_to_limits(t.tan().powi(2))
}

/// Qn as cot²θ. Starts at ∞; +∞ where sin θ vanishes.
pub fn qn_cot2(args: Args) -> f64 {
    let t = theta(args);
    if t.sin() == 0.0 {
        return f64::INFINITY;
    }
    clamp_to_limits(1.0 / t.tan().powi(2))
}

/// Qn as tan²θ·sin θ, spanning both signs of the domain of 1/x.
pub fn qn_tan2_sin(args: Args) -> f64 {
    let t = theta(args);
    if t.cos() == 0.0 {
        return f64::INFINITY;
    }
    clamp_to_limits(t.tan().powi(2) * t.sin())
}

/// Qn as cot²θ·cos θ, spanning both signs of the domain of 1/x.
pub fn qn_cot2_cos(args: Args) -> f64 {
    let t = theta(args);
    if t.sin() == 0.0 {
        return f64::INFINITY;
    }
    clamp_to_limits((1.0 / t.tan()).powi(2) * t.cos())
}
