//! The halting machine H(Qn)
//!
//! Recursively applies an H mapping (sigmoid or normalized arctan) to a
//! Qn model, feeding each output back in as the next input and recording
//! the trajectory. Six fixed pairings are explored: each pins its Qn
//! model at a preset phase shift and frequency so that the H outputs land
//! back on the Qn cycle's critical points.

use serde::Serialize;
use tracing::debug;

use crate::model::{Args, Model};

/// Default recursion depth per trajectory.
pub const DEFAULT_DEPTH: u32 = 3;

/// Default starting values fed into the recursion.
pub const DEFAULT_X_VALUES: [f64; 3] = [-1.0, 0.0, 1.0];

/// A Qn model pinned at its preset phase shift and frequency constants.
#[derive(Debug, Clone, Copy)]
pub struct QnPreset {
    pub model: Model,
    pub y: f64,
    pub a: f64,
    pub b: f64,
}

impl QnPreset {
    fn eval(&self, x: f64) -> f64 {
        self.model.eval(Args::new(x, self.y, self.a, self.b))
    }
}

/// One H mapping paired with a preset Qn model.
#[derive(Debug, Clone, Copy)]
pub struct Pairing {
    pub h: Model,
    pub qn: QnPreset,
    pub description: &'static str,
}

/// The six pairings explored by the machine. The sigmoid pairings keep
/// the cycle in (0, 1); the arctan compositional pairings phase shift
/// left so the cycle alternates between −1 and 1.
pub fn pairings() -> [Pairing; 6] {
    [
        Pairing {
            h: Model::HSigmoid,
            qn: QnPreset {
                model: Model::QnTan2Sin,
                y: -0.5,
                a: 1.0,
                b: 1.0,
            },
            description: "H Sigmoid with Qn = tan²(θ)⋅sin(θ)",
        },
        Pairing {
            h: Model::HSigmoid,
            qn: QnPreset {
                model: Model::QnCot2Cos,
                y: 0.0,
                a: 1.0,
                b: 1.0,
            },
            description: "H Sigmoid with Qn = cot²(θ)⋅cos(θ)",
        },
        Pairing {
            h: Model::HArctan,
            qn: QnPreset {
                model: Model::QnTan2,
                y: -1.0,
                a: 2.0,
                b: 2.0,
            },
            description: "H Arctan with Qn = tan²(θ)",
        },
        Pairing {
            h: Model::HArctan,
            qn: QnPreset {
                model: Model::QnCot2,
                y: 0.0,
                a: 2.0,
                b: 2.0,
            },
            description: "H Arctan with Qn = cot²(θ)",
        },
        Pairing {
            h: Model::HArctan,
            qn: QnPreset {
                model: Model::QnTan2Sin,
                y: -2.0,
                a: 2.0,
                b: 2.0,
            },
            description: "H Arctan with Qn = tan²(θ)⋅sin(θ)",
        },
        Pairing {
            h: Model::HArctan,
            qn: QnPreset {
                model: Model::QnCot2Cos,
                y: -1.0,
                a: 2.0,
                b: 2.0,
            },
            description: "H Arctan with Qn = cot²(θ)⋅cos(θ)",
        },
    ]
}

/// One recursive step: `output = H(Qn(input))`.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub iteration: u32,
    pub input: f64,
    pub output: f64,
}

/// The recorded trajectory of one pairing from one starting value.
#[derive(Debug, Clone, Serialize)]
pub struct Trajectory {
    pub description: String,
    pub h_name: &'static str,
    pub qn_name: &'static str,
    pub start: f64,
    pub steps: Vec<Step>,
}

/// Runs every pairing from every starting value for `depth` iterations.
/// Each step feeds the previous step's output back in as input.
pub fn run(x_values: &[f64], depth: u32) -> Vec<Trajectory> {
    let mut trajectories = Vec::with_capacity(x_values.len() * pairings().len());
    for &start in x_values {
        for pairing in pairings() {
            debug!(start, description = pairing.description, "tracing pairing");
            let mut current = start;
            let mut steps = Vec::with_capacity(depth as usize);
            for iteration in 1..=depth {
                let output = pairing.h.eval_at(pairing.qn.eval(current));
                steps.push(Step {
                    iteration,
                    input: current,
                    output,
                });
                current = output;
            }
            trajectories.push(Trajectory {
                description: pairing.description.to_string(),
                h_name: pairing.h.name(),
                qn_name: pairing.qn.model.name(),
                start,
                steps,
            });
        }
    }
    trajectories
}
