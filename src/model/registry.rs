//! Name-to-model lookup table
//!
//! Dispatches the function names accepted on the command line to the
//! scalar models in the parent module, carrying each model's default
//! arguments.

use super::Args;

/// Every named scalar model, in the order they are listed to users.
pub const ALL: [Model; 9] = [
    Model::Halt,
    Model::Loop,
    Model::QInverse,
    Model::HArctan,
    Model::HSigmoid,
    Model::QnTan2,
    Model::QnCot2,
    Model::QnTan2Sin,
    Model::QnCot2Cos,
];

/// A named scalar model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    Halt,
    Loop,
    QInverse,
    HArctan,
    HSigmoid,
    QnTan2,
    QnCot2,
    QnTan2Sin,
    QnCot2Cos,
}

impl Model {
    /// Resolves a user-facing function name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "halt" => Some(Model::Halt),
            "loop" => Some(Model::Loop),
            "q_inverse" => Some(Model::QInverse),
            "h_arctan" => Some(Model::HArctan),
            "h_sigmoid" => Some(Model::HSigmoid),
            "qn_tan2" => Some(Model::QnTan2),
            "qn_cot2" => Some(Model::QnCot2),
            "qn_tan2_sin" => Some(Model::QnTan2Sin),
            "qn_cot2_cos" => Some(Model::QnCot2Cos),
            _ => None,
        }
    }

    /// The user-facing function name.
    pub fn name(&self) -> &'static str {
        match self {
            Model::Halt => "halt",
            Model::Loop => "loop",
            Model::QInverse => "q_inverse",
            Model::HArctan => "h_arctan",
            Model::HSigmoid => "h_sigmoid",
            Model::QnTan2 => "qn_tan2",
            Model::QnCot2 => "qn_cot2",
            Model::QnTan2Sin => "qn_tan2_sin",
            Model::QnCot2Cos => "qn_cot2_cos",
        }
    }

    /// Default arguments when fewer than four values are supplied. The
    /// plain trigonometric Qn models halve frequency with a = b = 2.
    pub fn defaults(&self) -> Args {
        match self {
            Model::QnTan2 | Model::QnCot2 => Args::new(0.0, 0.0, 2.0, 2.0),
            _ => Args::new(0.0, 0.0, 1.0, 1.0),
        }
    }

    /// Evaluates the model at fully specified arguments.
    pub fn eval(&self, args: Args) -> f64 {
        match self {
            Model::Halt => super::halt(args),
            Model::Loop => super::loop_forever(args),
            Model::QInverse => super::q_inverse(args),
            Model::HArctan => super::h_arctan(args),
            Model::HSigmoid => super::h_sigmoid(args),
            Model::QnTan2 => super::qn_tan2(args),
            Model::QnCot2 => super::qn_cot2(args),
            Model::QnTan2Sin => super::qn_tan2_sin(args),
            Model::QnCot2Cos => super::qn_cot2_cos(args),
        }
    }

    /// Evaluates the model at a single input, defaulting the rest.
    pub fn eval_at(&self, x: f64) -> f64 {
        self.eval(Args { x, ..self.defaults() })
    }

    /// Merges positional values (x, y, a, b) over the model defaults.
    /// Values past the fourth are ignored.
    pub fn args_from_positional(&self, values: &[f64]) -> Args {
        let mut args = self.defaults();
        if let Some(&x) = values.first() {
            args.x = x;
        }
        if let Some(&y) = values.get(1) {
            args.y = y;
        }
        if let Some(&a) = values.get(2) {
            args.a = a;
        }
        if let Some(&b) = values.get(3) {
            args.b = b;
        }
        args
    }
}
