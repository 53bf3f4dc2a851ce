//! Complex boolean logic
//!
//! Two-component boolean expressions modeled on complex numbers: `(p, q)`
//! joined by a connective. `T∧T` is true, `F∧F` is false, and the mixed
//! states `F∧T` / `T∧F` are the imaginary truth values. Three operations
//! move an expression around the complex logical unit circle, and the
//! coin flip walks a full cycle of them.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The connective joining the two components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    /// Every operation flips the connective.
    fn flipped(self) -> Self {
        match self {
            Connective::And => Connective::Or,
            Connective::Or => Connective::And,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => write!(f, "and"),
            Connective::Or => write!(f, "or"),
        }
    }
}

impl FromStr for Connective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(Connective::And),
            "or" => Ok(Connective::Or),
            _ => Err(Error::InvalidArgument(format!(
                "connective must be 'and' or 'or', got '{s}'"
            ))),
        }
    }
}

/// An operation on a complex boolean expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// i?: flips only the connective.
    INegation,
    /// ?: negates `p` and flips the connective.
    IRotation,
    /// ¬: negates both components and flips the connective.
    Negation,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::INegation => write!(f, "inegation"),
            Operation::IRotation => write!(f, "irotation"),
            Operation::Negation => write!(f, "negation"),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "inegation" => Ok(Operation::INegation),
            "irotation" => Ok(Operation::IRotation),
            "negation" => Ok(Operation::Negation),
            _ => Err(Error::UnknownOperation(s.to_string())),
        }
    }
}

/// A complex boolean expression: two components and a connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexExpr {
    pub p: bool,
    pub q: bool,
    pub connective: Connective,
}

impl ComplexExpr {
    pub fn new(p: bool, q: bool, connective: Connective) -> Self {
        Self { p, q, connective }
    }

    /// Applies one operation, producing the next state on the cycle.
    pub fn apply(self, operation: Operation) -> Self {
        let connective = self.connective.flipped();
        match operation {
            Operation::INegation => Self { connective, ..self },
            Operation::IRotation => Self {
                p: !self.p,
                connective,
                ..self
            },
            Operation::Negation => Self {
                p: !self.p,
                q: !self.q,
                connective,
            },
        }
    }
}

impl fmt::Display for ComplexExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.p, self.q, self.connective)
    }
}

/// The fixed operation sequence walked by the coin flip: a full rotation
/// through real and imaginary truth states and back.
pub const COINFLIP_SEQUENCE: [Operation; 8] = [
    Operation::INegation,
    Operation::IRotation,
    Operation::Negation,
    Operation::IRotation,
    Operation::INegation,
    Operation::IRotation,
    Operation::Negation,
    Operation::IRotation,
];

/// One recorded coin-flip step.
#[derive(Debug, Clone, Copy)]
pub struct FlipStep {
    pub operation: Operation,
    pub state: ComplexExpr,
}

/// Walks the full coin-flip cycle from `(p, q, and)`, returning the
/// starting state and the state after each operation.
pub fn coinflip(p: bool, q: bool) -> (ComplexExpr, Vec<FlipStep>) {
    let start = ComplexExpr::new(p, q, Connective::And);
    let mut state = start;
    let steps = COINFLIP_SEQUENCE
        .iter()
        .map(|&operation| {
            state = state.apply(operation);
            FlipStep { operation, state }
        })
        .collect();
    (start, steps)
}

/// Parses the boolean spellings accepted on the command line.
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" => Ok(true),
        "false" | "f" | "0" | "no" => Ok(false),
        _ => Err(Error::InvalidArgument(format!(
            "expected a boolean, got '{s}'"
        ))),
    }
}
