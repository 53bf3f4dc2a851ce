//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective
//! implementations and rendering their reports.

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::args::Commands;
use crate::digest::{self, FileDigest};
use crate::error::Error;
use crate::logic::{self, ComplexExpr, Operation};
use crate::machine::{self, Trajectory, DEFAULT_DEPTH, DEFAULT_X_VALUES};
use crate::model::Model;

/// Execute a CLI command based on the parsed arguments. With no
/// subcommand, runs the default demo: the halting machine followed by a
/// complex coin flip.
pub fn execute_command(command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Eval { function, values }) => run_eval(&function, &values),
        Some(Commands::Machine {
            x_values,
            depth,
            json,
        }) => run_machine(&x_values, depth, json),
        Some(Commands::Flip { p, q }) => run_flip(p.as_deref(), q.as_deref()),
        Some(Commands::Logic {
            p,
            q,
            connective,
            operation,
        }) => run_logic(&p, &q, &connective, &operation),
        Some(Commands::Digest { files, json }) => run_digest(&files, json),
        None => run_demo(),
    }
}

fn run_eval(function: &str, values: &[String]) -> Result<()> {
    let model = Model::from_name(function)
        .ok_or_else(|| Error::UnknownFunction(function.to_string()))?;
    let values = parse_values(values)?;
    let result = model.eval(model.args_from_positional(&values));
    println!("{result}");
    Ok(())
}

/// Parses numeric command-line values, accepting `inf`, `+inf`, `-inf`.
fn parse_values(raw: &[String]) -> crate::error::Result<Vec<f64>> {
    raw.iter()
        .map(|s| {
            s.parse::<f64>().map_err(|_| {
                Error::InvalidArgument(format!("expected a number or inf/-inf, got '{s}'"))
            })
        })
        .collect()
}

fn run_machine(x_values: &[f64], depth: u32, json: bool) -> Result<()> {
    let x_values = if x_values.is_empty() {
        &DEFAULT_X_VALUES[..]
    } else {
        x_values
    };
    let trajectories = machine::run(x_values, depth);
    if json {
        println!("{}", serde_json::to_string_pretty(&trajectories)?);
    } else {
        print_machine_report(&trajectories);
    }
    Ok(())
}

fn print_machine_report(trajectories: &[Trajectory]) {
    println!("The Halting Machine H(Qn)");
    let mut current_start = None;
    for trajectory in trajectories {
        if current_start != Some(trajectory.start) {
            println!("\nEvaluating functions for x = {}:", trajectory.start);
            current_start = Some(trajectory.start);
        }
        println!("\n{}:", trajectory.description);
        for step in &trajectory.steps {
            println!(
                "Iteration {} with {}({}({})): Result = {}",
                step.iteration, trajectory.h_name, trajectory.qn_name, step.input, step.output
            );
        }
    }
}

fn run_flip(p: Option<&str>, q: Option<&str>) -> Result<()> {
    let p = p.map(logic::parse_bool).transpose()?.unwrap_or(true);
    let q = q.map(logic::parse_bool).transpose()?.unwrap_or(true);
    print_coinflip(p, q);
    Ok(())
}

fn print_coinflip(p: bool, q: bool) {
    let (start, steps) = logic::coinflip(p, q);
    let total = steps.len();
    println!("Complex Coin Flip");
    println!("operation 0/{total} (starting): {start}");
    for (index, step) in steps.iter().enumerate() {
        println!(
            "operation {}/{} ({}): {}",
            index + 1,
            total,
            step.operation,
            step.state
        );
    }
}

fn run_logic(p: &str, q: &str, connective: &str, operation: &str) -> Result<()> {
    let expr = ComplexExpr::new(
        logic::parse_bool(p)?,
        logic::parse_bool(q)?,
        connective.parse()?,
    );
    let operation: Operation = operation.parse()?;
    println!("{}", expr.apply(operation));
    Ok(())
}

fn run_digest(files: &[PathBuf], json: bool) -> Result<()> {
    let mut digests = Vec::with_capacity(files.len());
    let mut failures = 0usize;
    for path in files {
        match digest::hash_file(path) {
            Ok(sha256) => {
                if !json {
                    println!("{sha256}  {}", path.display());
                }
                digests.push(FileDigest {
                    path: path.clone(),
                    sha256,
                });
            }
            Err(e) => {
                failures += 1;
                eprintln!("Error: {}: {e}", path.display());
            }
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&digests)?);
    }
    if failures > 0 {
        anyhow::bail!("failed to digest {failures} file(s)");
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    print_machine_report(&machine::run(&DEFAULT_X_VALUES, DEFAULT_DEPTH));
    println!();
    print_coinflip(true, true);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_parse_with_infinities() {
        let raw: Vec<String> = ["1", "-0.5", "inf", "-inf"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let parsed = parse_values(&raw).unwrap();
        assert_eq!(parsed[0], 1.0);
        assert_eq!(parsed[1], -0.5);
        assert_eq!(parsed[2], f64::INFINITY);
        assert_eq!(parsed[3], f64::NEG_INFINITY);
    }

    #[test]
    fn bad_values_report_the_offending_token() {
        let raw = vec!["five".to_string()];
        let err = parse_values(&raw).unwrap_err();
        assert!(err.to_string().contains("'five'"));
    }

    #[test]
    fn eval_rejects_unknown_functions() {
        let err = run_eval("decide", &[]).unwrap_err();
        assert!(err.to_string().contains("Unknown function"));
    }
}
