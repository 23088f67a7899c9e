//! Command executor

use std::io::Read;

use serde::Serialize;

use crate::camel::camel_caser_with_policy;
use crate::cli::SubCommand;
use crate::error::{GrowError, Result};
use crate::output::OutputFormat;
use crate::sstring::SString;
use crate::vector::{GrowthPolicy, Shallow, Vector};

/// Execution context containing runtime configuration
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    pub policy: GrowthPolicy,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub data: ResultData,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ResultData {
    /// camelCase identifiers, one per sentence
    Identifiers(Vec<String>),
    /// Pieces produced by a split
    Pieces(Vec<String>),
    /// Outcome of a substitution
    Substitution(SubstitutionInfo),
    /// Text produced by a slice
    Text(String),
    /// Capacity schedule observed while pushing
    Growth(GrowthReport),
}

#[derive(Debug, Clone, Serialize)]
pub struct SubstitutionInfo {
    pub text: String,
    pub replaced: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthReport {
    pub count: usize,
    pub factor: usize,
    pub initial_capacity: usize,
    pub final_capacity: usize,
    pub steps: Vec<GrowthStep>,
}

/// Capacity in effect once the vector held `size` elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowthStep {
    pub size: usize,
    pub capacity: usize,
}

/// Execute a parsed command
pub fn execute_command(cmd: &SubCommand, ctx: &ExecutionContext) -> Result<ExecutionResult> {
    match cmd {
        SubCommand::Camel { text, file } => {
            let input = match (text, file) {
                (Some(text), _) => text.clone().into_bytes(),
                (None, Some(path)) => std::fs::read(path)?,
                (None, None) => {
                    let mut buffer = Vec::new();
                    std::io::stdin().read_to_end(&mut buffer)?;
                    buffer
                }
            };
            let camel = camel_caser_with_policy(&input, ctx.policy)?;
            let capacity = camel.as_vector().capacity();
            let identifiers = camel.into_strings();
            Ok(ExecutionResult {
                message: verbose_message(ctx, || {
                    format!("{} sentences (capacity {})", identifiers.len(), capacity)
                }),
                data: ResultData::Identifiers(identifiers),
            })
        }

        SubCommand::Split { text, delimiter } => {
            if !delimiter.is_ascii() {
                return Err(GrowError::InvalidArgument(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    delimiter
                )));
            }
            let split =
                SString::from_literal(text).split_with_policy(*delimiter as u8, ctx.policy)?;
            let capacity = split.capacity();
            let pieces: Vec<String> = split.iter().map(SString::to_string_lossy).collect();
            Ok(ExecutionResult {
                message: verbose_message(ctx, || {
                    format!("{} pieces (capacity {})", pieces.len(), capacity)
                }),
                data: ResultData::Pieces(pieces),
            })
        }

        SubCommand::Substitute {
            text,
            target,
            replacement,
            offset,
        } => {
            let mut sstring = SString::from_literal(text);
            let replaced = match sstring.substitute(*offset, target, replacement) {
                Ok(()) => true,
                Err(GrowError::NotFound) => false,
                Err(e) => return Err(e),
            };
            Ok(ExecutionResult {
                message: (!replaced).then(|| format!("'{}' not found; text unchanged", target)),
                data: ResultData::Substitution(SubstitutionInfo {
                    text: sstring.to_string_lossy(),
                    replaced,
                }),
            })
        }

        SubCommand::Slice { text, start, end } => {
            let slice = SString::from_literal(text).slice(*start, *end)?;
            Ok(ExecutionResult {
                data: ResultData::Text(slice.to_string_lossy()),
                message: None,
            })
        }

        SubCommand::Growth { count } => {
            let report = growth_report(*count, ctx.policy)?;
            Ok(ExecutionResult {
                message: verbose_message(ctx, || {
                    format!("{} reallocations", report.steps.len().saturating_sub(1))
                }),
                data: ResultData::Growth(report),
            })
        }
    }
}

fn verbose_message<F: FnOnce() -> String>(ctx: &ExecutionContext, f: F) -> Option<String> {
    ctx.verbose.then(f)
}

/// Push `count` elements into a fresh vector, recording each capacity change
pub fn growth_report(count: usize, policy: GrowthPolicy) -> Result<GrowthReport> {
    let mut schedule: Vector<usize> = Vector::with_policy(Shallow, policy)?;
    let mut steps = vec![GrowthStep {
        size: 0,
        capacity: schedule.capacity(),
    }];

    for i in 0..count {
        schedule.push_back(&i)?;
        if steps.last().map(|s| s.capacity) != Some(schedule.capacity()) {
            steps.push(GrowthStep {
                size: schedule.len(),
                capacity: schedule.capacity(),
            });
        }
    }

    Ok(GrowthReport {
        count,
        factor: policy.factor(),
        initial_capacity: policy.initial_capacity(),
        final_capacity: schedule.capacity(),
        steps,
    })
}
