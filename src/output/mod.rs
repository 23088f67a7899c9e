//! Output formatting module

pub mod human;
pub mod json;

use crate::engine::executor::ExecutionResult;
use human::format_human;
use json::format_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl OutputFormat {
    /// Pick the format selected by the `--json` flag
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

pub fn format_output(result: &ExecutionResult, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(result),
        OutputFormat::Json => format_json(result),
    }
}
