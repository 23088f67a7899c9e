//! Human-readable output formatting

use crate::engine::executor::{ExecutionResult, ResultData};

pub fn format_human(result: &ExecutionResult) -> String {
    let mut output = match &result.data {
        ResultData::Identifiers(ids) => {
            if ids.is_empty() {
                "No sentences found".to_string()
            } else {
                ids.join("\n")
            }
        }
        ResultData::Pieces(pieces) => {
            let mut output = String::new();
            for (i, piece) in pieces.iter().enumerate() {
                output.push_str(&format!("{:>4}  {:?}\n", i, piece));
            }
            output.pop();
            output
        }
        ResultData::Substitution(info) => info.text.clone(),
        ResultData::Text(text) => text.clone(),
        ResultData::Growth(report) => {
            let mut output = format!(
                "Growth Schedule (factor {}, initial {})\n\
                 ---------------\n\
                 {:>10} {:>10}\n",
                report.factor, report.initial_capacity, "SIZE", "CAPACITY"
            );
            for step in &report.steps {
                output.push_str(&format!("{:>10} {:>10}\n", step.size, step.capacity));
            }
            output.push_str(&format!(
                "\n{} elements, final capacity {}",
                report.count, report.final_capacity
            ));
            output
        }
    };

    if let Some(ref message) = result.message {
        output.push_str(&format!("\n\n{}", message));
    }
    output
}
