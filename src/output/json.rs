//! JSON output formatting

use crate::engine::executor::{ExecutionResult, ResultData};
use serde_json::{json, Value};

pub fn format_json(result: &ExecutionResult) -> String {
    let mut data: Value = match &result.data {
        ResultData::Identifiers(ids) => json!({ "identifiers": ids }),
        ResultData::Pieces(pieces) => json!({ "pieces": pieces }),
        ResultData::Substitution(info) => serde_json::to_value(info).unwrap_or(json!(null)),
        ResultData::Text(text) => json!({ "text": text }),
        ResultData::Growth(report) => serde_json::to_value(report).unwrap_or(json!(null)),
    };

    if let (Some(message), Some(object)) = (&result.message, data.as_object_mut()) {
        object.insert("message".to_string(), json!(message));
    }

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::executor::SubstitutionInfo;

    #[test]
    fn test_json_identifiers() {
        let result = ExecutionResult {
            data: ResultData::Identifiers(vec!["theCatSat".to_string()]),
            message: None,
        };
        let value: Value = serde_json::from_str(&format_json(&result)).unwrap();
        assert_eq!(value, json!({ "identifiers": ["theCatSat"] }));
    }

    #[test]
    fn test_json_includes_message() {
        let result = ExecutionResult {
            data: ResultData::Substitution(SubstitutionInfo {
                text: "hello".to_string(),
                replaced: false,
            }),
            message: Some("not found".to_string()),
        };
        let value: Value = serde_json::from_str(&format_json(&result)).unwrap();
        assert_eq!(value["replaced"], json!(false));
        assert_eq!(value["message"], json!("not found"));
    }
}
