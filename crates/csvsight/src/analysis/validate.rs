//! Shape validation of raw analysis replies.

use serde_json::Value;

use crate::chart::ChartType;
use crate::error::{CsvsightError, Result};

use super::result::AnalysisResult;

/// Validate a raw reply and convert it into a typed [`AnalysisResult`].
///
/// Single entry point for trusting service output. Checks, all of
/// which must pass: `chartType` is one of the six supported values,
/// `chartConfig.labels` and `chartConfig.datasets` are present as
/// arrays, and `summary` is a string. No partial acceptance: the first
/// failed check rejects the whole reply.
pub fn validate_response(candidate: Value) -> Result<AnalysisResult> {
    let chart_type = candidate
        .get("chartType")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("missing or non-string chartType"))?;

    if ChartType::from_wire(chart_type).is_none() {
        return Err(invalid(&format!("unsupported chartType '{chart_type}'")));
    }

    let chart_config = candidate
        .get("chartConfig")
        .ok_or_else(|| invalid("missing chartConfig"))?;

    if !chart_config.get("labels").is_some_and(Value::is_array) {
        return Err(invalid("chartConfig.labels must be an array"));
    }

    if !chart_config.get("datasets").is_some_and(Value::is_array) {
        return Err(invalid("chartConfig.datasets must be an array"));
    }

    if !candidate.get("summary").is_some_and(Value::is_string) {
        return Err(invalid("missing or non-string summary"));
    }

    serde_json::from_value(candidate)
        .map_err(|e| invalid(&format!("malformed reply fields: {e}")))
}

fn invalid(reason: &str) -> CsvsightError {
    CsvsightError::InvalidResponse(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_reply() -> Value {
        json!({
            "chartType": "bar",
            "chartConfig": {
                "labels": ["Q1", "Q2"],
                "datasets": [
                    {
                        "label": "Revenue",
                        "data": [10, 20],
                        "backgroundColor": ["#6b7280", "#9ca3af"],
                        "borderWidth": 1
                    }
                ]
            },
            "summary": "Revenue grew quarter over quarter."
        })
    }

    #[test]
    fn test_accepts_valid_reply() {
        let result = validate_response(valid_reply()).unwrap();
        assert_eq!(result.chart_type, ChartType::Bar);
        assert_eq!(result.chart_config.labels, vec!["Q1", "Q2"]);
        assert_eq!(result.chart_config.datasets.len(), 1);
        assert_eq!(result.summary, "Revenue grew quarter over quarter.");
    }

    #[test]
    fn test_rejects_unknown_chart_type() {
        let mut reply = valid_reply();
        reply["chartType"] = json!("scatter");
        let err = validate_response(reply).unwrap_err();
        assert!(err.to_string().contains("scatter"));
    }

    #[test]
    fn test_rejects_missing_chart_type() {
        let mut reply = valid_reply();
        reply.as_object_mut().unwrap().remove("chartType");
        assert!(validate_response(reply).is_err());
    }

    #[test]
    fn test_rejects_missing_datasets() {
        let mut reply = valid_reply();
        reply["chartConfig"].as_object_mut().unwrap().remove("datasets");
        let err = validate_response(reply).unwrap_err();
        assert!(err.to_string().contains("datasets"));
    }

    #[test]
    fn test_rejects_non_array_labels() {
        let mut reply = valid_reply();
        reply["chartConfig"]["labels"] = json!("Q1");
        assert!(validate_response(reply).is_err());
    }

    #[test]
    fn test_rejects_non_string_summary() {
        let mut reply = valid_reply();
        reply["summary"] = json!(42);
        assert!(validate_response(reply).is_err());
    }

    #[test]
    fn test_accepts_polar_area() {
        let mut reply = valid_reply();
        reply["chartType"] = json!("polarArea");
        let result = validate_response(reply).unwrap();
        assert_eq!(result.chart_type, ChartType::PolarArea);
    }
}
