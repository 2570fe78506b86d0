//! Utility functions for the OB-1 MCP server

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::mcp::protocol::{error_codes, Response};

/// Pulls `key` out of JSON-RPC params, answering with an `INVALID_PARAMS`
/// response that says whether the field was absent or the wrong shape.
pub fn get_required_arg<T: DeserializeOwned>(
    params: &Value,
    key: &str,
    req_id: &Value,
) -> Result<T, Response> {
    let invalid = |message: String| {
        Response::error(req_id.clone(), error_codes::INVALID_PARAMS, message)
    };
    match params.get(key) {
        None | Some(Value::Null) => Err(invalid(format!("Missing required argument: '{}'", key))),
        Some(value) => T::deserialize(value)
            .map_err(|e| invalid(format!("Invalid argument '{}': {}", key, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_required_arg() {
        let params = json!({ "name": "code_analysis", "count": 3 });
        let name: String = get_required_arg(&params, "name", &json!(1)).unwrap();
        assert_eq!(name, "code_analysis");
    }

    #[test]
    fn test_wrong_type_is_reported_as_invalid() {
        let params = json!({ "count": 3 });
        let error = get_required_arg::<String>(&params, "count", &json!(1))
            .unwrap_err()
            .error
            .unwrap();
        assert_eq!(error.code, error_codes::INVALID_PARAMS);
        assert!(error.message.starts_with("Invalid argument 'count'"));
    }

    #[test]
    fn test_absent_and_null_are_reported_as_missing() {
        let params = json!({ "name": null });
        for key in ["name", "other"] {
            let error = get_required_arg::<String>(&params, key, &json!(1))
                .unwrap_err()
                .error
                .unwrap();
            assert_eq!(error.code, error_codes::INVALID_PARAMS);
            assert_eq!(error.message, format!("Missing required argument: '{}'", key));
        }
    }
}
