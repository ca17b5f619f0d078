//! Parse LLM output into a contract record

use crate::error::ExtractorError;
use covenant_domain::ContractAnalysisResult;
use serde_json::{Map, Value};
use tracing::debug;

/// Parse an LLM response into a validated contract record
///
/// Failures are classified: nesting beyond `max_depth` (or beyond the JSON
/// parser's own recursion limit) is a schema recursion failure; anything else
/// that does not fit the schema is a validation failure. Depth is measured
/// along the keys `schema` declares, so extra fields that would be dropped
/// during coercion do not count toward the limit.
pub fn parse_llm_response(
    response: &str,
    schema: &Value,
    max_depth: usize,
) -> Result<ContractAnalysisResult, ExtractorError> {
    // LLMs sometimes wrap JSON in markdown code blocks
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(json_str).map_err(|e| {
        if is_recursion_limit(&e) {
            ExtractorError::SchemaRecursion(e.to_string())
        } else {
            ExtractorError::Validation(format!("JSON parse error: {}", e))
        }
    })?;

    let depth = schema_depth(&json, schema);
    debug!("Response JSON depth: {}", depth);
    if depth > max_depth {
        return Err(ExtractorError::SchemaRecursion(format!(
            "response nests {} levels deep (limit {})",
            depth, max_depth
        )));
    }

    if !json.is_object() {
        return Err(ExtractorError::Validation(
            "Expected JSON object".to_string(),
        ));
    }

    let result: ContractAnalysisResult = serde_json::from_value(json)?;
    result.validate().map_err(ExtractorError::Validation)?;

    Ok(result)
}

const FENCE: &str = "```";

/// Extract JSON from response, handling markdown code blocks
///
/// A bare JSON document is returned as is. Otherwise the first fenced block
/// is taken, wherever it sits: an optional language tag after the opening
/// fence is skipped, and prose before or after the block is dropped.
fn extract_json(response: &str) -> Result<&str, ExtractorError> {
    let trimmed = response.trim();

    if trimmed.is_empty() {
        return Err(ExtractorError::Validation("Empty response".to_string()));
    }

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Ok(trimmed);
    }

    let Some(start) = trimmed.find(FENCE) else {
        return Ok(trimmed);
    };

    let rest = &trimmed[start + FENCE.len()..];
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    let body = match rest.find(FENCE) {
        Some(end) => &rest[..end],
        None => rest,
    };

    let body = body.trim();
    if body.is_empty() {
        return Err(ExtractorError::Validation("Empty code block".to_string()));
    }
    Ok(body)
}

fn is_recursion_limit(e: &serde_json::Error) -> bool {
    e.to_string().contains("recursion limit exceeded")
}

/// Maximum container nesting of a JSON value; scalars have depth 0
///
/// Object keys the schema does not declare are skipped. Below a key whose
/// schema has no structure of its own (say, a string field holding an
/// object) every level counts. Walks with an explicit stack so hostile input
/// cannot overflow ours.
fn schema_depth(value: &Value, schema: &Value) -> usize {
    let mut max = 0;
    let mut stack = vec![(value, Some(schema), 0usize)];

    while let Some((value, schema, depth)) = stack.pop() {
        let depth = depth + 1;
        match value {
            Value::Array(items) => {
                let items_schema = schema.and_then(items_of);
                stack.extend(items.iter().map(|child| (child, items_schema, depth)));
            }
            Value::Object(map) => match schema.and_then(properties_of) {
                Some(properties) => stack.extend(
                    map.iter()
                        .filter_map(|(key, child)| properties.get(key).map(|s| (child, Some(s), depth))),
                ),
                None => stack.extend(map.values().map(|child| (child, None, depth))),
            },
            _ => continue,
        }
        max = max.max(depth);
    }

    max
}

/// Subschemas a nullable or combined schema may hide its structure behind
fn alternatives(schema: &Value) -> impl Iterator<Item = &Value> {
    ["anyOf", "oneOf", "allOf"]
        .into_iter()
        .filter_map(move |key| schema.get(key).and_then(Value::as_array))
        .flatten()
}

fn properties_of(schema: &Value) -> Option<&Map<String, Value>> {
    schema
        .get("properties")
        .and_then(Value::as_object)
        .or_else(|| alternatives(schema).find_map(properties_of))
}

fn items_of(schema: &Value) -> Option<&Value> {
    schema
        .get("items")
        .or_else(|| alternatives(schema).find_map(items_of))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DEPTH: usize = 16;

    fn parse(response: &str, max_depth: usize) -> Result<ContractAnalysisResult, ExtractorError> {
        parse_llm_response(response, &ContractAnalysisResult::output_schema(), max_depth)
    }

    #[test]
    fn test_parse_valid_json() {
        let response = r#"{
            "contract_title": "Acme Software License Agreement",
            "effective_date": "2024-01-01",
            "primary_software_products": [
                {"name": "WidgetPro", "version": "2.3", "features": ["SSO", "reporting"]}
            ]
        }"#;

        let result = parse(response, DEPTH).unwrap();
        assert_eq!(result.contract_title, "Acme Software License Agreement");
        assert_eq!(result.primary_software_products.len(), 1);
        assert!(result.penalty_clauses.is_empty());
    }

    #[test]
    fn test_parse_json_with_markdown_wrapper() {
        let response = r#"```json
{"contract_title": "Master Agreement"}
```"#;

        let result = parse(response, DEPTH).unwrap();
        assert_eq!(result.contract_title, "Master Agreement");
    }

    #[test]
    fn test_parse_single_line_fence() {
        let response = r#"```json {"contract_title": "Master Agreement"} ```"#;

        let result = parse(response, DEPTH).unwrap();
        assert_eq!(result.contract_title, "Master Agreement");
    }

    #[test]
    fn test_parse_fence_after_prose() {
        let response = "Here is the result:\n```json\n{\"contract_title\": \"Master Agreement\"}\n```";

        let result = parse(response, DEPTH).unwrap();
        assert_eq!(result.contract_title, "Master Agreement");
    }

    #[test]
    fn test_parse_fence_followed_by_prose() {
        let response =
            "```json\n{\"contract_title\": \"Master Agreement\"}\n```\nLet me know if you need more.";

        let result = parse(response, DEPTH).unwrap();
        assert_eq!(result.contract_title, "Master Agreement");
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse("This is not JSON", DEPTH);
        assert!(matches!(result, Err(ExtractorError::Validation(_))));
    }

    #[test]
    fn test_parse_json_not_object() {
        let result = parse(r#"[{"contract_title": "X"}]"#, DEPTH);
        assert!(matches!(result, Err(ExtractorError::Validation(ref msg)) if msg.contains("object")));
    }

    #[test]
    fn test_parse_missing_required_field() {
        let result = parse(r#"{"effective_date": "2024-01-01"}"#, DEPTH);
        assert!(matches!(result, Err(ExtractorError::Validation(ref msg)) if msg.contains("contract_title")));
    }

    #[test]
    fn test_parse_semantic_violation() {
        let response = r#"{
            "contract_title": "X",
            "payment_milestones": [{"description": "Fee", "amount": -5}]
        }"#;
        let result = parse(response, DEPTH);
        assert!(matches!(result, Err(ExtractorError::Validation(ref msg)) if msg.contains("amount")));
    }

    #[test]
    fn test_parse_exceeds_configured_depth() {
        let response = json!({
            "contract_title": "X",
            "parties": [{"name": "A", "address": {"street": {"nested": ["too", "deep"]}}}]
        })
        .to_string();

        let result = parse(&response, 4);
        assert!(matches!(result, Err(ExtractorError::SchemaRecursion(_))));
    }

    #[test]
    fn test_parse_ignores_depth_of_undeclared_fields() {
        let mut extra = json!("leaf");
        for _ in 0..DEPTH {
            extra = json!({ "inner": extra });
        }
        let response = json!({
            "contract_title": "X",
            "vendor_notes": extra,
            "parties": [{"name": "A", "internal": {"a": {"b": {"c": {"d": 1}}}}}]
        })
        .to_string();

        let result = parse(&response, DEPTH).unwrap();
        assert_eq!(result.contract_title, "X");
        assert_eq!(result.parties.len(), 1);
    }

    #[test]
    fn test_parse_hits_parser_recursion_limit() {
        let response = format!(
            r#"{{"contract_title": "X", "parties": {}{}}}"#,
            "[".repeat(500),
            "]".repeat(500)
        );

        let result = parse(&response, DEPTH);
        assert!(matches!(result, Err(ExtractorError::SchemaRecursion(_))));
    }

    #[test]
    fn test_extract_json_from_plain_json() {
        let json = r#"{"key": "value"}"#;
        assert_eq!(extract_json(json).unwrap(), json);
    }

    #[test]
    fn test_extract_json_from_markdown_without_language() {
        let response = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(response).unwrap(), r#"{"key": "value"}"#);
    }

    #[test]
    fn test_extract_json_keeps_bare_json_with_backticks_inside() {
        let json = r#"{"contract_title": "Use ``` fences"}"#;
        assert_eq!(extract_json(json).unwrap(), json);
    }

    #[test]
    fn test_extract_json_unterminated_fence() {
        let response = "```json\n{\"key\": 1}";
        assert_eq!(extract_json(response).unwrap(), r#"{"key": 1}"#);
    }

    #[test]
    fn test_extract_json_empty_code_block() {
        assert!(extract_json("```").is_err());
        assert!(extract_json("```json\n```").is_err());
        assert!(extract_json("   ").is_err());
    }

    #[test]
    fn test_depth_without_structure_counts_everything() {
        let open = json!({"type": "string"});
        assert_eq!(schema_depth(&json!("scalar"), &open), 0);
        assert_eq!(schema_depth(&json!({}), &open), 1);
        assert_eq!(schema_depth(&json!({"a": [1, 2]}), &open), 2);
        assert_eq!(schema_depth(&json!({"a": [{"b": {"c": 1}}], "d": 1}), &open), 4);
    }

    #[test]
    fn test_depth_follows_declared_keys() {
        let schema = json!({
            "type": "object",
            "properties": {
                "list": {"type": "array", "items": {
                    "type": "object",
                    "properties": {"inner": {"anyOf": [
                        {"type": "object", "properties": {"leaf": {"type": "string"}}},
                        {"type": "null"}
                    ]}}
                }}
            }
        });

        let declared = json!({"list": [{"inner": {"leaf": "x"}}]});
        assert_eq!(schema_depth(&declared, &schema), 4);

        let undeclared = json!({"list": [{"inner": {"leaf": "x", "other": {"a": {"b": 1}}}}], "x": [[[[1]]]]});
        assert_eq!(schema_depth(&undeclared, &schema), 4);

        let wrong_shape = json!({"list": [{"inner": {"leaf": {"a": {"b": 1}}}}]});
        assert_eq!(schema_depth(&wrong_shape, &schema), 6);
    }
}
