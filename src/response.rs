//! Response normalization: turn a free-form model reply into a well-formed
//! [`AnalysisResult`].
//!
//! The model is asked for a single JSON object but routinely wraps it in
//! prose or code fences, and sometimes emits raw line breaks inside string
//! values. Normalization is total: every input produces a displayable
//! result, and a reply we cannot parse is surfaced verbatim in the logic
//! field rather than swallowed.

use log::{debug, warn};
use serde_json::Value;

use crate::schema::{AnalysisResult, ChartPoint};

/// Summary used when the reply contained no parseable JSON object.
pub const PARSE_FAILURE_SUMMARY: &str = "Parsing Error";

/// Summary used when the model call itself failed (transport, auth, service).
pub const SYSTEM_ERROR_SUMMARY: &str = "System Error";

// Wire field names the prompt's schema description asks for.
const FIELD_SUMMARY: &str = "final_answer_summary";
const FIELD_LOGIC: &str = "detailed_logic";
const FIELD_CHART: &str = "chart_data";

/// Normalize a raw model reply. Never fails.
///
/// 1. Drop code-fence marker lines.
/// 2. Slice from the first `{` to the last `}` as the candidate document.
/// 3. Parse strictly; on failure, escape bare control characters inside
///    string literals and parse again.
/// 4. Coerce the parsed object into shape, or fall back with the raw text
///    preserved in the logic field.
pub fn normalize_response(raw: &str) -> AnalysisResult {
    let stripped = strip_fence_lines(raw);

    let candidate = match extract_candidate(&stripped) {
        Some(candidate) => candidate,
        None => {
            warn!("Model reply contained no JSON object; returning fallback");
            return parse_failure_result(raw);
        }
    };

    match parse_permissive(candidate) {
        Some(value) => coerce_result(&value),
        None => {
            warn!(
                "Model reply had a JSON candidate ({} bytes) that failed both parse phases",
                candidate.len()
            );
            parse_failure_result(raw)
        }
    }
}

/// Fallback for an unparseable reply: flag the summary, keep the raw text.
pub fn parse_failure_result(raw: &str) -> AnalysisResult {
    AnalysisResult::new(PARSE_FAILURE_SUMMARY, raw, Vec::new())
}

/// Result shape for a failed model invocation, with the error detail where
/// the user can read it.
pub fn system_error_result(detail: impl std::fmt::Display) -> AnalysisResult {
    AnalysisResult::new(SYSTEM_ERROR_SUMMARY, detail.to_string(), Vec::new())
}

/// Remove lines that are only code-fence markers (``` with an optional
/// language tag). Fences sharing a line with prose are handled later by the
/// brace slice.
fn strip_fence_lines(raw: &str) -> String {
    raw.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !(trimmed.starts_with("```") && !trimmed.contains('{'))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The substring from the first `{` to the last `}`, if both exist in order.
fn extract_candidate(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Two-phase parse: strict attempt, then a sanitizing pre-pass.
fn parse_permissive(candidate: &str) -> Option<Value> {
    match serde_json::from_str(candidate) {
        Ok(value) => Some(value),
        Err(first_err) => {
            debug!("Strict parse failed ({first_err}); retrying with sanitized candidate");
            let sanitized = escape_control_chars_in_strings(candidate);
            serde_json::from_str(&sanitized).ok()
        }
    }
}

/// Escape bare control characters, but only inside string literals.
///
/// Models frequently emit real line breaks inside `detailed_logic` instead
/// of `\n` escapes, which strict JSON rejects. A whole-text replacement
/// would also mangle legal structural whitespace between members, so this
/// scanner tracks string and escape state and rewrites only:
/// `\n` -> `\\n`, `\r` -> `\\r`, `\t` -> `\\t`, and any other character
/// below U+0020 -> `\u00XX`.
fn escape_control_chars_in_strings(candidate: &str) -> String {
    let mut out = String::with_capacity(candidate.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in candidate.chars() {
        if in_string {
            if escaped {
                escaped = false;
                out.push(c);
                continue;
            }
            match c {
                '\\' => {
                    escaped = true;
                    out.push(c);
                }
                '"' => {
                    in_string = false;
                    out.push(c);
                }
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => out.push(c),
            }
        } else {
            if c == '"' {
                in_string = true;
            }
            out.push(c);
        }
    }

    out
}

/// Coerce an arbitrary parsed value into the result shape. Missing or
/// mistyped fields default to empty; chart entries keep JSON numbers and
/// numeric strings, everything else is dropped.
fn coerce_result(value: &Value) -> AnalysisResult {
    let summary = value
        .get(FIELD_SUMMARY)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let logic = value
        .get(FIELD_LOGIC)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let chart_data = value
        .get(FIELD_CHART)
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(label, v)| {
                    numeric_value(v).map(|value| ChartPoint::new(label.clone(), value))
                })
                .collect()
        })
        .unwrap_or_default();

    AnalysisResult::new(summary, logic, chart_data)
}

fn numeric_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_wrapped_in_fences_and_prose() {
        let raw = "Sure! ```json\n{\"final_answer_summary\":\"ok\",\"detailed_logic\":\"step1\",\"chart_data\":{\"A\":1}}\n```";
        let result = normalize_response(raw);

        assert_eq!(result.summary, "ok");
        assert_eq!(result.logic, "step1");
        assert_eq!(result.chart_data, vec![ChartPoint::new("A", 1.0)]);
    }

    #[test]
    fn no_brace_falls_back_with_verbatim_logic() {
        let raw = "I cannot comply.";
        let result = normalize_response(raw);

        assert_eq!(result.summary, PARSE_FAILURE_SUMMARY);
        assert_eq!(result.logic, "I cannot comply.");
        assert!(!result.has_chart());
    }

    #[test]
    fn unterminated_object_falls_back_without_panicking() {
        let raw = "{\"final_answer_summary\": \"half";
        let result = normalize_response(raw);

        assert_eq!(result.summary, PARSE_FAILURE_SUMMARY);
        assert_eq!(result.logic, raw);
    }

    #[test]
    fn raw_newlines_inside_string_values_parse() {
        let raw = "{\"final_answer_summary\": \"line one\nline two\", \"detailed_logic\": \"a\tb\", \"chart_data\": {}}";
        let result = normalize_response(raw);

        assert_eq!(result.summary, "line one\nline two");
        assert_eq!(result.logic, "a\tb");
    }

    #[test]
    fn structural_newlines_between_members_are_untouched() {
        // Pretty-printed JSON is already valid; the sanitizer must not be
        // needed, and must not corrupt it if invoked.
        let raw = "{\n  \"final_answer_summary\": \"ok\",\n  \"detailed_logic\": \"fine\",\n  \"chart_data\": {\"A\": 2.5}\n}";
        let result = normalize_response(raw);

        assert_eq!(result.summary, "ok");
        assert_eq!(result.chart_data, vec![ChartPoint::new("A", 2.5)]);

        let sanitized = escape_control_chars_in_strings(raw);
        assert!(serde_json::from_str::<Value>(&sanitized).is_ok());
    }

    #[test]
    fn escaped_quote_inside_string_does_not_end_it() {
        let raw = "{\"final_answer_summary\": \"he said \\\"hi\\\"\nand left\", \"detailed_logic\": \"\", \"chart_data\": {}}";
        let result = normalize_response(raw);

        assert_eq!(result.summary, "he said \"hi\"\nand left");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let result = normalize_response("{\"final_answer_summary\": \"only summary\"}");

        assert_eq!(result.summary, "only summary");
        assert_eq!(result.logic, "");
        assert!(!result.has_chart());
    }

    #[test]
    fn chart_preserves_model_insertion_order() {
        let raw = "{\"chart_data\": {\"Zulu\": 3, \"Alpha\": 1, \"Mike\": 2}}";
        let result = normalize_response(raw);

        let labels: Vec<&str> = result.chart_data.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Zulu", "Alpha", "Mike"]);
    }

    #[test]
    fn non_numeric_chart_values_are_dropped() {
        let raw = "{\"chart_data\": {\"Good\": 10.5, \"Bad\": \"n/a\", \"AsString\": \"42\", \"Worse\": [1]}}";
        let result = normalize_response(raw);

        assert_eq!(
            result.chart_data,
            vec![
                ChartPoint::new("Good", 10.5),
                ChartPoint::new("AsString", 42.0),
            ]
        );
    }

    #[test]
    fn chart_field_of_wrong_type_means_no_chart() {
        let result = normalize_response("{\"chart_data\": \"not a map\"}");
        assert!(!result.has_chart());
    }

    #[test]
    fn prose_before_and_after_object_is_ignored() {
        let raw = "Here is the analysis you asked for:\n{\"final_answer_summary\": \"done\", \"detailed_logic\": \"x\", \"chart_data\": {}}\nLet me know if you need more.";
        let result = normalize_response(raw);

        assert_eq!(result.summary, "done");
    }

    #[test]
    fn system_error_result_carries_detail_in_logic() {
        let result = system_error_result("connection reset by peer");

        assert_eq!(result.summary, SYSTEM_ERROR_SUMMARY);
        assert_eq!(result.logic, "connection reset by peer");
        assert!(!result.has_chart());
    }
}
