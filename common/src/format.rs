use rmcp::model::CallToolResult;
use rmcp::model::Content;
use serde::Serialize;

pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// A tool-level failure: the call completed, but the model should see that
/// it did not do what was asked.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Pretty-prints a single value. `what` names it in the error message if
/// serialisation fails.
pub fn json_result<T: Serialize + ?Sized>(value: &T, what: &str) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(json) => text_result(json),
        Err(err) => error_result(format!("failed to format {what}: {err}")),
    }
}

/// Renders `Found N noun(s):` followed by the pretty-printed items, or
/// `empty_message` when there is nothing to show.
pub fn list_result<T: Serialize>(items: &[T], noun: &str, empty_message: &str) -> CallToolResult {
    if items.is_empty() {
        return text_result(empty_message);
    }
    match serde_json::to_string_pretty(items) {
        Ok(json) => text_result(format!(
            "Found {count} {noun}(s):\n\n{json}",
            count = items.len()
        )),
        Err(err) => error_result(format!("failed to format {noun}s: {err}")),
    }
}

/// Concatenated text of every text block in a tool result.
pub fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content| content.as_text().map(|text| text.text.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}
