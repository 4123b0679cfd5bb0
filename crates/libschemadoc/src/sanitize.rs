use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Bare absolute URL tokens, delimited by whitespace.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[^\s]+").expect("URL pattern compiles")
});

/// Rewrites one free-text leaf: bare `http(s)` URLs become links opening in
/// a new browsing context, and newlines become explicit line breaks.
///
/// Linkification runs before any markup exists in the text, so each leaf is
/// transformed at most once.
pub fn sanitize_text(text: &str) -> String {
    let linked = URL_PATTERN.replace_all(
        text,
        "<a href=\"$0\" target=\"_blank\">$0</a>",
    );
    linked.replace('\n', "<br>")
}

/// Recursively sanitizes every text leaf of a raw record value.
///
/// Sequences and mappings are traversed structurally unchanged; only text
/// leaves are rewritten. Applied exactly once per record, before the value
/// is deserialized or indexed.
pub fn sanitize_tree(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(sanitize_text(&text)),

        Value::Array(items) => Value::Array(
            items.into_iter().map(sanitize_tree).collect(),
        ),

        Value::Object(entries) => Value::Object(
            entries.into_iter()
                .map(|(key, entry_value)| (key, sanitize_tree(entry_value)))
                .collect(),
        ),

        other => other,
    }
}
