use regex::Regex;
use serde_json::Value;

/// Extract the first JSON array or object from a model answer.
///
/// Handles, in order: Claude's `{"result": "..."}` wrapper, a bare JSON
/// document, fenced code blocks, and the first balanced `[...]` / `{...}`
/// embedded in prose.
pub fn extract_json(s: &str) -> Option<Value> {
    let trimmed = s.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        // Claude CLI wraps the answer in {"result": "...", ...}
        if let Some(inner) = value.get("result").and_then(|r| r.as_str()) {
            return extract_json(inner);
        }
        if value.is_array() || value.is_object() {
            return Some(value);
        }
    }

    // Markdown code block
    if let Ok(re) = Regex::new(r"```(?:json)?\s*\n?([\s\S]*?)\n?```") {
        for cap in re.captures_iter(s) {
            if let Some(body) = cap.get(1) {
                if let Ok(value) = serde_json::from_str::<Value>(body.as_str().trim()) {
                    return Some(value);
                }
            }
        }
    }

    // Balanced brackets in surrounding prose
    for (start, c) in s.char_indices() {
        if c != '[' && c != '{' {
            continue;
        }
        if let Some(end) = balanced_end(&s[start..]) {
            if let Ok(value) = serde_json::from_str::<Value>(&s[start..start + end]) {
                return Some(value);
            }
        }
    }

    None
}

/// Byte length of the bracketed value starting at `s[0]`, ignoring brackets inside strings
fn balanced_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '[' | '{' => depth += 1,
            ']' | '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}
