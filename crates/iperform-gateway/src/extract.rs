/// Reduces a model reply to the JSON document between the first `{` and the
/// last `}`. The service is told to answer with raw JSON, but replies still
/// occasionally arrive wrapped in markdown fences or prose.
///
/// Returns `None` when the text contains no brace-delimited span; the caller
/// reports that as a malformed reply.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_json_passes_through() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_markdown_fences_are_stripped() {
        let reply = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_object(reply), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_surrounding_prose_is_stripped() {
        let reply = "Here is the updated database:\n{\"users\": []}\nLet me know!";
        assert_eq!(extract_json_object(reply), Some("{\"users\": []}"));
    }

    #[test]
    fn test_nested_braces_keep_the_outer_span() {
        let reply = "x {\"a\": {\"b\": 2}} y";
        assert_eq!(extract_json_object(reply), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn test_no_document_is_none() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object(""), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }
}
