//! Deterministic plain-text formatting of docstring lookups.

/// Prefix every line of a docstring with `"> "`, first line included.
/// Internal line breaks are preserved one-to-one.
pub fn indent(doc: &str) -> String {
    doc.split('\n')
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one labelled section of the combined view.
pub fn section(label: &str, doc: &str) -> String {
    format!("{} docstring is:\n{}", label, indent(doc))
}

/// Compose the combined "explain" body: Value section first, then the
/// Function section, separated by one blank line when both are present.
/// `None` when neither docstring exists.
pub fn combined(value_doc: Option<&str>, function_doc: Option<&str>) -> Option<String> {
    let mut sections = Vec::new();
    if let Some(doc) = value_doc {
        sections.push(section("Value", doc));
    }
    if let Some(doc) = function_doc {
        sections.push(section("Function", doc));
    }
    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_prefixes_every_line() {
        assert_eq!(indent("A"), "> A");
        assert_eq!(indent("A\nB"), "> A\n> B");
        assert_eq!(indent(""), "> ");
    }

    #[test]
    fn test_section_header_format() {
        assert_eq!(
            section("Value", "Circle constant."),
            "Value docstring is:\n> Circle constant."
        );
    }

    #[test]
    fn test_combined_both_sections_in_fixed_order() {
        let body = combined(Some("V"), Some("F")).unwrap();
        assert_eq!(
            body,
            "Value docstring is:\n> V\n\nFunction docstring is:\n> F"
        );
    }

    #[test]
    fn test_combined_single_section_has_no_blank_line() {
        assert_eq!(
            combined(Some("V"), None).unwrap(),
            "Value docstring is:\n> V"
        );
        assert_eq!(
            combined(None, Some("F")).unwrap(),
            "Function docstring is:\n> F"
        );
    }

    #[test]
    fn test_combined_empty_when_no_docstrings() {
        assert_eq!(combined(None, None), None);
    }

    #[test]
    fn test_multiline_docstring_keeps_breaks() {
        let body = combined(Some("line one\nline two"), None).unwrap();
        assert_eq!(body, "Value docstring is:\n> line one\n> line two");
    }
}
