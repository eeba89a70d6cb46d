/// Render items as a YAML block sequence (`- item` per line, joined by `\n`).
///
/// An empty slice renders as the empty string, which leaves the enclosing
/// front matter key with an implicit null value. Items are written verbatim:
/// no quoting, no escaping.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::format_list;

    #[test]
    fn empty_list_is_empty_string() {
        let items: [&str; 0] = [];
        assert_eq!(format_list(&items), "");
    }

    #[test]
    fn items_keep_order_without_trailing_newline() {
        assert_eq!(format_list(&["A", "B"]), "- A\n- B");
    }

    #[test]
    fn values_are_not_quoted() {
        assert_eq!(
            format_list(&[String::from("Tips: \"quoted\"")]),
            "- Tips: \"quoted\""
        );
    }
}
