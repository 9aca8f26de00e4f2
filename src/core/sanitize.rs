// src/core/sanitize.rs

/// Strip leading/trailing whitespace (text nodes arrive padded with markup indentation).
pub fn clean_text(s: &str) -> String {
    s.trim().to_string()
}

/// Replace every line break with a single space. Multi-line location cells
/// ("Madrid\nSpain") become one line; runs are not collapsed.
pub fn join_lines(s: &str) -> String {
    s.replace('\n', " ")
}

/// Site-relative link → absolute URL. The href is appended as-is.
pub fn absolute_url(origin: &str, href: &str) -> String {
    join!(origin, href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_lines_replaces_each_break() {
        assert_eq!(join_lines("Madrid\nSpain"), "Madrid Spain");
        assert_eq!(join_lines("a\n\nb"), "a  b");
        assert_eq!(join_lines("no breaks"), "no breaks");
    }

    #[test]
    fn absolute_url_prefixes_origin() {
        assert_eq!(
            absolute_url("https://www.timeshighereducation.com", "/example"),
            "https://www.timeshighereducation.com/example"
        );
    }

    #[test]
    fn clean_text_trims_only_edges() {
        assert_eq!(clean_text("  Universitat  de Barcelona \n"), "Universitat  de Barcelona");
    }
}
