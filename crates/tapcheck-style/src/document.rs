//! Embedded style region lookup.

/// Return the text of the first `<style>` element in an HTML document.
///
/// The opening tag may carry attributes (`<style type="text/css">`) and tag
/// names match case-insensitively. A document without a style element, or
/// one whose style element is never closed, has no region.
pub fn style_region(document: &str) -> Option<&str> {
    let lower = document.to_ascii_lowercase();

    let mut search_from = 0;
    let content_start = loop {
        let open = search_from + lower[search_from..].find("<style")?;
        let after_name = open + "<style".len();
        // Reject `<styles>` and similar longer tag names.
        match lower.as_bytes().get(after_name) {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'/') => {
                let close = after_name + lower[after_name..].find('>')?;
                break close + 1;
            }
            _ => search_from = after_name,
        }
    };

    let content_end = content_start + lower[content_start..].find("</style")?;
    Some(&document[content_start..content_end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_plain_style_region() {
        let html = "<html><head><style>.a { width: 1px; }</style></head></html>";
        assert_eq!(style_region(html), Some(".a { width: 1px; }"));
    }

    #[test]
    fn accepts_attributes_and_case() {
        let html = "<STYLE type=\"text/css\">\n#b { height: 2px; }\n</Style>";
        assert_eq!(style_region(html), Some("\n#b { height: 2px; }\n"));
    }

    #[test]
    fn skips_longer_tag_names() {
        let html = "<styles>x</styles><style>y</style>";
        assert_eq!(style_region(html), Some("y"));
    }

    #[test]
    fn only_first_region_is_used() {
        let html = "<style>first</style><style>second</style>";
        assert_eq!(style_region(html), Some("first"));
    }

    #[test]
    fn missing_or_unterminated_region() {
        assert_eq!(style_region("<html><body></body></html>"), None);
        assert_eq!(style_region("<style>.a { width: 1px; }"), None);
    }
}
